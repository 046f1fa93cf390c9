//! PostgreSQL-backed `CompanyRepository` implementation using Diesel ORM.
//!
//! Employee counts are loaded with one grouped query per read instead of being
//! stored on the company row.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};
use pagination::PageRequest;
use uuid::Uuid;

use crate::domain::ports::{CompanyRepository, CompanyRepositoryError};
use crate::domain::{Cnpj, Company, CompanyId, CompanyName};

use super::diesel_error_mapping::{
    DieselFailure, classify_diesel_error, page_window, pool_error_message,
};
use super::models::{CompanyRow, CompanyUpdate, NewCompanyRow};
use super::pool::{DbPool, PoolError};
use super::schema::{companies, employees};

/// Diesel-backed implementation of the company repository port.
#[derive(Clone)]
pub struct DieselCompanyRepository {
    pool: DbPool,
}

impl DieselCompanyRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> CompanyRepositoryError {
    CompanyRepositoryError::connection(pool_error_message(error))
}

/// Map Diesel errors, reporting unique violations against `cnpj`.
fn map_diesel_error(error: diesel::result::Error, cnpj: Option<&Cnpj>) -> CompanyRepositoryError {
    match (classify_diesel_error(error), cnpj) {
        (DieselFailure::UniqueViolation, Some(cnpj)) => {
            CompanyRepositoryError::duplicate_cnpj(cnpj.as_ref())
        }
        (DieselFailure::Connection(message), _) => CompanyRepositoryError::connection(message),
        (DieselFailure::Query(message), _) => CompanyRepositoryError::query(message),
        (DieselFailure::UniqueViolation | DieselFailure::ForeignKeyViolation, _) => {
            CompanyRepositoryError::query("constraint violation")
        }
    }
}

fn map_read_error(error: diesel::result::Error) -> CompanyRepositoryError {
    map_diesel_error(error, None)
}

type CompanyRowById = diesel::dsl::Filter<companies::table, diesel::dsl::Eq<companies::id, Uuid>>;

fn company_row(id: CompanyId) -> CompanyRowById {
    companies::table.filter(companies::id.eq(*id.as_uuid()))
}

fn company_changeset(company: &Company) -> CompanyUpdate<'_> {
    CompanyUpdate {
        cnpj: company.cnpj().as_ref(),
        name: company.name().as_ref(),
        updated_at: Utc::now(),
    }
}

fn row_to_company(row: CompanyRow, employee_count: u64) -> Result<Company, CompanyRepositoryError> {
    let CompanyRow { id, cnpj, name } = row;
    let cnpj = Cnpj::new(cnpj)
        .map_err(|err| CompanyRepositoryError::query(format!("stored cnpj: {err}")))?;
    let name = CompanyName::new(name)
        .map_err(|err| CompanyRepositoryError::query(format!("stored name: {err}")))?;
    Ok(Company::new(CompanyId::from_uuid(id), cnpj, name).with_employee_count(employee_count))
}

async fn employee_counts(
    conn: &mut AsyncPgConnection,
    company_ids: &[Uuid],
) -> Result<HashMap<Uuid, u64>, CompanyRepositoryError> {
    let counts: Vec<(Option<Uuid>, i64)> = employees::table
        .filter(employees::company_id.eq_any(company_ids))
        .group_by(employees::company_id)
        .select((employees::company_id, diesel::dsl::count_star()))
        .load(conn)
        .await
        .map_err(map_read_error)?;

    Ok(counts
        .into_iter()
        .filter_map(|(id, count)| id.map(|id| (id, u64::try_from(count).unwrap_or_default())))
        .collect())
}

async fn with_counts(
    conn: &mut AsyncPgConnection,
    rows: Vec<CompanyRow>,
) -> Result<Vec<Company>, CompanyRepositoryError> {
    let ids: Vec<Uuid> = rows.iter().map(|row| row.id).collect();
    let counts = employee_counts(conn, &ids).await?;
    rows.into_iter()
        .map(|row| {
            let count = counts.get(&row.id).copied().unwrap_or_default();
            row_to_company(row, count)
        })
        .collect()
}

#[async_trait]
impl CompanyRepository for DieselCompanyRepository {
    async fn find_by_id(&self, id: &CompanyId) -> Result<Option<Company>, CompanyRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = companies::table
            .filter(companies::id.eq(id.as_uuid()))
            .select(CompanyRow::as_select())
            .first::<CompanyRow>(&mut conn)
            .await
            .optional()
            .map_err(map_read_error)?;

        let rows = row.into_iter().collect();
        Ok(with_counts(&mut conn, rows).await?.pop())
    }

    async fn find_by_cnpj(&self, cnpj: &Cnpj) -> Result<Option<Company>, CompanyRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = companies::table
            .filter(companies::cnpj.eq(cnpj.as_ref()))
            .select(CompanyRow::as_select())
            .first::<CompanyRow>(&mut conn)
            .await
            .optional()
            .map_err(map_read_error)?;

        let rows = row.into_iter().collect();
        Ok(with_counts(&mut conn, rows).await?.pop())
    }

    async fn list(&self, request: PageRequest) -> Result<Vec<Company>, CompanyRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let (offset, limit) = page_window(request);

        let rows: Vec<CompanyRow> = companies::table
            .order((companies::created_at.asc(), companies::id.asc()))
            .offset(offset)
            .limit(limit)
            .select(CompanyRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_read_error)?;

        with_counts(&mut conn, rows).await
    }

    async fn count(&self) -> Result<u64, CompanyRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let total: i64 = companies::table
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_read_error)?;

        Ok(u64::try_from(total).unwrap_or_default())
    }

    async fn insert(&self, company: &Company) -> Result<(), CompanyRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewCompanyRow {
            id: *company.id().as_uuid(),
            cnpj: company.cnpj().as_ref(),
            name: company.name().as_ref(),
        };

        diesel::insert_into(companies::table)
            .values(&new_row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|err| map_diesel_error(err, Some(company.cnpj())))
    }

    async fn update(&self, company: &Company) -> Result<bool, CompanyRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let updated = diesel::update(company_row(company.id()))
            .set(&company_changeset(company))
            .execute(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, Some(company.cnpj())))?;

        Ok(updated > 0)
    }

    async fn delete(&self, id: &CompanyId) -> Result<bool, CompanyRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        // Employees go with the row through `ON DELETE CASCADE`.
        let deleted = diesel::delete(company_row(*id))
            .execute(&mut conn)
            .await
            .map_err(map_read_error)?;

        Ok(deleted > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diesel::result::{DatabaseErrorKind, Error as DieselError};
    use rstest::rstest;

    fn unique_violation() -> DieselError {
        DieselError::DatabaseError(
            DatabaseErrorKind::UniqueViolation,
            Box::new(String::from("duplicate key value violates unique constraint")),
        )
    }

    #[rstest]
    fn unique_violation_reports_duplicate_cnpj() {
        let cnpj = Cnpj::new("1234567890123").expect("valid cnpj");
        let error = map_diesel_error(unique_violation(), Some(&cnpj));
        assert_eq!(error, CompanyRepositoryError::duplicate_cnpj("1234567890123"));
    }

    #[rstest]
    fn unique_violation_without_context_is_a_query_error() {
        let error = map_read_error(unique_violation());
        assert!(matches!(error, CompanyRepositoryError::Query { .. }));
    }

    #[rstest]
    fn pool_errors_map_to_connection() {
        let error = map_pool_error(PoolError::checkout("timed out"));
        assert_eq!(error, CompanyRepositoryError::connection("timed out"));
    }

    #[rstest]
    fn invalid_stored_rows_surface_as_query_errors() {
        let row = CompanyRow {
            id: Uuid::nil(),
            cnpj: "abc".to_owned(),
            name: "Kronos".to_owned(),
        };
        let error = row_to_company(row, 0).expect_err("invalid cnpj");
        assert!(matches!(error, CompanyRepositoryError::Query { .. }));
    }

    #[rstest]
    fn stored_rows_carry_employee_count() {
        let row = CompanyRow {
            id: Uuid::nil(),
            cnpj: "1234567890123".to_owned(),
            name: "Kronos".to_owned(),
        };
        let company = row_to_company(row, 4).expect("valid row");
        assert_eq!(company.employee_count(), 4);
        assert_eq!(company.name().as_ref(), "Kronos");
    }

    #[rstest]
    fn update_statement_targets_one_company_row() {
        let company = Company::new(
            CompanyId::random(),
            Cnpj::new("1234567890123").expect("valid cnpj"),
            CompanyName::new("Kronos Tecnologia").expect("valid name"),
        );

        let changeset = company_changeset(&company);
        let statement = diesel::update(company_row(company.id())).set(&changeset);
        let sql = diesel::debug_query::<diesel::pg::Pg, _>(&statement).to_string();

        assert!(sql.starts_with("UPDATE \"companies\" SET"), "{sql}");
        assert!(sql.contains("\"companies\".\"id\" = $4"), "{sql}");
        assert!(sql.contains(&company.id().to_string()), "{sql}");
        assert!(sql.contains("Kronos Tecnologia"), "{sql}");
    }
}
