//! PostgreSQL-backed `EmployeeRepository` implementation using Diesel ORM.

use std::fmt::Display;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use pagination::PageRequest;

use crate::domain::ports::{EmployeeRepository, EmployeeRepositoryError};
use crate::domain::{CompanyId, Cpf, Email, Employee, EmployeeId, JobPosition, PersonName, Salary};

use super::diesel_error_mapping::{
    DieselFailure, classify_diesel_error, page_window, pool_error_message,
};
use super::models::{EmployeeRow, EmployeeUpdate, NewEmployeeRow};
use super::pool::{DbPool, PoolError};
use super::schema::employees;

/// Diesel-backed implementation of the employee repository port.
#[derive(Clone)]
pub struct DieselEmployeeRepository {
    pool: DbPool,
}

impl DieselEmployeeRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> EmployeeRepositoryError {
    EmployeeRepositoryError::connection(pool_error_message(error))
}

/// Map Diesel errors raised while writing `employee`.
///
/// `cpf` is the only unique column and `company_id` the only foreign key, so
/// constraint violations can be attributed without parsing the message.
fn map_write_error(error: diesel::result::Error, employee: &Employee) -> EmployeeRepositoryError {
    match classify_diesel_error(error) {
        DieselFailure::UniqueViolation => {
            EmployeeRepositoryError::duplicate_cpf(employee.cpf.as_ref())
        }
        DieselFailure::ForeignKeyViolation => EmployeeRepositoryError::missing_company(
            employee
                .company_id
                .map(|id| id.to_string())
                .unwrap_or_default(),
        ),
        DieselFailure::Connection(message) => EmployeeRepositoryError::connection(message),
        DieselFailure::Query(message) => EmployeeRepositoryError::query(message),
    }
}

fn map_read_error(error: diesel::result::Error) -> EmployeeRepositoryError {
    match classify_diesel_error(error) {
        DieselFailure::Connection(message) => EmployeeRepositoryError::connection(message),
        DieselFailure::Query(message) => EmployeeRepositoryError::query(message),
        DieselFailure::UniqueViolation | DieselFailure::ForeignKeyViolation => {
            EmployeeRepositoryError::query("constraint violation")
        }
    }
}

fn stored<T, E: Display>(field: &str, value: Result<T, E>) -> Result<T, EmployeeRepositoryError> {
    value.map_err(|err| EmployeeRepositoryError::query(format!("stored {field}: {err}")))
}

fn row_to_employee(row: EmployeeRow) -> Result<Employee, EmployeeRepositoryError> {
    let EmployeeRow {
        id,
        cpf,
        name,
        surname,
        email,
        salary,
        position,
        company_id,
    } = row;

    Ok(Employee {
        id: EmployeeId::from_uuid(id),
        cpf: stored("cpf", Cpf::new(cpf))?,
        name: stored("name", PersonName::new(name))?,
        surname: stored("surname", PersonName::new(surname))?,
        email: stored("email", Email::new(email))?,
        salary: stored("salary", Salary::new(salary))?,
        position: stored("position", JobPosition::new(position))?,
        company_id: company_id.map(CompanyId::from_uuid),
    })
}

#[async_trait]
impl EmployeeRepository for DieselEmployeeRepository {
    async fn find_by_id(
        &self,
        id: &EmployeeId,
    ) -> Result<Option<Employee>, EmployeeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = employees::table
            .filter(employees::id.eq(id.as_uuid()))
            .select(EmployeeRow::as_select())
            .first::<EmployeeRow>(&mut conn)
            .await
            .optional()
            .map_err(map_read_error)?;

        row.map(row_to_employee).transpose()
    }

    async fn find_by_cpf(&self, cpf: &Cpf) -> Result<Option<Employee>, EmployeeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = employees::table
            .filter(employees::cpf.eq(cpf.as_ref()))
            .select(EmployeeRow::as_select())
            .first::<EmployeeRow>(&mut conn)
            .await
            .optional()
            .map_err(map_read_error)?;

        row.map(row_to_employee).transpose()
    }

    async fn list(&self, request: PageRequest) -> Result<Vec<Employee>, EmployeeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let (offset, limit) = page_window(request);

        let rows: Vec<EmployeeRow> = employees::table
            .order((employees::created_at.asc(), employees::id.asc()))
            .offset(offset)
            .limit(limit)
            .select(EmployeeRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_read_error)?;

        rows.into_iter().map(row_to_employee).collect()
    }

    async fn count(&self) -> Result<u64, EmployeeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let total: i64 = employees::table
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_read_error)?;

        Ok(u64::try_from(total).unwrap_or_default())
    }

    async fn insert(&self, employee: &Employee) -> Result<(), EmployeeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewEmployeeRow {
            id: *employee.id.as_uuid(),
            cpf: employee.cpf.as_ref(),
            name: employee.name.as_ref(),
            surname: employee.surname.as_ref(),
            email: employee.email.as_ref(),
            salary: employee.salary.amount(),
            position: employee.position.as_ref(),
            company_id: employee.company_id.map(|id| *id.as_uuid()),
        };

        diesel::insert_into(employees::table)
            .values(&new_row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|err| map_write_error(err, employee))
    }

    async fn update(&self, employee: &Employee) -> Result<bool, EmployeeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let changeset = EmployeeUpdate {
            cpf: employee.cpf.as_ref(),
            name: employee.name.as_ref(),
            surname: employee.surname.as_ref(),
            email: employee.email.as_ref(),
            salary: employee.salary.amount(),
            position: employee.position.as_ref(),
            updated_at: Utc::now(),
        };

        let target = employees::table.filter(employees::id.eq(employee.id.as_uuid()));
        let updated = diesel::update(target)
            .set(&changeset)
            .execute(&mut conn)
            .await
            .map_err(|err| map_write_error(err, employee))?;

        Ok(updated > 0)
    }

    async fn delete(&self, id: &EmployeeId) -> Result<bool, EmployeeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(employees::table.filter(employees::id.eq(id.as_uuid())))
            .execute(&mut conn)
            .await
            .map_err(map_read_error)?;

        Ok(deleted > 0)
    }
}
