//! Internal Diesel row structs for database operations.
//!
//! These types never leave the persistence layer; repositories convert them
//! into validated domain values.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::{companies, employees};

/// Row struct for reading from the companies table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = companies)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CompanyRow {
    pub id: Uuid,
    pub cnpj: String,
    pub name: String,
}

/// Insertable struct for creating company records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = companies)]
pub(crate) struct NewCompanyRow<'a> {
    pub id: Uuid,
    pub cnpj: &'a str,
    pub name: &'a str,
}

/// Changeset struct for updating company records.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = companies)]
pub(crate) struct CompanyUpdate<'a> {
    pub cnpj: &'a str,
    pub name: &'a str,
    pub updated_at: DateTime<Utc>,
}

/// Row struct for reading from the employees table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = employees)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct EmployeeRow {
    pub id: Uuid,
    pub cpf: String,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub salary: f64,
    pub position: String,
    pub company_id: Option<Uuid>,
}

/// Insertable struct for creating employee records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = employees)]
pub(crate) struct NewEmployeeRow<'a> {
    pub id: Uuid,
    pub cpf: &'a str,
    pub name: &'a str,
    pub surname: &'a str,
    pub email: &'a str,
    pub salary: f64,
    pub position: &'a str,
    pub company_id: Option<Uuid>,
}

/// Changeset struct for updating employee records.
///
/// `company_id` is not part of the changeset; employees keep their company.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = employees)]
pub(crate) struct EmployeeUpdate<'a> {
    pub cpf: &'a str,
    pub name: &'a str,
    pub surname: &'a str,
    pub email: &'a str,
    pub salary: f64,
    pub position: &'a str,
    pub updated_at: DateTime<Utc>,
}
