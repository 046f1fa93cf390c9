//! Driving port for reading employees.

use async_trait::async_trait;
use pagination::{Page, PageRequest};
use uuid::Uuid;

use crate::domain::{
    CompanyId, Cpf, Email, Employee, EmployeeId, Error, JobPosition, PersonName, Salary,
};

use super::company_query::FIXTURE_COMPANY_ID;

/// Read-side use cases for employees.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeQuery: Send + Sync {
    /// Load a single employee.
    ///
    /// Fails with `not_found` when the identifier is unknown.
    async fn find_by_id(&self, id: &EmployeeId) -> Result<Employee, Error>;

    /// Load one page of employees with collection totals.
    async fn find_page(&self, request: PageRequest) -> Result<Page<Employee>, Error>;
}

/// Identifier returned by [`FixtureEmployeeQuery`].
pub const FIXTURE_EMPLOYEE_ID: Uuid =
    Uuid::from_u128(0x9b2e_4c1a_7d3f_4e8b_a1c2_5f6d_7e8f_9a0b);

fn fixture_field<T, E: std::fmt::Display>(field: &str, value: Result<T, E>) -> Result<T, Error> {
    value.map_err(|err| Error::internal(format!("invalid fixture {field}: {err}")))
}

pub(crate) fn fixture_employee() -> Result<Employee, Error> {
    Ok(Employee {
        id: EmployeeId::from_uuid(FIXTURE_EMPLOYEE_ID),
        cpf: fixture_field("cpf", Cpf::new("12345678901"))?,
        name: fixture_field("name", PersonName::new("João"))?,
        surname: fixture_field("surname", PersonName::new("Da Silva"))?,
        email: fixture_field("email", Email::new("meu-email@exemplo.com"))?,
        salary: fixture_field("salary", Salary::new(1200.0))?,
        position: fixture_field("position", JobPosition::new("Engenheiro"))?,
        company_id: Some(CompanyId::from_uuid(FIXTURE_COMPANY_ID)),
    })
}

/// Fixture query returning a single canned employee.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureEmployeeQuery;

#[async_trait]
impl EmployeeQuery for FixtureEmployeeQuery {
    async fn find_by_id(&self, id: &EmployeeId) -> Result<Employee, Error> {
        if id.as_uuid() == &FIXTURE_EMPLOYEE_ID {
            fixture_employee()
        } else {
            Err(Error::not_found("employee not found"))
        }
    }

    async fn find_page(&self, request: PageRequest) -> Result<Page<Employee>, Error> {
        let content = if request.page() == 0 {
            vec![fixture_employee()?]
        } else {
            Vec::new()
        };
        Ok(Page::new(content, request, 1))
    }
}
