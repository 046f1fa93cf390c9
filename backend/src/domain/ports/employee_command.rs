//! Driving port for mutating employees.

use async_trait::async_trait;

use crate::domain::{CompanyId, Email, Employee, EmployeeId, EmployeePatch, Error, NewEmployee};

use super::employee_query::fixture_employee;

/// Write-side use cases for employees.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeCommand: Send + Sync {
    /// Hire an employee into the company identified by its CNPJ.
    ///
    /// Fails with `invalid_request` when the CPF is already registered or no
    /// company holds the CNPJ.
    async fn create(&self, employee: NewEmployee) -> Result<Employee, Error>;

    /// Apply a partial update.
    ///
    /// Fails with `not_found` for unknown identifiers and `invalid_request`
    /// when the new CPF belongs to another employee.
    async fn update(&self, id: &EmployeeId, patch: EmployeePatch) -> Result<Employee, Error>;

    /// Replace only the email address.
    async fn update_email(&self, id: &EmployeeId, email: Email) -> Result<Employee, Error>;

    /// Remove an employee.
    async fn delete(&self, id: &EmployeeId) -> Result<(), Error>;
}

/// Fixture command that echoes its input without persisting anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureEmployeeCommand;

impl FixtureEmployeeCommand {
    fn load(id: &EmployeeId) -> Result<Employee, Error> {
        let employee = fixture_employee()?;
        if employee.id == *id {
            Ok(employee)
        } else {
            Err(Error::not_found("employee not found"))
        }
    }
}

#[async_trait]
impl EmployeeCommand for FixtureEmployeeCommand {
    async fn create(&self, employee: NewEmployee) -> Result<Employee, Error> {
        Ok(employee.into_employee(EmployeeId::random(), CompanyId::random()))
    }

    async fn update(&self, id: &EmployeeId, patch: EmployeePatch) -> Result<Employee, Error> {
        let mut employee = Self::load(id)?;
        employee.apply(patch);
        Ok(employee)
    }

    async fn update_email(&self, id: &EmployeeId, email: Email) -> Result<Employee, Error> {
        let mut employee = Self::load(id)?;
        employee.email = email;
        Ok(employee)
    }

    async fn delete(&self, _id: &EmployeeId) -> Result<(), Error> {
        Ok(())
    }
}
