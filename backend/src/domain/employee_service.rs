//! Employee use cases.
//!
//! [`EmployeeService`] implements the employee driving ports. It needs the
//! company repository to resolve the employer named by a CNPJ on hire.

use std::sync::Arc;

use async_trait::async_trait;
use pagination::{Page, PageRequest};
use serde_json::json;
use tracing::info;

use super::company_service::map_company_repository_error;
use crate::domain::ports::{
    CompanyRepository, EmployeeCommand, EmployeeQuery, EmployeeRepository,
    EmployeeRepositoryError,
};
use crate::domain::{Cpf, Email, Employee, EmployeeId, EmployeePatch, Error, NewEmployee};

/// Employee service implementing [`EmployeeQuery`] and [`EmployeeCommand`].
#[derive(Clone)]
pub struct EmployeeService<E, C> {
    employees: Arc<E>,
    companies: Arc<C>,
}

impl<E, C> EmployeeService<E, C> {
    /// Create a new service over the employee and company repositories.
    pub fn new(employees: Arc<E>, companies: Arc<C>) -> Self {
        Self {
            employees,
            companies,
        }
    }
}

fn employee_not_found() -> Error {
    Error::not_found("employee not found")
}

fn duplicate_cpf(cpf: &str) -> Error {
    Error::invalid_request("cpf already registered").with_details(json!({
        "field": "cpf",
        "value": cpf,
        "code": "duplicate",
    }))
}

fn unknown_company(cnpj: &str) -> Error {
    Error::invalid_request("company not found").with_details(json!({
        "field": "companyCnpj",
        "value": cnpj,
        "code": "unknown_company",
    }))
}

fn map_repository_error(error: EmployeeRepositoryError) -> Error {
    match error {
        EmployeeRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("employee repository unavailable: {message}"))
        }
        EmployeeRepositoryError::Query { message } => {
            Error::internal(format!("employee repository error: {message}"))
        }
        EmployeeRepositoryError::DuplicateCpf { cpf } => duplicate_cpf(&cpf),
        EmployeeRepositoryError::MissingCompany { company_id } => {
            Error::invalid_request("company not found").with_details(json!({
                "field": "companyId",
                "value": company_id,
                "code": "unknown_company",
            }))
        }
    }
}

impl<E, C> EmployeeService<E, C>
where
    E: EmployeeRepository,
    C: CompanyRepository,
{
    async fn load(&self, id: &EmployeeId) -> Result<Employee, Error> {
        self.employees
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(employee_not_found)
    }

    /// Fail when `cpf` is held by an employee other than `owner`.
    async fn ensure_cpf_available(
        &self,
        cpf: &Cpf,
        owner: Option<EmployeeId>,
    ) -> Result<(), Error> {
        let holder = self
            .employees
            .find_by_cpf(cpf)
            .await
            .map_err(map_repository_error)?;
        match holder {
            Some(existing) if Some(existing.id) != owner => Err(duplicate_cpf(cpf.as_ref())),
            _ => Ok(()),
        }
    }

    async fn store(&self, employee: Employee) -> Result<Employee, Error> {
        let updated = self
            .employees
            .update(&employee)
            .await
            .map_err(map_repository_error)?;
        if !updated {
            return Err(employee_not_found());
        }
        info!(employee_id = %employee.id, "employee updated");
        Ok(employee)
    }
}

#[async_trait]
impl<E, C> EmployeeQuery for EmployeeService<E, C>
where
    E: EmployeeRepository,
    C: CompanyRepository,
{
    async fn find_by_id(&self, id: &EmployeeId) -> Result<Employee, Error> {
        self.load(id).await
    }

    async fn find_page(&self, request: PageRequest) -> Result<Page<Employee>, Error> {
        let content = self
            .employees
            .list(request)
            .await
            .map_err(map_repository_error)?;
        let total = self
            .employees
            .count()
            .await
            .map_err(map_repository_error)?;
        Ok(Page::new(content, request, total))
    }
}

#[async_trait]
impl<E, C> EmployeeCommand for EmployeeService<E, C>
where
    E: EmployeeRepository,
    C: CompanyRepository,
{
    async fn create(&self, employee: NewEmployee) -> Result<Employee, Error> {
        self.ensure_cpf_available(&employee.cpf, None).await?;

        let company = self
            .companies
            .find_by_cnpj(&employee.company_cnpj)
            .await
            .map_err(map_company_repository_error)?
            .ok_or_else(|| unknown_company(employee.company_cnpj.as_ref()))?;

        let employee = employee.into_employee(EmployeeId::random(), company.id());
        self.employees
            .insert(&employee)
            .await
            .map_err(map_repository_error)?;
        info!(
            employee_id = %employee.id,
            company_id = %company.id(),
            "employee created"
        );
        Ok(employee)
    }

    async fn update(&self, id: &EmployeeId, patch: EmployeePatch) -> Result<Employee, Error> {
        let mut employee = self.load(id).await?;
        if let Some(cpf) = patch.cpf.as_ref().filter(|cpf| **cpf != employee.cpf) {
            self.ensure_cpf_available(cpf, Some(*id)).await?;
        }

        employee.apply(patch);
        self.store(employee).await
    }

    async fn update_email(&self, id: &EmployeeId, email: Email) -> Result<Employee, Error> {
        let mut employee = self.load(id).await?;
        employee.email = email;
        self.store(employee).await
    }

    async fn delete(&self, id: &EmployeeId) -> Result<(), Error> {
        let deleted = self
            .employees
            .delete(id)
            .await
            .map_err(map_repository_error)?;
        if !deleted {
            return Err(employee_not_found());
        }
        info!(employee_id = %id, "employee deleted");
        Ok(())
    }
}

#[cfg(test)]
#[path = "employee_service_tests.rs"]
mod tests;
