//! Port abstraction for employee persistence adapters and their errors.

use async_trait::async_trait;
use pagination::PageRequest;

use crate::domain::{Cpf, Employee, EmployeeId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by employee repository adapters.
    pub enum EmployeeRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "employee repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "employee repository query failed: {message}",
        /// Another employee already holds the CPF.
        DuplicateCpf { cpf: String } => "employee with cpf {cpf} already exists",
        /// The referenced company no longer exists.
        MissingCompany { company_id: String } => "company {company_id} does not exist",
    }
}

/// Driven port for storing and loading employees.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Fetch an employee by identifier.
    async fn find_by_id(&self, id: &EmployeeId)
    -> Result<Option<Employee>, EmployeeRepositoryError>;

    /// Fetch an employee by tax identifier.
    async fn find_by_cpf(&self, cpf: &Cpf) -> Result<Option<Employee>, EmployeeRepositoryError>;

    /// Fetch one page of employees in a stable order.
    async fn list(&self, request: PageRequest) -> Result<Vec<Employee>, EmployeeRepositoryError>;

    /// Count all employees.
    async fn count(&self) -> Result<u64, EmployeeRepositoryError>;

    /// Persist a new employee.
    async fn insert(&self, employee: &Employee) -> Result<(), EmployeeRepositoryError>;

    /// Overwrite the stored fields of an existing employee.
    ///
    /// Returns `false` when no employee has the identifier.
    async fn update(&self, employee: &Employee) -> Result<bool, EmployeeRepositoryError>;

    /// Remove an employee.
    ///
    /// Returns `false` when no employee has the identifier.
    async fn delete(&self, id: &EmployeeId) -> Result<bool, EmployeeRepositoryError>;
}

/// Repository that stores nothing and finds nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureEmployeeRepository;

#[async_trait]
impl EmployeeRepository for FixtureEmployeeRepository {
    async fn find_by_id(
        &self,
        _id: &EmployeeId,
    ) -> Result<Option<Employee>, EmployeeRepositoryError> {
        Ok(None)
    }

    async fn find_by_cpf(&self, _cpf: &Cpf) -> Result<Option<Employee>, EmployeeRepositoryError> {
        Ok(None)
    }

    async fn list(&self, _request: PageRequest) -> Result<Vec<Employee>, EmployeeRepositoryError> {
        Ok(Vec::new())
    }

    async fn count(&self) -> Result<u64, EmployeeRepositoryError> {
        Ok(0)
    }

    async fn insert(&self, _employee: &Employee) -> Result<(), EmployeeRepositoryError> {
        Ok(())
    }

    async fn update(&self, _employee: &Employee) -> Result<bool, EmployeeRepositoryError> {
        Ok(false)
    }

    async fn delete(&self, _id: &EmployeeId) -> Result<bool, EmployeeRepositoryError> {
        Ok(false)
    }
}
