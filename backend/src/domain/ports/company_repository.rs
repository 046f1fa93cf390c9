//! Port abstraction for company persistence adapters and their errors.

use async_trait::async_trait;
use pagination::PageRequest;

use crate::domain::{Cnpj, Company, CompanyId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by company repository adapters.
    pub enum CompanyRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "company repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "company repository query failed: {message}",
        /// Another company already holds the CNPJ.
        DuplicateCnpj { cnpj: String } => "company with cnpj {cnpj} already exists",
    }
}

/// Driven port for storing and loading companies.
///
/// Read operations populate [`Company::employee_count`]. Deleting a company
/// removes its employees.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    /// Fetch a company by identifier.
    async fn find_by_id(&self, id: &CompanyId) -> Result<Option<Company>, CompanyRepositoryError>;

    /// Fetch a company by tax identifier.
    async fn find_by_cnpj(&self, cnpj: &Cnpj) -> Result<Option<Company>, CompanyRepositoryError>;

    /// Fetch one page of companies in a stable order.
    async fn list(&self, request: PageRequest) -> Result<Vec<Company>, CompanyRepositoryError>;

    /// Count all companies.
    async fn count(&self) -> Result<u64, CompanyRepositoryError>;

    /// Persist a new company.
    async fn insert(&self, company: &Company) -> Result<(), CompanyRepositoryError>;

    /// Overwrite the stored fields of an existing company.
    ///
    /// Returns `false` when no company has the identifier.
    async fn update(&self, company: &Company) -> Result<bool, CompanyRepositoryError>;

    /// Remove a company and its employees.
    ///
    /// Returns `false` when no company has the identifier.
    async fn delete(&self, id: &CompanyId) -> Result<bool, CompanyRepositoryError>;
}

/// Repository that stores nothing and finds nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCompanyRepository;

#[async_trait]
impl CompanyRepository for FixtureCompanyRepository {
    async fn find_by_id(&self, _id: &CompanyId) -> Result<Option<Company>, CompanyRepositoryError> {
        Ok(None)
    }

    async fn find_by_cnpj(&self, _cnpj: &Cnpj) -> Result<Option<Company>, CompanyRepositoryError> {
        Ok(None)
    }

    async fn list(&self, _request: PageRequest) -> Result<Vec<Company>, CompanyRepositoryError> {
        Ok(Vec::new())
    }

    async fn count(&self) -> Result<u64, CompanyRepositoryError> {
        Ok(0)
    }

    async fn insert(&self, _company: &Company) -> Result<(), CompanyRepositoryError> {
        Ok(())
    }

    async fn update(&self, _company: &Company) -> Result<bool, CompanyRepositoryError> {
        Ok(false)
    }

    async fn delete(&self, _id: &CompanyId) -> Result<bool, CompanyRepositoryError> {
        Ok(false)
    }
}
