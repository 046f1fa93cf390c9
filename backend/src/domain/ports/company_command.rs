//! Driving port for mutating companies.
//!
//! HTTP handlers call [`CompanyCommand`] after turning request bodies into
//! validated [`NewCompany`] and [`CompanyPatch`] values.

use async_trait::async_trait;

use crate::domain::{Company, CompanyId, CompanyPatch, Error, NewCompany};

use super::company_query::fixture_company;

/// Write-side use cases for companies.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompanyCommand: Send + Sync {
    /// Register a company.
    ///
    /// Fails with `invalid_request` when the CNPJ is already registered.
    async fn create(&self, company: NewCompany) -> Result<Company, Error>;

    /// Apply a partial update.
    ///
    /// Fails with `not_found` for unknown identifiers and `invalid_request`
    /// when the new CNPJ belongs to another company.
    async fn update(&self, id: &CompanyId, patch: CompanyPatch) -> Result<Company, Error>;

    /// Remove a company together with its employees.
    ///
    /// Fails with `not_found` for unknown identifiers.
    async fn delete(&self, id: &CompanyId) -> Result<(), Error>;
}

/// Fixture command that echoes its input without persisting anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCompanyCommand;

#[async_trait]
impl CompanyCommand for FixtureCompanyCommand {
    async fn create(&self, company: NewCompany) -> Result<Company, Error> {
        Ok(company.into_company(CompanyId::random()))
    }

    async fn update(&self, id: &CompanyId, patch: CompanyPatch) -> Result<Company, Error> {
        let mut company = fixture_company()?;
        if company.id() != *id {
            return Err(Error::not_found("company not found"));
        }
        company.apply(patch);
        Ok(company)
    }

    async fn delete(&self, _id: &CompanyId) -> Result<(), Error> {
        Ok(())
    }
}
