//! Company use cases.
//!
//! [`CompanyService`] implements the company driving ports over a
//! [`CompanyRepository`], enforcing CNPJ uniqueness and partial-update
//! semantics.

use std::sync::Arc;

use async_trait::async_trait;
use pagination::{Page, PageRequest};
use serde_json::json;
use tracing::info;

use crate::domain::ports::{
    CompanyCommand, CompanyQuery, CompanyRepository, CompanyRepositoryError,
};
use crate::domain::{Cnpj, Company, CompanyId, CompanyPatch, Error, NewCompany};

/// Company service implementing [`CompanyQuery`] and [`CompanyCommand`].
#[derive(Clone)]
pub struct CompanyService<R> {
    repository: Arc<R>,
}

impl<R> CompanyService<R> {
    /// Create a new service over the given repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

pub(crate) fn company_not_found() -> Error {
    Error::not_found("company not found")
}

fn duplicate_cnpj(cnpj: &str) -> Error {
    Error::invalid_request("cnpj already registered").with_details(json!({
        "field": "cnpj",
        "value": cnpj,
        "code": "duplicate",
    }))
}

pub(crate) fn map_company_repository_error(error: CompanyRepositoryError) -> Error {
    match error {
        CompanyRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("company repository unavailable: {message}"))
        }
        CompanyRepositoryError::Query { message } => {
            Error::internal(format!("company repository error: {message}"))
        }
        CompanyRepositoryError::DuplicateCnpj { cnpj } => duplicate_cnpj(&cnpj),
    }
}

impl<R> CompanyService<R>
where
    R: CompanyRepository,
{
    async fn load(&self, id: &CompanyId) -> Result<Company, Error> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(map_company_repository_error)?
            .ok_or_else(company_not_found)
    }

    /// Fail when `cnpj` is held by a company other than `owner`.
    async fn ensure_cnpj_available(
        &self,
        cnpj: &Cnpj,
        owner: Option<CompanyId>,
    ) -> Result<(), Error> {
        let holder = self
            .repository
            .find_by_cnpj(cnpj)
            .await
            .map_err(map_company_repository_error)?;
        match holder {
            Some(existing) if Some(existing.id()) != owner => Err(duplicate_cnpj(cnpj.as_ref())),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl<R> CompanyQuery for CompanyService<R>
where
    R: CompanyRepository,
{
    async fn find_by_id(&self, id: &CompanyId) -> Result<Company, Error> {
        self.load(id).await
    }

    async fn find_page(&self, request: PageRequest) -> Result<Page<Company>, Error> {
        let content = self
            .repository
            .list(request)
            .await
            .map_err(map_company_repository_error)?;
        let total = self
            .repository
            .count()
            .await
            .map_err(map_company_repository_error)?;
        Ok(Page::new(content, request, total))
    }
}

#[async_trait]
impl<R> CompanyCommand for CompanyService<R>
where
    R: CompanyRepository,
{
    async fn create(&self, company: NewCompany) -> Result<Company, Error> {
        self.ensure_cnpj_available(&company.cnpj, None).await?;

        let company = company.into_company(CompanyId::random());
        self.repository
            .insert(&company)
            .await
            .map_err(map_company_repository_error)?;
        info!(company_id = %company.id(), "company created");
        Ok(company)
    }

    async fn update(&self, id: &CompanyId, patch: CompanyPatch) -> Result<Company, Error> {
        let mut company = self.load(id).await?;
        if let Some(cnpj) = patch.cnpj.as_ref().filter(|cnpj| *cnpj != company.cnpj()) {
            self.ensure_cnpj_available(cnpj, Some(*id)).await?;
        }

        company.apply(patch);
        let updated = self
            .repository
            .update(&company)
            .await
            .map_err(map_company_repository_error)?;
        if !updated {
            return Err(company_not_found());
        }
        info!(company_id = %id, "company updated");
        Ok(company)
    }

    async fn delete(&self, id: &CompanyId) -> Result<(), Error> {
        let deleted = self
            .repository
            .delete(id)
            .await
            .map_err(map_company_repository_error)?;
        if !deleted {
            return Err(company_not_found());
        }
        info!(company_id = %id, "company deleted");
        Ok(())
    }
}

#[cfg(test)]
#[path = "company_service_tests.rs"]
mod tests;
