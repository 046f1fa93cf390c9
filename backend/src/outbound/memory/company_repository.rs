//! In-memory `CompanyRepository`.

use std::sync::Arc;

use async_trait::async_trait;
use pagination::PageRequest;
use tokio::sync::RwLock;

use crate::domain::ports::{CompanyRepository, CompanyRepositoryError};
use crate::domain::{Cnpj, Company, CompanyId};

use super::{Tables, page_slice};

/// Company repository over the shared in-memory tables.
#[derive(Debug, Clone)]
pub struct InMemoryCompanyRepository {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryCompanyRepository {
    pub(super) fn new(tables: Arc<RwLock<Tables>>) -> Self {
        Self { tables }
    }
}

fn cnpj_taken(tables: &Tables, cnpj: &Cnpj, owner: CompanyId) -> bool {
    tables
        .companies
        .iter()
        .any(|company| company.cnpj() == cnpj && company.id() != owner)
}

#[async_trait]
impl CompanyRepository for InMemoryCompanyRepository {
    async fn find_by_id(&self, id: &CompanyId) -> Result<Option<Company>, CompanyRepositoryError> {
        let tables = self.tables.read().await;
        Ok(tables
            .companies
            .iter()
            .find(|company| company.id() == *id)
            .map(|company| tables.with_count(company)))
    }

    async fn find_by_cnpj(&self, cnpj: &Cnpj) -> Result<Option<Company>, CompanyRepositoryError> {
        let tables = self.tables.read().await;
        Ok(tables
            .companies
            .iter()
            .find(|company| company.cnpj() == cnpj)
            .map(|company| tables.with_count(company)))
    }

    async fn list(&self, request: PageRequest) -> Result<Vec<Company>, CompanyRepositoryError> {
        let tables = self.tables.read().await;
        Ok(page_slice(&tables.companies, request)
            .iter()
            .map(|company| tables.with_count(company))
            .collect())
    }

    async fn count(&self) -> Result<u64, CompanyRepositoryError> {
        let tables = self.tables.read().await;
        Ok(u64::try_from(tables.companies.len()).unwrap_or(u64::MAX))
    }

    async fn insert(&self, company: &Company) -> Result<(), CompanyRepositoryError> {
        let mut tables = self.tables.write().await;
        if cnpj_taken(&tables, company.cnpj(), company.id()) {
            return Err(CompanyRepositoryError::duplicate_cnpj(company.cnpj().as_ref()));
        }
        tables.companies.push(company.clone().with_employee_count(0));
        Ok(())
    }

    async fn update(&self, company: &Company) -> Result<bool, CompanyRepositoryError> {
        let mut tables = self.tables.write().await;
        if cnpj_taken(&tables, company.cnpj(), company.id()) {
            return Err(CompanyRepositoryError::duplicate_cnpj(company.cnpj().as_ref()));
        }
        let Some(slot) = tables
            .companies
            .iter_mut()
            .find(|stored| stored.id() == company.id())
        else {
            return Ok(false);
        };
        *slot = company.clone().with_employee_count(0);
        Ok(true)
    }

    async fn delete(&self, id: &CompanyId) -> Result<bool, CompanyRepositoryError> {
        let mut tables = self.tables.write().await;
        let before = tables.companies.len();
        tables.companies.retain(|company| company.id() != *id);
        if tables.companies.len() == before {
            return Ok(false);
        }
        tables
            .employees
            .retain(|employee| employee.company_id != Some(*id));
        Ok(true)
    }
}
