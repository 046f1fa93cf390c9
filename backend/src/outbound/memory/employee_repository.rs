//! In-memory `EmployeeRepository`.

use std::sync::Arc;

use async_trait::async_trait;
use pagination::PageRequest;
use tokio::sync::RwLock;

use crate::domain::ports::{EmployeeRepository, EmployeeRepositoryError};
use crate::domain::{Cpf, Employee, EmployeeId};

use super::{Tables, page_slice};

/// Employee repository over the shared in-memory tables.
#[derive(Debug, Clone)]
pub struct InMemoryEmployeeRepository {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryEmployeeRepository {
    pub(super) fn new(tables: Arc<RwLock<Tables>>) -> Self {
        Self { tables }
    }
}

fn check_constraints(tables: &Tables, employee: &Employee) -> Result<(), EmployeeRepositoryError> {
    let cpf_taken = tables
        .employees
        .iter()
        .any(|stored| stored.cpf == employee.cpf && stored.id != employee.id);
    if cpf_taken {
        return Err(EmployeeRepositoryError::duplicate_cpf(employee.cpf.as_ref()));
    }
    if let Some(company_id) = employee.company_id {
        let known = tables
            .companies
            .iter()
            .any(|company| company.id() == company_id);
        if !known {
            return Err(EmployeeRepositoryError::missing_company(
                company_id.to_string(),
            ));
        }
    }
    Ok(())
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn find_by_id(
        &self,
        id: &EmployeeId,
    ) -> Result<Option<Employee>, EmployeeRepositoryError> {
        let tables = self.tables.read().await;
        Ok(tables
            .employees
            .iter()
            .find(|employee| employee.id == *id)
            .cloned())
    }

    async fn find_by_cpf(&self, cpf: &Cpf) -> Result<Option<Employee>, EmployeeRepositoryError> {
        let tables = self.tables.read().await;
        Ok(tables
            .employees
            .iter()
            .find(|employee| employee.cpf == *cpf)
            .cloned())
    }

    async fn list(&self, request: PageRequest) -> Result<Vec<Employee>, EmployeeRepositoryError> {
        let tables = self.tables.read().await;
        Ok(page_slice(&tables.employees, request))
    }

    async fn count(&self) -> Result<u64, EmployeeRepositoryError> {
        let tables = self.tables.read().await;
        Ok(u64::try_from(tables.employees.len()).unwrap_or(u64::MAX))
    }

    async fn insert(&self, employee: &Employee) -> Result<(), EmployeeRepositoryError> {
        let mut tables = self.tables.write().await;
        check_constraints(&tables, employee)?;
        tables.employees.push(employee.clone());
        Ok(())
    }

    async fn update(&self, employee: &Employee) -> Result<bool, EmployeeRepositoryError> {
        let mut tables = self.tables.write().await;
        check_constraints(&tables, employee)?;
        let Some(slot) = tables
            .employees
            .iter_mut()
            .find(|stored| stored.id == employee.id)
        else {
            return Ok(false);
        };
        *slot = employee.clone();
        Ok(true)
    }

    async fn delete(&self, id: &EmployeeId) -> Result<bool, EmployeeRepositoryError> {
        let mut tables = self.tables.write().await;
        let before = tables.employees.len();
        tables.employees.retain(|employee| employee.id != *id);
        Ok(tables.employees.len() != before)
    }
}
