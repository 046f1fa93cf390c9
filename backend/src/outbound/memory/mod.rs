//! In-memory repositories used when no database is configured.
//!
//! Both repositories share one [`InMemoryStore`], so they observe each other's
//! writes the way two tables in one database would: employee counts are
//! derived on read, deleting a company removes its employees, and inserting
//! an employee for an unknown company fails.
//!
//! ```
//! use kronos::outbound::memory::InMemoryStore;
//!
//! let store = InMemoryStore::new();
//! let _companies = store.company_repository();
//! let _employees = store.employee_repository();
//! ```

mod company_repository;
mod employee_repository;

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::{Company, CompanyId, Employee};

pub use company_repository::InMemoryCompanyRepository;
pub use employee_repository::InMemoryEmployeeRepository;

/// Rows kept in insertion order, which is also the listing order.
#[derive(Debug, Default)]
struct Tables {
    companies: Vec<Company>,
    employees: Vec<Employee>,
}

impl Tables {
    fn employee_count(&self, company: CompanyId) -> u64 {
        let count = self
            .employees
            .iter()
            .filter(|employee| employee.company_id == Some(company))
            .count();
        u64::try_from(count).unwrap_or(u64::MAX)
    }

    fn with_count(&self, company: &Company) -> Company {
        company
            .clone()
            .with_employee_count(self.employee_count(company.id()))
    }
}

/// Shared backing store for the in-memory repositories.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn company_repository(&self) -> InMemoryCompanyRepository {
        InMemoryCompanyRepository::new(self.tables.clone())
    }

    pub fn employee_repository(&self) -> InMemoryEmployeeRepository {
        InMemoryEmployeeRepository::new(self.tables.clone())
    }
}

/// Slice out the window described by `request`.
fn page_slice<T: Clone>(rows: &[T], request: pagination::PageRequest) -> Vec<T> {
    let offset = usize::try_from(request.offset()).unwrap_or(usize::MAX);
    let limit = usize::try_from(request.limit()).unwrap_or(usize::MAX);
    rows.iter().skip(offset).take(limit).cloned().collect()
}
