//! Builders wiring repositories and services into the HTTP state.

use std::sync::Arc;

use actix_web::web;

use kronos::domain::ports::{CompanyRepository, EmployeeRepository};
use kronos::domain::{CompanyService, EmployeeService};
use kronos::inbound::http::state::{HttpState, HttpStatePorts};
use kronos::outbound::memory::InMemoryStore;
use kronos::outbound::persistence::{DieselCompanyRepository, DieselEmployeeRepository};

use super::ServerConfig;

/// Wrap a repository pair in the company and employee services.
fn build_ports<C, E>(companies: Arc<C>, employees: Arc<E>) -> HttpStatePorts
where
    C: CompanyRepository + 'static,
    E: EmployeeRepository + 'static,
{
    let company_service = Arc::new(CompanyService::new(companies.clone()));
    let employee_service = Arc::new(EmployeeService::new(employees, companies));
    HttpStatePorts {
        companies: company_service.clone(),
        companies_query: company_service,
        employees: employee_service.clone(),
        employees_query: employee_service,
    }
}

/// Select database-backed ports when a pool is configured, otherwise fall
/// back to a fresh in-memory store.
fn build_ports_with_pool<Pool>(
    pool: &Option<Pool>,
    make_database_ports: impl FnOnce(&Pool) -> HttpStatePorts,
) -> HttpStatePorts {
    match pool {
        Some(pool) => make_database_ports(pool),
        None => {
            let store = InMemoryStore::new();
            build_ports(
                Arc::new(store.company_repository()),
                Arc::new(store.employee_repository()),
            )
        }
    }
}

/// Build the shared HTTP state for every worker.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let ports = build_ports_with_pool(&config.db_pool, |pool| {
        build_ports(
            Arc::new(DieselCompanyRepository::new(pool.clone())),
            Arc::new(DieselEmployeeRepository::new(pool.clone())),
        )
    });
    web::Data::new(HttpState::new(ports))
}
