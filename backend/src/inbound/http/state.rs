//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    CompanyCommand, CompanyQuery, EmployeeCommand, EmployeeQuery, FixtureCompanyCommand,
    FixtureCompanyQuery, FixtureEmployeeCommand, FixtureEmployeeQuery,
};

/// Parameter object bundling all port implementations for HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub companies: Arc<dyn CompanyCommand>,
    pub companies_query: Arc<dyn CompanyQuery>,
    pub employees: Arc<dyn EmployeeCommand>,
    pub employees_query: Arc<dyn EmployeeQuery>,
}

impl Default for HttpStatePorts {
    fn default() -> Self {
        Self {
            companies: Arc::new(FixtureCompanyCommand),
            companies_query: Arc::new(FixtureCompanyQuery),
            employees: Arc::new(FixtureEmployeeCommand),
            employees_query: Arc::new(FixtureEmployeeQuery),
        }
    }
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub companies: Arc<dyn CompanyCommand>,
    pub companies_query: Arc<dyn CompanyQuery>,
    pub employees: Arc<dyn EmployeeCommand>,
    pub employees_query: Arc<dyn EmployeeQuery>,
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports)
    }
}

impl HttpState {
    /// Construct state from a ports bundle.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use kronos::domain::ports::FixtureCompanyQuery;
    /// use kronos::inbound::http::state::{HttpState, HttpStatePorts};
    ///
    /// let state = HttpState::new(HttpStatePorts {
    ///     companies_query: Arc::new(FixtureCompanyQuery),
    ///     ..HttpStatePorts::default()
    /// });
    /// let _companies = state.companies_query.clone();
    /// ```
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            companies,
            companies_query,
            employees,
            employees_query,
        } = ports;
        Self {
            companies,
            companies_query,
            employees,
            employees_query,
        }
    }
}
