//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driving ports (`*Query`, `*Command`) are consumed by inbound adapters.
//! Driven ports (`*Repository`) are implemented by outbound adapters and
//! expose typed errors that services map into [`crate::domain::Error`].

mod macros;
pub(crate) use macros::define_port_error;

mod company_command;
mod company_query;
mod company_repository;
mod employee_command;
mod employee_query;
mod employee_repository;

#[cfg(test)]
pub use company_command::MockCompanyCommand;
pub use company_command::{CompanyCommand, FixtureCompanyCommand};
#[cfg(test)]
pub use company_query::MockCompanyQuery;
pub use company_query::{CompanyQuery, FIXTURE_COMPANY_ID, FixtureCompanyQuery};
#[cfg(test)]
pub use company_repository::MockCompanyRepository;
pub use company_repository::{
    CompanyRepository, CompanyRepositoryError, FixtureCompanyRepository,
};
#[cfg(test)]
pub use employee_command::MockEmployeeCommand;
pub use employee_command::{EmployeeCommand, FixtureEmployeeCommand};
#[cfg(test)]
pub use employee_query::MockEmployeeQuery;
pub use employee_query::{EmployeeQuery, FIXTURE_EMPLOYEE_ID, FixtureEmployeeQuery};
#[cfg(test)]
pub use employee_repository::MockEmployeeRepository;
pub use employee_repository::{
    EmployeeRepository, EmployeeRepositoryError, FixtureEmployeeRepository,
};
