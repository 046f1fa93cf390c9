//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repositories translate between Diesel row structs and domain types; no
//! business rules live here. Connections come from a `bb8` pool through
//! `diesel-async`, and database failures map onto the typed port errors.
//!
//! ```ignore
//! use kronos::outbound::persistence::{DbPool, DieselCompanyRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/kronos")).await?;
//! let companies = DieselCompanyRepository::new(pool);
//! ```

mod diesel_company_repository;
mod diesel_employee_repository;
mod diesel_error_mapping;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_company_repository::DieselCompanyRepository;
pub use diesel_employee_repository::DieselEmployeeRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
