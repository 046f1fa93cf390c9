//! Outbound adapters implementing the domain repository ports.
//!
//! - **persistence**: PostgreSQL repositories using Diesel ORM.
//! - **memory**: shared in-memory tables for database-less runs and tests.
//!
//! Adapters only translate between domain types and storage representations.

pub mod memory;
pub mod persistence;
