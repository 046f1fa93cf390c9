//! HTTP inbound adapter exposing the company and employee REST endpoints.

pub mod companies;
pub mod employees;
pub mod error;
pub mod health;
pub mod schemas;
pub mod state;
pub mod validation;

pub use error::ApiResult;
