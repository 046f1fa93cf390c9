//! OpenAPI schema definitions for domain and shared types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`, and the
//! `pagination` crate knows nothing about utoipa. This module provides the
//! schema definitions required for OpenAPI documentation using utoipa's
//! external schema registration.

use utoipa::ToSchema;

use crate::inbound::http::companies::CompanyResponse;
use crate::inbound::http::employees::EmployeeResponse;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
///
/// Stable machine-readable error codes returned in API error responses.
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// A backing service such as the database is unreachable.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
///
/// API error response payload with machine-readable code and human-readable
/// message.
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "cnpj must contain exactly 13 characters")]
    message: String,
    /// Correlation identifier for tracing this error across systems.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary error details such as the offending field.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for a page of companies.
#[derive(ToSchema)]
#[schema(as = CompanyPage, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct CompanyPageSchema {
    /// Companies on this page.
    content: Vec<CompanyResponse>,
    /// Zero-based page index.
    #[schema(example = 0)]
    page_number: u32,
    /// Requested page size.
    #[schema(example = 10)]
    page_size: u32,
    /// Number of companies in the collection.
    total_elements: u64,
    /// Number of pages in the collection.
    total_pages: u64,
}

/// OpenAPI schema for a page of employees.
#[derive(ToSchema)]
#[schema(as = EmployeePage, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct EmployeePageSchema {
    /// Employees on this page.
    content: Vec<EmployeeResponse>,
    /// Zero-based page index.
    #[schema(example = 0)]
    page_number: u32,
    /// Requested page size.
    #[schema(example = 10)]
    page_size: u32,
    /// Number of employees in the collection.
    total_elements: u64,
    /// Number of pages in the collection.
    total_pages: u64,
}
