//! Shared validation helpers for inbound HTTP adapters.

use pagination::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE, PageRequest, PageRequestError};
use serde::Deserialize;
use serde_json::{Value, json};
use uuid::Uuid;

use crate::domain::{Error, FieldViolation};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    ImmutableField,
    InvalidUuid,
    InvalidNumber,
    InvalidPage,
    InvalidPageSize,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::ImmutableField => "immutable_field",
            ErrorCode::InvalidUuid => "invalid_uuid",
            ErrorCode::InvalidNumber => "invalid_number",
            ErrorCode::InvalidPage => "invalid_page",
            ErrorCode::InvalidPageSize => "invalid_page_size",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &'static str {
        self.0
    }
}

/// Builder for validation errors with field context.
struct ValidationError {
    field: &'static str,
    message: String,
}

impl ValidationError {
    fn new(field: FieldName, message: impl Into<String>) -> Self {
        Self {
            field: field.as_str(),
            message: message.into(),
        }
    }

    fn with_code(self, code: &str) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "code": code,
        }))
    }

    fn with_value(self, code: &str, value: impl Into<Value>) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "value": value.into(),
            "code": code,
        }))
    }
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let name = field.as_str();
    ValidationError::new(field, format!("missing required field: {name}"))
        .with_code(ErrorCode::MissingField.as_str())
}

pub(crate) fn immutable_field_error(field: FieldName) -> Error {
    let name = field.as_str();
    ValidationError::new(field, format!("{name} cannot be changed after creation"))
        .with_code(ErrorCode::ImmutableField.as_str())
}

pub(crate) fn invalid_uuid_error(field: FieldName, value: &str) -> Error {
    let name = field.as_str();
    ValidationError::new(field, format!("{name} must be a valid UUID"))
        .with_value(ErrorCode::InvalidUuid.as_str(), value)
}

pub(crate) fn invalid_number_error(field: FieldName, value: &str) -> Error {
    let name = field.as_str();
    ValidationError::new(field, format!("{name} must be an integer"))
        .with_value(ErrorCode::InvalidNumber.as_str(), value)
}

/// Report a domain validation failure against `field`.
pub(crate) fn field_violation_error(
    field: FieldName,
    value: impl Into<Value>,
    violation: &impl FieldViolation,
) -> Error {
    let name = field.as_str();
    ValidationError::new(field, format!("{name} {violation}")).with_value(violation.code(), value)
}

pub(crate) fn require<T>(value: Option<T>, field: FieldName) -> Result<T, Error> {
    value.ok_or_else(|| missing_field_error(field))
}

/// Run a domain constructor over a raw field, mapping failures to
/// `invalid_request` with the offending value.
pub(crate) fn parse_field<V, T, E>(
    raw: V,
    field: FieldName,
    parse: impl FnOnce(V) -> Result<T, E>,
) -> Result<T, Error>
where
    V: Clone + Into<Value>,
    E: FieldViolation,
{
    parse(raw.clone()).map_err(|violation| field_violation_error(field, raw, &violation))
}

pub(crate) fn parse_optional_field<V, T, E>(
    raw: Option<V>,
    field: FieldName,
    parse: impl FnOnce(V) -> Result<T, E>,
) -> Result<Option<T>, Error>
where
    V: Clone + Into<Value>,
    E: FieldViolation,
{
    raw.map(|value| parse_field(value, field, parse)).transpose()
}

pub(crate) fn parse_uuid(value: String, field: FieldName) -> Result<Uuid, Error> {
    Uuid::parse_str(&value).map_err(|_| invalid_uuid_error(field, &value))
}

/// Query parameters shared by every paginated listing.
///
/// Values stay raw strings so non-numeric input surfaces as a structured
/// `invalid_request` rather than an extractor failure.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
    pub size: Option<String>,
}

const PAGE_FIELD: FieldName = FieldName::new("page");
const SIZE_FIELD: FieldName = FieldName::new("size");

fn parse_number(raw: Option<String>, field: FieldName, default: u32) -> Result<i64, Error> {
    match raw {
        None => Ok(i64::from(default)),
        Some(value) => value
            .trim()
            .parse::<i64>()
            .map_err(|_| invalid_number_error(field, &value)),
    }
}

fn page_request_error(error: PageRequestError, page: i64, size: i64) -> Error {
    let message = error.to_string();
    match error {
        PageRequestError::NegativePage | PageRequestError::PageTooLarge => {
            ValidationError::new(PAGE_FIELD, message)
                .with_value(ErrorCode::InvalidPage.as_str(), page)
        }
        PageRequestError::NonPositiveSize | PageRequestError::SizeTooLarge { .. } => {
            ValidationError::new(SIZE_FIELD, message)
                .with_value(ErrorCode::InvalidPageSize.as_str(), size)
        }
    }
}

/// Validate `page`/`size` query parameters, applying defaults when absent.
pub(crate) fn parse_page_request(query: PageQuery) -> Result<PageRequest, Error> {
    let page = parse_number(query.page, PAGE_FIELD, DEFAULT_PAGE)?;
    let size = parse_number(query.size, SIZE_FIELD, DEFAULT_PAGE_SIZE)?;
    PageRequest::from_signed(page, size).map_err(|error| page_request_error(error, page, size))
}
