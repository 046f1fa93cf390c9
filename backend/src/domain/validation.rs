//! Shared building blocks for validated domain strings.

use std::fmt;

/// A validation failure that can be reported against a named input field.
///
/// Inbound adapters combine the field name with [`FieldViolation::code`] and
/// the `Display` text to build structured error details.
pub trait FieldViolation: fmt::Display {
    /// Stable snake_case code describing the violation.
    fn code(&self) -> &'static str;
}

/// Validation errors for bounded free-text values such as names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextValidationError {
    Blank,
    TooLong { max: usize },
}

impl fmt::Display for TextValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blank => write!(f, "must not be blank"),
            Self::TooLong { max } => write!(f, "must be at most {max} characters"),
        }
    }
}

impl std::error::Error for TextValidationError {}

impl FieldViolation for TextValidationError {
    fn code(&self) -> &'static str {
        match self {
            Self::Blank => "blank",
            Self::TooLong { .. } => "too_long",
        }
    }
}

/// Accept `value` when it is non-blank and at most `max` characters long.
pub(crate) fn bounded_text(value: String, max: usize) -> Result<String, TextValidationError> {
    if value.trim().is_empty() {
        return Err(TextValidationError::Blank);
    }
    if value.chars().count() > max {
        return Err(TextValidationError::TooLong { max });
    }
    Ok(value)
}
