//! Brazilian tax identifiers.
//!
//! A [`Cnpj`] identifies a company and a [`Cpf`] identifies an individual.
//! Both are stored as plain digit strings of a fixed length; check digits are
//! not verified.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::FieldViolation;

/// Number of digits in a company tax identifier.
pub const CNPJ_LENGTH: usize = 13;
/// Number of digits in an individual tax identifier.
pub const CPF_LENGTH: usize = 11;

/// Validation errors returned by [`Cnpj::new`] and [`Cpf::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaxIdValidationError {
    Blank,
    InvalidLength { expected: usize },
    NonDigit,
}

impl FieldViolation for TaxIdValidationError {
    fn code(&self) -> &'static str {
        match self {
            Self::Blank => "blank",
            Self::InvalidLength { .. } => "invalid_length",
            Self::NonDigit => "non_digit",
        }
    }
}

impl fmt::Display for TaxIdValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blank => write!(f, "must not be blank"),
            Self::InvalidLength { expected } => {
                write!(f, "must contain exactly {expected} characters")
            }
            Self::NonDigit => write!(f, "must contain only digits"),
        }
    }
}

impl std::error::Error for TaxIdValidationError {}

fn validate_digits(value: &str, expected: usize) -> Result<(), TaxIdValidationError> {
    if value.trim().is_empty() {
        return Err(TaxIdValidationError::Blank);
    }
    if value.chars().count() != expected {
        return Err(TaxIdValidationError::InvalidLength { expected });
    }
    if !value.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(TaxIdValidationError::NonDigit);
    }
    Ok(())
}

macro_rules! tax_id {
    ($(#[$meta:meta])* $name:ident, $length:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Validate and construct the identifier.
            pub fn new(value: impl Into<String>) -> Result<Self, TaxIdValidationError> {
                let value = value.into();
                validate_digits(&value, $length)?;
                Ok(Self(value))
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.0.as_str()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_ref())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = TaxIdValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }
    };
}

tax_id!(
    /// Company tax identifier (CNPJ), [`CNPJ_LENGTH`] ASCII digits.
    Cnpj,
    CNPJ_LENGTH
);

tax_id!(
    /// Individual tax identifier (CPF), [`CPF_LENGTH`] ASCII digits.
    Cpf,
    CPF_LENGTH
);
