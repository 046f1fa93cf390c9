//! Employee aggregate and its value objects.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::validation::{FieldViolation, TextValidationError, bounded_text};
use super::{CompanyId, Cnpj, Cpf};

/// Maximum length of a first name or surname in characters.
pub const PERSON_NAME_MAX: usize = 100;
/// Maximum length of an email address in characters.
pub const EMAIL_MAX: usize = 80;
/// Maximum length of a job position in characters.
pub const POSITION_MAX: usize = 100;

/// Stable employee identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(Uuid);

impl EmployeeId {
    /// Generate a new random identifier.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID.
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for EmployeeId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// First name or surname of an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PersonName(String);

impl PersonName {
    /// Validate and construct a name.
    pub fn new(name: impl Into<String>) -> Result<Self, TextValidationError> {
        bounded_text(name.into(), PERSON_NAME_MAX).map(Self)
    }
}

impl AsRef<str> for PersonName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<PersonName> for String {
    fn from(value: PersonName) -> Self {
        value.0
    }
}

impl TryFrom<String> for PersonName {
    type Error = TextValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Job title held by an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct JobPosition(String);

impl JobPosition {
    /// Validate and construct a position.
    pub fn new(position: impl Into<String>) -> Result<Self, TextValidationError> {
        bounded_text(position.into(), POSITION_MAX).map(Self)
    }
}

impl AsRef<str> for JobPosition {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<JobPosition> for String {
    fn from(value: JobPosition) -> Self {
        value.0
    }
}

impl TryFrom<String> for JobPosition {
    type Error = TextValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Validation errors returned by [`Email::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailValidationError {
    Blank,
    TooLong { max: usize },
    InvalidFormat,
}

impl fmt::Display for EmailValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blank => write!(f, "must not be blank"),
            Self::TooLong { max } => write!(f, "must be at most {max} characters"),
            Self::InvalidFormat => write!(f, "must be formatted like name@provider.com"),
        }
    }
}

impl std::error::Error for EmailValidationError {}

impl FieldViolation for EmailValidationError {
    fn code(&self) -> &'static str {
        match self {
            Self::Blank => "blank",
            Self::TooLong { .. } => "too_long",
            Self::InvalidFormat => "invalid_email",
        }
    }
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // Shape check only: one `@`, no whitespace, a dotted domain.
        let pattern = r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$";
        Regex::new(pattern).unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Contact email address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Validate and construct an email address.
    pub fn new(email: impl Into<String>) -> Result<Self, EmailValidationError> {
        let email = email.into();
        if email.trim().is_empty() {
            return Err(EmailValidationError::Blank);
        }
        if email.chars().count() > EMAIL_MAX {
            return Err(EmailValidationError::TooLong { max: EMAIL_MAX });
        }
        if !email_regex().is_match(&email) {
            return Err(EmailValidationError::InvalidFormat);
        }
        Ok(Self(email))
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<Email> for String {
    fn from(value: Email) -> Self {
        value.0
    }
}

impl TryFrom<String> for Email {
    type Error = EmailValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Validation errors returned by [`Salary::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SalaryValidationError {
    NotPositive,
}

impl fmt::Display for SalaryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotPositive => write!(f, "must be a positive amount"),
        }
    }
}

impl std::error::Error for SalaryValidationError {}

impl FieldViolation for SalaryValidationError {
    fn code(&self) -> &'static str {
        "not_positive"
    }
}

/// Monthly salary; always finite and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Salary(f64);

impl Salary {
    /// Validate and construct a salary.
    pub fn new(amount: f64) -> Result<Self, SalaryValidationError> {
        if amount.is_finite() && amount > 0.0 {
            Ok(Self(amount))
        } else {
            Err(SalaryValidationError::NotPositive)
        }
    }

    /// Raw amount.
    pub fn amount(self) -> f64 {
        self.0
    }
}

impl From<Salary> for f64 {
    fn from(value: Salary) -> Self {
        value.0
    }
}

impl TryFrom<f64> for Salary {
    type Error = SalaryValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// An employee, optionally tied to the company that employs them.
///
/// ## Invariants
/// - `cpf` is unique across employees; repositories enforce it.
/// - `company_id`, when present, references an existing company.
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: EmployeeId,
    pub cpf: Cpf,
    pub name: PersonName,
    pub surname: PersonName,
    pub email: Email,
    pub salary: Salary,
    pub position: JobPosition,
    pub company_id: Option<CompanyId>,
}

impl Employee {
    /// Overwrite the fields present in `patch`, leaving the rest untouched.
    pub fn apply(&mut self, patch: EmployeePatch) {
        let EmployeePatch {
            cpf,
            name,
            surname,
            email,
            salary,
            position,
        } = patch;
        if let Some(cpf) = cpf {
            self.cpf = cpf;
        }
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(surname) = surname {
            self.surname = surname;
        }
        if let Some(email) = email {
            self.email = email;
        }
        if let Some(salary) = salary {
            self.salary = salary;
        }
        if let Some(position) = position {
            self.position = position;
        }
    }
}

/// Validated input for hiring an employee into the company holding
/// `company_cnpj`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEmployee {
    pub cpf: Cpf,
    pub name: PersonName,
    pub surname: PersonName,
    pub email: Email,
    pub salary: Salary,
    pub position: JobPosition,
    pub company_cnpj: Cnpj,
}

impl NewEmployee {
    /// Materialise the employee under `id`, tied to `company_id`.
    pub fn into_employee(self, id: EmployeeId, company_id: CompanyId) -> Employee {
        let Self {
            cpf,
            name,
            surname,
            email,
            salary,
            position,
            company_cnpj: _,
        } = self;
        Employee {
            id,
            cpf,
            name,
            surname,
            email,
            salary,
            position,
            company_id: Some(company_id),
        }
    }
}

/// Partial update for an employee; `None` fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeePatch {
    pub cpf: Option<Cpf>,
    pub name: Option<PersonName>,
    pub surname: Option<PersonName>,
    pub email: Option<Email>,
    pub salary: Option<Salary>,
    pub position: Option<JobPosition>,
}
