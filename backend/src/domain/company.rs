//! Company aggregate.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::validation::{TextValidationError, bounded_text};
use super::Cnpj;

/// Maximum length of a company name in characters.
pub const COMPANY_NAME_MAX: usize = 100;

/// Stable company identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompanyId(Uuid);

impl CompanyId {
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

impl fmt::Display for CompanyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for CompanyId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Registered company name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CompanyName(String);

impl CompanyName {
    /// Validate and construct a company name.
    pub fn new(name: impl Into<String>) -> Result<Self, TextValidationError> {
        bounded_text(name.into(), COMPANY_NAME_MAX).map(Self)
    }
}

impl AsRef<str> for CompanyName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<CompanyName> for String {
    fn from(value: CompanyName) -> Self {
        value.0
    }
}

impl TryFrom<String> for CompanyName {
    type Error = TextValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// A company and the number of employees it currently owns.
///
/// ## Invariants
/// - `cnpj` is unique across companies; repositories enforce it.
/// - `employee_count` is read-side information computed by the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Company {
    id: CompanyId,
    cnpj: Cnpj,
    name: CompanyName,
    employee_count: u64,
}

impl Company {
    /// Build a company with no employees.
    pub fn new(id: CompanyId, cnpj: Cnpj, name: CompanyName) -> Self {
        Self {
            id,
            cnpj,
            name,
            employee_count: 0,
        }
    }

    /// Set the number of employees owned by the company.
    #[must_use]
    pub fn with_employee_count(mut self, employee_count: u64) -> Self {
        self.employee_count = employee_count;
        self
    }

    /// Stable company identifier.
    pub fn id(&self) -> CompanyId {
        self.id
    }

    /// Company tax identifier.
    pub fn cnpj(&self) -> &Cnpj {
        &self.cnpj
    }

    /// Registered name.
    pub fn name(&self) -> &CompanyName {
        &self.name
    }

    /// Number of employees tied to the company.
    pub fn employee_count(&self) -> u64 {
        self.employee_count
    }

    /// Overwrite the fields present in `patch`, leaving the rest untouched.
    pub fn apply(&mut self, patch: CompanyPatch) {
        let CompanyPatch { cnpj, name } = patch;
        if let Some(cnpj) = cnpj {
            self.cnpj = cnpj;
        }
        if let Some(name) = name {
            self.name = name;
        }
    }
}

/// Validated input for registering a company.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCompany {
    pub cnpj: Cnpj,
    pub name: CompanyName,
}

impl NewCompany {
    /// Materialise the company under `id`.
    pub fn into_company(self, id: CompanyId) -> Company {
        Company::new(id, self.cnpj, self.name)
    }
}

/// Partial update for a company; `None` fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyPatch {
    pub cnpj: Option<Cnpj>,
    pub name: Option<CompanyName>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn company() -> Company {
        Company::new(
            CompanyId::random(),
            Cnpj::new("1234567890123").expect("valid cnpj"),
            CompanyName::new("Acme Ltda").expect("valid name"),
        )
        .with_employee_count(4)
    }

    #[rstest]
    fn empty_patch_leaves_company_unchanged(company: Company) {
        let mut patched = company.clone();
        patched.apply(CompanyPatch::default());
        assert_eq!(patched, company);
    }

    #[rstest]
    fn patch_overwrites_only_present_fields(company: Company) {
        let mut patched = company.clone();
        patched.apply(CompanyPatch {
            cnpj: None,
            name: Some(CompanyName::new("Acme S.A.").expect("valid name")),
        });

        assert_eq!(patched.name().as_ref(), "Acme S.A.");
        assert_eq!(patched.cnpj(), company.cnpj());
        assert_eq!(patched.id(), company.id());
        assert_eq!(patched.employee_count(), 4);
    }

    #[rstest]
    #[case("", TextValidationError::Blank)]
    #[case("   ", TextValidationError::Blank)]
    fn name_rejects_blank_values(#[case] raw: &str, #[case] expected: TextValidationError) {
        assert_eq!(CompanyName::new(raw), Err(expected));
    }

    #[rstest]
    fn name_enforces_maximum_length() {
        let longest = "a".repeat(COMPANY_NAME_MAX);
        assert!(CompanyName::new(longest).is_ok());
        assert_eq!(
            CompanyName::new("a".repeat(COMPANY_NAME_MAX + 1)),
            Err(TextValidationError::TooLong {
                max: COMPANY_NAME_MAX
            })
        );
    }

    #[rstest]
    fn id_parses_from_uuid_text() {
        let id = CompanyId::random();
        let parsed: CompanyId = id.to_string().parse().expect("uuid text");
        assert_eq!(parsed, id);
        assert!("nope".parse::<CompanyId>().is_err());
    }
}
