//! Driving port for reading companies.

use async_trait::async_trait;
use pagination::{Page, PageRequest};
use uuid::Uuid;

use crate::domain::{Cnpj, Company, CompanyId, CompanyName, Error};

/// Read-side use cases for companies.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompanyQuery: Send + Sync {
    /// Load a single company.
    ///
    /// Fails with `not_found` when the identifier is unknown.
    async fn find_by_id(&self, id: &CompanyId) -> Result<Company, Error>;

    /// Load one page of companies with collection totals.
    async fn find_page(&self, request: PageRequest) -> Result<Page<Company>, Error>;
}

/// Identifier returned by [`FixtureCompanyQuery`].
pub const FIXTURE_COMPANY_ID: Uuid = Uuid::from_u128(0x3fa8_5f64_5717_4562_b3fc_2c96_3f66_afa6);

pub(crate) fn fixture_company() -> Result<Company, Error> {
    let cnpj = Cnpj::new("1234567890123")
        .map_err(|err| Error::internal(format!("invalid fixture cnpj: {err}")))?;
    let name = CompanyName::new("Kronos Tecnologia")
        .map_err(|err| Error::internal(format!("invalid fixture company name: {err}")))?;
    Ok(Company::new(CompanyId::from_uuid(FIXTURE_COMPANY_ID), cnpj, name).with_employee_count(1))
}

/// Fixture query returning a single canned company.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCompanyQuery;

#[async_trait]
impl CompanyQuery for FixtureCompanyQuery {
    async fn find_by_id(&self, id: &CompanyId) -> Result<Company, Error> {
        if id.as_uuid() == &FIXTURE_COMPANY_ID {
            fixture_company()
        } else {
            Err(Error::not_found("company not found"))
        }
    }

    async fn find_page(&self, request: PageRequest) -> Result<Page<Company>, Error> {
        let content = if request.page() == 0 {
            vec![fixture_company()?]
        } else {
            Vec::new()
        };
        Ok(Page::new(content, request, 1))
    }
}
