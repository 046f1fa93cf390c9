//! Company HTTP handlers.
//!
//! ```text
//! GET    /v1/company?page&size
//! GET    /v1/company/{id}
//! POST   /v1/company
//! PUT    /v1/company/{id}
//! DELETE /v1/company/{id}
//! ```

use actix_web::http::header;
use actix_web::{HttpResponse, delete, get, post, put, web};
use pagination::Page;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Cnpj, Company, CompanyId, CompanyName, CompanyPatch, Error, NewCompany};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{CompanyPageSchema, ErrorSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, PageQuery, parse_field, parse_optional_field, parse_page_request, parse_uuid,
    require,
};

const CNPJ_FIELD: FieldName = FieldName::new("cnpj");
const NAME_FIELD: FieldName = FieldName::new("nameCompany");
const ID_FIELD: FieldName = FieldName::new("id");

#[derive(Debug, Deserialize)]
struct CompanyPath {
    id: String,
}

/// Request payload for registering or updating a company.
///
/// Every field is required on create; on update, absent fields keep their
/// stored value.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompanyRequest {
    #[schema(example = "1234567890123")]
    pub cnpj: Option<String>,
    #[schema(example = "Kronos Tecnologia")]
    pub name_company: Option<String>,
}

/// Response payload for a company.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompanyResponse {
    pub id: String,
    pub cnpj: String,
    #[schema(example = "Kronos Tecnologia")]
    pub name_company: String,
    pub employee_count: u64,
}

impl From<Company> for CompanyResponse {
    fn from(value: Company) -> Self {
        Self {
            id: value.id().to_string(),
            cnpj: value.cnpj().to_string(),
            name_company: value.name().as_ref().to_owned(),
            employee_count: value.employee_count(),
        }
    }
}

fn parse_company_id(raw: String) -> Result<CompanyId, Error> {
    parse_uuid(raw, ID_FIELD).map(CompanyId::from_uuid)
}

fn parse_new_company(payload: CompanyRequest) -> Result<NewCompany, Error> {
    let cnpj = require(payload.cnpj, CNPJ_FIELD)?;
    let name = require(payload.name_company, NAME_FIELD)?;
    Ok(NewCompany {
        cnpj: parse_field(cnpj, CNPJ_FIELD, Cnpj::new)?,
        name: parse_field(name, NAME_FIELD, CompanyName::new)?,
    })
}

fn parse_company_patch(payload: CompanyRequest) -> Result<CompanyPatch, Error> {
    Ok(CompanyPatch {
        cnpj: parse_optional_field(payload.cnpj, CNPJ_FIELD, Cnpj::new)?,
        name: parse_optional_field(payload.name_company, NAME_FIELD, CompanyName::new)?,
    })
}

/// Fetch a single company.
#[utoipa::path(
    get,
    path = "/v1/company/{id}",
    params(("id" = String, Path, description = "Company identifier (UUID)")),
    responses(
        (status = 200, description = "Company", body = CompanyResponse),
        (status = 400, description = "Invalid identifier", body = ErrorSchema),
        (status = 404, description = "Company not found", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["companies"],
    operation_id = "getCompany"
)]
#[get("/company/{id}")]
pub async fn get_company(
    state: web::Data<HttpState>,
    path: web::Path<CompanyPath>,
) -> ApiResult<web::Json<CompanyResponse>> {
    let id = parse_company_id(path.into_inner().id)?;
    let company = state.companies_query.find_by_id(&id).await?;
    Ok(web::Json(CompanyResponse::from(company)))
}

/// List companies one page at a time.
#[utoipa::path(
    get,
    path = "/v1/company",
    params(
        ("page" = Option<i64>, Query, description = "Zero-based page index, default 0"),
        ("size" = Option<i64>, Query, description = "Page size, default 10, max 100")
    ),
    responses(
        (status = 200, description = "Page of companies", body = CompanyPageSchema),
        (status = 400, description = "Invalid page parameters", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["companies"],
    operation_id = "listCompanies"
)]
#[get("/company")]
pub async fn list_companies(
    state: web::Data<HttpState>,
    query: web::Query<PageQuery>,
) -> ApiResult<web::Json<Page<CompanyResponse>>> {
    let request = parse_page_request(query.into_inner())?;
    let page = state.companies_query.find_page(request).await?;
    Ok(web::Json(page.map(CompanyResponse::from)))
}

/// Register a company.
#[utoipa::path(
    post,
    path = "/v1/company",
    request_body = CompanyRequest,
    responses(
        (
            status = 201,
            description = "Company created",
            headers(("Location" = String, description = "URI of the new company")),
            body = CompanyResponse
        ),
        (status = 400, description = "Invalid request or duplicate CNPJ", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["companies"],
    operation_id = "createCompany"
)]
#[post("/company")]
pub async fn create_company(
    state: web::Data<HttpState>,
    payload: web::Json<CompanyRequest>,
) -> ApiResult<HttpResponse> {
    let company = parse_new_company(payload.into_inner())?;
    let created = state.companies.create(company).await?;
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/v1/company/{}", created.id())))
        .json(CompanyResponse::from(created)))
}

/// Update the fields present in the payload.
#[utoipa::path(
    put,
    path = "/v1/company/{id}",
    params(("id" = String, Path, description = "Company identifier (UUID)")),
    request_body = CompanyRequest,
    responses(
        (status = 200, description = "Updated company", body = CompanyResponse),
        (status = 400, description = "Invalid request or duplicate CNPJ", body = ErrorSchema),
        (status = 404, description = "Company not found", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["companies"],
    operation_id = "updateCompany"
)]
#[put("/company/{id}")]
pub async fn update_company(
    state: web::Data<HttpState>,
    path: web::Path<CompanyPath>,
    payload: web::Json<CompanyRequest>,
) -> ApiResult<web::Json<CompanyResponse>> {
    let id = parse_company_id(path.into_inner().id)?;
    let patch = parse_company_patch(payload.into_inner())?;
    let company = state.companies.update(&id, patch).await?;
    Ok(web::Json(CompanyResponse::from(company)))
}

/// Delete a company and its employees.
#[utoipa::path(
    delete,
    path = "/v1/company/{id}",
    params(("id" = String, Path, description = "Company identifier (UUID)")),
    responses(
        (status = 204, description = "Company deleted"),
        (status = 400, description = "Invalid identifier", body = ErrorSchema),
        (status = 404, description = "Company not found", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["companies"],
    operation_id = "deleteCompany"
)]
#[delete("/company/{id}")]
pub async fn delete_company(
    state: web::Data<HttpState>,
    path: web::Path<CompanyPath>,
) -> ApiResult<HttpResponse> {
    let id = parse_company_id(path.into_inner().id)?;
    state.companies.delete(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "companies_tests.rs"]
mod tests;
