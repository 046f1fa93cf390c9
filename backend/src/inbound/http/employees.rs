//! Employee HTTP handlers.
//!
//! ```text
//! GET    /v1/employee?page&size
//! GET    /v1/employee/{id}
//! POST   /v1/employee
//! PUT    /v1/employee/{id}
//! PUT    /v1/employee/email/update/{id}
//! DELETE /v1/employee/{id}
//! ```

use actix_web::http::header;
use actix_web::{HttpResponse, delete, get, post, put, web};
use pagination::Page;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    Cnpj, Cpf, Email, Employee, EmployeeId, EmployeePatch, Error, JobPosition, NewEmployee,
    PersonName, Salary,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{EmployeePageSchema, ErrorSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, PageQuery, immutable_field_error, parse_field, parse_optional_field,
    parse_page_request, parse_uuid, require,
};

const CPF_FIELD: FieldName = FieldName::new("cpf");
const NAME_FIELD: FieldName = FieldName::new("name");
const SURNAME_FIELD: FieldName = FieldName::new("surname");
const EMAIL_FIELD: FieldName = FieldName::new("email");
const SALARY_FIELD: FieldName = FieldName::new("salary");
const POSITION_FIELD: FieldName = FieldName::new("position");
const COMPANY_CNPJ_FIELD: FieldName = FieldName::new("companyCnpj");

#[derive(Debug, Deserialize)]
struct EmployeePath {
    id: String,
}

/// Request payload for hiring or updating an employee.
///
/// `companyCnpj` is required on create and rejected on update; employees
/// cannot change company.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRequest {
    #[schema(example = "12345678901")]
    pub cpf: Option<String>,
    #[schema(example = "João")]
    pub name: Option<String>,
    #[schema(example = "Da Silva")]
    pub surname: Option<String>,
    #[schema(example = "meu-email@exemplo.com")]
    pub email: Option<String>,
    #[schema(example = 1200.0)]
    pub salary: Option<f64>,
    #[schema(example = "Engenheiro")]
    pub position: Option<String>,
    #[schema(example = "1234567890123")]
    pub company_cnpj: Option<String>,
}

/// Request payload for replacing an employee's email address.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmailUpdateRequest {
    #[schema(example = "novo-email@exemplo.com")]
    pub email: Option<String>,
}

/// Response payload for an employee.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponse {
    pub id: String,
    pub cpf: String,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub salary: f64,
    pub position: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,
}

impl From<Employee> for EmployeeResponse {
    fn from(value: Employee) -> Self {
        Self {
            id: value.id.to_string(),
            cpf: value.cpf.into(),
            name: value.name.into(),
            surname: value.surname.into(),
            email: value.email.into(),
            salary: value.salary.amount(),
            position: value.position.into(),
            company_id: value.company_id.map(|id| id.to_string()),
        }
    }
}

fn parse_employee_id(raw: String) -> Result<EmployeeId, Error> {
    parse_uuid(raw, FieldName::new("id")).map(EmployeeId::from_uuid)
}

fn parse_new_employee(payload: EmployeeRequest) -> Result<NewEmployee, Error> {
    let cpf = require(payload.cpf, CPF_FIELD)?;
    let name = require(payload.name, NAME_FIELD)?;
    let surname = require(payload.surname, SURNAME_FIELD)?;
    let email = require(payload.email, EMAIL_FIELD)?;
    let salary = require(payload.salary, SALARY_FIELD)?;
    let position = require(payload.position, POSITION_FIELD)?;
    let company_cnpj = require(payload.company_cnpj, COMPANY_CNPJ_FIELD)?;

    Ok(NewEmployee {
        cpf: parse_field(cpf, CPF_FIELD, Cpf::new)?,
        name: parse_field(name, NAME_FIELD, PersonName::new)?,
        surname: parse_field(surname, SURNAME_FIELD, PersonName::new)?,
        email: parse_field(email, EMAIL_FIELD, Email::new)?,
        salary: parse_field(salary, SALARY_FIELD, Salary::new)?,
        position: parse_field(position, POSITION_FIELD, JobPosition::new)?,
        company_cnpj: parse_field(company_cnpj, COMPANY_CNPJ_FIELD, Cnpj::new)?,
    })
}

fn parse_employee_patch(payload: EmployeeRequest) -> Result<EmployeePatch, Error> {
    if payload.company_cnpj.is_some() {
        return Err(immutable_field_error(COMPANY_CNPJ_FIELD));
    }
    Ok(EmployeePatch {
        cpf: parse_optional_field(payload.cpf, CPF_FIELD, Cpf::new)?,
        name: parse_optional_field(payload.name, NAME_FIELD, PersonName::new)?,
        surname: parse_optional_field(payload.surname, SURNAME_FIELD, PersonName::new)?,
        email: parse_optional_field(payload.email, EMAIL_FIELD, Email::new)?,
        salary: parse_optional_field(payload.salary, SALARY_FIELD, Salary::new)?,
        position: parse_optional_field(payload.position, POSITION_FIELD, JobPosition::new)?,
    })
}

/// Fetch a single employee.
#[utoipa::path(
    get,
    path = "/v1/employee/{id}",
    params(("id" = String, Path, description = "Employee identifier (UUID)")),
    responses(
        (status = 200, description = "Employee", body = EmployeeResponse),
        (status = 400, description = "Invalid identifier", body = ErrorSchema),
        (status = 404, description = "Employee not found", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "getEmployee"
)]
#[get("/employee/{id}")]
pub async fn get_employee(
    state: web::Data<HttpState>,
    path: web::Path<EmployeePath>,
) -> ApiResult<web::Json<EmployeeResponse>> {
    let id = parse_employee_id(path.into_inner().id)?;
    let employee = state.employees_query.find_by_id(&id).await?;
    Ok(web::Json(EmployeeResponse::from(employee)))
}

/// List employees one page at a time.
#[utoipa::path(
    get,
    path = "/v1/employee",
    params(
        ("page" = Option<i64>, Query, description = "Zero-based page index, default 0"),
        ("size" = Option<i64>, Query, description = "Page size, default 10, max 100")
    ),
    responses(
        (status = 200, description = "Page of employees", body = EmployeePageSchema),
        (status = 400, description = "Invalid page parameters", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "listEmployees"
)]
#[get("/employee")]
pub async fn list_employees(
    state: web::Data<HttpState>,
    query: web::Query<PageQuery>,
) -> ApiResult<web::Json<Page<EmployeeResponse>>> {
    let request = parse_page_request(query.into_inner())?;
    let page = state.employees_query.find_page(request).await?;
    Ok(web::Json(page.map(EmployeeResponse::from)))
}

/// Hire an employee into the company holding `companyCnpj`.
#[utoipa::path(
    post,
    path = "/v1/employee",
    request_body = EmployeeRequest,
    responses(
        (
            status = 201,
            description = "Employee created",
            headers(("Location" = String, description = "URI of the new employee")),
            body = EmployeeResponse
        ),
        (
            status = 400,
            description = "Invalid request, duplicate CPF, or unknown company",
            body = ErrorSchema
        ),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "createEmployee"
)]
#[post("/employee")]
pub async fn create_employee(
    state: web::Data<HttpState>,
    payload: web::Json<EmployeeRequest>,
) -> ApiResult<HttpResponse> {
    let employee = parse_new_employee(payload.into_inner())?;
    let created = state.employees.create(employee).await?;
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/v1/employee/{}", created.id)))
        .json(EmployeeResponse::from(created)))
}

/// Update the fields present in the payload.
#[utoipa::path(
    put,
    path = "/v1/employee/{id}",
    params(("id" = String, Path, description = "Employee identifier (UUID)")),
    request_body = EmployeeRequest,
    responses(
        (status = 200, description = "Updated employee", body = EmployeeResponse),
        (
            status = 400,
            description = "Invalid request, duplicate CPF, or companyCnpj supplied",
            body = ErrorSchema
        ),
        (status = 404, description = "Employee not found", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "updateEmployee"
)]
#[put("/employee/{id}")]
pub async fn update_employee(
    state: web::Data<HttpState>,
    path: web::Path<EmployeePath>,
    payload: web::Json<EmployeeRequest>,
) -> ApiResult<web::Json<EmployeeResponse>> {
    let id = parse_employee_id(path.into_inner().id)?;
    let patch = parse_employee_patch(payload.into_inner())?;
    let employee = state.employees.update(&id, patch).await?;
    Ok(web::Json(EmployeeResponse::from(employee)))
}

/// Replace an employee's email address.
#[utoipa::path(
    put,
    path = "/v1/employee/email/update/{id}",
    params(("id" = String, Path, description = "Employee identifier (UUID)")),
    request_body = EmailUpdateRequest,
    responses(
        (status = 200, description = "Updated employee", body = EmployeeResponse),
        (status = 400, description = "Invalid email", body = ErrorSchema),
        (status = 404, description = "Employee not found", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "updateEmployeeEmail"
)]
#[put("/employee/email/update/{id}")]
pub async fn update_employee_email(
    state: web::Data<HttpState>,
    path: web::Path<EmployeePath>,
    payload: web::Json<EmailUpdateRequest>,
) -> ApiResult<web::Json<EmployeeResponse>> {
    let id = parse_employee_id(path.into_inner().id)?;
    let email = require(payload.into_inner().email, EMAIL_FIELD)?;
    let email = parse_field(email, EMAIL_FIELD, Email::new)?;
    let employee = state.employees.update_email(&id, email).await?;
    Ok(web::Json(EmployeeResponse::from(employee)))
}

/// Delete an employee.
#[utoipa::path(
    delete,
    path = "/v1/employee/{id}",
    params(("id" = String, Path, description = "Employee identifier (UUID)")),
    responses(
        (status = 204, description = "Employee deleted"),
        (status = 400, description = "Invalid identifier", body = ErrorSchema),
        (status = 404, description = "Employee not found", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "deleteEmployee"
)]
#[delete("/employee/{id}")]
pub async fn delete_employee(
    state: web::Data<HttpState>,
    path: web::Path<EmployeePath>,
) -> ApiResult<HttpResponse> {
    let id = parse_employee_id(path.into_inner().id)?;
    state.employees.delete(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "employees_tests.rs"]
mod tests;
