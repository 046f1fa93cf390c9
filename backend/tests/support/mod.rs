//! Shared helpers for the HTTP integration tests.
//!
//! Integration tests compile as separate crates, and the server wiring lives
//! in the binary, so this module rebuilds the `/v1` application from library
//! parts over a fresh in-memory store.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::test::TestRequest;
use actix_web::{App, web};
use kronos::Trace;
use kronos::domain::{CompanyService, EmployeeService};
use kronos::inbound::http::companies::{
    create_company, delete_company, get_company, list_companies, update_company,
};
use kronos::inbound::http::employees::{
    create_employee, delete_employee, get_employee, list_employees, update_employee,
    update_employee_email,
};
use kronos::inbound::http::state::{HttpState, HttpStatePorts};
use kronos::outbound::memory::InMemoryStore;
use serde_json::{Value, json};

/// Build handler state backed by a new, empty in-memory store.
pub fn in_memory_state() -> HttpState {
    let store = InMemoryStore::new();
    let company_repository = Arc::new(store.company_repository());
    let employee_repository = Arc::new(store.employee_repository());
    let companies = Arc::new(CompanyService::new(company_repository.clone()));
    let employees = Arc::new(EmployeeService::new(
        employee_repository,
        company_repository,
    ));

    HttpState::new(HttpStatePorts {
        companies: companies.clone(),
        companies_query: companies,
        employees: employees.clone(),
        employees_query: employees,
    })
}

/// The full `/v1` application wrapped in the trace middleware.
pub fn app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new().app_data(web::Data::new(state)).wrap(Trace).service(
        web::scope("/v1")
            .service(list_companies)
            .service(get_company)
            .service(create_company)
            .service(update_company)
            .service(delete_company)
            .service(list_employees)
            .service(get_employee)
            .service(create_employee)
            .service(update_employee)
            .service(update_employee_email)
            .service(delete_employee),
    )
}

pub fn company_payload(cnpj: &str, name: &str) -> Value {
    json!({ "cnpj": cnpj, "nameCompany": name })
}

pub fn employee_payload(cpf: &str, company_cnpj: &str) -> Value {
    json!({
        "cpf": cpf,
        "name": "João",
        "surname": "Da Silva",
        "email": "meu-email@exemplo.com",
        "salary": 1200.0,
        "position": "Engenheiro",
        "companyCnpj": company_cnpj,
    })
}

pub fn post(uri: &str, payload: Value) -> TestRequest {
    TestRequest::post().uri(uri).set_json(payload)
}

pub fn get(uri: &str) -> TestRequest {
    TestRequest::get().uri(uri)
}
