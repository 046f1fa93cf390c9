//! Tests for company HTTP handlers.

use super::*;
use crate::domain::ports::{FIXTURE_COMPANY_ID, MockCompanyCommand};
use crate::inbound::http::state::HttpStatePorts;
use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use rstest::rstest;
use serde_json::{Value, json};
use std::sync::Arc;

fn app_with_state(
    state: HttpState,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new().app_data(web::Data::new(state)).service(
        web::scope("/v1")
            .service(list_companies)
            .service(get_company)
            .service(create_company)
            .service(update_company)
            .service(delete_company),
    )
}

fn fixture_state() -> HttpState {
    HttpState::new(HttpStatePorts::default())
}

async fn error_details(response: actix_web::dev::ServiceResponse) -> Value {
    let body: Value = actix_test::read_body_json(response).await;
    body.get("details").cloned().expect("details present")
}

#[actix_web::test]
async fn get_company_returns_fixture() {
    let app = actix_test::init_service(app_with_state(fixture_state())).await;
    let request = actix_test::TestRequest::get()
        .uri(&format!("/v1/company/{FIXTURE_COMPANY_ID}"))
        .to_request();

    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: CompanyResponse = actix_test::read_body_json(response).await;
    assert_eq!(body.id, FIXTURE_COMPANY_ID.to_string());
    assert_eq!(body.cnpj, "1234567890123");
    assert_eq!(body.employee_count, 1);
}

#[actix_web::test]
async fn get_company_reports_unknown_id() {
    let app = actix_test::init_service(app_with_state(fixture_state())).await;
    let request = actix_test::TestRequest::get()
        .uri("/v1/company/00000000-0000-0000-0000-000000000001")
        .to_request();

    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn malformed_id_is_bad_request() {
    let app = actix_test::init_service(app_with_state(fixture_state())).await;
    let request = actix_test::TestRequest::delete()
        .uri("/v1/company/not-a-uuid")
        .to_request();

    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let details = error_details(response).await;
    assert_eq!(details["field"], "id");
    assert_eq!(details["code"], "invalid_uuid");
}

#[actix_web::test]
async fn list_companies_returns_camel_case_page() {
    let app = actix_test::init_service(app_with_state(fixture_state())).await;
    let request = actix_test::TestRequest::get()
        .uri("/v1/company?page=0&size=5")
        .to_request();

    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["pageNumber"], 0);
    assert_eq!(body["pageSize"], 5);
    assert_eq!(body["totalElements"], 1);
    assert_eq!(body["totalPages"], 1);
    assert_eq!(body["content"][0]["employeeCount"], 1);
}

#[rstest]
#[case("/v1/company?page=-1", "page")]
#[case("/v1/company?size=0", "size")]
#[case("/v1/company?size=500", "size")]
#[case("/v1/company?page=first", "page")]
#[actix_web::test]
async fn list_companies_rejects_bad_page_parameters(#[case] uri: &str, #[case] field: &str) {
    let app = actix_test::init_service(app_with_state(fixture_state())).await;
    let request = actix_test::TestRequest::get().uri(uri).to_request();

    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let details = error_details(response).await;
    assert_eq!(details["field"], field);
}

#[actix_web::test]
async fn create_company_returns_created_with_location() {
    let app = actix_test::init_service(app_with_state(fixture_state())).await;
    let request = actix_test::TestRequest::post()
        .uri("/v1/company")
        .set_json(json!({"cnpj": "9876543210987", "nameCompany": "Nova Empresa"}))
        .to_request();

    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let location = response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
        .expect("location header");
    let body: CompanyResponse = actix_test::read_body_json(response).await;
    assert_eq!(location, format!("/v1/company/{}", body.id));
    assert_eq!(body.name_company, "Nova Empresa");
    assert_eq!(body.employee_count, 0);
}

#[rstest]
#[case(json!({"nameCompany": "Sem CNPJ"}), "cnpj", "missing_field")]
#[case(json!({"cnpj": "123", "nameCompany": "Curto"}), "cnpj", "invalid_length")]
#[case(json!({"cnpj": "12345678901ab", "nameCompany": "Letras"}), "cnpj", "non_digit")]
#[case(json!({"cnpj": "1234567890123", "nameCompany": "   "}), "nameCompany", "blank")]
#[case(json!({"cnpj": "1234567890123", "name": "Sem chave"}), "nameCompany", "missing_field")]
#[actix_web::test]
async fn create_company_validates_payload(
    #[case] payload: Value,
    #[case] field: &str,
    #[case] code: &str,
) {
    let app = actix_test::init_service(app_with_state(fixture_state())).await;
    let request = actix_test::TestRequest::post()
        .uri("/v1/company")
        .set_json(payload)
        .to_request();

    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let details = error_details(response).await;
    assert_eq!(details["field"], field);
    assert_eq!(details["code"], code);
}

#[actix_web::test]
async fn update_company_forwards_only_present_fields() {
    let mut command = MockCompanyCommand::new();
    command
        .expect_update()
        .withf(|id, patch| {
            id.as_uuid() == &FIXTURE_COMPANY_ID
                && patch.cnpj.is_none()
                && patch.name == CompanyName::new("Renomeada").ok()
        })
        .times(1)
        .return_once(|id, patch| {
            let mut company = Company::new(
                *id,
                Cnpj::new("1234567890123").expect("valid cnpj"),
                CompanyName::new("Kronos Tecnologia").expect("valid name"),
            );
            company.apply(patch);
            Ok(company)
        });
    let state = HttpState::new(HttpStatePorts {
        companies: Arc::new(command),
        ..HttpStatePorts::default()
    });
    let app = actix_test::init_service(app_with_state(state)).await;
    let request = actix_test::TestRequest::put()
        .uri(&format!("/v1/company/{FIXTURE_COMPANY_ID}"))
        .set_json(json!({"nameCompany": "Renomeada"}))
        .to_request();

    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: CompanyResponse = actix_test::read_body_json(response).await;
    assert_eq!(body.name_company, "Renomeada");
    assert_eq!(body.cnpj, "1234567890123");
}

#[actix_web::test]
async fn update_company_maps_duplicate_cnpj_to_bad_request() {
    let mut command = MockCompanyCommand::new();
    command
        .expect_update()
        .times(1)
        .return_once(|_, _| Err(Error::invalid_request("cnpj already registered")));
    let state = HttpState::new(HttpStatePorts {
        companies: Arc::new(command),
        ..HttpStatePorts::default()
    });
    let app = actix_test::init_service(app_with_state(state)).await;
    let request = actix_test::TestRequest::put()
        .uri(&format!("/v1/company/{FIXTURE_COMPANY_ID}"))
        .set_json(json!({"cnpj": "9999999999999"}))
        .to_request();

    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn delete_company_returns_no_content() {
    let app = actix_test::init_service(app_with_state(fixture_state())).await;
    let request = actix_test::TestRequest::delete()
        .uri(&format!("/v1/company/{FIXTURE_COMPANY_ID}"))
        .to_request();

    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[actix_web::test]
async fn delete_company_reports_missing_company() {
    let mut command = MockCompanyCommand::new();
    command
        .expect_delete()
        .times(1)
        .return_once(|_| Err(Error::not_found("company not found")));
    let state = HttpState::new(HttpStatePorts {
        companies: Arc::new(command),
        ..HttpStatePorts::default()
    });
    let app = actix_test::init_service(app_with_state(state)).await;
    let request = actix_test::TestRequest::delete()
        .uri(&format!("/v1/company/{FIXTURE_COMPANY_ID}"))
        .to_request();

    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
