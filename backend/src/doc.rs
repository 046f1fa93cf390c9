//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint from the inbound layer plus the
//! schema wrappers from [`crate::inbound::http::schemas`], which keep domain
//! types free of utoipa derives. Swagger UI serves it in debug builds and
//! `cargo run --bin openapi-dump` prints it for external tooling.

use crate::inbound::http::companies::{CompanyRequest, CompanyResponse};
use crate::inbound::http::employees::{EmailUpdateRequest, EmployeeRequest, EmployeeResponse};
use crate::inbound::http::schemas::{
    CompanyPageSchema, EmployeePageSchema, ErrorCodeSchema, ErrorSchema,
};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Kronos API",
        description = "Company and employee management."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::companies::list_companies,
        crate::inbound::http::companies::get_company,
        crate::inbound::http::companies::create_company,
        crate::inbound::http::companies::update_company,
        crate::inbound::http::companies::delete_company,
        crate::inbound::http::employees::list_employees,
        crate::inbound::http::employees::get_employee,
        crate::inbound::http::employees::create_employee,
        crate::inbound::http::employees::update_employee,
        crate::inbound::http::employees::update_employee_email,
        crate::inbound::http::employees::delete_employee,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        CompanyRequest,
        CompanyResponse,
        CompanyPageSchema,
        EmployeeRequest,
        EmailUpdateRequest,
        EmployeeResponse,
        EmployeePageSchema,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "companies", description = "Company registration and maintenance"),
        (name = "employees", description = "Employee records tied to companies"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying the generated document's paths and schema fields.

    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    // utoipa replaces :: with . in schema names
    const ERROR_SCHEMA_NAME: &str = "crate.domain.Error";

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    #[case("/v1/company")]
    #[case("/v1/company/{id}")]
    #[case("/v1/employee")]
    #[case("/v1/employee/{id}")]
    #[case("/v1/employee/email/update/{id}")]
    #[case("/health/ready")]
    #[case("/health/live")]
    fn openapi_registers_path(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing path {path}");
    }

    #[test]
    fn openapi_error_schema_has_required_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let error_schema = schemas.get(ERROR_SCHEMA_NAME).expect("Error schema");

        assert_object_schema_has_field(error_schema, "code");
        assert_object_schema_has_field(error_schema, "message");
        assert_object_schema_has_field(error_schema, "traceId");
    }

    #[test]
    fn openapi_company_response_uses_camel_case() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let company = schemas.get("CompanyResponse").expect("CompanyResponse schema");

        assert_object_schema_has_field(company, "cnpj");
        assert_object_schema_has_field(company, "nameCompany");
        assert_object_schema_has_field(company, "employeeCount");
    }

    #[test]
    fn openapi_company_request_names_the_company_field() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let request = schemas.get("CompanyRequest").expect("CompanyRequest schema");

        assert_object_schema_has_field(request, "cnpj");
        assert_object_schema_has_field(request, "nameCompany");
    }

    #[test]
    fn openapi_employee_request_exposes_company_cnpj() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let request = schemas.get("EmployeeRequest").expect("EmployeeRequest schema");

        assert_object_schema_has_field(request, "companyCnpj");
        assert_object_schema_has_field(request, "salary");
    }
}
