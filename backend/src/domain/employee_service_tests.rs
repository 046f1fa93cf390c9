//! Tests for the employee service.

use std::sync::Arc;

use rstest::{fixture, rstest};

use super::*;
use crate::domain::ports::{
    CompanyRepositoryError, FixtureCompanyRepository, FixtureEmployeeRepository,
    MockCompanyRepository, MockEmployeeRepository,
};
use crate::domain::{
    Cnpj, Company, CompanyId, CompanyName, ErrorCode, JobPosition, NewCompany, PersonName,
    Salary,
};

type Service = EmployeeService<MockEmployeeRepository, MockCompanyRepository>;

fn make_service(employees: MockEmployeeRepository, companies: MockCompanyRepository) -> Service {
    EmployeeService::new(Arc::new(employees), Arc::new(companies))
}

fn cpf(value: &str) -> Cpf {
    Cpf::new(value).expect("valid cpf")
}

fn company() -> Company {
    NewCompany {
        cnpj: Cnpj::new("1234567890123").expect("valid cnpj"),
        name: CompanyName::new("Kronos").expect("valid name"),
    }
    .into_company(CompanyId::random())
}

#[fixture]
fn new_employee() -> NewEmployee {
    NewEmployee {
        cpf: cpf("12345678901"),
        name: PersonName::new("João").expect("valid name"),
        surname: PersonName::new("Da Silva").expect("valid surname"),
        email: Email::new("joao@exemplo.com").expect("valid email"),
        salary: Salary::new(1200.0).expect("valid salary"),
        position: JobPosition::new("Engenheiro").expect("valid position"),
        company_cnpj: Cnpj::new("1234567890123").expect("valid cnpj"),
    }
}

#[fixture]
fn stored_employee(new_employee: NewEmployee) -> Employee {
    new_employee.into_employee(EmployeeId::random(), CompanyId::random())
}

#[rstest]
#[tokio::test]
async fn create_ties_employee_to_company_found_by_cnpj(new_employee: NewEmployee) {
    let employer = company();
    let employer_id = employer.id();
    let mut employees = MockEmployeeRepository::new();
    employees
        .expect_find_by_cpf()
        .times(1)
        .return_once(|_| Ok(None));
    employees
        .expect_insert()
        .withf(move |employee| employee.company_id == Some(employer_id))
        .times(1)
        .return_once(|_| Ok(()));
    let mut companies = MockCompanyRepository::new();
    companies
        .expect_find_by_cnpj()
        .withf(|cnpj| cnpj.as_ref() == "1234567890123")
        .times(1)
        .return_once(move |_| Ok(Some(employer)));

    let service = make_service(employees, companies);
    let employee = service.create(new_employee).await.expect("create succeeds");

    assert_eq!(employee.company_id, Some(employer_id));
    assert_eq!(employee.cpf.as_ref(), "12345678901");
}

#[rstest]
#[tokio::test]
async fn create_rejects_registered_cpf(new_employee: NewEmployee, stored_employee: Employee) {
    let mut employees = MockEmployeeRepository::new();
    employees
        .expect_find_by_cpf()
        .times(1)
        .return_once(move |_| Ok(Some(stored_employee)));
    employees.expect_insert().never();
    let mut companies = MockCompanyRepository::new();
    companies.expect_find_by_cnpj().never();

    let service = make_service(employees, companies);
    let error = service.create(new_employee).await.expect_err("duplicate");

    assert_eq!(error.code(), ErrorCode::InvalidRequest);
    let details = error.details().expect("details present");
    assert_eq!(details["field"], "cpf");
    assert_eq!(details["code"], "duplicate");
}

#[rstest]
#[tokio::test]
async fn create_rejects_unknown_company(new_employee: NewEmployee) {
    let service = EmployeeService::new(
        Arc::new(FixtureEmployeeRepository),
        Arc::new(FixtureCompanyRepository),
    );
    let error = service
        .create(new_employee)
        .await
        .expect_err("unknown company");

    assert_eq!(error.code(), ErrorCode::InvalidRequest);
    assert_eq!(error.message(), "company not found");
}

#[rstest]
#[tokio::test]
async fn create_maps_company_lookup_failure(new_employee: NewEmployee) {
    let mut employees = MockEmployeeRepository::new();
    employees
        .expect_find_by_cpf()
        .times(1)
        .return_once(|_| Ok(None));
    let mut companies = MockCompanyRepository::new();
    companies
        .expect_find_by_cnpj()
        .times(1)
        .return_once(|_| Err(CompanyRepositoryError::connection("refused")));

    let service = make_service(employees, companies);
    let error = service.create(new_employee).await.expect_err("unavailable");

    assert_eq!(error.code(), ErrorCode::ServiceUnavailable);
}

#[rstest]
#[tokio::test]
async fn create_maps_vanished_company_to_invalid_request(new_employee: NewEmployee) {
    let mut employees = MockEmployeeRepository::new();
    employees
        .expect_find_by_cpf()
        .times(1)
        .return_once(|_| Ok(None));
    employees
        .expect_insert()
        .times(1)
        .return_once(|employee| {
            let company_id = employee
                .company_id
                .map(|id| id.to_string())
                .unwrap_or_default();
            Err(EmployeeRepositoryError::missing_company(company_id))
        });
    let mut companies = MockCompanyRepository::new();
    companies
        .expect_find_by_cnpj()
        .times(1)
        .return_once(|_| Ok(Some(company())));

    let service = make_service(employees, companies);
    let error = service.create(new_employee).await.expect_err("missing company");

    assert_eq!(error.code(), ErrorCode::InvalidRequest);
}

#[rstest]
#[tokio::test]
async fn update_merges_present_fields(stored_employee: Employee) {
    let id = stored_employee.id;
    let original = stored_employee.clone();
    let mut employees = MockEmployeeRepository::new();
    employees
        .expect_find_by_id()
        .times(1)
        .return_once(move |_| Ok(Some(stored_employee)));
    employees.expect_find_by_cpf().never();
    employees.expect_update().times(1).return_once(|_| Ok(true));

    let service = make_service(employees, MockCompanyRepository::new());
    let patch = EmployeePatch {
        salary: Some(Salary::new(2500.0).expect("valid salary")),
        position: Some(JobPosition::new("Gerente").expect("valid position")),
        ..EmployeePatch::default()
    };
    let employee = service.update(&id, patch).await.expect("update succeeds");

    assert_eq!(employee.salary.amount(), 2500.0);
    assert_eq!(employee.position.as_ref(), "Gerente");
    assert_eq!(employee.name, original.name);
    assert_eq!(employee.email, original.email);
    assert_eq!(employee.company_id, original.company_id);
}

#[rstest]
#[tokio::test]
async fn update_rejects_cpf_held_by_another_employee(stored_employee: Employee) {
    let id = stored_employee.id;
    let mut other = stored_employee.clone();
    other.id = EmployeeId::random();
    other.cpf = cpf("99999999999");
    let mut employees = MockEmployeeRepository::new();
    employees
        .expect_find_by_id()
        .times(1)
        .return_once(move |_| Ok(Some(stored_employee)));
    employees
        .expect_find_by_cpf()
        .times(1)
        .return_once(move |_| Ok(Some(other)));
    employees.expect_update().never();

    let service = make_service(employees, MockCompanyRepository::new());
    let patch = EmployeePatch {
        cpf: Some(cpf("99999999999")),
        ..EmployeePatch::default()
    };
    let error = service.update(&id, patch).await.expect_err("duplicate");

    assert_eq!(error.code(), ErrorCode::InvalidRequest);
}

#[tokio::test]
async fn update_reports_missing_employee() {
    let service = EmployeeService::new(
        Arc::new(FixtureEmployeeRepository),
        Arc::new(FixtureCompanyRepository),
    );
    let error = service
        .update(&EmployeeId::random(), EmployeePatch::default())
        .await
        .expect_err("missing employee");

    assert_eq!(error.code(), ErrorCode::NotFound);
    assert_eq!(error.message(), "employee not found");
}

#[rstest]
#[tokio::test]
async fn update_email_replaces_only_email(stored_employee: Employee) {
    let id = stored_employee.id;
    let original = stored_employee.clone();
    let mut employees = MockEmployeeRepository::new();
    employees
        .expect_find_by_id()
        .times(1)
        .return_once(move |_| Ok(Some(stored_employee)));
    employees
        .expect_update()
        .withf(|employee| employee.email.as_ref() == "novo@exemplo.com")
        .times(1)
        .return_once(|_| Ok(true));

    let service = make_service(employees, MockCompanyRepository::new());
    let email = Email::new("novo@exemplo.com").expect("valid email");
    let employee = service
        .update_email(&id, email)
        .await
        .expect("update succeeds");

    assert_eq!(employee.email.as_ref(), "novo@exemplo.com");
    assert_eq!(employee.cpf, original.cpf);
    assert_eq!(employee.salary, original.salary);
}

#[rstest]
#[tokio::test]
async fn update_reports_row_removed_concurrently(stored_employee: Employee) {
    let id = stored_employee.id;
    let mut employees = MockEmployeeRepository::new();
    employees
        .expect_find_by_id()
        .times(1)
        .return_once(move |_| Ok(Some(stored_employee)));
    employees.expect_update().times(1).return_once(|_| Ok(false));

    let service = make_service(employees, MockCompanyRepository::new());
    let email = Email::new("novo@exemplo.com").expect("valid email");
    let error = service
        .update_email(&id, email)
        .await
        .expect_err("row vanished");

    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn find_page_reports_totals(stored_employee: Employee) {
    let mut employees = MockEmployeeRepository::new();
    employees
        .expect_list()
        .times(1)
        .return_once(move |_| Ok(vec![stored_employee]));
    employees.expect_count().times(1).return_once(|| Ok(21));

    let service = make_service(employees, MockCompanyRepository::new());
    let page = service
        .find_page(PageRequest::default())
        .await
        .expect("page");

    assert_eq!(page.content().len(), 1);
    assert_eq!(page.total_elements(), 21);
    assert_eq!(page.total_pages(), 3);
}

#[tokio::test]
async fn delete_reports_missing_employee() {
    let service = EmployeeService::new(
        Arc::new(FixtureEmployeeRepository),
        Arc::new(FixtureCompanyRepository),
    );
    let error = service
        .delete(&EmployeeId::random())
        .await
        .expect_err("missing employee");

    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[tokio::test]
async fn query_failure_maps_to_internal_error() {
    let mut employees = MockEmployeeRepository::new();
    employees
        .expect_find_by_id()
        .times(1)
        .return_once(|_| Err(EmployeeRepositoryError::query("broken")));

    let service = make_service(employees, MockCompanyRepository::new());
    let error = service
        .find_by_id(&EmployeeId::random())
        .await
        .expect_err("query failure");

    assert_eq!(error.code(), ErrorCode::InternalError);
}
