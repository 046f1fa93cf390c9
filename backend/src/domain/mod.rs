//! Domain primitives, aggregates, and use-case services.
//!
//! Purpose: define the strongly typed company and employee model shared by
//! the HTTP and persistence adapters, plus the services that enforce tax-id
//! uniqueness and partial-update semantics. Validation lives in the value
//! object constructors, so a constructed aggregate is always well formed.
//!
//! Public surface:
//! - Error / ErrorCode: API error payload and stable error identifier.
//! - TraceId: per-request correlation identifier.
//! - Company / Employee: aggregates with their ids, patches, and inputs.
//! - CompanyService / EmployeeService: implementations of the driving ports.

pub mod company;
mod company_service;
pub mod employee;
mod employee_service;
pub mod error;
pub mod ports;
pub mod tax_id;
pub mod trace_id;
pub mod validation;

pub use self::company::{
    COMPANY_NAME_MAX, Company, CompanyId, CompanyName, CompanyPatch, NewCompany,
};
pub use self::company_service::CompanyService;
pub use self::employee::{
    EMAIL_MAX, Email, EmailValidationError, Employee, EmployeeId, EmployeePatch, JobPosition,
    NewEmployee, PERSON_NAME_MAX, POSITION_MAX, PersonName, Salary, SalaryValidationError,
};
pub use self::employee_service::EmployeeService;
pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::tax_id::{CNPJ_LENGTH, CPF_LENGTH, Cnpj, Cpf, TaxIdValidationError};
pub use self::trace_id::TraceId;
pub use self::validation::{FieldViolation, TextValidationError};
