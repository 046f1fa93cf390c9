//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Registered companies.
    companies (id) {
        id -> Uuid,
        /// Unique 13-digit company tax identifier.
        cnpj -> Varchar,
        name -> Varchar,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Employees, each optionally attached to a company.
    ///
    /// Rows are removed by `ON DELETE CASCADE` when their company is deleted.
    employees (id) {
        id -> Uuid,
        /// Unique 11-digit personal tax identifier.
        cpf -> Varchar,
        name -> Varchar,
        surname -> Varchar,
        email -> Varchar,
        salary -> Float8,
        position -> Varchar,
        company_id -> Nullable<Uuid>,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::joinable!(employees -> companies (company_id));

diesel::allow_tables_to_appear_in_same_query!(companies, employees);
