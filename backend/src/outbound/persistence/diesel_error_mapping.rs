//! Shared Diesel error classification for the company and employee adapters.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use super::pool::PoolError;

/// Repository-agnostic outcome of a failed Diesel operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DieselFailure {
    Connection(&'static str),
    Query(&'static str),
    UniqueViolation,
    ForeignKeyViolation,
}

/// Extract a readable message from a pool error.
pub(crate) fn pool_error_message(error: PoolError) -> String {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    }
}

/// Classify a Diesel error, logging the raw cause at `debug`.
///
/// Raw database messages can echo tax identifiers, so they are logged but
/// never copied into the returned classification.
pub(crate) fn classify_diesel_error(error: DieselError) -> DieselFailure {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(
                ?kind,
                constraint = info.constraint_name(),
                "diesel operation failed"
            );
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => DieselFailure::Query("record not found"),
        DieselError::QueryBuilderError(_) => DieselFailure::Query("database query error"),
        DieselError::DatabaseError(kind, _) => match kind {
            DatabaseErrorKind::UniqueViolation => DieselFailure::UniqueViolation,
            DatabaseErrorKind::ForeignKeyViolation => DieselFailure::ForeignKeyViolation,
            DatabaseErrorKind::ClosedConnection => {
                DieselFailure::Connection("database connection error")
            }
            _ => DieselFailure::Query("database error"),
        },
        _ => DieselFailure::Query("database error"),
    }
}

/// Convert a domain page window into SQL `OFFSET`/`LIMIT` values.
pub(crate) fn page_window(request: pagination::PageRequest) -> (i64, i64) {
    let offset = i64::try_from(request.offset()).unwrap_or(i64::MAX);
    let limit = i64::try_from(request.limit()).unwrap_or(i64::MAX);
    (offset, limit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagination::PageRequest;
    use rstest::rstest;

    fn database_error(kind: DatabaseErrorKind) -> DieselError {
        DieselError::DatabaseError(kind, Box::new(String::from("constraint failed")))
    }

    #[rstest]
    #[case(database_error(DatabaseErrorKind::UniqueViolation), DieselFailure::UniqueViolation)]
    #[case(
        database_error(DatabaseErrorKind::ForeignKeyViolation),
        DieselFailure::ForeignKeyViolation
    )]
    #[case(
        database_error(DatabaseErrorKind::ClosedConnection),
        DieselFailure::Connection("database connection error")
    )]
    #[case(
        database_error(DatabaseErrorKind::CheckViolation),
        DieselFailure::Query("database error")
    )]
    #[case(DieselError::NotFound, DieselFailure::Query("record not found"))]
    fn classifies_diesel_errors(#[case] error: DieselError, #[case] expected: DieselFailure) {
        assert_eq!(classify_diesel_error(error), expected);
    }

    #[rstest]
    fn pool_errors_keep_their_message() {
        assert_eq!(pool_error_message(PoolError::checkout("timed out")), "timed out");
        assert_eq!(pool_error_message(PoolError::build("bad url")), "bad url");
    }

    #[rstest]
    fn page_window_matches_request() {
        let request = PageRequest::new(3, 20).expect("valid request");
        assert_eq!(page_window(request), (60, 20));
    }
}
