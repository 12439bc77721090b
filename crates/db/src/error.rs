//! Translation of sqlx errors into domain errors.
//!
//! Repositories return raw `sqlx::Error` and let the API layer classify
//! it. The copy store works in terms of [`CoreError`], so it converts here.

use curricula_core::error::CoreError;

/// PostgreSQL `unique_violation`.
pub const UNIQUE_VIOLATION: &str = "23505";

/// PostgreSQL `foreign_key_violation`.
pub const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Name of the unique constraint on `curricula (major_id, code)`.
pub const CURRICULUM_CODE_CONSTRAINT: &str = "uq_curricula_major_code";

/// Whether `err` is a unique violation on a `uq_*` constraint. Returns the
/// constraint name when it is.
pub fn unique_violation(err: &sqlx::Error) -> Option<&str> {
    match err {
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) => {
            db_err.constraint().filter(|c| c.starts_with("uq_"))
        }
        _ => None,
    }
}

/// Convert a sqlx error into a [`CoreError`].
///
/// Unique violations become `Conflict`; everything else is `Internal`.
pub fn to_core_error(err: sqlx::Error) -> CoreError {
    if let Some(constraint) = unique_violation(&err) {
        return CoreError::Conflict(format!(
            "Duplicate value violates unique constraint: {constraint}"
        ));
    }
    CoreError::Internal(err.to_string())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn row_not_found_is_internal() {
        assert_matches!(to_core_error(sqlx::Error::RowNotFound), CoreError::Internal(_));
    }

    #[test]
    fn pool_timeout_is_not_a_unique_violation() {
        assert!(unique_violation(&sqlx::Error::PoolTimedOut).is_none());
    }
}
