//! Typed error type for the db crate.
//!
//! Constraint violations are classified here from `sqlx::error::ErrorKind`
//! so callers never match on driver-specific result codes.

use sqlx::error::ErrorKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    /// A UNIQUE or PRIMARY KEY constraint rejected the write.
    #[error("duplicate value: {0}")]
    Duplicate(String),

    /// A FOREIGN KEY constraint rejected the write.
    #[error("invalid reference: {0}")]
    InvalidReference(String),

    #[error("sqlx error: {0}")]
    Sqlx(#[source] sqlx::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            match db_err.kind() {
                ErrorKind::UniqueViolation => {
                    return Self::Duplicate(db_err.message().to_string());
                }
                ErrorKind::ForeignKeyViolation => {
                    return Self::InvalidReference(db_err.message().to_string());
                }
                _ => {}
            }
        }
        Self::Sqlx(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_database_errors_stay_generic() {
        let err = DbError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, DbError::Sqlx(sqlx::Error::RowNotFound)));
    }

    #[test]
    fn duplicate_display_mentions_value() {
        let err = DbError::Duplicate("UNIQUE constraint failed: cohorts.cohort".into());
        assert_eq!(
            err.to_string(),
            "duplicate value: UNIQUE constraint failed: cohorts.cohort"
        );
    }
}
