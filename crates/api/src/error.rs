//! HTTP error mapping for the api crate.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use db::DbError;
use serde_json::json;
use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The update/delete target does not exist.
    #[error("Records not found")]
    NotFound,

    /// A read query failed.
    #[error("read failed: {0}")]
    Read(#[source] DbError),

    /// An insert, update, or delete failed.
    #[error("write failed: {0}")]
    Write(#[source] DbError),
}

impl ApiError {
    pub fn read(err: DbError) -> Self {
        Self::Read(err)
    }

    pub fn write(err: DbError) -> Self {
        Self::Write(err)
    }
}

/// Human-readable message for a failed write.
pub fn write_message(err: &DbError) -> &'static str {
    match err {
        DbError::Duplicate(_) => "Another record with that value exists",
        DbError::InvalidReference(_) => "The referenced record does not exist",
        _ => "We ran into an error",
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                json!({ "message": "Records not found" }),
            ),
            ApiError::Read(e) => {
                tracing::error!("Read error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": e.to_string() }),
                )
            }
            ApiError::Write(e) => {
                tracing::error!("Write error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "message": write_message(e), "error": e.to_string() }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_gets_its_own_message() {
        let err = DbError::Duplicate("UNIQUE constraint failed: cohorts.cohort".into());
        assert_eq!(write_message(&err), "Another record with that value exists");
    }

    #[test]
    fn other_failures_get_default_message() {
        let err = DbError::Sqlx(db::sqlx::Error::RowNotFound);
        assert_eq!(write_message(&err), "We ran into an error");
    }

    #[test]
    fn status_codes() {
        assert_eq!(
            ApiError::NotFound.into_response().status(),
            StatusCode::NOT_FOUND
        );
        let err = ApiError::write(DbError::Duplicate("dup".into()));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
