//! Application error type and its HTTP mapping.
//!
//! Every failure is rendered as `{"status": "failure", "message": "..."}`.
//! Store failures and other internal errors are logged and replaced by a
//! generic message so that database details never reach the client.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Message returned for every error that must not leak internals.
const INTERNAL_MESSAGE: &str = "Internal error";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Caller supplied a missing or malformed URL.
    #[error("{0}")]
    InvalidInput(String),

    /// No active record matches the requested code.
    #[error("{0}")]
    NotFound(String),

    /// Every candidate code collided with an existing active record.
    #[error("Could not generate unique code")]
    AllocationExhausted { attempts: usize },

    /// The store rejected an insert because the short code already exists.
    #[error("Unique constraint violation ({})", .constraint.as_deref().unwrap_or("unknown"))]
    UniquenessViolation { constraint: Option<String> },

    #[error("Database error: {0}")]
    Store(#[source] sqlx::Error),

    #[error("{0}")]
    Internal(String),
}

/// Failure payload shared by all error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub status: &'static str,
    pub message: String,
}

impl AppError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// HTTP status code this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::AllocationExhausted { .. }
            | AppError::UniquenessViolation { .. }
            | AppError::Store(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message that is safe to show to the client.
    pub fn public_message(&self) -> String {
        match self {
            AppError::InvalidInput(_)
            | AppError::NotFound(_)
            | AppError::AllocationExhausted { .. } => self.to_string(),
            AppError::UniquenessViolation { .. } | AppError::Store(_) | AppError::Internal(_) => {
                INTERNAL_MESSAGE.to_string()
            }
        }
    }

    pub fn to_error_body(&self) -> ErrorBody {
        ErrorBody {
            status: "failure",
            message: self.public_message(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, "Request rejected");
        }

        (status, Json(self.to_error_body())).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            return AppError::UniquenessViolation {
                constraint: db.constraint().map(str::to_owned),
            };
        }

        AppError::Store(e)
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| "Invalid request".to_string());

        AppError::InvalidInput(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::invalid_input("Invalid URL").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::not_found("URL not found").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::AllocationExhausted { attempts: 5 }.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::UniquenessViolation { constraint: None }.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_public_message_hides_store_details() {
        let err = AppError::Store(sqlx::Error::PoolTimedOut);
        assert_eq!(err.public_message(), "Internal error");

        let err = AppError::UniquenessViolation {
            constraint: Some("urls_short_code_key".to_string()),
        };
        assert_eq!(err.public_message(), "Internal error");
        assert!(err.to_string().contains("urls_short_code_key"));

        let err = AppError::internal("connection reset by peer");
        assert_eq!(err.public_message(), "Internal error");
    }

    #[test]
    fn test_public_message_keeps_client_errors() {
        assert_eq!(
            AppError::invalid_input("Invalid URL").public_message(),
            "Invalid URL"
        );
        assert_eq!(
            AppError::AllocationExhausted { attempts: 5 }.public_message(),
            "Could not generate unique code"
        );
    }

    #[test]
    fn test_error_body_shape() {
        let body =
            serde_json::to_value(AppError::not_found("URL not found").to_error_body()).unwrap();

        assert_eq!(
            body,
            serde_json::json!({ "status": "failure", "message": "URL not found" })
        );
    }

    #[test]
    fn test_non_database_sqlx_error_maps_to_store() {
        let err = AppError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, AppError::Store(_)));
    }

    #[test]
    fn test_into_response_status() {
        let response = AppError::invalid_input("Invalid URL").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
