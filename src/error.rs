//! Application error type and its HTTP representation.
//!
//! Every failure that leaves the core carries a distinguishing kind so the
//! boundary layer can map it to an appropriate response:
//!
//! | Variant              | Status | `code`                   |
//! |----------------------|--------|--------------------------|
//! | `Validation`         | 400    | `validation_error`       |
//! | `NotFound`           | 404    | `not_found`              |
//! | `GenerationFailed`   | 500    | `code_generation_failed` |
//! | `Unavailable`        | 503    | `store_unavailable`      |
//! | `Internal`           | 500    | `internal_error`         |
//!
//! Short code collisions are not errors: the store reports them as
//! [`crate::domain::repositories::InsertOutcome::Collision`] and the allocator
//! retries locally.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Serializable error payload: `{"code", "message", "details"}`.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },

    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// The allocator ran out of attempts to find a free short code.
    #[error("{message}")]
    GenerationFailed { message: String, details: Value },

    /// The mapping store could not be reached.
    #[error("{message}")]
    Unavailable { message: String, details: Value },

    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn generation_failed(message: impl Into<String>, details: Value) -> Self {
        Self::GenerationFailed {
            message: message.into(),
            details,
        }
    }

    pub fn unavailable(message: impl Into<String>, details: Value) -> Self {
        Self::Unavailable {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// HTTP status for this error kind.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::GenerationFailed { .. } | AppError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Unavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation { .. } => "validation_error",
            AppError::NotFound { .. } => "not_found",
            AppError::GenerationFailed { .. } => "code_generation_failed",
            AppError::Unavailable { .. } => "store_unavailable",
            AppError::Internal { .. } => "internal_error",
        }
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        let (message, details) = match self {
            AppError::Validation { message, details }
            | AppError::NotFound { message, details }
            | AppError::GenerationFailed { message, details }
            | AppError::Unavailable { message, details }
            | AppError::Internal { message, details } => (message.clone(), details.clone()),
        };

        ErrorInfo {
            code: self.code(),
            message,
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(code = self.code(), "{}", self);
        }

        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let fields: Vec<Value> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| {
                    json!({
                        "field": field,
                        "code": e.code,
                        "message": e.message,
                    })
                })
            })
            .collect();

        AppError::bad_request("Validation failed", json!({ "fields": fields }))
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_) => {
                AppError::unavailable("Mapping store unavailable", json!({ "reason": e.to_string() }))
            }
            _ => AppError::internal("Database error", json!({})),
        }
    }
}
