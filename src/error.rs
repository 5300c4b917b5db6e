//! API error taxonomy.
//!
//! Validation and not-found messages travel verbatim to the caller; store
//! and relay failures are logged server-side and reported with an opaque
//! per-operation message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Upstream(String),

    #[error("Error interno del servidor")]
    Internal,
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Logs the cause, keeps only the public message.
    pub fn upstream(public: &str, cause: impl std::fmt::Display) -> Self {
        tracing::error!(error = %cause, "{public}");
        Self::Upstream(public.to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Upstream(_) | Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<crate::domain::product::ProductError> for ApiError {
    fn from(err: crate::domain::product::ProductError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<crate::domain::order::OrderValidationError> for ApiError {
    fn from(err: crate::domain::order::OrderValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
