//! Error Types
//!
//! Registry lookups never fail; a missing network is `None` until a use case
//! turns it into `UseCaseError::NotFound`. Everything that reaches the API ends
//! up as `ApiError`, rendered as
//! `{"error": {"code", "message", "details"}, "request_id", "timestamp"}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::domain::models::lookup::ParseNetworkFieldError;
use crate::shared::request_context;

/// Registry rules a request would break
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Network '{0}' is built in and cannot be removed")]
    BuiltinNetwork(String),

    #[error("No network in the registry supports regtest mode")]
    RegtestUnsupported,
}

#[derive(Debug, Error)]
pub enum UseCaseError {
    #[error("Request has {} invalid field(s)", .0.len())]
    Validation(Vec<FieldError>),

    #[error("{resource} '{id}' not found")]
    NotFound { resource: String, id: String },

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl UseCaseError {
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } | Self::Domain(DomainError::RegtestUnsupported) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Domain(DomainError::BuiltinNetwork(_)) => StatusCode::FORBIDDEN,
        }
    }

    /// Stable machine-readable code for the response body
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Conflict(_) => "CONFLICT",
            Self::Domain(DomainError::BuiltinNetwork(_)) => "BUILTIN_NETWORK",
            Self::Domain(DomainError::RegtestUnsupported) => "REGTEST_UNSUPPORTED",
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    UseCase(#[from] UseCaseError),

    #[error("Invalid request: {0}")]
    BadRequest(String),
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

/// One rejected request field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl ErrorResponse {
    /// Build an error body stamped with the current request id
    #[must_use]
    pub fn new(code: &str, message: String, details: Option<Vec<FieldError>>) -> Self {
        Self {
            error: ErrorDetail {
                code: code.to_string(),
                message,
                details,
            },
            request_id: request_context::current_request_id(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::UseCase(err) => {
                let message = err.to_string();
                let (status, code) = (err.status_code(), err.error_code());
                let details = match err {
                    UseCaseError::Validation(fields) => Some(fields),
                    _ => None,
                };
                (status, ErrorResponse::new(code, message, details))
            }
            ApiError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("BAD_REQUEST", message, None),
            ),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ParseNetworkFieldError> for ApiError {
    fn from(err: ParseNetworkFieldError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        let mut fields: Vec<FieldError> = err
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| FieldError {
                    field: field.to_string(),
                    message: e
                        .message
                        .as_ref()
                        .map_or_else(|| e.code.to_string(), ToString::to_string),
                })
            })
            .collect();
        fields.sort_by(|a, b| a.field.cmp(&b.field));
        ApiError::UseCase(UseCaseError::Validation(fields))
    }
}
