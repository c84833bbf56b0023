//! HTTP error responses

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::domain::DomainError;
use crate::domain::validation::FieldErrors;

/// Error categories exposed on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorType {
    AuthenticationError,
    PermissionDenied,
    NotFound,
    Conflict,
    InvalidRequest,
    ServerError,
}

/// Body for every failure except validation: `{"error": {...}}`
#[derive(Debug, Clone, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Clone, Serialize)]
pub struct ApiErrorDetail {
    pub message: String,
    #[serde(rename = "type")]
    pub error_type: ApiErrorType,
}

/// Validation failures keep the per-field map so the caller can re-render
/// form state: `{"errors": {field: [messages]}}`
#[derive(Debug, Clone, Serialize)]
pub struct ValidationErrorResponse {
    pub errors: FieldErrors,
}

/// API error with status code
#[derive(Debug)]
pub enum ApiError {
    Message {
        status: StatusCode,
        response: ApiErrorResponse,
    },
    Fields {
        response: ValidationErrorResponse,
    },
}

impl ApiError {
    pub fn new(status: StatusCode, error_type: ApiErrorType, message: impl Into<String>) -> Self {
        Self::Message {
            status,
            response: ApiErrorResponse {
                error: ApiErrorDetail {
                    message: message.into(),
                    error_type,
                },
            },
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Message { status, .. } => *status,
            Self::Fields { .. } => StatusCode::BAD_REQUEST,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            ApiErrorType::InvalidRequest,
            message,
        )
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::UNAUTHORIZED,
            ApiErrorType::AuthenticationError,
            message,
        )
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::FORBIDDEN,
            ApiErrorType::PermissionDenied,
            message,
        )
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, ApiErrorType::NotFound, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, ApiErrorType::Conflict, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            ApiErrorType::ServerError,
            message,
        )
    }

    pub fn validation(errors: FieldErrors) -> Self {
        Self::Fields {
            response: ValidationErrorResponse { errors },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Message { status, response } => (status, Json(response)).into_response(),
            Self::Fields { response } => {
                (StatusCode::BAD_REQUEST, Json(response)).into_response()
            }
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { message } => Self::not_found(message),
            DomainError::Validation { errors } => Self::validation(errors),
            DomainError::PermissionDenied { message } => Self::forbidden(message),
            DomainError::Conflict { message } => Self::conflict(message),
            DomainError::Storage { message } | DomainError::Internal { message } => {
                Self::internal(message)
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Message { response, .. } => write!(
                f,
                "{:?}: {}",
                response.error.error_type, response.error.message
            ),
            Self::Fields { response } => write!(f, "validation failed: {}", response.errors),
        }
    }
}

impl std::error::Error for ApiError {}
