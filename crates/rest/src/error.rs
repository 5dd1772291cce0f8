//! Error types for the doctor REST API.
//!
//! Every error renders as a JSON body of the form
//! `{"status": 404, "error": "Not Found", "message": "..."}`. Validation
//! failures additionally carry `fieldErrors`, one entry per violated field.
//!
//! # Error Mapping
//!
//! | Storage Error | HTTP Status |
//! |--------------|-------------|
//! | NotFound | 404 |
//! | InvalidDoctor | 400 |
//! | BackendError | 500 |

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use doctr_persistence::error::{
    BackendError, ResourceError, StorageError, ValidationDetail, ValidationError,
};
use serde::Serialize;
use std::fmt;
use tracing::error;

/// Realm advertised in `WWW-Authenticate` challenges.
pub const AUTH_REALM: &str = "doctr";

/// The primary error type for REST API operations.
#[derive(Debug)]
pub enum RestError {
    /// Doctor not found (HTTP 404).
    NotFound {
        /// The requested doctor id.
        id: i64,
    },

    /// Payload failed field validation (HTTP 400).
    Validation {
        /// One entry per violated field constraint.
        details: Vec<ValidationDetail>,
    },

    /// Malformed request: bad JSON, bad path or query parameters (HTTP 400).
    BadRequest {
        /// Error message.
        message: String,
    },

    /// Missing or wrong credentials (HTTP 401).
    Unauthorized,

    /// Request body exceeded the configured limit (HTTP 413).
    PayloadTooLarge {
        /// Error message.
        message: String,
    },

    /// Unsupported media type (HTTP 415).
    UnsupportedMediaType {
        /// The unsupported content type.
        content_type: String,
    },

    /// Backend failure (HTTP 500). The message is logged, never returned.
    InternalError {
        /// Error message.
        message: String,
    },
}

impl fmt::Display for RestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestError::NotFound { id } => write!(f, "Doctor not found: {}", id),
            RestError::Validation { details } => {
                write!(f, "Validation failed: ")?;
                for (i, detail) in details.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{}", detail)?;
                }
                Ok(())
            }
            RestError::BadRequest { message } => write!(f, "Bad request: {}", message),
            RestError::Unauthorized => write!(f, "Unauthorized"),
            RestError::PayloadTooLarge { message } => write!(f, "Payload too large: {}", message),
            RestError::UnsupportedMediaType { content_type } => {
                write!(f, "Unsupported media type: {}", content_type)
            }
            RestError::InternalError { message } => write!(f, "Internal error: {}", message),
        }
    }
}

impl std::error::Error for RestError {}

impl RestError {
    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestError::NotFound { .. } => StatusCode::NOT_FOUND,
            RestError::Validation { .. } | RestError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            RestError::Unauthorized => StatusCode::UNAUTHORIZED,
            RestError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            RestError::UnsupportedMediaType { .. } => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            RestError::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// JSON error body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody<'a> {
    status: u16,
    error: &'a str,
    message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    field_errors: Vec<&'a ValidationDetail>,
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let (message, field_errors) = match &self {
            RestError::NotFound { id } => (format!("Doctor {} not found", id), Vec::new()),
            RestError::Validation { details } => (
                "Validation failed".to_string(),
                details.iter().collect(),
            ),
            RestError::BadRequest { message } => (message.clone(), Vec::new()),
            RestError::Unauthorized => (
                "Full authentication is required to access this resource".to_string(),
                Vec::new(),
            ),
            RestError::PayloadTooLarge { message } => (message.clone(), Vec::new()),
            RestError::UnsupportedMediaType { content_type } => (
                format!("Content type '{}' is not supported", content_type),
                Vec::new(),
            ),
            RestError::InternalError { message } => {
                error!(error = %message, "Request failed with internal error");
                ("An unexpected error occurred".to_string(), Vec::new())
            }
        };

        let body = ErrorBody {
            status: status.as_u16(),
            error: status.canonical_reason().unwrap_or("Error"),
            message,
            field_errors,
        };

        let mut response = (status, Json(body)).into_response();
        if matches!(self, RestError::Unauthorized) {
            if let Ok(value) = format!("Basic realm=\"{}\"", AUTH_REALM).parse() {
                response
                    .headers_mut()
                    .insert(header::WWW_AUTHENTICATE, value);
            }
        }
        response
    }
}

// Implement conversions from storage errors

impl From<StorageError> for RestError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Resource(e) => e.into(),
            StorageError::Validation(e) => e.into(),
            StorageError::Backend(e) => e.into(),
        }
    }
}

impl From<ResourceError> for RestError {
    fn from(err: ResourceError) -> Self {
        match err {
            ResourceError::NotFound { id } => RestError::NotFound { id },
        }
    }
}

impl From<ValidationError> for RestError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::InvalidDoctor { details } => RestError::Validation { details },
        }
    }
}

impl From<BackendError> for RestError {
    fn from(err: BackendError) -> Self {
        RestError::InternalError {
            message: err.to_string(),
        }
    }
}

/// Result type alias for REST operations.
pub type RestResult<T> = Result<T, RestError>;
