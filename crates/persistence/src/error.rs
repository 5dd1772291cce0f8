//! Error types for the persistence layer.
//!
//! Errors are split by category so that callers can map them onto transport
//! semantics without string matching: missing records, rejected drafts, and
//! failures of the database itself.

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// The primary error type for all storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Record state errors
    #[error(transparent)]
    Resource(#[from] ResourceError),

    /// Validation errors
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Backend-specific errors
    #[error(transparent)]
    Backend(#[from] BackendError),
}

impl StorageError {
    /// Returns true if this error reports a missing record.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StorageError::Resource(ResourceError::NotFound { .. }))
    }
}

/// Errors related to record state.
#[derive(Error, Debug)]
pub enum ResourceError {
    /// The requested doctor was not found.
    #[error("doctor not found: {id}")]
    NotFound { id: i64 },
}

/// Errors related to field validation.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// One or more field constraints were violated.
    #[error("invalid doctor: {}", summarize(.details))]
    InvalidDoctor { details: Vec<ValidationDetail> },
}

impl ValidationError {
    /// Returns the individual field violations.
    pub fn details(&self) -> &[ValidationDetail] {
        match self {
            ValidationError::InvalidDoctor { details } => details,
        }
    }
}

fn summarize(details: &[ValidationDetail]) -> String {
    details
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// A single violated field constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationDetail {
    /// The JSON name of the offending field (e.g. `pincode`).
    pub field: String,
    /// A human-readable error message.
    pub message: String,
}

impl ValidationDetail {
    /// Creates a new validation detail.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Errors originating from the database backend.
#[derive(Error, Debug)]
pub enum BackendError {
    /// The backend is currently unavailable.
    #[error("backend unavailable: {backend_name}")]
    Unavailable {
        backend_name: String,
        message: String,
    },

    /// Connection to the backend failed.
    #[error("connection failed to {backend_name}: {message}")]
    ConnectionFailed {
        backend_name: String,
        message: String,
    },

    /// Connection pool exhausted.
    #[error("connection pool exhausted for {backend_name}")]
    PoolExhausted { backend_name: String },

    /// Schema migration error.
    #[error("schema migration failed: {message}")]
    MigrationError { message: String },

    /// Internal backend error.
    #[error("internal error in {backend_name}: {message}")]
    Internal {
        backend_name: String,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Result type alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;
