//! Doctor id path extractor.

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::error::RestError;

/// Axum extractor for the `{id}` path segment.
///
/// Rejects non-integer ids with a JSON 400 body instead of axum's plain-text
/// path rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoctorId(pub i64);

impl<S> FromRequestParts<S> for DoctorId
where
    S: Send + Sync,
{
    type Rejection = RestError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| RestError::BadRequest {
                message: e.body_text(),
            })?;

        raw.parse::<i64>()
            .map(DoctorId)
            .map_err(|_| RestError::BadRequest {
                message: format!("Invalid doctor id: {}", raw),
            })
    }
}
