//! Response building utilities.
//!
//! - [`hal`] - HAL models for single doctors and pages of doctors
//! - [`links`] - Link sets and URL generation
//! - [`headers`] - Content-Type and Location headers

pub mod hal;
pub mod headers;
pub mod links;

pub use hal::{DoctorModel, DoctorPageModel, EntityLinks, PageMetadata};
pub use headers::{HAL_JSON, ResourceHeaders};
pub use links::{DoctorUris, Link, Links};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Renders a HAL body with the given status and headers.
///
/// The headers replace those set by the JSON encoder, so the body is served
/// as `application/hal+json`.
pub fn hal_response<T: Serialize>(
    status: StatusCode,
    body: &T,
    headers: ResourceHeaders,
) -> Response {
    let mut response = (status, Json(body)).into_response();
    for (name, value) in headers.to_header_map().iter() {
        response.headers_mut().insert(name, value.clone());
    }
    response
}
