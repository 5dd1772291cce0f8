//! Custom Axum extractors for the doctor API.
//!
//! - [`DoctorPayload`] - Parses and validates a doctor from the request body
//! - [`DoctorId`] - Parses the integer `{id}` path segment
//! - [`Pagination`] - Extracts `page`, `size` and `pincode` query parameters
//!
//! Every rejection renders as the API's JSON error body.

mod doctor_id;
mod doctor_payload;
mod pagination;

pub use doctor_id::DoctorId;
pub use doctor_payload::{DoctorPayload, DoctorPayloadRejection};
pub use pagination::Pagination;
