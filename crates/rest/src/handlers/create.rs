//! Create handler.
//!
//! `POST [base]/api/doctors`

use axum::{extract::State, http::StatusCode, response::Response};
use doctr_persistence::core::DoctorStorage;
use tracing::debug;

use crate::error::RestResult;
use crate::extractors::DoctorPayload;
use crate::responses::{DoctorModel, DoctorUris, EntityLinks, ResourceHeaders, hal_response};
use crate::state::AppState;

/// Handler for creating a doctor.
///
/// The server assigns the id; any `id` in the body is ignored.
///
/// # HTTP Request
///
/// `POST [base]/api/doctors`
///
/// # Response
///
/// - `201 Created` - Doctor created, with `Location` and links `self`, `doctors`
/// - `400 Bad Request` - Malformed JSON or field validation failure
/// - `500 Internal Server Error` - Storage failure
///
/// # Example
///
/// ```http
/// POST /api/doctors HTTP/1.1
/// Content-Type: application/json
///
/// {"firstName": "Srikanth", "lastName": "Kakumanu", "address": "Lakshmi Prasad Arcade",
///  "city": "Tenali", "pincode": "522201"}
/// ```
pub async fn create_handler<S>(
    State(state): State<AppState<S>>,
    DoctorPayload(draft): DoctorPayload,
) -> RestResult<Response>
where
    S: DoctorStorage + Send + Sync,
{
    debug!(pincode = %draft.pincode, "Processing create request");

    let doctor = state.storage().create(draft).await?;

    debug!(id = doctor.id, "Doctor created");

    let uris = DoctorUris::new(state.base_url());
    let headers = ResourceHeaders::new().with_location(uris.item(doctor.id));
    let model = DoctorModel::new(doctor, EntityLinks::Created, &uris);

    Ok(hal_response(StatusCode::CREATED, &model, headers))
}
