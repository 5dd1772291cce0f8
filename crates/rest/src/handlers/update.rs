//! Update handler.
//!
//! `PUT [base]/api/doctors/{id}`

use axum::{extract::State, http::StatusCode, response::Response};
use doctr_persistence::core::DoctorStorage;
use tracing::debug;

use crate::error::RestResult;
use crate::extractors::{DoctorId, DoctorPayload};
use crate::responses::{DoctorModel, DoctorUris, EntityLinks, ResourceHeaders, hal_response};
use crate::state::AppState;

/// Handler for updating a doctor.
///
/// Overwrites every field except the id. The doctor must already exist;
/// update never creates.
///
/// # HTTP Request
///
/// `PUT [base]/api/doctors/{id}`
///
/// # Response
///
/// - `200 OK` - Updated doctor with links `self`, `delete`, `doctors`
/// - `400 Bad Request` - Non-integer id, malformed JSON or validation failure
/// - `404 Not Found` - No doctor has this id
pub async fn update_handler<S>(
    State(state): State<AppState<S>>,
    DoctorId(id): DoctorId,
    DoctorPayload(draft): DoctorPayload,
) -> RestResult<Response>
where
    S: DoctorStorage + Send + Sync,
{
    debug!(id, "Processing update request");

    let doctor = state.storage().update(id, draft).await?;

    debug!(id, "Doctor updated");

    let uris = DoctorUris::new(state.base_url());
    let model = DoctorModel::new(doctor, EntityLinks::Updated, &uris);

    Ok(hal_response(StatusCode::OK, &model, ResourceHeaders::new()))
}
