//! Read handler.
//!
//! `GET [base]/api/doctors/{id}`

use axum::{extract::State, http::StatusCode, response::Response};
use doctr_persistence::core::DoctorStorage;
use tracing::debug;

use crate::error::{RestError, RestResult};
use crate::extractors::DoctorId;
use crate::responses::{DoctorModel, DoctorUris, EntityLinks, ResourceHeaders, hal_response};
use crate::state::AppState;

/// Handler for reading a doctor by id.
///
/// # HTTP Request
///
/// `GET [base]/api/doctors/{id}`
///
/// # Response
///
/// - `200 OK` - Doctor with links `self`, `update`, `delete`, `doctors`
/// - `400 Bad Request` - Non-integer id
/// - `404 Not Found` - No doctor has this id
pub async fn read_handler<S>(
    State(state): State<AppState<S>>,
    DoctorId(id): DoctorId,
) -> RestResult<Response>
where
    S: DoctorStorage + Send + Sync,
{
    debug!(id, "Processing read request");

    let doctor = state
        .storage()
        .read(id)
        .await?
        .ok_or(RestError::NotFound { id })?;

    let uris = DoctorUris::new(state.base_url());
    let model = DoctorModel::new(doctor, EntityLinks::Read, &uris);

    Ok(hal_response(StatusCode::OK, &model, ResourceHeaders::new()))
}
