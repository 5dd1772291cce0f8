//! Delete handlers.
//!
//! `DELETE [base]/api/doctors/{id}` and `DELETE [base]/api/doctors`

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use doctr_persistence::core::DoctorStorage;
use tracing::{debug, info};

use crate::error::RestResult;
use crate::extractors::DoctorId;
use crate::state::AppState;

/// Handler for deleting a doctor by id.
///
/// # HTTP Request
///
/// `DELETE [base]/api/doctors/{id}`
///
/// # Response
///
/// - `204 No Content` - Doctor deleted
/// - `400 Bad Request` - Non-integer id
/// - `404 Not Found` - No doctor has this id
/// - `500 Internal Server Error` - Storage failure
pub async fn delete_handler<S>(
    State(state): State<AppState<S>>,
    DoctorId(id): DoctorId,
) -> RestResult<Response>
where
    S: DoctorStorage + Send + Sync,
{
    debug!(id, "Processing delete request");

    state.storage().delete(id).await?;

    debug!(id, "Doctor deleted");

    Ok(StatusCode::NO_CONTENT.into_response())
}

/// Handler for deleting every doctor.
///
/// # HTTP Request
///
/// `DELETE [base]/api/doctors`
///
/// # Response
///
/// - `204 No Content` - All doctors deleted (also when there were none)
/// - `500 Internal Server Error` - Storage failure
pub async fn delete_all_handler<S>(State(state): State<AppState<S>>) -> RestResult<Response>
where
    S: DoctorStorage + Send + Sync,
{
    debug!("Processing delete-all request");

    let deleted = state.storage().delete_all().await?;

    info!(deleted, "Deleted all doctors");

    Ok(StatusCode::NO_CONTENT.into_response())
}
