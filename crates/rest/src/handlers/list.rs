//! List handler.
//!
//! `GET [base]/api/doctors?pincode=&page=&size=`

use axum::{extract::State, http::StatusCode, response::Response};
use doctr_persistence::core::DoctorStorage;
use tracing::debug;

use crate::error::RestResult;
use crate::extractors::Pagination;
use crate::responses::{DoctorPageModel, DoctorUris, ResourceHeaders, hal_response};
use crate::state::AppState;

/// Handler for listing doctors one page at a time.
///
/// With `pincode`, only doctors whose pincode matches exactly are listed.
///
/// # HTTP Request
///
/// `GET [base]/api/doctors?pincode=522201&page=0&size=20`
///
/// # Response
///
/// - `200 OK` - HAL page: `_embedded.doctors`, `_links` (`self`, `next`,
///   `prev`, `create`) and `page` metadata
/// - `500 Internal Server Error` - Storage failure
pub async fn list_handler<S>(
    State(state): State<AppState<S>>,
    pagination: Pagination,
) -> RestResult<Response>
where
    S: DoctorStorage + Send + Sync,
{
    debug!(
        page = pagination.page(),
        size = pagination.size(),
        pincode = ?pagination.pincode(),
        "Processing list request"
    );

    let request = pagination.page_request();
    let page = match pagination.pincode() {
        Some(pincode) => state.storage().list_by_pincode(pincode, request).await?,
        None => state.storage().list_all(request).await?,
    };

    debug!(
        returned = page.len(),
        total = page.total_elements,
        "List completed"
    );

    let uris = DoctorUris::new(state.base_url());
    let model = DoctorPageModel::new(page, pagination.pincode(), &uris);

    Ok(hal_response(StatusCode::OK, &model, ResourceHeaders::new()))
}
