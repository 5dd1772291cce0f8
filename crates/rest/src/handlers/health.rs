//! Health check endpoint handlers.
//!
//! Provides health, liveness and readiness endpoints for monitoring and load
//! balancers. None of them require credentials.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use doctr_persistence::core::DoctorStorage;
use tracing::{debug, warn};

use crate::error::RestResult;
use crate::state::AppState;

/// Handler for the health check endpoint.
///
/// # HTTP Request
///
/// `GET [base]/health`
///
/// # Response
///
/// - `200 OK` - Server is up
pub async fn health_handler<S>(State(state): State<AppState<S>>) -> RestResult<Response>
where
    S: DoctorStorage + Send + Sync,
{
    debug!("Processing health check request");

    let health_response = serde_json::json!({
        "status": "healthy",
        "backend": state.storage().backend_name(),
        "timestamp": chrono::Utc::now().to_rfc3339()
    });

    Ok((StatusCode::OK, Json(health_response)).into_response())
}

/// Handler for the liveness probe.
///
/// # HTTP Request
///
/// `GET [base]/_liveness`
pub async fn liveness_handler() -> impl IntoResponse {
    StatusCode::OK
}

/// Handler for the readiness probe.
///
/// Runs the storage health check.
///
/// # HTTP Request
///
/// `GET [base]/_readiness`
///
/// # Response
///
/// - `200 OK` - Storage answers queries
/// - `503 Service Unavailable` - Storage check failed
pub async fn readiness_handler<S>(State(state): State<AppState<S>>) -> Response
where
    S: DoctorStorage + Send + Sync,
{
    debug!("Processing readiness check request");

    let backend_name = state.storage().backend_name();

    match state.storage().health_check().await {
        Ok(()) => {
            let response = serde_json::json!({
                "status": "ready",
                "backend": backend_name,
                "checks": {
                    "storage": "ok"
                }
            });
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            warn!(backend = backend_name, error = %e, "Readiness check failed");
            let response = serde_json::json!({
                "status": "unavailable",
                "backend": backend_name,
                "checks": {
                    "storage": "failed"
                }
            });
            (StatusCode::SERVICE_UNAVAILABLE, Json(response)).into_response()
        }
    }
}
