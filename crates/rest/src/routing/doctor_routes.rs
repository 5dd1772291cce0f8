//! Doctor route configuration.
//!
//! Defines all routes for the doctor REST API.

use std::sync::Arc;

use axum::{Router, middleware::from_fn_with_state, routing::get};
use doctr_persistence::core::DoctorStorage;
use tracing::info;

use crate::handlers;
use crate::middleware::{BasicCredentials, basic_auth_middleware};
use crate::state::AppState;

/// Creates all doctor REST API routes.
///
/// # Routes
///
/// ## Operational (never authenticated)
/// - `GET /health` - Health check
/// - `GET /_liveness` - Liveness probe
/// - `GET /_readiness` - Readiness probe
///
/// ## Doctors (basic auth when configured)
/// - `GET /api/doctors` - List, optionally filtered by pincode
/// - `POST /api/doctors` - Create
/// - `DELETE /api/doctors` - Delete all
/// - `GET /api/doctors/{id}` - Read
/// - `PUT /api/doctors/{id}` - Update
/// - `DELETE /api/doctors/{id}` - Delete
pub fn create_routes<S>(state: AppState<S>) -> Router
where
    S: DoctorStorage + Send + Sync + 'static,
{
    let api = Router::new()
        .route(
            "/api/doctors",
            get(handlers::list_handler::<S>)
                .post(handlers::create_handler::<S>)
                .delete(handlers::delete_all_handler::<S>),
        )
        .route(
            "/api/doctors/{id}",
            get(handlers::read_handler::<S>)
                .put(handlers::update_handler::<S>)
                .delete(handlers::delete_handler::<S>),
        );

    let api = match BasicCredentials::from_config(state.config()) {
        Some(credentials) => {
            info!("Basic authentication enabled for /api routes");
            api.route_layer(from_fn_with_state(
                Arc::new(credentials),
                basic_auth_middleware,
            ))
        }
        None => api,
    };

    Router::new()
        .route("/health", get(handlers::health_handler::<S>))
        .route("/_liveness", get(handlers::liveness_handler))
        .route("/_readiness", get(handlers::readiness_handler::<S>))
        .merge(api)
        .with_state(state)
}
