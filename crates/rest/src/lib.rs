//! # doctr-rest - Doctor Registry REST API
//!
//! This crate exposes create, read, update, delete and paginated list
//! operations over doctor records as a HAL-flavoured JSON API, backed by any
//! [`DoctorStorage`] implementation.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use doctr_rest::{create_app_with_config, ServerConfig};
//! use doctr_persistence::backends::sqlite::SqliteBackend;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let backend = SqliteBackend::open("doctr.db")?;
//!     backend.init_schema()?;
//!
//!     let config = ServerConfig::default();
//!     let app = create_app_with_config(backend, config);
//!
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//!     axum::serve(listener, app).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## API Endpoints
//!
//! | Operation | HTTP Method | URL Pattern | Success |
//! |-----------|-------------|-------------|---------|
//! | create | POST | `/api/doctors` | 201 |
//! | list | GET | `/api/doctors?pincode=&page=&size=` | 200 |
//! | read | GET | `/api/doctors/{id}` | 200 |
//! | update | PUT | `/api/doctors/{id}` | 200 |
//! | delete | DELETE | `/api/doctors/{id}` | 204 |
//! | delete all | DELETE | `/api/doctors` | 204 |
//!
//! Responses are `application/hal+json`: each doctor carries `_links`, and
//! pages carry `_embedded.doctors`, `_links` and `page` metadata.
//!
//! ## Error Handling
//!
//! | HTTP Status | Cause |
//! |-------------|-------|
//! | 400 | Validation failure (`fieldErrors`), malformed JSON, non-integer id |
//! | 401 | Missing or wrong basic-auth credentials |
//! | 404 | Doctor not found |
//! | 413 | Body larger than `max_body_size` |
//! | 415 | Non-JSON request body |
//! | 500 | Storage failure |
//!
//! ## Architecture
//!
//! - [`error`] - Error types and JSON error bodies
//! - [`config`] - Server configuration
//! - [`state`] - Application state (storage, configuration)
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Basic authentication
//! - [`extractors`] - Body, path and query extractors
//! - [`responses`] - HAL models, links and headers
//! - [`routing`] - Route configuration

// Enforce documentation
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod responses;
pub mod routing;
pub mod state;

// Re-export commonly used types
pub use config::ServerConfig;
pub use error::{RestError, RestResult};
pub use state::AppState;

use std::sync::Arc;

use axum::{Router, extract::DefaultBodyLimit};
use doctr_persistence::core::DoctorStorage;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

/// Creates the Axum application with default configuration.
///
/// For more control, use [`create_app_with_config`].
pub fn create_app<S>(storage: S) -> Router
where
    S: DoctorStorage + Send + Sync + 'static,
{
    create_app_with_config(storage, ServerConfig::default())
}

/// Creates the Axum application with custom configuration.
///
/// # Arguments
///
/// * `storage` - The storage backend to use
/// * `config` - Server configuration
///
/// # Example
///
/// ```rust,ignore
/// use doctr_rest::{create_app_with_config, ServerConfig};
/// use doctr_persistence::backends::sqlite::SqliteBackend;
///
/// let backend = SqliteBackend::in_memory()?;
/// backend.init_schema()?;
/// let config = ServerConfig {
///     port: 3000,
///     enable_cors: true,
///     ..Default::default()
/// };
/// let app = create_app_with_config(backend, config);
/// ```
pub fn create_app_with_config<S>(storage: S, config: ServerConfig) -> Router
where
    S: DoctorStorage + Send + Sync + 'static,
{
    info!(
        backend = storage.backend_name(),
        base_url = %config.base_url(),
        "Creating doctor REST API"
    );

    let state = AppState::new(Arc::new(storage), config.clone());

    let router = routing::doctor_routes::create_routes(state)
        .layer(DefaultBodyLimit::max(config.max_body_size));

    // Build middleware stack
    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            axum::http::StatusCode::REQUEST_TIMEOUT,
            std::time::Duration::from_secs(config.request_timeout),
        ));

    // Add CORS if enabled
    let router = if config.enable_cors {
        let cors = build_cors_layer(&config);
        router.layer(cors)
    } else {
        router
    };

    router.layer(service_builder)
}

/// Builds the CORS layer based on configuration.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let mut cors = CorsLayer::new();

    if config.cors_origins == "*" {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    if config.cors_methods == "*" {
        cors = cors.allow_methods(Any);
    } else {
        let methods: Vec<_> = config
            .cors_methods
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_methods(methods);
    }

    if config.cors_headers == "*" {
        cors = cors.allow_headers(Any);
    } else {
        let headers: Vec<_> = config
            .cors_headers
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_headers(headers);
    }

    cors
}

/// Initializes the tracing subscriber for logging.
///
/// Call once at startup. `RUST_LOG`, when set, overrides `level`.
///
/// # Arguments
///
/// * `level` - The log level (error, warn, info, debug, trace)
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "doctr={level},doctr_rest={level},doctr_persistence={level},tower_http=debug"
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
