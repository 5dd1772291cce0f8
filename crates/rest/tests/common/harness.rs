//! REST API test harness.

use std::sync::Arc;

use axum_test::TestServer;
use doctr_persistence::backends::sqlite::SqliteBackend;
use doctr_persistence::core::DoctorStorage;
use doctr_persistence::types::Doctor;
use doctr_rest::{AppState, ServerConfig, create_app_with_config};

use super::fixtures;

/// Base URL every test server is configured with.
pub const BASE_URL: &str = "http://localhost:8080";

/// Username for servers built with [`create_auth_server`].
pub const USERNAME: &str = "admin";

/// Password for servers built with [`create_auth_server`].
pub const PASSWORD: &str = "password";

/// Creates an in-memory backend with its schema.
pub fn create_backend() -> Arc<SqliteBackend> {
    let backend = SqliteBackend::in_memory().expect("Failed to create SQLite backend");
    backend.init_schema().expect("Failed to init schema");
    Arc::new(backend)
}

/// Returns the test configuration.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        base_url: BASE_URL.to_string(),
        ..ServerConfig::for_testing()
    }
}

/// Creates a test server over the routes, keeping a handle on the backend.
pub fn create_test_server_with_config(config: ServerConfig) -> (TestServer, Arc<SqliteBackend>) {
    let backend = create_backend();
    let state = AppState::new(Arc::clone(&backend), config);
    let app = doctr_rest::routing::create_routes(state);
    let server = TestServer::new(app).expect("Failed to create test server");

    (server, backend)
}

/// Creates a test server over a backend whose schema was never created, so
/// every doctor query fails inside storage.
pub fn create_uninitialized_server() -> TestServer {
    let backend = SqliteBackend::in_memory().expect("Failed to create SQLite backend");
    let state = AppState::new(Arc::new(backend), test_config());
    let app = doctr_rest::routing::create_routes(state);
    TestServer::new(app).expect("Failed to create test server")
}

/// Creates a test server with the default test configuration.
pub fn create_test_server() -> (TestServer, Arc<SqliteBackend>) {
    create_test_server_with_config(test_config())
}

/// Creates a test server with basic auth enabled.
pub fn create_auth_server() -> (TestServer, Arc<SqliteBackend>) {
    create_test_server_with_config(ServerConfig {
        auth_username: Some(USERNAME.to_string()),
        auth_password: Some(PASSWORD.to_string()),
        ..test_config()
    })
}

/// Creates a test server over the full application, middleware included.
pub fn create_full_app_server(config: ServerConfig) -> TestServer {
    let backend = SqliteBackend::in_memory().expect("Failed to create SQLite backend");
    backend.init_schema().expect("Failed to init schema");
    let app = create_app_with_config(backend, config);
    TestServer::new(app).expect("Failed to create test server")
}

/// Seeds `count` doctors named `Doc0..DocN` with the given pincode.
pub async fn seed_doctors(backend: &SqliteBackend, count: usize, pincode: &str) -> Vec<Doctor> {
    let mut doctors = Vec::with_capacity(count);
    for i in 0..count {
        let doctor = backend
            .create(fixtures::draft(&format!("Doc{}", i), pincode))
            .await
            .expect("Failed to seed doctor");
        doctors.push(doctor);
    }
    doctors
}
