//! doctr server
//!
//! Serves the doctor registry API over a SQLite database.

use clap::Parser;
use doctr_rest::{ServerConfig, create_app_with_config, init_logging};
use tracing::info;

#[cfg(feature = "sqlite")]
use doctr_persistence::backends::sqlite::SqliteBackend;

/// Opens the configured SQLite database and applies the schema.
#[cfg(feature = "sqlite")]
fn create_sqlite_backend(config: &ServerConfig) -> anyhow::Result<SqliteBackend> {
    let db_path = config.database_url.as_str();
    info!(database = %db_path, "Initializing SQLite backend");

    let backend = if db_path == ":memory:" {
        SqliteBackend::in_memory()?
    } else {
        SqliteBackend::open(db_path)?
    };
    backend.init_schema()?;

    Ok(backend)
}

/// Starts the Axum HTTP server, stopping on Ctrl-C.
async fn serve(app: axum::Router, config: &ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(address = %addr, "Server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    init_logging(&config.log_level);

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    info!(
        port = config.port,
        host = %config.host,
        auth = config.credentials().is_some(),
        "Starting doctr server"
    );

    start_sqlite(config).await
}

#[cfg(feature = "sqlite")]
async fn start_sqlite(config: ServerConfig) -> anyhow::Result<()> {
    let backend = create_sqlite_backend(&config)?;
    let app = create_app_with_config(backend, config.clone());
    serve(app, &config).await
}

/// Fallback when the sqlite feature is not enabled.
#[cfg(not(feature = "sqlite"))]
async fn start_sqlite(_config: ServerConfig) -> anyhow::Result<()> {
    anyhow::bail!(
        "The sqlite backend requires the 'sqlite' feature. \
         Build with: cargo build -p doctr-server --features sqlite"
    )
}
