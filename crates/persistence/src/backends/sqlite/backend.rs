//! SQLite backend implementation.

use std::fmt::Debug;
use std::path::Path;
use std::time::Duration;

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use serde::{Deserialize, Serialize};

use crate::error::{BackendError, StorageError, StorageResult};

use super::schema;

/// Name reported by [`DoctorStorage::backend_name`](crate::core::DoctorStorage::backend_name).
pub(crate) const BACKEND_NAME: &str = "sqlite";

/// SQLite backend for doctor storage.
pub struct SqliteBackend {
    pool: Pool<SqliteConnectionManager>,
    config: SqliteBackendConfig,
    is_memory: bool,
}

impl Debug for SqliteBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteBackend")
            .field("config", &self.config)
            .field("is_memory", &self.is_memory)
            .finish_non_exhaustive()
    }
}

/// Configuration for the SQLite backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SqliteBackendConfig {
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Minimum number of idle connections.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,

    /// Connection timeout in milliseconds.
    #[serde(default = "default_connection_timeout_ms")]
    pub connection_timeout_ms: u64,

    /// SQLite busy timeout in milliseconds.
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u32,

    /// Enable WAL mode for better concurrency.
    #[serde(default = "default_true")]
    pub enable_wal: bool,
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_connection_timeout_ms() -> u64 {
    30000
}

fn default_busy_timeout_ms() -> u32 {
    5000
}

fn default_true() -> bool {
    true
}

impl Default for SqliteBackendConfig {
    fn default() -> Self {
        Self {
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connection_timeout_ms: default_connection_timeout_ms(),
            busy_timeout_ms: default_busy_timeout_ms(),
            enable_wal: true,
        }
    }
}

impl SqliteBackend {
    /// Creates a new in-memory SQLite backend.
    pub fn in_memory() -> StorageResult<Self> {
        Self::with_config(":memory:", SqliteBackendConfig::default())
    }

    /// Opens or creates a file-based SQLite database.
    pub fn open<P: AsRef<Path>>(path: P) -> StorageResult<Self> {
        Self::with_config(path, SqliteBackendConfig::default())
    }

    /// Creates a backend with custom configuration.
    ///
    /// Every `:memory:` connection is its own database, so an in-memory
    /// backend is pinned to a single pooled connection that never expires.
    pub fn with_config<P: AsRef<Path>>(
        path: P,
        config: SqliteBackendConfig,
    ) -> StorageResult<Self> {
        let path_str = path.as_ref().to_string_lossy();
        let is_memory = path_str == ":memory:";

        let busy_timeout = Duration::from_millis(u64::from(config.busy_timeout_ms));
        let manager = if is_memory {
            SqliteConnectionManager::memory()
        } else {
            SqliteConnectionManager::file(path.as_ref())
        }
        .with_init(move |conn| conn.busy_timeout(busy_timeout));

        let builder = Pool::builder()
            .connection_timeout(Duration::from_millis(config.connection_timeout_ms));
        let builder = if is_memory {
            builder
                .max_size(1)
                .min_idle(Some(1))
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            builder
                .max_size(config.max_connections)
                .min_idle(Some(config.min_connections))
        };

        let pool = builder.build(manager).map_err(|e| {
            StorageError::Backend(BackendError::ConnectionFailed {
                backend_name: BACKEND_NAME.to_string(),
                message: e.to_string(),
            })
        })?;

        let backend = Self {
            pool,
            config,
            is_memory,
        };

        backend.configure_connection()?;

        tracing::debug!(path = %path_str, in_memory = is_memory, "Opened SQLite backend");

        Ok(backend)
    }

    /// Initialize the database schema.
    pub fn init_schema(&self) -> StorageResult<()> {
        let conn = self.get_connection()?;
        schema::initialize_schema(&conn)
    }

    /// Get a connection from the pool.
    pub(crate) fn get_connection(
        &self,
    ) -> StorageResult<PooledConnection<SqliteConnectionManager>> {
        self.pool.get().map_err(|e| {
            StorageError::Backend(BackendError::ConnectionFailed {
                backend_name: BACKEND_NAME.to_string(),
                message: e.to_string(),
            })
        })
    }

    /// Configure database-wide settings.
    fn configure_connection(&self) -> StorageResult<()> {
        if self.config.enable_wal && !self.is_memory {
            let conn = self.get_connection()?;
            // journal_mode reports the resulting mode as a row.
            let mode: String = conn
                .query_row("PRAGMA journal_mode = WAL", [], |row| row.get(0))
                .map_err(|e| {
                    StorageError::Backend(BackendError::Internal {
                        backend_name: BACKEND_NAME.to_string(),
                        message: format!("Failed to enable WAL mode: {}", e),
                        source: None,
                    })
                })?;
            tracing::debug!(journal_mode = %mode, "Configured SQLite journal mode");
        }

        Ok(())
    }

    /// Returns whether this is an in-memory database.
    pub fn is_memory(&self) -> bool {
        self.is_memory
    }

    /// Returns the backend configuration.
    pub fn config(&self) -> &SqliteBackendConfig {
        &self.config
    }
}
