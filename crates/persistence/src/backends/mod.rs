//! Database backend implementations.
//!
//! Each backend is gated behind a feature flag.
//!
//! | Backend | Feature | Description |
//! |---------|---------|-------------|
//! | SQLite | `sqlite` | Embedded database, in-memory or file-based |
//!
//! # Example
//!
//! ```no_run
//! # #[cfg(feature = "sqlite")]
//! use doctr_persistence::backends::sqlite::SqliteBackend;
//!
//! # #[cfg(feature = "sqlite")]
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create an in-memory SQLite backend
//! let backend = SqliteBackend::in_memory()?;
//!
//! // Or use a file-based database
//! let backend = SqliteBackend::open("./data/doctr.db")?;
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "sqlite")]
pub mod sqlite;
