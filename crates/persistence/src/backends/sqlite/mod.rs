//! SQLite backend implementation.
//!
//! Supports both in-memory databases (for tests) and file-based databases.
//! File databases run in WAL mode; an in-memory database is held by a single
//! pooled connection so every request sees the same data.
//!
//! # Example
//!
//! ```no_run
//! use doctr_persistence::backends::sqlite::SqliteBackend;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let backend = SqliteBackend::open("./doctr.db")?;
//! backend.init_schema()?;
//! # Ok(())
//! # }
//! ```
//!
//! # Schema
//!
//! ```sql
//! CREATE TABLE doctor (
//!     id INTEGER PRIMARY KEY AUTOINCREMENT,
//!     first_name TEXT NOT NULL,
//!     last_name TEXT NOT NULL,
//!     address TEXT NOT NULL,
//!     city TEXT NOT NULL,
//!     pincode TEXT NOT NULL
//! );
//! CREATE INDEX idx_doctor_pincode ON doctor (pincode);
//! ```

mod backend;
mod schema;
mod storage;

pub use backend::{SqliteBackend, SqliteBackendConfig};
pub use schema::SCHEMA_VERSION;
