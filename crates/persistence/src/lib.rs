//! # doctr-persistence
//!
//! Storage layer for the doctr doctor registry.
//!
//! ## Modules
//!
//! - [`types`] - The [`Doctor`](types::Doctor) record, its draft form, and pagination
//! - [`validation`] - Field constraints applied before every write
//! - [`core`] - The [`DoctorStorage`] trait
//! - [`backends`] - Backend implementations (SQLite behind the `sqlite` feature)
//! - [`error`] - Storage error types
//!
//! ## Quick Start
//!
//! ```no_run
//! # #[cfg(feature = "sqlite")]
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! use doctr_persistence::backends::sqlite::SqliteBackend;
//! use doctr_persistence::core::DoctorStorage;
//! use doctr_persistence::types::{DoctorDraft, PageRequest};
//!
//! let backend = SqliteBackend::in_memory()?;
//! backend.init_schema()?;
//!
//! let doctor = backend
//!     .create(DoctorDraft::new("Srikanth", "Kakumanu", "Lakshmi Prasad Arcade", "Tenali", "522201"))
//!     .await?;
//!
//! let page = backend.list_by_pincode("522201", PageRequest::default()).await?;
//! assert_eq!(page.items, vec![doctor]);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod backends;
pub mod core;
pub mod error;
pub mod types;
pub mod validation;

// Re-export commonly used types at crate root
pub use error::{StorageError, StorageResult};
pub use types::{Doctor, DoctorDraft, Page, PageRequest};

pub use core::DoctorStorage;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
