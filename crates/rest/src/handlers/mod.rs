//! HTTP request handlers for the doctor API.
//!
//! - [`create`] - Create a doctor
//! - [`read`] - Read a doctor by id
//! - [`update`] - Overwrite an existing doctor
//! - [`delete`] - Delete one doctor, or all of them
//! - [`list`] - List doctors a page at a time, optionally by pincode
//! - [`health`] - Health, liveness and readiness endpoints

pub mod create;
pub mod delete;
pub mod health;
pub mod list;
pub mod read;
pub mod update;

// Re-export handlers for convenience
pub use create::create_handler;
pub use delete::{delete_all_handler, delete_handler};
pub use health::{health_handler, liveness_handler, readiness_handler};
pub use list::list_handler;
pub use read::read_handler;
pub use update::update_handler;
