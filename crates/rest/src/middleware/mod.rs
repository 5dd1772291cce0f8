//! Middleware for the doctor REST API.
//!
//! - [`auth`] - HTTP basic authentication for the `/api` routes

pub mod auth;

pub use auth::{BasicCredentials, basic_auth_middleware};
