//! Route configuration for the doctor REST API.
//!
//! This module contains the routing configuration that maps HTTP paths
//! to handlers.

pub mod doctor_routes;

pub use doctor_routes::create_routes;
