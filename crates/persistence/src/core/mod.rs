//! Core storage traits and abstractions.
//!
//! - [`DoctorStorage`] - CRUD and paginated list operations over doctors
//!
//! Backends in [`crate::backends`] implement this trait; the REST layer is
//! generic over it so tests can substitute their own implementation.

pub mod storage;

pub use storage::DoctorStorage;
