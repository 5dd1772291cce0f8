//! Common test utilities for REST API testing.
//!
//! - [`harness`] - Test server construction
//! - [`fixtures`] - Doctor payloads
//! - [`assertions`] - HAL response assertions

#![allow(dead_code)]

pub mod assertions;
pub mod fixtures;
pub mod harness;
