//! Core types for the persistence layer.
//!
//! - [`Doctor`], [`DoctorDraft`] - The record and its client-supplied fields
//! - [`PageRequest`], [`Page`] - Offset pagination
//!
//! # Examples
//!
//! ```
//! use doctr_persistence::types::{Page, PageRequest};
//!
//! let page = Page::new(vec!["a", "b"], PageRequest::new(0, 2), 5);
//! assert_eq!(page.total_pages(), 3);
//! assert!(page.has_next());
//! ```

mod doctor;
mod pagination;

pub use doctor::{Doctor, DoctorDraft};
pub use pagination::{DEFAULT_PAGE_SIZE, Page, PageRequest};
