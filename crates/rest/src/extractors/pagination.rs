//! Pagination extractor.
//!
//! Extracts the `page`, `size` and `pincode` query parameters of the list
//! endpoint.

use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use doctr_persistence::core::DoctorStorage;
use doctr_persistence::types::PageRequest;
use serde::Deserialize;
use std::convert::Infallible;
use tracing::debug;

use crate::state::AppState;

/// Axum extractor for list parameters.
///
/// `page` is zero-based. Paging input is never rejected: a missing, blank or
/// non-numeric `page` means the first page and a negative one is raised to 0.
/// A `size` that is missing, unparseable or below 1 falls back to the
/// configured default, and sizes above the configured maximum are clamped. A
/// blank `pincode` means no filter.
///
/// # Example
///
/// ```rust,ignore
/// use doctr_rest::extractors::Pagination;
///
/// async fn list_handler(pagination: Pagination) {
///     let request = pagination.page_request();
///     let filter = pagination.pincode();
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    page: PageRequest,
    pincode: Option<String>,
}

/// Raw query parameters for listing.
#[derive(Debug, Default, Deserialize)]
struct PaginationQuery {
    page: Option<String>,
    size: Option<String>,
    pincode: Option<String>,
}

impl Pagination {
    /// Creates a new Pagination with the given values.
    pub fn new(page: u32, size: u32, pincode: Option<String>) -> Self {
        Self {
            page: PageRequest::new(page, size),
            pincode,
        }
    }

    /// Resolves raw query values against the page size limits.
    fn resolve(query: PaginationQuery, default_size: usize, max_size: usize) -> Self {
        let max_size = u32::try_from(max_size).unwrap_or(u32::MAX);
        let default_size = u32::try_from(default_size).unwrap_or(max_size);

        let page = match parse_number(query.page.as_deref()) {
            Some(page) => u32::try_from(page.max(0)).unwrap_or(u32::MAX),
            None => 0,
        };

        let size = match parse_number(query.size.as_deref()) {
            Some(size) if size >= 1 => u32::try_from(size).unwrap_or(u32::MAX).min(max_size),
            _ => default_size,
        };

        let pincode = query
            .pincode
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty());

        Self::new(page, size, pincode)
    }

    /// Returns the requested page window.
    pub fn page_request(&self) -> PageRequest {
        self.page
    }

    /// Returns the zero-based page number.
    pub fn page(&self) -> u32 {
        self.page.page
    }

    /// Returns the page size.
    pub fn size(&self) -> u32 {
        self.page.size
    }

    /// Returns the pincode filter, if any.
    pub fn pincode(&self) -> Option<&str> {
        self.pincode.as_deref()
    }
}

/// Parses a query value as an integer; blank or malformed values yield `None`.
fn parse_number(value: Option<&str>) -> Option<i64> {
    value.and_then(|v| v.trim().parse().ok())
}

impl<S> FromRequestParts<AppState<S>> for Pagination
where
    S: DoctorStorage + Send + Sync + 'static,
{
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState<S>,
    ) -> Result<Self, Self::Rejection> {
        // Only a malformed query string (e.g. a repeated key) fails here.
        let query = match Query::<PaginationQuery>::from_request_parts(parts, state).await {
            Ok(Query(query)) => query,
            Err(e) => {
                debug!(error = %e.body_text(), "Ignoring unreadable list parameters");
                PaginationQuery::default()
            }
        };

        Ok(Pagination::resolve(
            query,
            state.default_page_size(),
            state.max_page_size(),
        ))
    }
}
