//! Response header generation.

use axum::http::{HeaderMap, HeaderValue, header};

/// Media type of HAL documents.
pub const HAL_JSON: &str = "application/hal+json";

/// Builder for doctor response headers.
///
/// Generates:
/// - Content-Type (`application/hal+json`)
/// - Location (for create operations)
#[derive(Debug, Default)]
pub struct ResourceHeaders {
    /// Location URL (for created doctors).
    location: Option<String>,
    /// Content-Type.
    content_type: String,
}

impl ResourceHeaders {
    /// Creates a new ResourceHeaders builder.
    pub fn new() -> Self {
        Self {
            content_type: HAL_JSON.to_string(),
            ..Default::default()
        }
    }

    /// Sets the Location URL.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Converts to an Axum HeaderMap.
    pub fn to_header_map(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();

        if let Ok(value) = HeaderValue::from_str(&self.content_type) {
            headers.insert(header::CONTENT_TYPE, value);
        }

        if let Some(location) = &self.location {
            if let Ok(value) = HeaderValue::from_str(location) {
                headers.insert(header::LOCATION, value);
            }
        }

        headers
    }

    /// Returns the Location value.
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let headers = ResourceHeaders::new();
        assert_eq!(headers.content_type, HAL_JSON);
        assert!(headers.location().is_none());
    }

    #[test]
    fn test_to_header_map() {
        let map = ResourceHeaders::new()
            .with_location("http://localhost:8080/api/doctors/1")
            .to_header_map();

        assert_eq!(map[header::CONTENT_TYPE], HAL_JSON);
        assert_eq!(map[header::LOCATION], "http://localhost:8080/api/doctors/1");
    }
}
