//! Server configuration for the doctor REST API.
//!
//! This module provides configuration types for the REST server, supporting
//! both programmatic configuration and environment variable overrides.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `DOCTR_SERVER_PORT` | 8080 | Server port |
//! | `DOCTR_SERVER_HOST` | 127.0.0.1 | Host to bind |
//! | `DOCTR_LOG_LEVEL` | info | Log level |
//! | `DOCTR_MAX_BODY_SIZE` | 1048576 | Max request body (bytes) |
//! | `DOCTR_REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `DOCTR_ENABLE_CORS` | true | Enable CORS |
//! | `DOCTR_CORS_ORIGINS` | * | Allowed origins |
//! | `DOCTR_CORS_METHODS` | GET,POST,PUT,DELETE,OPTIONS | Allowed methods |
//! | `DOCTR_CORS_HEADERS` | Content-Type,Authorization,Accept | Allowed headers |
//! | `DOCTR_BASE_URL` | http://localhost:8080 | Prefix for hypermedia links |
//! | `DOCTR_DATABASE_URL` | doctr.db | SQLite path, or `:memory:` |
//! | `DOCTR_DEFAULT_PAGE_SIZE` | 20 | Page size when none is requested |
//! | `DOCTR_MAX_PAGE_SIZE` | 2000 | Upper bound for requested page sizes |
//! | `DOCTR_AUTH_USERNAME` | unset | Basic auth user |
//! | `DOCTR_AUTH_PASSWORD` | unset | Basic auth password |
//!
//! # Example
//!
//! ```rust
//! use doctr_rest::ServerConfig;
//!
//! // Create from environment
//! let config = ServerConfig::from_env();
//!
//! // Or create programmatically
//! let config = ServerConfig {
//!     port: 3000,
//!     host: "0.0.0.0".to_string(),
//!     enable_cors: true,
//!     ..Default::default()
//! };
//! ```

use clap::Parser;

/// Server configuration for the doctor REST API.
///
/// This struct can be constructed from environment variables using [`ServerConfig::from_env`],
/// from command line arguments using [`ServerConfig::parse`], or programmatically.
#[derive(Debug, Clone, Parser)]
#[command(name = "doctr")]
#[command(about = "Doctor registry REST server")]
pub struct ServerConfig {
    /// Port to listen on.
    #[arg(short, long, env = "DOCTR_SERVER_PORT", default_value = "8080")]
    pub port: u16,

    /// Host address to bind to.
    #[arg(long, env = "DOCTR_SERVER_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "DOCTR_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Maximum request body size in bytes.
    #[arg(long, env = "DOCTR_MAX_BODY_SIZE", default_value = "1048576")]
    pub max_body_size: usize,

    /// Request timeout in seconds.
    #[arg(long, env = "DOCTR_REQUEST_TIMEOUT", default_value = "30")]
    pub request_timeout: u64,

    /// Enable CORS.
    #[arg(long, env = "DOCTR_ENABLE_CORS", default_value = "true")]
    pub enable_cors: bool,

    /// Allowed CORS origins (comma-separated, or * for all).
    #[arg(long, env = "DOCTR_CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,

    /// Allowed CORS methods (comma-separated, or * for all).
    #[arg(
        long,
        env = "DOCTR_CORS_METHODS",
        default_value = "GET,POST,PUT,DELETE,OPTIONS"
    )]
    pub cors_methods: String,

    /// Allowed CORS headers (comma-separated, or * for all).
    #[arg(
        long,
        env = "DOCTR_CORS_HEADERS",
        default_value = "Content-Type,Authorization,Accept"
    )]
    pub cors_headers: String,

    /// Base URL for the server (used in Location headers and `_links`).
    #[arg(long, env = "DOCTR_BASE_URL", default_value = "http://localhost:8080")]
    pub base_url: String,

    /// SQLite database path, or `:memory:`.
    #[arg(long, env = "DOCTR_DATABASE_URL", default_value = "doctr.db")]
    pub database_url: String,

    /// Default page size for list results.
    #[arg(long, env = "DOCTR_DEFAULT_PAGE_SIZE", default_value = "20")]
    pub default_page_size: usize,

    /// Maximum page size for list results.
    #[arg(long, env = "DOCTR_MAX_PAGE_SIZE", default_value = "2000")]
    pub max_page_size: usize,

    /// Username required on `/api` routes. Auth is off unless both
    /// username and password are set.
    #[arg(long, env = "DOCTR_AUTH_USERNAME")]
    pub auth_username: Option<String>,

    /// Password required on `/api` routes.
    #[arg(long, env = "DOCTR_AUTH_PASSWORD", hide_env_values = true)]
    pub auth_password: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            host: "127.0.0.1".to_string(),
            log_level: "info".to_string(),
            max_body_size: 1024 * 1024, // 1MB
            request_timeout: 30,
            enable_cors: true,
            cors_origins: "*".to_string(),
            cors_methods: "GET,POST,PUT,DELETE,OPTIONS".to_string(),
            cors_headers: "Content-Type,Authorization,Accept".to_string(),
            base_url: "http://localhost:8080".to_string(),
            database_url: "doctr.db".to_string(),
            default_page_size: 20,
            max_page_size: 2000,
            auth_username: None,
            auth_password: None,
        }
    }
}

impl ServerConfig {
    /// Creates a new ServerConfig from environment variables.
    ///
    /// This is a convenience method that parses environment variables without
    /// requiring command line arguments.
    pub fn from_env() -> Self {
        // Try to parse from environment, falling back to defaults
        Self::try_parse_from(["doctr"]).unwrap_or_default()
    }

    /// Returns the socket address to bind to.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Returns the configured credentials when the auth gate is enabled.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (&self.auth_username, &self.auth_password) {
            (Some(user), Some(pass)) => Some((user.as_str(), pass.as_str())),
            _ => None,
        }
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.port == 0 {
            errors.push("Port cannot be 0".to_string());
        }

        if self.max_body_size == 0 {
            errors.push("Max body size cannot be 0".to_string());
        }

        if self.request_timeout == 0 {
            errors.push("Request timeout cannot be 0".to_string());
        }

        if self.default_page_size == 0 {
            errors.push("Default page size cannot be 0".to_string());
        }

        if self.default_page_size > self.max_page_size {
            errors.push("Default page size cannot exceed max page size".to_string());
        }

        if self.max_page_size > u32::MAX as usize {
            errors.push("Max page size is too large".to_string());
        }

        if url::Url::parse(&self.base_url).is_err() {
            errors.push(format!("Base URL is not a valid URL: {}", self.base_url));
        }

        if self.database_url.trim().is_empty() {
            errors.push("Database URL cannot be empty".to_string());
        }

        if self.auth_username.is_some() != self.auth_password.is_some() {
            errors.push("Auth username and password must be set together".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Creates a configuration suitable for testing.
    ///
    /// This uses ephemeral port 0, an in-memory database, and no auth gate.
    pub fn for_testing() -> Self {
        Self {
            port: 0, // Let OS assign port
            host: "127.0.0.1".to_string(),
            log_level: "debug".to_string(),
            max_body_size: 1024 * 1024,
            request_timeout: 5, // Shorter timeout for tests
            enable_cors: false,
            cors_origins: "*".to_string(),
            cors_methods: "*".to_string(),
            cors_headers: "*".to_string(),
            base_url: "http://localhost:8080".to_string(),
            database_url: ":memory:".to_string(),
            default_page_size: 20,
            max_page_size: 2000,
            auth_username: None,
            auth_password: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.default_page_size, 20);
        assert_eq!(config.max_page_size, 2000);
        assert!(config.enable_cors);
        assert!(config.credentials().is_none());
    }

    #[test]
    fn test_clap_defaults_match_default_impl() {
        let parsed = ServerConfig::try_parse_from(["doctr"]).unwrap();
        let default = ServerConfig::default();
        assert_eq!(parsed.max_body_size, default.max_body_size);
        assert_eq!(parsed.cors_methods, default.cors_methods);
        assert_eq!(parsed.database_url, default.database_url);
    }

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig {
            port: 3000,
            host: "0.0.0.0".to_string(),
            ..Default::default()
        };
        assert_eq!(config.socket_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_base_url_trims_trailing_slash() {
        let config = ServerConfig {
            base_url: "http://example.com/".to_string(),
            ..Default::default()
        };
        assert_eq!(config.base_url(), "http://example.com");
    }

    #[test]
    fn test_validate_valid() {
        let config = ServerConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_invalid_port() {
        let config = ServerConfig {
            port: 0,
            ..Default::default()
        };
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().iter().any(|e| e.contains("Port")));
    }

    #[test]
    fn test_validate_invalid_page_sizes() {
        let config = ServerConfig {
            default_page_size: 100,
            max_page_size: 50,
            ..Default::default()
        };
        let result = config.validate();
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_half_configured_auth() {
        let config = ServerConfig {
            auth_username: Some("admin".to_string()),
            ..Default::default()
        };
        let errors = config.validate().unwrap_err();
        assert!(errors.iter().any(|e| e.contains("Auth")));
    }

    #[test]
    fn test_credentials_when_both_set() {
        let config = ServerConfig {
            auth_username: Some("admin".to_string()),
            auth_password: Some("password".to_string()),
            ..Default::default()
        };
        assert_eq!(config.credentials(), Some(("admin", "password")));
    }

    #[test]
    fn test_for_testing() {
        let config = ServerConfig::for_testing();
        assert_eq!(config.port, 0);
        assert!(!config.enable_cors);
        assert_eq!(config.database_url, ":memory:");
    }
}
