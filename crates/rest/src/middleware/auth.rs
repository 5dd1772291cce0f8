//! HTTP basic authentication middleware.
//!
//! Guards the `/api` routes with a single static username and password taken
//! from [`ServerConfig`](crate::ServerConfig). Operational endpoints are
//! mounted outside the guarded router and stay open.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{HeaderMap, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use base64::{Engine, engine::general_purpose::STANDARD};
use tracing::warn;

use crate::config::ServerConfig;
use crate::error::RestError;

/// The credentials a request must present.
#[derive(Clone)]
pub struct BasicCredentials {
    username: String,
    password: String,
}

impl std::fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicCredentials")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

impl BasicCredentials {
    /// Creates credentials from a username and password.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Returns the configured credentials, or `None` when the gate is off.
    pub fn from_config(config: &ServerConfig) -> Option<Self> {
        config
            .credentials()
            .map(|(username, password)| Self::new(username, password))
    }

    /// Checks the `Authorization` header of a request.
    pub fn authorizes(&self, headers: &HeaderMap) -> bool {
        headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(parse_basic_authorization)
            .is_some_and(|(user, pass)| {
                // Evaluate both so timing does not reveal which one differs.
                let user_ok = constant_time_eq(user.as_bytes(), self.username.as_bytes());
                let pass_ok = constant_time_eq(pass.as_bytes(), self.password.as_bytes());
                user_ok & pass_ok
            })
    }
}

/// Parses a `Basic` authorization header value into username and password.
///
/// Returns `None` for other schemes, invalid base64, non-UTF-8 content, or a
/// missing `:` separator.
pub fn parse_basic_authorization(value: &str) -> Option<(String, String)> {
    let (scheme, encoded) = value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return None;
    }

    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (user, pass) = decoded.split_once(':')?;

    Some((user.to_string(), pass.to_string()))
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

/// Middleware rejecting requests without matching basic credentials.
///
/// Use with `axum::middleware::from_fn_with_state`.
pub async fn basic_auth_middleware(
    State(credentials): State<Arc<BasicCredentials>>,
    request: Request,
    next: Next,
) -> Response {
    if credentials.authorizes(request.headers()) {
        return next.run(request).await;
    }

    warn!(
        method = %request.method(),
        path = %request.uri().path(),
        "Rejected request with missing or invalid credentials"
    );
    RestError::Unauthorized.into_response()
}
