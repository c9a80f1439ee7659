//! Request origin extraction.
//!
//! Local-fallback URLs are made absolute with the origin the client used to
//! reach the API. The origin is taken from the `Host` header and the scheme
//! from `X-Forwarded-Proto` when a reverse proxy terminates TLS.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::header::HOST;
use axum::http::request::Parts;
use axum::http::HeaderMap;

const FORWARDED_PROTO: &str = "x-forwarded-proto";

/// `<scheme>://<host>` of the current request, if a usable `Host` was sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOrigin(pub Option<String>);

impl RequestOrigin {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let host = headers
            .get(HOST)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|h| is_valid_host(h));

        let Some(host) = host else {
            return Self(None);
        };

        let scheme = headers
            .get(FORWARDED_PROTO)
            .and_then(|v| v.to_str().ok())
            // A proxy chain may send a comma-separated list; the first hop wins.
            .and_then(|v| v.split(',').next())
            .map(|v| v.trim().to_ascii_lowercase())
            .filter(|v| v == "http" || v == "https")
            .unwrap_or_else(|| "http".to_string());

        Self(Some(format!("{scheme}://{host}")))
    }

    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

/// Hostname with an optional port; anything that could inject a path is rejected.
fn is_valid_host(host: &str) -> bool {
    !host.is_empty()
        && host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | ':' | '[' | ']' | '_'))
}

impl<S> FromRequestParts<S> for RequestOrigin
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_headers(&parts.headers))
    }
}
