//! Absolute URL construction from HTTP request headers.

use crate::AppError;
use axum::http::{HeaderMap, header};

const FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Builds an absolute URL for `path` as seen by the client.
///
/// The authority comes from the `Host` header (port kept). The scheme is
/// taken from `X-Forwarded-Proto` when a proxy sets it, otherwise `http`.
///
/// # Errors
///
/// Returns [`AppError::BadRequest`] if:
/// - The `Host` header is missing or empty
/// - The header value contains invalid UTF-8
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "localhost:8000".parse().unwrap());
///
/// let url = build_absolute_uri(&headers, "/image/50x50/").unwrap();
/// assert_eq!(url, "http://localhost:8000/image/50x50/");
/// ```
pub fn build_absolute_uri(headers: &HeaderMap, path: &str) -> Result<String, AppError> {
    let host = headers
        .get(header::HOST)
        .ok_or_else(|| AppError::bad_request("Missing Host header"))?
        .to_str()
        .map_err(|_| AppError::bad_request("Invalid Host header"))?
        .trim();

    if host.is_empty() {
        return Err(AppError::bad_request("Missing Host header"));
    }

    let scheme = headers
        .get(FORWARDED_PROTO)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| *v == "http" || *v == "https")
        .unwrap_or("http");

    Ok(format!("{}://{}{}", scheme, host, path))
}
