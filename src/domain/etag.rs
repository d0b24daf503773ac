//! Entity tag derivation and conditional request matching.
//!
//! The tag is a deterministic function of the requested size text, so it can be
//! computed and compared before any cache lookup or rendering happens.

use sha1::{Digest, Sha1};

/// Computes the unquoted ETag for a placeholder request.
///
/// The digest covers `"Placeholder: {width} x {height}"` using the raw text
/// from the request, so `050x50` and `50x50` carry different tags.
pub fn placeholder_etag(width: &str, height: &str) -> String {
    let content = format!("Placeholder: {} x {}", width, height);
    hex::encode(Sha1::digest(content.as_bytes()))
}

/// Wraps a tag in double quotes for use in the `ETag` header.
pub fn quote(tag: &str) -> String {
    format!("\"{}\"", tag)
}

/// Evaluates an `If-None-Match` header against the current quoted tag.
///
/// Uses weak comparison: a `W/` prefix on either side is ignored and `*`
/// matches any representation.
pub fn if_none_match(header: &str, current: &str) -> bool {
    let current = strip_weak(current);
    header.split(',').map(str::trim).any(|candidate| {
        candidate == "*" || (!candidate.is_empty() && strip_weak(candidate) == current)
    })
}

/// Evaluates an `If-Match` header against the current quoted tag.
///
/// Uses strong comparison: weak candidates never match, `*` always does.
pub fn if_match(header: &str, current: &str) -> bool {
    header
        .split(',')
        .map(str::trim)
        .any(|candidate| candidate == "*" || candidate == current)
}

fn strip_weak(tag: &str) -> &str {
    tag.strip_prefix("W/").unwrap_or(tag)
}
