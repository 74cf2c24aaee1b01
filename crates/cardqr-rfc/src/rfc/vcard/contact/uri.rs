//! Remote URI checks.

use cardqr_core::constants::GITHUB_BASE_URL;

use crate::error::{RfcError, RfcResult};

/// Returns whether `s` is an absolute `http://` or `https://` URL.
#[must_use]
pub fn is_http_url(s: &str) -> bool {
    s.starts_with("http://") || s.starts_with("https://")
}

/// Accepts `value` only if it is an absolute http(s) URL.
///
/// Inline `data:` URIs, local paths and other schemes are refused so the
/// record never carries embedded binary content.
///
/// ## Errors
/// Returns [`RfcError::InvalidUri`] naming `field` otherwise.
pub fn require_http_url<'a>(field: &'static str, value: &'a str) -> RfcResult<&'a str> {
    if is_http_url(value) {
        Ok(value)
    } else {
        Err(RfcError::InvalidUri {
            field,
            value: value.to_string(),
        })
    }
}

/// Expands a GitHub handle to a profile URL; full http(s) URLs pass through.
#[must_use]
pub fn github_profile_url(handle: &str) -> String {
    if is_http_url(handle) {
        handle.to_string()
    } else {
        format!("{GITHUB_BASE_URL}{handle}")
    }
}
