//! API URL resolution
//!
//! Request paths under `/api` are relative to the configured backend; any
//! other URL is already complete and passes through untouched.

const API_PREFIX: &str = "/api";

/// Resolve `url` against `api_url` when it is an `/api` path.
pub fn resolve_api_url(api_url: &str, url: &str) -> String {
    if url.starts_with(API_PREFIX) {
        format!("{}{}", api_url.trim_end_matches('/'), url)
    } else {
        url.to_string()
    }
}
