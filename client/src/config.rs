//! Compile-time client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle cannot read process environment at runtime, so the REST
//! backend location is baked in at build time from `COURSEBOARD_API_URL`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Backend base URL used when `COURSEBOARD_API_URL` is unset at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

/// Resolved REST backend base URL without a trailing slash.
pub fn api_base_url() -> String {
    normalize_base_url(option_env!("COURSEBOARD_API_URL"))
}

fn normalize_base_url(raw: Option<&str>) -> String {
    let trimmed = raw.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return DEFAULT_API_BASE_URL.to_owned();
    }
    trimmed.trim_end_matches('/').to_owned()
}
