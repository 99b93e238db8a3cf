//! REST request failure classification.
//!
//! ERROR HANDLING
//! ==============
//! Every API call returns `ApiError` instead of panicking. Pages turn it into
//! a transient notice via `user_message`; nothing is retried.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Message shown when the server gives no usable error text.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed: {status}")]
    Status { status: u16, body: String },
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Text suitable for a user-facing notice.
    ///
    /// Status errors surface the server-reported body: a bare JSON string,
    /// an object's `message` field, or raw text. Everything else falls back
    /// to a generic message.
    pub fn user_message(&self) -> String {
        match self {
            Self::Status { body, .. } => server_message(body).unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_owned()),
            Self::Network(_) | Self::Decode(_) | Self::Unavailable => GENERIC_FAILURE_MESSAGE.to_owned(),
        }
    }
}

fn server_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(serde_json::Value::String(text)) => Some(text).filter(|t| !t.trim().is_empty()),
        Ok(serde_json::Value::Object(map)) => map
            .get("message")
            .and_then(serde_json::Value::as_str)
            .map(str::to_owned),
        Ok(_) => None,
        Err(_) => Some(body.to_owned()),
    }
}

#[cfg(feature = "hydrate")]
impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => Self::Decode(e.to_string()),
            other => Self::Network(other.to_string()),
        }
    }
}
