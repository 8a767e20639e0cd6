use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::console::snapshot::{CommandRequest, OutputSnapshot};

#[cfg(not(target_arch = "wasm32"))]
pub mod client;
#[cfg(target_arch = "wasm32")]
pub mod fetch;

pub const UNKNOWN_ERROR: &str = "Unknown";
pub const SUBMIT_FAILED: &str = "Unable to send command";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Transport-level failure; the request never produced a response.
    #[error("{0}")]
    Network(String),
    #[error("HTTP {0}")]
    Status(u16),
    /// The server refused the command and said why (or we could not tell).
    #[error("{0}")]
    Rejected(String),
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn network(err: impl std::fmt::Display) -> Self {
        ApiError::Network(err.to_string())
    }

    pub fn decode(err: impl std::fmt::Display) -> Self {
        ApiError::Decode(err.to_string())
    }
}

/// The two server endpoints. Single-threaded: futures are not `Send` in the browser.
#[async_trait(?Send)]
pub trait ConsoleApi {
    async fn fetch_output(&self) -> Result<OutputSnapshot, ApiError>;
    async fn submit_command(&self, request: &CommandRequest) -> Result<(), ApiError>;
}

fn is_success(status: u16) -> bool {
    (200..=299).contains(&status)
}

/// Interpret a poll response. Any non-2xx is a failure regardless of body.
pub fn decode_output_response(status: u16, body: &str) -> Result<OutputSnapshot, ApiError> {
    if !is_success(status) {
        return Err(ApiError::Status(status));
    }
    OutputSnapshot::from_json(body).map_err(ApiError::decode)
}

/// Interpret a submit response. Success bodies must still be JSON.
pub fn decode_submit_response(status: u16, body: &str) -> Result<(), ApiError> {
    if !is_success(status) {
        return Err(ApiError::Rejected(rejection_message(body)));
    }
    serde_json::from_str::<Value>(body)
        .map(|_| ())
        .map_err(ApiError::decode)
}

/// Best-effort read of `{ "error": "..." }` from a failed submit.
pub fn rejection_message(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(value) => value
            .get("error")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| SUBMIT_FAILED.to_string()),
        Err(_) => UNKNOWN_ERROR.to_string(),
    }
}
