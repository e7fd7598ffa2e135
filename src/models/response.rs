//! Normalized response data models.
//!
//! Every completed call attempt, successful or not, is turned into a single
//! [`ResponseResult`]. Failures are reported through [`ErrorType`] instead of
//! being raised.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Classification of a call attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorType {
    /// The transport completed successfully.
    None,
    /// Status 0 with a signal that the browser/origin policy blocked the response.
    Cors,
    /// Status 0 without any CORS signal: the server could not be reached.
    Network,
    /// Status in 400..=499.
    #[serde(rename = "HTTP_4XX")]
    Http4xx,
    /// Status 500 or above.
    #[serde(rename = "HTTP_5XX")]
    Http5xx,
    /// A non-error status whose failure message mentions a timeout.
    Timeout,
    /// Anything else.
    Unknown,
}

impl ErrorType {
    /// Returns the serialized name of the error type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::None => "NONE",
            ErrorType::Cors => "CORS",
            ErrorType::Network => "NETWORK",
            ErrorType::Http4xx => "HTTP_4XX",
            ErrorType::Http5xx => "HTTP_5XX",
            ErrorType::Timeout => "TIMEOUT",
            ErrorType::Unknown => "UNKNOWN",
        }
    }

    /// Checks if this classification represents a failure.
    pub fn is_error(&self) -> bool {
        *self != ErrorType::None
    }
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Uniform result of one call attempt.
///
/// `error_type` is [`ErrorType::None`] exactly when the transport succeeded;
/// any other value comes with an `error_message`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseResult {
    /// HTTP status code, 0 when no response was received.
    pub status: u16,

    /// Reason phrase reported by the transport.
    pub status_text: String,

    /// Response headers, last value wins for repeated names.
    pub headers: HashMap<String, String>,

    /// Parsed JSON body, or the raw text as a JSON string when it did not parse.
    pub body: Value,

    /// Elapsed time between dispatch and completion, in whole milliseconds.
    pub timing_ms: u64,

    /// Outcome classification.
    pub error_type: ErrorType,

    /// Human-readable explanation, set for every failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,

    /// Completion time in milliseconds since the Unix epoch.
    pub timestamp: i64,
}

impl ResponseResult {
    /// Checks if the call succeeded at the transport level.
    pub fn is_success(&self) -> bool {
        !self.error_type.is_error()
    }

    /// Gets the Content-Type header value if present.
    ///
    /// # Returns
    ///
    /// `Some(&str)` with the content type, or `None` if not set.
    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case("content-type"))
            .map(|(_, v)| v.as_str())
    }

    /// Returns the body as text: raw strings unchanged, JSON values serialized compactly.
    pub fn body_text(&self) -> String {
        match &self.body {
            Value::String(text) => text.clone(),
            Value::Null => String::new(),
            other => other.to_string(),
        }
    }
}
