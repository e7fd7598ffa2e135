//! Display helpers for normalized responses.

use crate::models::response::{ErrorType, ResponseResult};
use chrono::{Local, TimeZone};
use serde_json::Value;

/// Broad status category, used to pick how a status is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    Success,
    Redirect,
    ClientError,
    ServerError,
    Unknown,
}

impl StatusClass {
    pub fn from_status(status: u16) -> Self {
        match status {
            200..=299 => StatusClass::Success,
            300..=399 => StatusClass::Redirect,
            400..=499 => StatusClass::ClientError,
            500..=u16::MAX => StatusClass::ServerError,
            _ => StatusClass::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusClass::Success => "success",
            StatusClass::Redirect => "redirect",
            StatusClass::ClientError => "client-error",
            StatusClass::ServerError => "server-error",
            StatusClass::Unknown => "unknown",
        }
    }
}

/// Formats a body for display.
///
/// JSON values are pretty-printed with 2-space indentation; raw text is
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use api_tester::formatter::format_body;
/// use serde_json::json;
///
/// assert_eq!(format_body(&json!({"a": 1})), "{\n  \"a\": 1\n}");
/// assert_eq!(format_body(&json!("plain text")), "plain text");
/// ```
pub fn format_body(body: &Value) -> String {
    match body {
        Value::String(text) => text.clone(),
        other => serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string()),
    }
}

/// Formats an epoch-millisecond timestamp as local `HH:MM:SS`.
///
/// Out-of-range timestamps are printed as the raw number.
pub fn format_timestamp(timestamp: i64) -> String {
    match Local.timestamp_millis_opt(timestamp).single() {
        Some(time) => time.format("%H:%M:%S").to_string(),
        None => timestamp.to_string(),
    }
}

/// One-line summary of a result, e.g. `200 OK (42ms)` or
/// `0 Unknown Error (3ms) [NETWORK]`.
pub fn format_summary(result: &ResponseResult) -> String {
    let mut summary = format!(
        "{} {} ({}ms)",
        result.status, result.status_text, result.timing_ms
    );
    if result.error_type != ErrorType::None {
        summary.push_str(&format!(" [{}]", result.error_type));
    }
    summary
}
