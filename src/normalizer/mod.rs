//! Response normalization.
//!
//! Converts a [`TransportOutcome`] into a [`ResponseResult`]. Successful
//! responses keep their status and get their body parsed as JSON when
//! possible; failures are classified and given a user-facing message. This
//! path never fails: malformed bodies, missing headers, and empty messages
//! all fall back to documented defaults.

pub mod classify;

pub use classify::{classify, error_message};

use crate::models::response::{ErrorType, ResponseResult};
use crate::transport::{TransportFailure, TransportOutcome, TransportSuccess};
use chrono::Utc;
use serde_json::Value;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Status text used when a failure carries none.
pub const UNKNOWN_STATUS_TEXT: &str = "Unknown Error";

/// Normalizes one call attempt.
///
/// # Arguments
///
/// * `outcome` - What the transport returned
/// * `started` - When the request was dispatched
/// * `finished` - When the outcome arrived
///
/// # Returns
///
/// The uniform result, stamped with the current wall-clock time.
///
/// # Examples
///
/// ```
/// use api_tester::models::ErrorType;
/// use api_tester::normalizer::normalize;
/// use api_tester::transport::{TransportOutcome, TransportSuccess};
/// use std::time::{Duration, Instant};
///
/// let started = Instant::now();
/// let outcome = TransportOutcome::Success(TransportSuccess {
///     status: 200,
///     status_text: "OK".to_string(),
///     headers: vec![],
///     raw_body: r#"{"a":1}"#.to_string(),
/// });
///
/// let result = normalize(outcome, started, started + Duration::from_millis(25));
/// assert_eq!(result.error_type, ErrorType::None);
/// assert_eq!(result.body["a"], 1);
/// assert_eq!(result.timing_ms, 25);
/// ```
pub fn normalize(outcome: TransportOutcome, started: Instant, finished: Instant) -> ResponseResult {
    let elapsed = finished.saturating_duration_since(started);
    normalize_elapsed(outcome, elapsed, Utc::now().timestamp_millis())
}

/// Normalizes an outcome with an already measured duration and completion time.
///
/// # Arguments
///
/// * `outcome` - What the transport returned
/// * `elapsed` - Time between dispatch and completion
/// * `timestamp` - Completion time in milliseconds since the Unix epoch
pub fn normalize_elapsed(outcome: TransportOutcome, elapsed: Duration, timestamp: i64) -> ResponseResult {
    let timing_ms = round_millis(elapsed);
    match outcome {
        TransportOutcome::Success(success) => normalize_success(success, timing_ms, timestamp),
        TransportOutcome::Failure(failure) => normalize_failure(failure, timing_ms, timestamp),
    }
}

/// Rounds a duration to the nearest whole millisecond.
pub fn round_millis(elapsed: Duration) -> u64 {
    (elapsed.as_secs_f64() * 1000.0).round() as u64
}

fn normalize_success(success: TransportSuccess, timing_ms: u64, timestamp: i64) -> ResponseResult {
    ResponseResult {
        status: success.status,
        status_text: success.status_text,
        headers: collect_headers(success.headers),
        body: parse_body(success.raw_body),
        timing_ms,
        error_type: ErrorType::None,
        error_message: None,
        timestamp,
    }
}

fn normalize_failure(failure: TransportFailure, timing_ms: u64, timestamp: i64) -> ResponseResult {
    let status = failure.status.unwrap_or(0);
    let error_type = classify(status, &failure.message, failure.aborted);
    let message = error_message(
        error_type,
        status,
        failure.status_text.as_deref(),
        &failure.message,
    );

    let body = match failure.raw_error {
        Some(raw) if !raw.is_empty() => parse_body(raw),
        _ => Value::String(failure.message),
    };

    let status_text = failure
        .status_text
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| UNKNOWN_STATUS_TEXT.to_string());

    ResponseResult {
        status,
        status_text,
        headers: collect_headers(failure.headers.unwrap_or_default()),
        body,
        timing_ms,
        error_type,
        error_message: Some(message),
        timestamp,
    }
}

/// Parses text as JSON, keeping the raw text when it is not valid JSON.
pub fn parse_body(raw: String) -> Value {
    serde_json::from_str(&raw).unwrap_or(Value::String(raw))
}

/// Collects headers into a map; a repeated name keeps its last value.
pub fn collect_headers(headers: Vec<(String, String)>) -> HashMap<String, String> {
    headers.into_iter().collect()
}
