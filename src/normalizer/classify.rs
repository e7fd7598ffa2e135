//! Error classification and message synthesis.
//!
//! The rules are evaluated in a fixed order and the first match wins. HTTP
//! status checks come before the timeout heuristic, so a 504 whose message
//! mentions a timeout is still a server error.

use crate::models::response::ErrorType;

/// Message shown for CORS failures.
pub const CORS_MESSAGE: &str = "CORS Error: The server did not include the required CORS headers. This might be due to:\n\
• Missing Access-Control-Allow-Origin header\n\
• Invalid CORS configuration on the server\n\
• Request blocked by browser security policy";

/// Message shown when the server could not be reached.
pub const NETWORK_MESSAGE: &str =
    "Network Error: Unable to reach the server. Check your internet connection or verify the URL.";

/// Message shown for timeouts.
pub const TIMEOUT_MESSAGE: &str = "Timeout Error: The request took too long to complete.";

const CLIENT_ERROR_FALLBACK: &str = "Bad Request";
const SERVER_ERROR_FALLBACK: &str = "Internal Server Error";
const UNKNOWN_FALLBACK: &str = "Unknown error occurred";

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Classifies a failed call.
///
/// # Arguments
///
/// * `status` - Status code, 0 when no response was received
/// * `message` - Failure message from the transport
/// * `aborted` - Whether the response was aborted or opaque
///
/// # Returns
///
/// The failure category. Never [`ErrorType::None`].
///
/// # Examples
///
/// ```
/// use api_tester::models::ErrorType;
/// use api_tester::normalizer::classify;
///
/// assert_eq!(classify(0, "blocked by CORS policy", false), ErrorType::Cors);
/// assert_eq!(classify(0, "connection refused", false), ErrorType::Network);
/// assert_eq!(classify(504, "Gateway Timeout", false), ErrorType::Http5xx);
/// assert_eq!(classify(302, "redirect timeout", false), ErrorType::Timeout);
/// ```
pub fn classify(status: u16, message: &str, aborted: bool) -> ErrorType {
    if status == 0 {
        if aborted || contains_ignore_case(message, "cors") || contains_ignore_case(message, "unknown")
        {
            return ErrorType::Cors;
        }
        return ErrorType::Network;
    }

    match status {
        400..=499 => ErrorType::Http4xx,
        500..=u16::MAX => ErrorType::Http5xx,
        _ if contains_ignore_case(message, "timeout") => ErrorType::Timeout,
        _ => ErrorType::Unknown,
    }
}

/// Builds the user-facing message for a classified failure.
///
/// # Arguments
///
/// * `error_type` - The classification
/// * `status` - Status code of the failure
/// * `status_text` - Reason phrase reported by the transport, if any
/// * `message` - Failure message from the transport
///
/// # Returns
///
/// A fixed explanation for the category, filled in with the status where
/// relevant. [`ErrorType::None`] falls through to the generic form.
pub fn error_message(
    error_type: ErrorType,
    status: u16,
    status_text: Option<&str>,
    message: &str,
) -> String {
    let status_text = status_text.filter(|text| !text.is_empty());

    match error_type {
        ErrorType::Cors => CORS_MESSAGE.to_string(),
        ErrorType::Network => NETWORK_MESSAGE.to_string(),
        ErrorType::Http4xx => format!(
            "Client Error {}: {}",
            status,
            status_text.unwrap_or(CLIENT_ERROR_FALLBACK)
        ),
        ErrorType::Http5xx => format!(
            "Server Error {}: {}",
            status,
            status_text.unwrap_or(SERVER_ERROR_FALLBACK)
        ),
        ErrorType::Timeout => TIMEOUT_MESSAGE.to_string(),
        ErrorType::Unknown | ErrorType::None => {
            let detail = if message.is_empty() {
                UNKNOWN_FALLBACK
            } else {
                message
            };
            format!("Error: {}", detail)
        }
    }
}
