//! Request execution.
//!
//! Ties the pipeline together: build the request, hand it to a transport,
//! time the call, and normalize whatever comes back. Execution never returns
//! an error; failures are part of the returned [`ResponseResult`].

use crate::builder::build;
use crate::models::request::RequestDescription;
use crate::models::response::ResponseResult;
use crate::normalizer::normalize;
use crate::transport::Transport;
use log::{debug, warn};
use std::time::Instant;

/// Executes a request description and returns the normalized result.
///
/// The transport call is the only suspension point. Dropping the returned
/// future cancels the call and no result is produced.
///
/// # Arguments
///
/// * `description` - The request to send
/// * `transport` - The HTTP client that performs the call
///
/// # Returns
///
/// The classified result of the call attempt.
///
/// # Examples
///
/// ```ignore
/// use api_tester::executor::execute;
/// use api_tester::models::{HttpMethod, RequestDescription};
/// use api_tester::transport::ReqwestTransport;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let transport = ReqwestTransport::from_global_config()?;
/// let description = RequestDescription::new(HttpMethod::GET, "https://httpbin.org/get");
///
/// let result = execute(&description, &transport).await;
/// println!("{} {} in {}ms", result.status, result.status_text, result.timing_ms);
/// # Ok(())
/// # }
/// ```
pub async fn execute<T>(description: &RequestDescription, transport: &T) -> ResponseResult
where
    T: Transport + ?Sized,
{
    let request = build(description);
    debug!(
        "sending {} {} ({} headers, body type {})",
        request.method,
        request.url,
        request.headers.len(),
        description.body_type
    );

    let started = Instant::now();
    let outcome = transport.send(&request).await;
    let finished = Instant::now();

    let result = normalize(outcome, started, finished);
    if result.is_success() {
        debug!(
            "{} {} completed with {} in {}ms",
            request.method, request.url, result.status, result.timing_ms
        );
    } else {
        warn!(
            "{} {} failed as {} (status {}) in {}ms",
            request.method, request.url, result.error_type, result.status, result.timing_ms
        );
    }

    result
}
