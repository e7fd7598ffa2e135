//! Native transport using reqwest.
//!
//! Only available with the "native" feature. Responses with a non-2xx status
//! are reported as failures carrying the status, headers and body text;
//! client-side errors (DNS, connect, TLS, timeout, invalid headers) are
//! reported as failures without a status. Client-side failure messages
//! never include the request URL.

use super::{Transport, TransportFailure, TransportOutcome, TransportSuccess};
use crate::builder::{BuiltRequest, RequestBody};
use crate::config::{get_config, ApiTesterConfig};
use crate::models::request::HttpMethod;
use async_trait::async_trait;
use log::debug;
use reqwest::multipart::Form;
use reqwest::redirect::Policy;

/// A [`Transport`] backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Creates a transport configured with the given timeout, redirect and
    /// TLS settings.
    ///
    /// # Errors
    ///
    /// Returns the reqwest error if the client cannot be built (for example
    /// when no TLS backend is available).
    pub fn new(config: &ApiTesterConfig) -> Result<Self, reqwest::Error> {
        let redirect = if config.follow_redirects {
            Policy::limited(config.max_redirects as usize)
        } else {
            Policy::none()
        };

        let client = reqwest::Client::builder()
            .timeout(config.timeout_duration())
            .redirect(redirect)
            .danger_accept_invalid_certs(!config.validate_ssl)
            .build()?;

        Ok(Self { client })
    }

    /// Creates a transport from the global configuration.
    pub fn from_global_config() -> Result<Self, reqwest::Error> {
        Self::new(&get_config())
    }

    /// Wraps an existing client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: &BuiltRequest) -> TransportOutcome {
        if let Err(message) = validate_url(&request.url) {
            return TransportFailure::unreachable(message).into();
        }

        let mut builder = self
            .client
            .request(to_reqwest_method(request.method), &request.url);

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        builder = match &request.body {
            RequestBody::Empty => builder,
            RequestBody::Text(text) => builder.body(text.clone()),
            RequestBody::Form(fields) => {
                let form = fields
                    .iter()
                    .fold(Form::new(), |form, (key, value)| {
                        form.text(key.clone(), value.clone())
                    });
                builder.multipart(form)
            }
        };

        let response = match builder.send().await {
            Ok(response) => response,
            Err(err) => {
                debug!("transport error for {}: {:?}", request.url, err);
                return TransportFailure::unreachable(describe_error(&err.without_url())).into();
            }
        };

        let status = response.status();
        let status_code = status.as_u16();
        let status_text = status.canonical_reason().unwrap_or_default().to_string();
        let final_url = response.url().to_string();
        let headers: Vec<(String, String)> = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();

        let raw_body = match response.text().await {
            Ok(text) => text,
            Err(err) => {
                return TransportFailure::status(status_code, status_text)
                    .with_headers(headers)
                    .with_message(describe_error(&err.without_url()))
                    .into();
            }
        };

        if status.is_success() {
            TransportSuccess {
                status: status_code,
                status_text,
                headers,
                raw_body,
            }
            .into()
        } else {
            let message = format!(
                "Http failure response for {}: {} {}",
                final_url, status_code, status_text
            );
            TransportFailure::status(status_code, status_text)
                .with_headers(headers)
                .with_raw_error(raw_body)
                .with_message(message)
                .into()
        }
    }
}

fn to_reqwest_method(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::GET => reqwest::Method::GET,
        HttpMethod::POST => reqwest::Method::POST,
        HttpMethod::PUT => reqwest::Method::PUT,
        HttpMethod::DELETE => reqwest::Method::DELETE,
        HttpMethod::PATCH => reqwest::Method::PATCH,
        HttpMethod::HEAD => reqwest::Method::HEAD,
        HttpMethod::OPTIONS => reqwest::Method::OPTIONS,
    }
}

/// Validates that the URL is well-formed and uses HTTP or HTTPS.
fn validate_url(url: &str) -> Result<(), String> {
    let parsed = url::Url::parse(url).map_err(|e| format!("Invalid URL: {}", e))?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(format!(
            "Unsupported protocol: only HTTP and HTTPS are supported, got: {}",
            scheme
        )),
    }
}

/// Joins an error with its sources, e.g.
/// `error sending request ...: tcp connect error: Connection refused`.
fn describe_error(err: &(dyn std::error::Error + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
