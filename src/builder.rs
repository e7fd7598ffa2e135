//! Request building.
//!
//! Turns a [`RequestDescription`] into the headers and body a transport can
//! send. Building never fails: rows that cannot contribute are skipped and a
//! missing body degrades to [`RequestBody::Empty`].

use crate::models::request::{BodyType, HttpMethod, KeyValue, RequestDescription};

/// Header injected for JSON bodies when the user did not set one.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Body of a built request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestBody {
    /// No body.
    Empty,
    /// Raw text sent as-is.
    Text(String),
    /// Form fields, encoded by the transport as multipart form data.
    Form(Vec<(String, String)>),
}

impl RequestBody {
    /// Checks if there is nothing to send.
    pub fn is_empty(&self) -> bool {
        matches!(self, RequestBody::Empty)
    }
}

/// A request ready to be handed to a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltRequest {
    pub method: HttpMethod,
    pub url: String,
    /// Header names are unique ignoring ASCII case, in first-seen order.
    pub headers: Vec<(String, String)>,
    pub body: RequestBody,
}

impl BuiltRequest {
    /// Looks up a header value, ignoring the case of the name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Gets the Content-Type header value if present.
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }
}

/// Builds the transport-ready request for a description.
///
/// # Arguments
///
/// * `description` - The request the user composed
///
/// # Returns
///
/// The filtered headers and the encoded body.
///
/// # Examples
///
/// ```
/// use api_tester::builder::{build, RequestBody};
/// use api_tester::models::{HttpMethod, KeyValue, RequestDescription};
///
/// let description = RequestDescription::new(HttpMethod::POST, "https://example.com/items")
///     .with_header(KeyValue::disabled("X-Debug", "1"))
///     .with_json_body(r#"{"name": "widget"}"#);
///
/// let built = build(&description);
/// assert_eq!(built.content_type(), Some("application/json"));
/// assert_eq!(built.header("X-Debug"), None);
/// assert_eq!(built.body, RequestBody::Text(r#"{"name": "widget"}"#.to_string()));
/// ```
pub fn build(description: &RequestDescription) -> BuiltRequest {
    BuiltRequest {
        method: description.method,
        url: description.url.clone(),
        headers: build_headers(&description.headers, description.body_type),
        body: build_body(description),
    }
}

/// Builds the header list from the user's rows.
///
/// Disabled rows and rows with an empty key or value are skipped. A repeated
/// name replaces the earlier value in place. JSON bodies get a default
/// Content-Type unless one was set explicitly.
pub fn build_headers(rows: &[KeyValue], body_type: BodyType) -> Vec<(String, String)> {
    let mut headers: Vec<(String, String)> = Vec::with_capacity(rows.len() + 1);

    for row in rows
        .iter()
        .filter(|row| row.enabled && !row.key.is_empty() && !row.value.is_empty())
    {
        set_header(&mut headers, &row.key, &row.value);
    }

    if body_type == BodyType::Json
        && !headers
            .iter()
            .any(|(k, _)| k.eq_ignore_ascii_case("content-type"))
    {
        headers.push(("Content-Type".to_string(), JSON_CONTENT_TYPE.to_string()));
    }

    headers
}

fn set_header(headers: &mut Vec<(String, String)>, name: &str, value: &str) {
    match headers
        .iter_mut()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
    {
        Some(existing) => *existing = (name.to_string(), value.to_string()),
        None => headers.push((name.to_string(), value.to_string())),
    }
}

/// Builds the body for the description's body type.
pub fn build_body(description: &RequestDescription) -> RequestBody {
    match description.body_type {
        BodyType::None => RequestBody::Empty,
        BodyType::Json => match description.json_body.as_deref() {
            Some(json) if !json.is_empty() => RequestBody::Text(json.to_string()),
            _ => RequestBody::Empty,
        },
        BodyType::FormData => match &description.form_fields {
            Some(fields) => RequestBody::Form(
                fields
                    .iter()
                    .filter(|field| field.enabled && !field.key.is_empty())
                    .map(|field| (field.key.clone(), field.value.clone()))
                    .collect(),
            ),
            None => RequestBody::Empty,
        },
    }
}
