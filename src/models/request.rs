//! Request description data models.
//!
//! This module defines the structures a user fills in before sending a
//! request: the method, URL, header rows, and the body in one of the
//! supported encodings.

use serde::{Deserialize, Serialize};

/// HTTP request method.
///
/// The methods a request can be composed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HttpMethod {
    /// HTTP GET method - retrieve a resource
    GET,
    /// HTTP POST method - submit data to create a resource
    POST,
    /// HTTP PUT method - replace a resource
    PUT,
    /// HTTP DELETE method - remove a resource
    DELETE,
    /// HTTP PATCH method - partially modify a resource
    PATCH,
    /// HTTP OPTIONS method - describe communication options
    OPTIONS,
    /// HTTP HEAD method - retrieve headers only
    HEAD,
}

impl HttpMethod {
    /// All methods in the order they are offered to the user.
    pub const ALL: [HttpMethod; 7] = [
        HttpMethod::GET,
        HttpMethod::POST,
        HttpMethod::PUT,
        HttpMethod::DELETE,
        HttpMethod::PATCH,
        HttpMethod::OPTIONS,
        HttpMethod::HEAD,
    ];

    /// Returns the string representation of the HTTP method.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::GET => "GET",
            HttpMethod::POST => "POST",
            HttpMethod::PUT => "PUT",
            HttpMethod::DELETE => "DELETE",
            HttpMethod::PATCH => "PATCH",
            HttpMethod::OPTIONS => "OPTIONS",
            HttpMethod::HEAD => "HEAD",
        }
    }

    /// Parses a string into an HttpMethod.
    ///
    /// # Arguments
    ///
    /// * `s` - A string slice representing the HTTP method
    ///
    /// # Returns
    ///
    /// `Some(HttpMethod)` if the string is a valid HTTP method, `None` otherwise.
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|method| method.as_str().eq_ignore_ascii_case(s.trim()))
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How the request body is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BodyType {
    /// No body is sent.
    #[default]
    #[serde(rename = "none")]
    None,
    /// The raw JSON text is sent as-is.
    #[serde(rename = "json")]
    Json,
    /// Form fields are sent as a multipart form.
    #[serde(rename = "form-data")]
    FormData,
}

impl BodyType {
    /// Returns the serialized name of the body type.
    pub fn as_str(&self) -> &'static str {
        match self {
            BodyType::None => "none",
            BodyType::Json => "json",
            BodyType::FormData => "form-data",
        }
    }
}

impl std::fmt::Display for BodyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_enabled() -> bool {
    true
}

/// A single header or form field row.
///
/// Disabled rows stay in the description but are left out of the built
/// request. Keys need not be unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyValue {
    pub key: String,
    pub value: String,
    /// Rows without an explicit flag count as enabled.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

impl KeyValue {
    /// Creates an enabled row.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            enabled: true,
        }
    }

    /// Creates a disabled row.
    pub fn disabled(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            enabled: false,
            ..Self::new(key, value)
        }
    }

    /// Creates the blank, enabled row a new editor line starts with.
    pub fn blank() -> Self {
        Self::new("", "")
    }
}

/// Everything needed to issue one request.
///
/// Built fresh for every submission and not modified afterwards. `json_body`
/// is only meaningful for [`BodyType::Json`] and `form_fields` only for
/// [`BodyType::FormData`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestDescription {
    /// Target URL for the request.
    pub url: String,

    /// HTTP method (GET, POST, PUT, DELETE, etc.).
    pub method: HttpMethod,

    /// Header rows in insertion order.
    #[serde(default)]
    pub headers: Vec<KeyValue>,

    /// Body encoding.
    #[serde(default)]
    pub body_type: BodyType,

    /// Raw JSON text, sent verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json_body: Option<String>,

    /// Form rows in insertion order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form_fields: Option<Vec<KeyValue>>,

    /// Submission time in milliseconds since the Unix epoch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
}

impl RequestDescription {
    /// Creates a description with no headers and no body.
    ///
    /// # Arguments
    ///
    /// * `method` - HTTP method
    /// * `url` - Target URL
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method,
            headers: Vec::new(),
            body_type: BodyType::None,
            json_body: None,
            form_fields: None,
            timestamp: None,
        }
    }

    /// Appends a header row.
    pub fn with_header(mut self, header: KeyValue) -> Self {
        self.headers.push(header);
        self
    }

    /// Switches to a JSON body with the given raw text.
    pub fn with_json_body(mut self, json: impl Into<String>) -> Self {
        self.body_type = BodyType::Json;
        self.json_body = Some(json.into());
        self
    }

    /// Switches to a form body with the given rows.
    pub fn with_form_fields(mut self, fields: Vec<KeyValue>) -> Self {
        self.body_type = BodyType::FormData;
        self.form_fields = Some(fields);
        self
    }

    /// Sets the submission timestamp.
    pub fn with_timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = Some(timestamp);
        self
    }
}
