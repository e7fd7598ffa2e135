//! Editable request state.
//!
//! [`RequestDraft`] holds what the user is currently typing: plain fields the
//! caller owns and mutates. Submitting turns it into an immutable
//! [`RequestDescription`]; loading a history entry copies its request back in.

use crate::history::HistoryEntry;
use crate::models::{BodyType, HttpMethod, KeyValue, RequestDescription, ResponseResult};
use chrono::Utc;
use thiserror::Error;

/// JSON body a fresh draft starts with.
pub const JSON_BODY_TEMPLATE: &str = "{\n  \n}";

/// Errors raised when a draft cannot be submitted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComposeError {
    #[error("Please enter a URL")]
    EmptyUrl,
}

/// The request currently being edited.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDraft {
    pub url: String,
    pub method: HttpMethod,
    pub headers: Vec<KeyValue>,
    pub body_type: BodyType,
    pub json_body: String,
    pub form_fields: Vec<KeyValue>,
}

impl Default for RequestDraft {
    fn default() -> Self {
        Self {
            url: String::new(),
            method: HttpMethod::GET,
            headers: vec![KeyValue::blank()],
            body_type: BodyType::None,
            json_body: JSON_BODY_TEMPLATE.to_string(),
            form_fields: vec![KeyValue::blank()],
        }
    }
}

impl RequestDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a blank header row.
    pub fn add_header(&mut self) {
        self.headers.push(KeyValue::blank());
    }

    /// Removes the header row at `index`. Out-of-range indices are ignored.
    pub fn remove_header(&mut self, index: usize) {
        if index < self.headers.len() {
            self.headers.remove(index);
        }
    }

    /// Flips the enabled flag of the header row at `index`.
    pub fn toggle_header(&mut self, index: usize) {
        if let Some(row) = self.headers.get_mut(index) {
            row.enabled = !row.enabled;
        }
    }

    /// Appends a blank form row.
    pub fn add_form_field(&mut self) {
        self.form_fields.push(KeyValue::blank());
    }

    /// Removes the form row at `index`. Out-of-range indices are ignored.
    pub fn remove_form_field(&mut self, index: usize) {
        if index < self.form_fields.len() {
            self.form_fields.remove(index);
        }
    }

    /// Flips the enabled flag of the form row at `index`.
    pub fn toggle_form_field(&mut self, index: usize) {
        if let Some(row) = self.form_fields.get_mut(index) {
            row.enabled = !row.enabled;
        }
    }

    /// Snapshots the draft as a request ready to send.
    ///
    /// The JSON body is only carried for JSON requests and the form rows only
    /// for form requests. The description is stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns `ComposeError::EmptyUrl` if no URL was entered.
    ///
    /// # Example
    ///
    /// ```
    /// use api_tester::composer::RequestDraft;
    /// use api_tester::models::{BodyType, HttpMethod};
    ///
    /// let mut draft = RequestDraft::new();
    /// draft.url = "https://api.example.com/users".to_string();
    /// draft.method = HttpMethod::POST;
    /// draft.body_type = BodyType::Json;
    /// draft.json_body = r#"{"name": "Ada"}"#.to_string();
    ///
    /// let description = draft.to_description().unwrap();
    /// assert_eq!(description.json_body.as_deref(), Some(r#"{"name": "Ada"}"#));
    /// assert!(description.form_fields.is_none());
    /// ```
    pub fn to_description(&self) -> Result<RequestDescription, ComposeError> {
        if self.url.is_empty() {
            return Err(ComposeError::EmptyUrl);
        }

        Ok(RequestDescription {
            url: self.url.clone(),
            method: self.method,
            headers: self.headers.clone(),
            body_type: self.body_type,
            json_body: (self.body_type == BodyType::Json).then(|| self.json_body.clone()),
            form_fields: (self.body_type == BodyType::FormData).then(|| self.form_fields.clone()),
            timestamp: Some(Utc::now().timestamp_millis()),
        })
    }

    /// Restores the draft from a history entry.
    ///
    /// The JSON body and form rows are only replaced when the entry carries
    /// them, so switching back to another body type keeps what was typed.
    ///
    /// # Returns
    ///
    /// A copy of the stored response, for display.
    pub fn load_entry(&mut self, entry: &HistoryEntry) -> Option<ResponseResult> {
        let request = &entry.request;
        self.url = request.url.clone();
        self.method = request.method;
        self.headers = request.headers.clone();
        self.body_type = request.body_type;

        if let Some(json_body) = request.json_body.as_ref().filter(|body| !body.is_empty()) {
            self.json_body = json_body.clone();
        }
        if let Some(form_fields) = &request.form_fields {
            self.form_fields = form_fields.clone();
        }

        entry.response.clone()
    }
}
