//! Data models for request history.

use crate::models::{RequestDescription, ResponseResult};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single entry in the request history.
///
/// Pairs the request the user sent with the result it produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Unique identifier for this history entry.
    ///
    /// Generated using UUID v4 for guaranteed uniqueness.
    pub id: String,

    /// The request that was sent.
    pub request: RequestDescription,

    /// The normalized result, if the call completed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<ResponseResult>,
}

impl HistoryEntry {
    /// Creates a new history entry with a fresh id.
    ///
    /// # Arguments
    ///
    /// * `request` - The request that was sent
    /// * `response` - The result it produced
    pub fn new(request: RequestDescription, response: Option<ResponseResult>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            request,
            response,
        }
    }

    /// Checks if the stored response was a transport-level success.
    pub fn is_success(&self) -> bool {
        self.response
            .as_ref()
            .map_or(false, ResponseResult::is_success)
    }
}

/// Errors that can occur during history operations.
#[derive(Debug, Error)]
pub enum HistoryError {
    /// Error occurred during storage operations (file I/O).
    #[error("History storage error: {0}")]
    StorageError(#[from] std::io::Error),

    /// Error occurred during serialization or deserialization.
    #[error("History serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
