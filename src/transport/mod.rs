//! Transport abstraction.
//!
//! The pipeline does not speak HTTP itself. It hands a [`BuiltRequest`] to a
//! [`Transport`] and receives a [`TransportOutcome`] describing what came
//! back, with the body left as undecoded text.

#[cfg(feature = "native")]
pub mod native;

#[cfg(feature = "native")]
pub use native::ReqwestTransport;

use crate::builder::BuiltRequest;
use async_trait::async_trait;

/// A response the transport considers successful.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportSuccess {
    pub status: u16,
    pub status_text: String,
    /// Headers in the order received; names may repeat.
    pub headers: Vec<(String, String)>,
    pub raw_body: String,
}

/// A call that did not produce a successful response.
///
/// Every field except `message` is optional because a failure can happen
/// before any response arrives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransportFailure {
    /// Status code, absent when nothing was received.
    pub status: Option<u16>,
    pub status_text: Option<String>,
    pub headers: Option<Vec<(String, String)>>,
    /// Textual error payload (usually the response body), if any.
    pub raw_error: Option<String>,
    pub message: String,
    /// Set when the response was aborted or opaque to the caller, as happens
    /// when a cross-origin policy blocks it.
    pub aborted: bool,
}

impl TransportFailure {
    /// Creates a failure that never reached a server.
    pub fn unreachable(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    /// Creates a failure for a response with an error status.
    pub fn status(status: u16, status_text: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            status_text: Some(status_text.into()),
            ..Self::default()
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_headers(mut self, headers: Vec<(String, String)>) -> Self {
        self.headers = Some(headers);
        self
    }

    pub fn with_raw_error(mut self, raw_error: impl Into<String>) -> Self {
        self.raw_error = Some(raw_error.into());
        self
    }

    pub fn aborted(mut self) -> Self {
        self.aborted = true;
        self
    }
}

/// Result of issuing one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportOutcome {
    Success(TransportSuccess),
    Failure(TransportFailure),
}

impl From<TransportSuccess> for TransportOutcome {
    fn from(success: TransportSuccess) -> Self {
        TransportOutcome::Success(success)
    }
}

impl From<TransportFailure> for TransportOutcome {
    fn from(failure: TransportFailure) -> Self {
        TransportOutcome::Failure(failure)
    }
}

/// An HTTP client capable of sending a built request.
///
/// Implementations report every failure through [`TransportOutcome::Failure`]
/// and must not decode the body. Cancellation is handled by dropping the
/// returned future.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &BuiltRequest) -> TransportOutcome;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Box<T> {
    async fn send(&self, request: &BuiltRequest) -> TransportOutcome {
        (**self).send(request).await
    }
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    async fn send(&self, request: &BuiltRequest) -> TransportOutcome {
        (**self).send(request).await
    }
}
