//! API Tester
//!
//! Compose an HTTP request, send it, and inspect a uniform, classified result,
//! with recent requests retained for replay.
//!
//! # Architecture
//!
//! - **models**: Request descriptions and normalized response records
//! - **composer**: Editable request state owned by the caller
//! - **builder**: Turns a description into transport-ready headers and body
//! - **transport**: The HTTP client seam, with a reqwest implementation behind
//!   the `native` feature
//! - **normalizer**: Converts transport outcomes into classified results
//! - **executor**: Runs the build → send → normalize pipeline
//! - **history**: Bounded, newest-first log of past calls with JSONL storage
//! - **config**: Timeout, redirect, TLS, and history settings
//! - **formatter**: Display helpers for results
//!
//! # Error classification
//!
//! Failed calls are never raised. They come back as a [`models::ResponseResult`]
//! whose `error_type` is one of `CORS`, `NETWORK`, `HTTP_4XX`, `HTTP_5XX`,
//! `TIMEOUT`, or `UNKNOWN`, evaluated in that order, together with a
//! human-readable `error_message`.
//!
//! # Usage
//!
//! ```ignore
//! use api_tester::composer::RequestDraft;
//! use api_tester::executor::execute;
//! use api_tester::history::HistoryLog;
//! use api_tester::transport::ReqwestTransport;
//!
//! let transport = ReqwestTransport::from_global_config()?;
//! let mut history = HistoryLog::default();
//!
//! let mut draft = RequestDraft::new();
//! draft.url = "https://httpbin.org/get".to_string();
//!
//! let request = draft.to_description()?;
//! let result = execute(&request, &transport).await;
//! history.record(request, Some(result));
//! ```

pub mod builder;
pub mod composer;
pub mod config;
pub mod executor;
pub mod formatter;
pub mod history;
pub mod models;
pub mod normalizer;
pub mod transport;

pub use builder::{build, BuiltRequest, RequestBody};
pub use executor::execute;
pub use models::{
    BodyType, ErrorType, HttpMethod, KeyValue, RequestDescription, ResponseResult,
};
pub use normalizer::normalize;
pub use transport::{Transport, TransportFailure, TransportOutcome, TransportSuccess};
