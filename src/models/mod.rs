//! Data models for request descriptions and normalized responses.
//!
//! This module contains the value types that flow through the pipeline: the
//! user-composed request description on one side and the classified response
//! record on the other.

pub mod request;
pub mod response;

pub use request::{BodyType, HttpMethod, KeyValue, RequestDescription};
pub use response::{ErrorType, ResponseResult};
