//! Integration tests module for API Tester
//!
//! Shared helpers for driving the pipeline without a network.

pub mod end_to_end_test;
#[cfg(feature = "native")]
pub mod native_transport_test;

use api_tester::builder::BuiltRequest;
use api_tester::transport::{Transport, TransportOutcome};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Transport that replays queued outcomes and records every request it sees.
pub struct ReplayTransport {
    outcomes: Mutex<VecDeque<TransportOutcome>>,
    pub sent: Mutex<Vec<BuiltRequest>>,
}

impl ReplayTransport {
    pub fn new<I>(outcomes: I) -> Self
    where
        I: IntoIterator<Item = TransportOutcome>,
    {
        Self {
            outcomes: Mutex::new(outcomes.into_iter().collect()),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn sent(&self) -> Vec<BuiltRequest> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for ReplayTransport {
    async fn send(&self, request: &BuiltRequest) -> TransportOutcome {
        self.sent.lock().unwrap().push(request.clone());
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .expect("ReplayTransport ran out of outcomes")
    }
}
