//! Request history tracking and persistence.
//!
//! The pipeline itself never touches history. Callers pair each result with
//! the request that produced it and record the pair here.
//!
//! # Features
//!
//! - Bounded, newest-first in-memory log
//! - JSONL persistence with corruption-tolerant loading
//!
//! # Example
//!
//! ```ignore
//! use api_tester::history::HistoryLog;
//!
//! let mut log = HistoryLog::default();
//! let result = execute(&request, &transport).await;
//! log.record(request, Some(result));
//! ```

pub mod models;
pub mod recent;
pub mod storage;

pub use models::{HistoryEntry, HistoryError};
pub use recent::{HistoryLog, DEFAULT_HISTORY_LIMIT};
pub use storage::{append_entry, clear_history_file, load_log, maintain_history_limit, save_log};
