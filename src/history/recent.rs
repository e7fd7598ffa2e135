//! Bounded, newest-first history log.

use super::models::HistoryEntry;
use crate::config::get_config;
use crate::models::{RequestDescription, ResponseResult};
use std::collections::VecDeque;

/// Default number of entries kept.
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

/// The most recent request/response pairs, newest first.
///
/// Recording beyond the limit drops the oldest entries.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryLog {
    entries: VecDeque<HistoryEntry>,
    limit: usize,
}

impl HistoryLog {
    /// Creates an empty log keeping at most `limit` entries.
    ///
    /// A limit of 0 is treated as 1.
    pub fn with_limit(limit: usize) -> Self {
        let limit = limit.max(1);
        Self {
            entries: VecDeque::new(),
            limit,
        }
    }

    /// Creates an empty log sized from the global configuration.
    pub fn from_global_config() -> Self {
        Self::with_limit(get_config().history_limit)
    }

    /// Records a completed call and returns the new entry.
    ///
    /// # Example
    ///
    /// ```
    /// use api_tester::history::HistoryLog;
    /// use api_tester::models::{HttpMethod, RequestDescription};
    ///
    /// let mut log = HistoryLog::with_limit(2);
    /// for path in ["a", "b", "c"] {
    ///     let request = RequestDescription::new(HttpMethod::GET, format!("https://example.com/{path}"));
    ///     log.record(request, None);
    /// }
    ///
    /// let urls: Vec<_> = log.entries().map(|e| e.request.url.as_str()).collect();
    /// assert_eq!(urls, ["https://example.com/c", "https://example.com/b"]);
    /// ```
    pub fn record(
        &mut self,
        request: RequestDescription,
        response: Option<ResponseResult>,
    ) -> &HistoryEntry {
        self.push(HistoryEntry::new(request, response));
        &self.entries[0]
    }

    /// Adds an entry as the newest one.
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push_front(entry);
        self.entries.truncate(self.limit);
    }

    /// Iterates entries from newest to oldest.
    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Finds an entry by id.
    pub fn get(&self, id: &str) -> Option<&HistoryEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Returns the newest entry.
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for HistoryLog {
    /// Creates an empty log using the configured `historyLimit`.
    fn default() -> Self {
        Self::from_global_config()
    }
}
