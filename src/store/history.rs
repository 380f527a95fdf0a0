//! Bounded per-endpoint result history.

use std::collections::{HashMap, VecDeque};

use crate::probe::CheckResult;

/// Results per endpoint in arrival order, newest last.
///
/// Not synchronized; [`super::ResultStore`] guards it.
#[derive(Debug)]
pub struct LogHistory {
    retention: usize,
    entries: HashMap<String, VecDeque<CheckResult>>,
}

impl LogHistory {
    pub fn new(retention: usize) -> Self {
        Self {
            retention,
            entries: HashMap::new(),
        }
    }

    /// Insert under the result's endpoint ID, evicting the oldest beyond retention.
    pub fn append(&mut self, result: CheckResult) {
        let log = self.entries.entry(result.endpoint.id.clone()).or_default();
        log.push_back(result);
        while log.len() > self.retention {
            log.pop_front();
        }
    }

    /// Up to `limit` most recent results for `id`, oldest first.
    pub fn query(&self, id: &str, limit: usize) -> Vec<CheckResult> {
        match self.entries.get(id) {
            Some(log) => {
                let skip = log.len().saturating_sub(limit);
                log.iter().skip(skip).cloned().collect()
            }
            None => Vec::new(),
        }
    }

}
