//! Bounded log of recent exchanges.
//!
//! The log is write-only as far as answering goes: classification and reply
//! generation never read it. It exists for display (`/history`) and
//! diagnostics.

use chrono::{DateTime, Utc};
use pocketwise_core::Intent;
use std::collections::VecDeque;
use std::sync::Mutex;

pub const DEFAULT_HISTORY_PAIRS: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct Exchange {
    pub at: DateTime<Utc>,
    pub intent: Intent,
    pub user: String,
    pub assistant: String,
}

/// Keeps the most recent `max_pairs` exchanges
#[derive(Debug)]
pub struct SessionLog {
    max_pairs: usize,
    entries: Mutex<VecDeque<Exchange>>,
}

impl SessionLog {
    pub fn new(max_pairs: usize) -> Self {
        Self {
            max_pairs,
            entries: Mutex::new(VecDeque::with_capacity(max_pairs)),
        }
    }

    pub fn max_pairs(&self) -> usize {
        self.max_pairs
    }

    pub fn record(&self, exchange: Exchange) {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.push_back(exchange);
        while entries.len() > self.max_pairs {
            entries.pop_front();
        }
    }

    /// Oldest first
    pub fn snapshot(&self) -> Vec<Exchange> {
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).clear();
    }
}

impl Default for SessionLog {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_PAIRS)
    }
}
