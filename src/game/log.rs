//! Bounded action log
//!
//! Human-readable record of everything that happened in a battle. Kept in
//! battle state so collaborators can render it; bounded so a long match
//! cannot grow it without limit.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Maximum retained entries; the oldest entry is dropped first.
pub const MAX_LOG_ENTRIES: usize = 200;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActionLog {
    entries: VecDeque<String>,
}

impl ActionLog {
    pub fn new() -> Self {
        ActionLog {
            entries: VecDeque::with_capacity(MAX_LOG_ENTRIES),
        }
    }

    /// Append an entry, dropping the oldest once the bound is reached.
    pub fn push(&mut self, entry: impl Into<String>) {
        if self.entries.len() == MAX_LOG_ENTRIES {
            self.entries.pop_front();
        }
        self.entries.push_back(entry.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate oldest-first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn latest(&self) -> Option<&str> {
        self.entries.back().map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
