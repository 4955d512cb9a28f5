//! Bounded, deduplicating selection history
//!
//! Newest entries come first. Recording a color already present is a
//! no-op: it neither duplicates nor moves the existing entry. Entries are
//! only ever dropped from the old end when capacity is exceeded, or all at
//! once when a new session starts.

use serde::Serialize;
use tracing::debug;

use crate::constants::policy;

/// Immutable history of picked hex colors
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionHistory {
    entries: Vec<String>,
    capacity: usize,
}

impl Default for SelectionHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionHistory {
    /// Empty history with the reference capacity of 12
    pub fn new() -> Self {
        Self::with_capacity(policy::HISTORY_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Return the history with `hex` recorded
    ///
    /// If `hex` is already present the result equals `self`. Otherwise it
    /// is prepended and the oldest entries beyond capacity are dropped.
    #[must_use]
    pub fn record(&self, hex: &str) -> SelectionHistory {
        if self.contains(hex) {
            debug!(hex, "Color already in history");
            return self.clone();
        }

        let mut entries = Vec::with_capacity(self.capacity);
        entries.push(hex.to_string());
        entries.extend(self.entries.iter().take(self.capacity.saturating_sub(1)).cloned());
        entries.truncate(self.capacity);

        debug!(hex, len = entries.len(), capacity = self.capacity, "Recorded color in history");

        SelectionHistory {
            entries,
            capacity: self.capacity,
        }
    }

    /// Empty history keeping this capacity
    #[must_use]
    pub fn cleared(&self) -> SelectionHistory {
        Self::with_capacity(self.capacity)
    }

    pub fn contains(&self, hex: &str) -> bool {
        self.entries.iter().any(|entry| entry == hex)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn most_recent(&self) -> Option<&str> {
        self.entries.first().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}
