//! Log of completed calculations
//!
//! Bounded FIFO: once full, the oldest entry is dropped for each new one.

use crate::core::format::{format_result, DEFAULT_RESULT_PRECISION};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// One completed calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Left-hand side as shown, e.g. `12 + 7` or `sqrt(9)`
    pub expression: String,
    /// Computed value
    pub result: f64,
    /// Unix epoch millis
    pub timestamp: u64,
}

impl HistoryEntry {
    /// Creates an entry stamped with the current time
    #[must_use]
    pub fn new(expression: String, result: f64) -> Self {
        Self::with_timestamp(expression, result, Self::current_timestamp())
    }

    /// Creates an entry with a fixed timestamp
    #[must_use]
    pub const fn with_timestamp(expression: String, result: f64, timestamp: u64) -> Self {
        Self {
            expression,
            result,
            timestamp,
        }
    }

    fn current_timestamp() -> u64 {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }

    /// `"12 + 7 = 19"`
    #[must_use]
    pub fn display(&self) -> String {
        self.display_with(DEFAULT_RESULT_PRECISION)
    }

    /// Like [`display`](Self::display) with `precision` fractional digits
    #[must_use]
    pub fn display_with(&self, precision: usize) -> String {
        format!("{} = {}", self.expression, format_result(self.result, precision))
    }
}

/// Calculation history
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    max_entries: usize,
    precision: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// Default maximum history size
    pub const DEFAULT_MAX_ENTRIES: usize = 100;

    /// Creates a history with the default capacity
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_MAX_ENTRIES)
    }

    /// Creates a history holding at most `max_entries`; zero disables it
    #[must_use]
    pub fn with_capacity(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(max_entries.min(Self::DEFAULT_MAX_ENTRIES)),
            max_entries,
            precision: DEFAULT_RESULT_PRECISION,
        }
    }

    /// Sets the fractional digits used by [`export_formatted`](Self::export_formatted)
    #[must_use]
    pub const fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Appends an entry, evicting the oldest if full
    pub fn push(&mut self, entry: HistoryEntry) {
        if self.max_entries == 0 {
            return;
        }
        while self.entries.len() >= self.max_entries {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Records a calculation
    pub fn record(&mut self, expression: impl Into<String>, result: f64) {
        self.push(HistoryEntry::new(expression.into(), result));
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries
    #[must_use]
    pub const fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Fractional digits of formatted results
    #[must_use]
    pub const fn precision(&self) -> usize {
        self.precision
    }

    /// Drops all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Oldest first
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Newest first
    pub fn iter_rev(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().rev()
    }

    /// Most recent entry
    #[must_use]
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    /// Entry by index, 0 = oldest
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    /// Serializes the entries as a JSON array
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.entries)
    }

    /// Restores entries from a JSON array, keeping the newest that fit
    pub fn from_json(json: &str, max_entries: usize) -> Result<Self, serde_json::Error> {
        let entries: Vec<HistoryEntry> = serde_json::from_str(json)?;
        let mut history = Self::with_capacity(max_entries);
        for entry in entries {
            history.push(entry);
        }
        Ok(history)
    }

    /// One `expression = result` line per entry, oldest first
    #[must_use]
    pub fn export_formatted(&self) -> String {
        self.entries
            .iter()
            .map(|entry| entry.display_with(self.precision))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
