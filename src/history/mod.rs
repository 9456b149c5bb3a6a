//! Saved-text history: newest-first records, persisted as versioned JSON.
//!
//! The store itself is a plain in-memory list; `persistence` adds
//! load-on-start / atomic save. Callers decide when to persist (the API
//! facade saves after every mutation).

mod persistence;

#[cfg(test)]
mod tests;

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

pub use persistence::HistoryError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub id: String,
    pub text: String,
    #[serde(rename = "timestampMillis")]
    pub timestamp_millis: u64,
}

#[derive(Debug, Clone)]
pub struct HistoryStore {
    /// Newest first.
    records: Vec<HistoryRecord>,
    max_records: usize,
}

impl HistoryStore {
    pub fn new(max_records: usize) -> Self {
        Self {
            records: Vec::new(),
            max_records,
        }
    }

    /// Prepend a record with a fresh id and the current wall-clock
    /// timestamp, truncating the oldest entries past `max_records`.
    pub fn add(&mut self, text: &str) -> HistoryRecord {
        let timestamp_millis = now_millis();
        let record = HistoryRecord {
            id: self.unique_id(timestamp_millis),
            text: text.to_string(),
            timestamp_millis,
        };
        self.records.insert(0, record.clone());
        self.records.truncate(self.max_records);
        record
    }

    /// Remove the record with the given id. Returns whether it existed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        self.records.len() != before
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[HistoryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Millisecond timestamps can collide when saves land in the same tick;
    /// bump a numeric suffix until the id is free.
    fn unique_id(&self, timestamp_millis: u64) -> String {
        let mut candidate = timestamp_millis.to_string();
        let mut bump = 1u32;
        while self.records.iter().any(|r| r.id == candidate) {
            candidate = format!("{timestamp_millis}-{bump}");
            bump += 1;
        }
        candidate
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
