//! In-memory translation history
//!
//! The only shared mutable state of the service. Every append and every
//! snapshot is a single critical section on one mutex.

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};
use std::sync::{Mutex, MutexGuard};

/// One translation: the English input and its Gopherish output
///
/// Serializes as a single-key object, `{"apple": "gapple"}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub original: String,
    pub translated: String,
}

impl HistoryEntry {
    pub fn new(original: impl Into<String>, translated: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            translated: translated.into(),
        }
    }

    /// Lowercase first character of the original, used for ordering.
    /// Empty originals sort before everything else.
    fn sort_key(&self) -> Option<char> {
        self.original.chars().next().map(|c| c.to_ascii_lowercase())
    }
}

impl Serialize for HistoryEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.original, &self.translated)?;
        map.end()
    }
}

/// Body of the history listing
#[derive(Debug, Serialize)]
pub struct HistoryListing {
    pub history: Vec<HistoryEntry>,
}

#[derive(Debug, Default)]
pub struct History {
    entries: Mutex<Vec<HistoryEntry>>,
}

impl History {
    // Entries are plain values, so a panic elsewhere cannot leave the list
    // half-updated and a poisoned lock is safe to reuse.
    fn lock(&self) -> MutexGuard<'_, Vec<HistoryEntry>> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn record(&self, original: &str, translated: &str) {
        self.lock().push(HistoryEntry::new(original, translated));
    }

    /// All entries sorted by the first letter of the original,
    /// case-insensitively. Entries with the same first letter keep the order
    /// they were recorded in.
    pub fn sorted(&self) -> Vec<HistoryEntry> {
        let mut entries = self.lock().clone();
        entries.sort_by_key(HistoryEntry::sort_key);
        entries
    }

    pub fn listing(&self) -> HistoryListing {
        HistoryListing {
            history: self.sorted(),
        }
    }
}
