//! Translation history
//!
//! Bounded, most-recent-first record of past successful translations. Lives
//! only for the session; nothing is persisted.

use crate::shared::types::HistoryEntry;

/// Maximum number of history entries to keep
pub const MAX_HISTORY_SIZE: usize = 5;

#[derive(Debug, Default)]
pub struct TranslationHistory {
    entries: Vec<HistoryEntry>,
}

impl TranslationHistory {
    pub fn new() -> Self {
        Self {
            entries: Vec::with_capacity(MAX_HISTORY_SIZE),
        }
    }

    /// Prepend an entry, evicting the oldest once past capacity. Total for
    /// any entry; there is no failure path.
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.insert(0, entry);
        if self.entries.len() > MAX_HISTORY_SIZE {
            self.entries.truncate(MAX_HISTORY_SIZE);
        }
    }

    /// Read-only view, most recent first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(n: usize) -> HistoryEntry {
        HistoryEntry::new(format!("input {}", n), format!("output {}", n), "Spanish".to_string())
    }

    #[test]
    fn test_push_is_most_recent_first() {
        let mut history = TranslationHistory::new();
        history.push(entry(1));
        history.push(entry(2));

        let entries = history.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].input, "input 2");
        assert_eq!(entries[1].input, "input 1");
    }

    #[test]
    fn test_capacity_is_enforced() {
        let mut history = TranslationHistory::new();
        for n in 0..10 {
            history.push(entry(n));
        }

        assert_eq!(history.len(), MAX_HISTORY_SIZE);
        assert_eq!(history.entries()[0].input, "input 9"); // Most recent
        assert_eq!(history.entries()[4].input, "input 5"); // Oldest survivor
    }

    #[test]
    fn test_sixth_push_evicts_exactly_the_oldest() {
        let mut history = TranslationHistory::new();
        for n in 1..=6 {
            history.push(entry(n));
        }

        let inputs: Vec<&str> = history.entries().iter().map(|e| e.input.as_str()).collect();
        assert_eq!(inputs, vec!["input 6", "input 5", "input 4", "input 3", "input 2"]);
    }

    #[test]
    fn test_empty_history() {
        let history = TranslationHistory::new();
        assert!(history.is_empty());
        assert!(history.entries().is_empty());
    }
}
