//! Bounded in-memory alert log
//!
//! Session-scoped, newest-first ledger of emitted alerts. The reference
//! dashboard kept this unbounded; here it is capped (drop oldest) so a
//! long-running session cannot grow without limit.

use super::types::AlertEntry;
use std::collections::VecDeque;

/// Default maximum number of retained entries
pub const DEFAULT_CAPACITY: usize = 200;

/// Ordered, bounded, user-clearable alert ledger
///
/// Newest-first ordering is an observable contract: iteration yields the
/// most recently appended entry first.
#[derive(Debug, Clone)]
pub struct AlertLog {
    entries: VecDeque<AlertEntry>,
    capacity: usize,
    unread: usize,
}

impl AlertLog {
    /// Create an empty log with the given capacity
    ///
    /// A zero capacity is treated as the default.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = if capacity == 0 { DEFAULT_CAPACITY } else { capacity };
        Self {
            entries: VecDeque::with_capacity(capacity.min(DEFAULT_CAPACITY)),
            capacity,
            unread: 0,
        }
    }

    /// Insert an entry at the front, dropping the oldest if over capacity
    pub fn append(&mut self, entry: AlertEntry) {
        self.entries.push_front(entry);
        while self.entries.len() > self.capacity {
            self.entries.pop_back();
        }
        self.unread = self.unread.saturating_add(1).min(self.entries.len());
    }

    /// Empty the log and reset the unread indicator
    ///
    /// Dedup state is deliberately unaffected: clearing the visible log
    /// must not re-arm suppressed alerts.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.unread = 0;
    }

    /// Mark all entries as read without removing them
    pub fn mark_read(&mut self) {
        self.unread = 0;
    }

    /// Entries, newest first
    pub fn iter(&self) -> impl Iterator<Item = &AlertEntry> {
        self.entries.iter()
    }

    /// Most recent entry, if any
    pub fn latest(&self) -> Option<&AlertEntry> {
        self.entries.front()
    }

    /// Number of retained entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries appended since the last clear/mark_read
    pub fn unread(&self) -> usize {
        self.unread
    }

    /// Configured capacity bound
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for AlertLog {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alerts::{Severity, SYSTEM_CATEGORY};

    fn entry(id: u64, message: &str) -> AlertEntry {
        AlertEntry {
            id,
            severity: Severity::Warning,
            category: SYSTEM_CATEGORY.to_string(),
            message: message.to_string(),
            timestamp: "12:00:00".to_string(),
        }
    }

    #[test]
    fn test_newest_first_ordering() {
        let mut log = AlertLog::default();
        log.append(entry(1, "E1"));
        log.append(entry(2, "E2"));

        let messages: Vec<&str> = log.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["E2", "E1"]);
        assert_eq!(log.latest().unwrap().id, 2);
    }

    #[test]
    fn test_clear_then_append() {
        let mut log = AlertLog::default();
        log.append(entry(1, "E1"));
        log.append(entry(2, "E2"));

        log.clear();
        assert!(log.is_empty());
        assert_eq!(log.unread(), 0);

        log.append(entry(3, "E3"));
        let messages: Vec<&str> = log.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["E3"]);
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let mut log = AlertLog::with_capacity(3);
        for id in 1..=5 {
            log.append(entry(id, &format!("E{}", id)));
        }

        assert_eq!(log.len(), 3);
        let ids: Vec<u64> = log.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![5, 4, 3]);
    }

    #[test]
    fn test_unread_counter() {
        let mut log = AlertLog::default();
        assert_eq!(log.unread(), 0);

        log.append(entry(1, "E1"));
        log.append(entry(2, "E2"));
        assert_eq!(log.unread(), 2);

        log.mark_read();
        assert_eq!(log.unread(), 0);
        assert_eq!(log.len(), 2);

        log.append(entry(3, "E3"));
        assert_eq!(log.unread(), 1);
    }

    #[test]
    fn test_zero_capacity_falls_back_to_default() {
        let log = AlertLog::with_capacity(0);
        assert_eq!(log.capacity(), DEFAULT_CAPACITY);
    }
}
