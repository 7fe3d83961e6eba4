use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::RwLock;

use logscope_types::LogRecord;

/// Default retention window size
pub const DEFAULT_CAPACITY: usize = 100;

/// Thread-safe bounded buffer of log records, oldest-first internally
///
/// Eviction follows arrival order, not timestamp order: seeded backfill may
/// carry out-of-order timestamps and the buffer never re-sorts.
#[derive(Clone)]
pub struct RetentionBuffer {
    /// Internal storage, newest at the back
    records: Arc<RwLock<VecDeque<LogRecord>>>,

    /// Maximum record count
    capacity: usize,
}

impl RetentionBuffer {
    /// Create a new buffer with the given capacity
    pub fn new(capacity: usize) -> Self {
        Self {
            records: Arc::new(RwLock::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    /// Insert a record at the newest position, evicting the oldest if full
    ///
    /// A zero-capacity buffer retains nothing; the record is dropped.
    pub fn insert(&self, record: LogRecord) {
        if self.capacity == 0 {
            return;
        }
        let mut records = self.records.write();
        if records.len() >= self.capacity {
            records.pop_front();
        }
        records.push_back(record);
    }

    /// Seed the buffer with a startup batch, in the given order
    ///
    /// Insertion order is arrival order; callers that want the freshest
    /// seed record to read as newest must pass the batch oldest-first.
    pub fn seed(&self, batch: impl IntoIterator<Item = LogRecord>) {
        for record in batch {
            self.insert(record);
        }
    }

    /// Get all records newest-first (cloned for rendering)
    pub fn snapshot(&self) -> Vec<LogRecord> {
        self.records.read().iter().rev().cloned().collect()
    }

    /// Total record count
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Check if buffer is empty
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    /// Maximum record count
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Remove all records
    pub fn clear(&self) {
        self.records.write().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use logscope_types::LogLevel;

    fn record(id: u64) -> LogRecord {
        LogRecord::new(id, Utc::now(), LogLevel::Info, "test", format!("msg {id}"))
    }

    #[test]
    fn capacity_invariant_holds_after_every_insert() {
        let buffer = RetentionBuffer::new(5);
        for id in 0..20 {
            buffer.insert(record(id));
            assert!(buffer.snapshot().len() <= 5);
        }
        assert_eq!(buffer.len(), 5);
    }

    #[test]
    fn zero_capacity_retains_nothing() {
        let buffer = RetentionBuffer::new(0);
        buffer.insert(record(1));
        buffer.insert(record(2));
        assert!(buffer.is_empty());
        assert_eq!(buffer.snapshot().len(), 0);
    }

    #[test]
    fn capacity_one_keeps_only_the_newest() {
        let buffer = RetentionBuffer::new(1);
        buffer.insert(record(1));
        buffer.insert(record(2));
        assert_eq!(buffer.len(), 1);
        assert_eq!(buffer.snapshot()[0].id, 2);
    }

    #[test]
    fn eviction_drops_exactly_the_oldest() {
        let buffer = RetentionBuffer::new(3);
        for id in 1..=4 {
            buffer.insert(record(id));
        }

        let ids: Vec<u64> = buffer.snapshot().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![4, 3, 2]);
    }

    #[test]
    fn snapshot_is_newest_first() {
        let buffer = RetentionBuffer::new(10);
        buffer.insert(record(1));
        buffer.insert(record(2));
        buffer.insert(record(3));

        let ids: Vec<u64> = buffer.snapshot().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn snapshot_does_not_mutate() {
        let buffer = RetentionBuffer::new(10);
        buffer.insert(record(1));
        let first = buffer.snapshot();
        let second = buffer.snapshot();
        assert_eq!(first, second);
        assert_eq!(buffer.len(), 1);
    }

    #[test]
    fn clear_empties_unconditionally() {
        let buffer = RetentionBuffer::new(3);
        buffer.clear();
        assert!(buffer.is_empty());

        buffer.insert(record(1));
        buffer.insert(record(2));
        buffer.clear();
        assert!(buffer.is_empty());
        assert_eq!(buffer.snapshot().len(), 0);
    }

    #[test]
    fn seed_preserves_given_order() {
        let buffer = RetentionBuffer::new(10);
        buffer.seed((1..=3).map(record));

        let ids: Vec<u64> = buffer.snapshot().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn oversized_seed_keeps_the_tail() {
        let buffer = RetentionBuffer::new(2);
        buffer.seed((1..=5).map(record));

        let ids: Vec<u64> = buffer.snapshot().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![5, 4]);
    }
}
