use logscope_types::{LevelFilter, LogRecord, Summary};

use crate::buffer::RetentionBuffer;
use crate::filter::{FilterState, visible_subset};
use crate::gate::IngestionGate;

/// The single authority translating external events into observable state
///
/// Owns the retention buffer, the ingestion gate, and the filter settings.
/// All reads are pull-based: `visible_subset()` and `summary()` are derived
/// fresh from the buffer on every call, so the displayed view can never
/// drift from the stored records.
pub struct Console {
    buffer: RetentionBuffer,
    gate: IngestionGate,
    filter: FilterState,
}

impl Console {
    pub fn new(capacity: usize) -> Self {
        let buffer = RetentionBuffer::new(capacity);
        let gate = IngestionGate::new(buffer.clone());
        Self {
            buffer,
            gate,
            filter: FilterState::default(),
        }
    }

    /// Backfill the buffer at startup; bypasses the gate
    pub fn seed(&self, batch: impl IntoIterator<Item = LogRecord>) {
        self.buffer.seed(batch);
    }

    /// A new record arrived from the log source
    pub fn on_record_arrived(&self, record: LogRecord) {
        self.gate.admit(record);
    }

    /// Show only the given level (or all)
    pub fn set_level_filter(&mut self, level: LevelFilter) {
        self.filter.level = level;
    }

    pub fn level_filter(&self) -> LevelFilter {
        self.filter.level
    }

    /// Replace the search text
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.filter.search = text.into();
    }

    pub fn search(&self) -> &str {
        &self.filter.search
    }

    /// Flip live/paused; returns the new paused flag
    pub fn toggle_pause(&self) -> bool {
        self.gate.toggle()
    }

    pub fn is_paused(&self) -> bool {
        self.gate.is_paused()
    }

    /// Drop all retained records; filter settings are untouched
    pub fn clear(&self) {
        self.buffer.clear();
    }

    /// Derive the current visible subset, newest-first
    pub fn visible_subset(&self) -> Vec<LogRecord> {
        visible_subset(&self.buffer.snapshot(), &self.filter)
    }

    /// Count of visible records plus the live flag, for the footer
    pub fn summary(&self) -> Summary {
        Summary {
            count: self.visible_subset().len(),
            live: !self.gate.is_paused(),
        }
    }

    /// Total retained records, ignoring filters
    pub fn retained(&self) -> usize {
        self.buffer.len()
    }

    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use logscope_types::LogLevel;

    fn record(id: u64, level: LogLevel, source: &str, message: &str) -> LogRecord {
        LogRecord::new(id, Utc::now(), level, source, message)
    }

    #[test]
    fn retention_and_query_scenario() {
        // C=3; insert A(info), B(error), C(warning), D(info)
        let mut console = Console::new(3);
        console.on_record_arrived(record(1, LogLevel::Info, "kernel", "A started"));
        console.on_record_arrived(record(2, LogLevel::Error, "systemd", "B failed"));
        console.on_record_arrived(record(3, LogLevel::Warning, "kernel", "C slow"));
        console.on_record_arrived(record(4, LogLevel::Info, "usb-handler", "D attached"));

        // A evicted, newest first
        let ids: Vec<u64> = console.visible_subset().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![4, 3, 2]);

        console.set_level_filter(LevelFilter::Only(LogLevel::Error));
        let ids: Vec<u64> = console.visible_subset().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2]);

        console.set_level_filter(LevelFilter::All);
        console.set_search("d");
        // "B failed", "D attached", "usb-handler" all contain 'd'
        let ids: Vec<u64> = console.visible_subset().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![4, 2]);
    }

    #[test]
    fn pause_drops_arrivals_and_summary_tracks_it() {
        let console = Console::new(10);
        console.on_record_arrived(record(1, LogLevel::Info, "kernel", "up"));
        assert!(console.summary().live);

        let paused = console.toggle_pause();
        assert!(paused);
        console.on_record_arrived(record(2, LogLevel::Info, "kernel", "dropped"));

        let summary = console.summary();
        assert_eq!(summary.count, 1);
        assert!(!summary.live);

        console.toggle_pause();
        console.on_record_arrived(record(3, LogLevel::Info, "kernel", "back"));
        assert_eq!(console.summary().count, 2);
    }

    #[test]
    fn clear_resets_counts_but_not_filters() {
        let mut console = Console::new(10);
        console.set_search("needle");
        for id in 0..5 {
            console.on_record_arrived(record(id, LogLevel::Info, "proc", "needle here"));
        }
        assert_eq!(console.summary().count, 5);

        console.clear();
        assert_eq!(console.visible_subset().len(), 0);
        assert_eq!(console.summary().count, 0);
        assert_eq!(console.search(), "needle");
    }

    #[test]
    fn filter_changes_do_not_touch_retained_records() {
        let mut console = Console::new(10);
        for id in 0..4 {
            console.on_record_arrived(record(id, LogLevel::Debug, "proc", "event"));
        }

        console.set_level_filter(LevelFilter::Only(LogLevel::Error));
        assert_eq!(console.visible_subset().len(), 0);
        assert_eq!(console.retained(), 4);

        console.set_level_filter(LevelFilter::All);
        assert_eq!(console.visible_subset().len(), 4);
    }

    #[test]
    fn seed_bypasses_a_paused_gate() {
        let console = Console::new(10);
        console.toggle_pause();
        console.seed((0..3).map(|id| record(id, LogLevel::Info, "backfill", "old")));
        assert_eq!(console.retained(), 3);
    }
}
