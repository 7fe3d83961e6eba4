use logscope_types::{LevelFilter, LogRecord};

/// Transient filter settings, owned by the console controller
///
/// Independent of buffer contents: changing these never touches stored
/// records, only which of them the next read makes visible.
#[derive(Clone, Debug, Default)]
pub struct FilterState {
    /// Level to show, or all
    pub level: LevelFilter,

    /// Case-insensitive substring to match against message and source;
    /// empty matches everything
    pub search: String,
}

impl FilterState {
    /// Compile into a matcher with the search needle lowered once
    pub fn compile(&self) -> RecordFilter {
        RecordFilter {
            level: self.level,
            needle: self.search.to_lowercase(),
        }
    }
}

/// Compiled filter for log records
#[derive(Clone, Debug)]
pub struct RecordFilter {
    level: LevelFilter,
    needle: String,
}

impl RecordFilter {
    /// Check if a record passes both the level and search predicates
    pub fn matches(&self, record: &LogRecord) -> bool {
        if !self.level.accepts(record.level) {
            return false;
        }

        if self.needle.is_empty() {
            return true;
        }

        record.message.to_lowercase().contains(&self.needle)
            || record.source.to_lowercase().contains(&self.needle)
    }
}

/// Evaluate the visible subset of `records` under `filter`
///
/// Pure: no side effects, deterministic for fixed inputs, and the output
/// preserves the input (newest-first) ordering.
pub fn visible_subset(records: &[LogRecord], filter: &FilterState) -> Vec<LogRecord> {
    let compiled = filter.compile();
    records
        .iter()
        .filter(|r| compiled.matches(r))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use logscope_types::LogLevel;

    fn record(id: u64, level: LogLevel, source: &str, message: &str) -> LogRecord {
        LogRecord::new(id, Utc::now(), level, source, message)
    }

    fn sample() -> Vec<LogRecord> {
        vec![
            record(3, LogLevel::Warning, "systemd", "High memory usage"),
            record(2, LogLevel::Error, "kernel", "Connection failed"),
            record(1, LogLevel::Info, "audio-driver", "Service started"),
        ]
    }

    #[test]
    fn empty_filter_passes_everything_in_order() {
        let records = sample();
        let visible = visible_subset(&records, &FilterState::default());
        assert_eq!(visible, records);
    }

    #[test]
    fn level_filter_keeps_only_matching_level() {
        let records = sample();
        let filter = FilterState {
            level: LevelFilter::Only(LogLevel::Error),
            search: String::new(),
        };

        let visible = visible_subset(&records, &filter);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, 2);
    }

    #[test]
    fn search_is_case_insensitive_on_message() {
        let records = sample();
        let filter = FilterState {
            level: LevelFilter::All,
            search: "connection".into(),
        };

        let visible = visible_subset(&records, &filter);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].message, "Connection failed");
    }

    #[test]
    fn search_also_matches_source() {
        let records = sample();
        let filter = FilterState {
            level: LevelFilter::All,
            search: "AUDIO".into(),
        };

        let visible = visible_subset(&records, &filter);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].source, "audio-driver");
    }

    #[test]
    fn both_predicates_must_pass() {
        let records = sample();
        let filter = FilterState {
            level: LevelFilter::Only(LogLevel::Info),
            search: "connection".into(),
        };

        assert!(visible_subset(&records, &filter).is_empty());
    }

    #[test]
    fn evaluation_is_pure() {
        let records = sample();
        let filter = FilterState {
            level: LevelFilter::Only(LogLevel::Warning),
            search: "memory".into(),
        };

        let first = visible_subset(&records, &filter);
        let second = visible_subset(&records, &filter);
        assert_eq!(first, second);
        // Inputs untouched
        assert_eq!(records.len(), 3);
    }

    #[test]
    fn filtering_never_reorders() {
        let records: Vec<LogRecord> = (0..10)
            .rev()
            .map(|id| record(id, LogLevel::Info, "proc", "event"))
            .collect();
        let filter = FilterState {
            level: LevelFilter::All,
            search: "event".into(),
        };

        let ids: Vec<u64> = visible_subset(&records, &filter)
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, (0..10).rev().collect::<Vec<u64>>());
    }
}
