use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{Duration, Utc};
use rand::Rng;
use rand::seq::SliceRandom;

use logscope_types::{LogLevel, LogRecord};

/// Processes that show up in the synthetic feed
const PROCESSES: &[&str] = &[
    "kernel",
    "systemd",
    "NetworkManager",
    "zos-shell",
    "audio-driver",
    "usb-handler",
];

/// Message pools per level
const INFO_MESSAGES: &[&str] = &[
    "Service started",
    "Connection established",
    "Config loaded",
    "Cache cleared",
    "Sync complete",
];

const WARNING_MESSAGES: &[&str] = &[
    "High memory usage",
    "Slow response time",
    "Deprecated API call",
    "Rate limit approaching",
];

const ERROR_MESSAGES: &[&str] = &[
    "Connection failed",
    "Permission denied",
    "File not found",
    "Timeout exceeded",
];

const DEBUG_MESSAGES: &[&str] = &[
    "Entering function",
    "Variable state",
    "Loop iteration",
    "Return value",
];

/// Seed-batch level mix, info-heavy
const SEED_LEVELS: &[LogLevel] = &[
    LogLevel::Info,
    LogLevel::Info,
    LogLevel::Info,
    LogLevel::Warning,
    LogLevel::Error,
    LogLevel::Debug,
];

fn message_for(level: LogLevel, rng: &mut impl Rng) -> &'static str {
    let pool = match level {
        LogLevel::Info => INFO_MESSAGES,
        LogLevel::Warning => WARNING_MESSAGES,
        LogLevel::Error => ERROR_MESSAGES,
        LogLevel::Debug => DEBUG_MESSAGES,
    };
    pool.choose(rng).copied().unwrap_or("event")
}

/// Randomized record producer with a shared ID counter
///
/// IDs are stamped here, at construction time, so records stay immutable
/// once they leave the generator.
#[derive(Clone)]
pub struct Generator {
    next_id: Arc<AtomicU64>,
}

impl Generator {
    pub fn new() -> Self {
        Self {
            next_id: Arc::new(AtomicU64::new(0)),
        }
    }

    fn take_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }

    /// Produce one live record, timestamped now
    ///
    /// Level mix: roughly one error and one warning per ten records, the
    /// rest info.
    pub fn next_record(&self) -> LogRecord {
        let mut rng = rand::thread_rng();
        let roll: f64 = rng.gen_range(0.0..1.0);
        let level = if roll > 0.9 {
            LogLevel::Error
        } else if roll > 0.8 {
            LogLevel::Warning
        } else {
            LogLevel::Info
        };

        let source = PROCESSES.choose(&mut rng).copied().unwrap_or("kernel");
        let message = message_for(level, &mut rng);

        LogRecord::new(self.take_id(), Utc::now(), level, source, message)
    }

    /// Produce a startup backfill scattered over the past hour, newest-first
    pub fn seed_batch(&self, count: usize) -> Vec<LogRecord> {
        let mut rng = rand::thread_rng();
        let now = Utc::now();

        let mut batch: Vec<LogRecord> = (0..count)
            .map(|_| {
                let level = *SEED_LEVELS.choose(&mut rng).unwrap_or(&LogLevel::Info);
                let source = PROCESSES.choose(&mut rng).copied().unwrap_or("kernel");
                let message = message_for(level, &mut rng);
                let age_secs = rng.gen_range(0..3600);
                LogRecord::new(
                    self.take_id(),
                    now - Duration::seconds(age_secs),
                    level,
                    source,
                    message,
                )
            })
            .collect();

        batch.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        batch
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_batch_is_sorted_newest_first() {
        let generator = Generator::new();
        let batch = generator.seed_batch(50);

        assert_eq!(batch.len(), 50);
        for pair in batch.windows(2) {
            assert!(pair[0].timestamp >= pair[1].timestamp);
        }
    }

    #[test]
    fn ids_are_unique_across_seed_and_live() {
        let generator = Generator::new();
        let mut ids: Vec<u64> = generator.seed_batch(20).iter().map(|r| r.id).collect();
        ids.push(generator.next_record().id);
        ids.push(generator.next_record().id);

        let count = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), count);
    }

    #[test]
    fn generated_sources_come_from_the_process_list() {
        let generator = Generator::new();
        for record in generator.seed_batch(30) {
            assert!(PROCESSES.contains(&record.source.as_str()));
            assert!(!record.message.is_empty());
        }
    }
}
