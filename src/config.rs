use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use logscope_logs::DEFAULT_CAPACITY;

/// Default feed cadence in milliseconds
pub const DEFAULT_INTERVAL_MS: u64 = 3000;

/// Default startup backfill size
pub const DEFAULT_SEED: usize = 50;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Optional `logscope.toml` values; CLI flags take precedence
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Retention window size
    pub capacity: Option<usize>,

    /// Feed cadence in milliseconds
    pub interval_ms: Option<u64>,

    /// Startup backfill record count
    pub seed: Option<usize>,
}

impl FileConfig {
    /// Load from a path; a missing file is not an error
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }
}

/// Fully resolved runtime settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub capacity: usize,
    pub interval: Duration,
    pub seed: usize,
}

impl Settings {
    /// Merge CLI values over file values over built-in defaults
    pub fn resolve(
        file: &FileConfig,
        capacity: Option<usize>,
        interval_ms: Option<u64>,
        seed: Option<usize>,
    ) -> Self {
        let capacity = capacity.or(file.capacity).unwrap_or(DEFAULT_CAPACITY);
        let interval_ms = interval_ms
            .or(file.interval_ms)
            .unwrap_or(DEFAULT_INTERVAL_MS);
        let seed = seed.or(file.seed).unwrap_or(DEFAULT_SEED);

        Self {
            capacity,
            interval: Duration::from_millis(interval_ms),
            seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let settings = Settings::resolve(&FileConfig::default(), None, None, None);
        assert_eq!(settings.capacity, DEFAULT_CAPACITY);
        assert_eq!(settings.interval, Duration::from_millis(DEFAULT_INTERVAL_MS));
        assert_eq!(settings.seed, DEFAULT_SEED);
    }

    #[test]
    fn cli_overrides_file_values() {
        let file = FileConfig {
            capacity: Some(500),
            interval_ms: Some(1000),
            seed: None,
        };
        let settings = Settings::resolve(&file, Some(42), None, Some(0));
        assert_eq!(settings.capacity, 42);
        assert_eq!(settings.interval, Duration::from_millis(1000));
        assert_eq!(settings.seed, 0);
    }

    #[test]
    fn file_values_parse_from_toml() {
        let file: FileConfig = toml::from_str("capacity = 200\ninterval_ms = 250\n").unwrap();
        assert_eq!(file.capacity, Some(200));
        assert_eq!(file.interval_ms, Some(250));
        assert_eq!(file.seed, None);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(toml::from_str::<FileConfig>("capactiy = 10\n").is_err());
    }
}
