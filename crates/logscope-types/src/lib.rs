//! Shared types for logscope
//!
//! This crate contains data structures used across multiple logscope crates.

use chrono::{DateTime, Utc};
use ratatui::style::Color;

/// Log severity level
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum LogLevel {
    #[default]
    Info,
    Warning,
    Error,
    Debug,
}

impl LogLevel {
    /// All levels, in display order
    pub const ALL: [LogLevel; 4] = [Self::Info, Self::Warning, Self::Error, Self::Debug];

    /// Parse log level from common formats
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "info" | "inf" => Some(Self::Info),
            "warning" | "warn" | "wrn" => Some(Self::Warning),
            "error" | "err" => Some(Self::Error),
            "debug" | "dbg" => Some(Self::Debug),
            _ => None,
        }
    }

    /// Get display color for this level
    pub fn color(&self) -> Color {
        match self {
            Self::Info => Color::Blue,
            Self::Warning => Color::Yellow,
            Self::Error => Color::Red,
            Self::Debug => Color::DarkGray,
        }
    }

    /// Short display string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Warning => "WARN",
            Self::Error => "ERROR",
            Self::Debug => "DEBUG",
        }
    }
}

/// A single log record
///
/// Records are immutable once constructed: they are inserted into and
/// evicted from the retention buffer, never mutated in place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogRecord {
    /// Unique sequential ID, assigned by the producer
    pub id: u64,

    /// Time the record was generated
    pub timestamp: DateTime<Utc>,

    /// Severity classification
    pub level: LogLevel,

    /// Originating process/component
    pub source: String,

    /// Display text
    pub message: String,
}

impl LogRecord {
    pub fn new(
        id: u64,
        timestamp: DateTime<Utc>,
        level: LogLevel,
        source: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id,
            timestamp,
            level,
            source: source.into(),
            message: message.into(),
        }
    }
}

/// Level filter: everything, or exactly one level
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LevelFilter {
    #[default]
    All,
    Only(LogLevel),
}

impl LevelFilter {
    /// Check whether a record's level passes this filter
    pub fn accepts(&self, level: LogLevel) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => level == *wanted,
        }
    }

    /// Get display label for this filter
    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "ALL",
            Self::Only(level) => level.as_str(),
        }
    }

    /// Cycle to the next filter
    pub fn next(&self) -> Self {
        match self {
            Self::All => Self::Only(LogLevel::Info),
            Self::Only(LogLevel::Info) => Self::Only(LogLevel::Warning),
            Self::Only(LogLevel::Warning) => Self::Only(LogLevel::Error),
            Self::Only(LogLevel::Error) => Self::Only(LogLevel::Debug),
            Self::Only(LogLevel::Debug) => Self::All,
        }
    }

    /// Cycle to the previous filter
    pub fn prev(&self) -> Self {
        match self {
            Self::All => Self::Only(LogLevel::Debug),
            Self::Only(LogLevel::Info) => Self::All,
            Self::Only(LogLevel::Warning) => Self::Only(LogLevel::Info),
            Self::Only(LogLevel::Error) => Self::Only(LogLevel::Warning),
            Self::Only(LogLevel::Debug) => Self::Only(LogLevel::Error),
        }
    }
}

/// Snapshot of what the display layer needs for its footer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Summary {
    /// Number of records in the current visible subset
    pub count: usize,

    /// Whether ingestion is live (not paused)
    pub live: bool,
}
