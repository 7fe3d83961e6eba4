//! Log retention and query engine for logscope
//!
//! This crate provides the bounded retention buffer, the pause/resume
//! ingestion gate, filter/search evaluation, and the console controller
//! that ties them together.

mod buffer;
mod console;
mod filter;
mod gate;

pub use buffer::{DEFAULT_CAPACITY, RetentionBuffer};
pub use console::Console;
pub use filter::{FilterState, RecordFilter, visible_subset};
pub use gate::IngestionGate;

// Re-export types used in our public API
pub use logscope_types::{LevelFilter, LogLevel, LogRecord, Summary};
