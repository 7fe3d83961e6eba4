//! Synthetic log feed for logscope
//!
//! This crate is the log-source collaborator: it generates a randomized
//! backfill batch and then produces records on a timer. Cadence and
//! randomness live here, never in the engine.

mod feed;
mod generate;

pub use feed::FeedManager;
pub use generate::Generator;

// Re-export types used in our public API
pub use logscope_types::{LogLevel, LogRecord};
