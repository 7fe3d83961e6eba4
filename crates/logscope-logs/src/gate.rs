use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use logscope_types::LogRecord;

use crate::buffer::RetentionBuffer;

/// Admission control in front of the retention buffer
///
/// While paused, arriving records are dropped outright: pausing freezes the
/// view, it does not queue a backlog to replay later. Drops are intentional
/// and are never logged, retried, or surfaced as errors.
#[derive(Clone)]
pub struct IngestionGate {
    buffer: RetentionBuffer,
    paused: Arc<AtomicBool>,
}

impl IngestionGate {
    /// Create a gate in the Live state
    pub fn new(buffer: RetentionBuffer) -> Self {
        Self {
            buffer,
            paused: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Admit a record if live; returns whether it reached the buffer
    pub fn admit(&self, record: LogRecord) -> bool {
        if self.paused.load(Ordering::SeqCst) {
            return false;
        }
        self.buffer.insert(record);
        true
    }

    /// Set the admission state; idempotent
    pub fn set_paused(&self, paused: bool) {
        self.paused.store(paused, Ordering::SeqCst);
    }

    /// Flip the admission state; returns the new paused flag
    pub fn toggle(&self) -> bool {
        !self.paused.fetch_xor(true, Ordering::SeqCst)
    }

    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::SeqCst)
    }
}
