// src/hooks/clipboard.rs
//! Copy-to-clipboard with a momentary "copied"/"failed" status.
//!
//! Time is passed in rather than read from a clock, so the revert is a
//! deadline stored in the state instead of a timer that could fire late.

use std::time::{Duration, Instant};
use thiserror::Error;

pub const DEFAULT_REVERT_AFTER: Duration = Duration::from_secs(2);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("clipboard is not available")]
    Unavailable,
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}

/// The host's write-only text clipboard.
pub trait ClipboardSink {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardStatus {
    Idle,
    Copied,
    Failed,
}

pub struct Clipboard<S: ClipboardSink> {
    sink: S,
    revert_after: Duration,
    status: ClipboardStatus,
    /// When a non-idle status lapses back to idle.
    revert_at: Option<Instant>,
}

impl<S: ClipboardSink> Clipboard<S> {
    pub fn new(sink: S) -> Self {
        Self::with_revert_after(sink, DEFAULT_REVERT_AFTER)
    }

    pub fn with_revert_after(sink: S, revert_after: Duration) -> Self {
        Self {
            sink,
            revert_after,
            status: ClipboardStatus::Idle,
            revert_at: None,
        }
    }

    /// Writes `text` and returns the resulting status. Replaces any pending
    /// revert: only the latest copy is observable.
    pub fn copy(&mut self, text: &str, now: Instant) -> ClipboardStatus {
        self.status = match self.sink.write_text(text) {
            Ok(()) => ClipboardStatus::Copied,
            Err(e) => {
                log::debug!("copy failed: {e}");
                ClipboardStatus::Failed
            }
        };
        // a delay past the clock's range means the status never lapses
        self.revert_at = now.checked_add(self.revert_after);
        self.status
    }

    pub fn status(&mut self, now: Instant) -> ClipboardStatus {
        if let Some(deadline) = self.revert_at {
            if now >= deadline {
                self.status = ClipboardStatus::Idle;
                self.revert_at = None;
            }
        }
        self.status
    }

    /// Pending revert, if a status is currently showing and will lapse.
    pub fn revert_at(&self) -> Option<Instant> {
        self.revert_at
    }

    /// Drops the pending revert and returns to idle.
    pub fn dispose(&mut self) {
        self.revert_at = None;
        self.status = ClipboardStatus::Idle;
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}
