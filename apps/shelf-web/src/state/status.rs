//! # Status State
//!
//! The status line shown above the forms, and the timers that clear it.
//!
//! ## Clear Timer
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  success/failure ──► StatusLine::show() ──► ticket N                    │
//! │                          │                                              │
//! │                          └──► tokio::spawn(sleep(clear_after))          │
//! │                                        │                                │
//! │                                        ▼                                │
//! │                               StatusLine::clear_if(N)                   │
//! │                               (no-op if a newer message is shown)       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Timers are fire-and-forget. A stale timer finds a newer ticket and does
//! nothing, so there's nothing to cancel.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use chrono::Utc;
use shelf_core::{CoreError, StatusLine, StatusMessage, StatusTicket};
use tracing::debug;

/// Shared handle to the status line.
#[derive(Debug, Clone)]
pub struct StatusState {
    line: Arc<Mutex<StatusLine>>,
    clear_after: Duration,
}

impl StatusState {
    /// Creates an empty status line whose messages clear after `clear_after`.
    pub fn new(clear_after: Duration) -> Self {
        StatusState {
            line: Arc::new(Mutex::new(StatusLine::new())),
            clear_after,
        }
    }

    /// Shows a success message and arms its clear timer.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn success(&self, text: impl Into<String>) -> StatusTicket {
        let ticket = lock(&self.line).success(text, Utc::now());
        self.arm_clear(ticket);
        ticket
    }

    /// Shows a registry error and arms its clear timer.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn failure(&self, error: &CoreError) -> StatusTicket {
        let ticket = lock(&self.line).failure(error, Utc::now());
        self.arm_clear(ticket);
        ticket
    }

    /// Returns the message currently shown, if any.
    pub fn current(&self) -> Option<StatusMessage> {
        lock(&self.line).current().cloned()
    }

    fn arm_clear(&self, ticket: StatusTicket) {
        debug!(?ticket, "Status message shown");

        let line = Arc::clone(&self.line);
        let delay = self.clear_after;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if lock(&line).clear_if(ticket) {
                debug!(?ticket, "Status message cleared");
            }
        });
    }
}

fn lock(line: &Mutex<StatusLine>) -> MutexGuard<'_, StatusLine> {
    line.lock().unwrap_or_else(PoisonError::into_inner)
}
