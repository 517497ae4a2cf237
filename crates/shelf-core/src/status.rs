//! # Status Line
//!
//! The single transient message that reports the outcome of the last form
//! submission.
//!
//! ## Clearing Without Races
//! Each message is stamped with a fresh [`StatusTicket`]. A clear request
//! only takes effect if it carries the ticket of the message currently
//! shown, so a timer started for an older message can never wipe a newer
//! one.
//!
//! ```text
//! t=0s  show("updated")   → ticket 1, timer(1) armed for t=5s
//! t=3s  show("not found") → ticket 2, timer(2) armed for t=8s
//! t=5s  clear_if(1)       → ignored, "not found" stays visible
//! t=8s  clear_if(2)       → cleared
//! ```
//!
//! This module only keeps the state; the caller owns the clock.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::CoreError;

/// Whether a status message reports success or failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    Success,
    Error,
}

/// Identifies one shown message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct StatusTicket(u64);

/// A message currently on the status line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
    pub ticket: StatusTicket,
    pub shown_at: DateTime<Utc>,
}

impl StatusMessage {
    /// Checks if this message reports a failure.
    pub fn is_error(&self) -> bool {
        self.kind == StatusKind::Error
    }
}

/// The status line: at most one message at a time.
#[derive(Debug, Clone, Default)]
pub struct StatusLine {
    current: Option<StatusMessage>,
    last_ticket: u64,
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the current message and returns its ticket.
    pub fn show(
        &mut self,
        text: impl Into<String>,
        kind: StatusKind,
        now: DateTime<Utc>,
    ) -> StatusTicket {
        self.last_ticket += 1;
        let ticket = StatusTicket(self.last_ticket);
        self.current = Some(StatusMessage {
            text: text.into(),
            kind,
            ticket,
            shown_at: now,
        });
        ticket
    }

    /// Shows a success message.
    pub fn success(&mut self, text: impl Into<String>, now: DateTime<Utc>) -> StatusTicket {
        self.show(text, StatusKind::Success, now)
    }

    /// Shows a failure message built from a registry error.
    pub fn failure(&mut self, error: &CoreError, now: DateTime<Utc>) -> StatusTicket {
        self.show(error.to_string(), StatusKind::Error, now)
    }

    /// Clears the line if `ticket` belongs to the message on display.
    ///
    /// Returns true if something was cleared.
    pub fn clear_if(&mut self, ticket: StatusTicket) -> bool {
        match &self.current {
            Some(message) if message.ticket == ticket => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    /// Returns the message on display, if any.
    pub fn current(&self) -> Option<&StatusMessage> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_replaces_previous_message() {
        let mut line = StatusLine::new();
        let now = Utc::now();

        let first = line.success("Book \"1984\" updated successfully", now);
        let second = line.failure(&CoreError::not_found("Dune"), now);

        assert!(second > first);
        let current = line.current().unwrap();
        assert_eq!(current.text, "Book with title \"Dune\" not found");
        assert!(current.is_error());
    }

    #[test]
    fn test_stale_ticket_does_not_clear_newer_message() {
        let mut line = StatusLine::new();
        let now = Utc::now();

        let old = line.success("first", now);
        let new = line.success("second", now);

        assert!(!line.clear_if(old));
        assert_eq!(line.current().unwrap().text, "second");

        assert!(line.clear_if(new));
        assert!(line.current().is_none());
    }

    #[test]
    fn test_clear_on_empty_line_is_noop() {
        let mut line = StatusLine::new();
        let ticket = line.success("done", Utc::now());
        assert!(line.clear_if(ticket));
        assert!(!line.clear_if(ticket));
    }
}
