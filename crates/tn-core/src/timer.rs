//! Single-slot timer for deferred transitions.
//!
//! The game only ever has one transition pending, so the timer holds at
//! most one ticket. Scheduling replaces whatever was there. Callers pass
//! `now` in explicitly, which keeps the timer deterministic under test.

use std::time::Instant;

use crate::effect::{Deferred, Ticket};

/// Holds the next deferred transition and when it is due.
#[derive(Debug, Clone, Default)]
pub struct DeferredTimer {
    slot: Option<(Instant, Ticket)>,
}

impl DeferredTimer {
    /// An idle timer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the timer, superseding any earlier schedule.
    pub fn schedule(&mut self, deferred: Deferred, now: Instant) {
        self.slot = Some((now + deferred.delay, deferred.ticket));
    }

    /// Take the ticket if it is due at `now`.
    pub fn take_due(&mut self, now: Instant) -> Option<Ticket> {
        match self.slot {
            Some((due, ticket)) if due <= now => {
                self.slot = None;
                Some(ticket)
            }
            _ => None,
        }
    }

    /// Disarm the timer.
    pub fn cancel(&mut self) {
        self.slot = None;
    }

    /// Whether a ticket is waiting.
    pub fn is_armed(&self) -> bool {
        self.slot.is_some()
    }

    /// When the armed ticket falls due.
    pub fn next_due(&self) -> Option<Instant> {
        self.slot.map(|(due, _)| due)
    }
}
