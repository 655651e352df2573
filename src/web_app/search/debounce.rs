// web_app/search/debounce.rs - Debounce tickets and request ordering
//
// The timer itself belongs to whoever drives the controller (a browser
// timeout handle on the page, a tokio sleep in the session). The gate
// only decides whether a fired timer is still the current one, so a
// timer that was not cancelled in time is harmless.

use std::time::Duration;

/// Handle for one scheduled fetch
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket {
    pub id: u64,
    pub delay: Duration,
}

/// What the driver has to do after a state change
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    /// Cancel any pending timer and start a new one
    Schedule(Ticket),
    /// Cancel any pending timer; results were cleared
    Cleared,
    /// Nothing changed
    Idle,
}

#[derive(Clone, Debug, Default)]
pub struct DebounceGate {
    generation: u64,
    armed: bool,
}

impl DebounceGate {
    /// Supersede any previous ticket
    pub fn arm(&mut self, delay: Duration) -> Ticket {
        self.generation += 1;
        self.armed = true;
        Ticket {
            id: self.generation,
            delay,
        }
    }

    pub fn cancel(&mut self) {
        self.armed = false;
    }

    /// Consume `ticket` if it is the pending one
    pub fn take(&mut self, ticket: Ticket) -> bool {
        if self.armed && ticket.id == self.generation {
            self.armed = false;
            true
        } else {
            false
        }
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }
}

/// Monotonic request numbering
///
/// A response is applied only if it is newer than the last applied one,
/// so a slow early response cannot overwrite a later result.
#[derive(Clone, Debug, Default)]
pub struct RequestSequencer {
    issued: u64,
    applied: u64,
}

impl RequestSequencer {
    pub fn next(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Mark `seq` as applied if it is newer than anything applied so far
    pub fn accept(&mut self, seq: u64) -> bool {
        if seq <= self.applied {
            return false;
        }
        self.applied = seq;
        true
    }

    /// Drop every response still in flight
    pub fn invalidate(&mut self) {
        self.applied = self.issued;
    }

    pub fn is_latest(&self, seq: u64) -> bool {
        seq == self.issued
    }

    pub fn in_flight(&self) -> bool {
        self.applied < self.issued
    }
}
