//! Staleness guard for record-info fetches.
//!
//! The delete page keeps at most one *relevant* fetch per instance: starting
//! a new fetch (or tearing the page down) invalidates every earlier one. The
//! underlying HTTP request is not cancelled; its result is simply discarded
//! when it resolves under a superseded generation.

use std::sync::atomic::{AtomicU64, Ordering};

/// Generation counter handed out to in-flight fetches.
#[derive(Debug, Default)]
pub struct FetchGuard {
    generation: AtomicU64,
}

/// Token tying one in-flight fetch to the generation it was started under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

impl FetchGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new fetch generation, invalidating all earlier tickets.
    pub fn begin(&self) -> FetchTicket {
        FetchTicket(self.generation.fetch_add(1, Ordering::AcqRel) + 1)
    }

    /// Whether a ticket still belongs to the newest generation.
    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        self.generation.load(Ordering::Acquire) == ticket.0
    }

    /// Invalidate every outstanding ticket without starting a new fetch.
    /// Used on teardown.
    pub fn invalidate(&self) {
        self.generation.fetch_add(1, Ordering::AcqRel);
    }
}
