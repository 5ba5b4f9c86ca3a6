// ABOUTME: Last-request-wins ticketing for remote advice per subject
// ABOUTME: A response is kept only if its ticket is still the newest for that subject
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AURA BMI Advisor

use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;

/// Proof of having started a request for a subject
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTicket {
    subject: String,
    sequence: u64,
}

impl RequestTicket {
    /// Global issue order
    #[must_use]
    pub const fn sequence(&self) -> u64 {
        self.sequence
    }
}

/// Issues tickets and tracks the newest one per subject
#[derive(Debug, Default)]
pub struct AdviceSequencer {
    next: AtomicU64,
    newest: DashMap<String, u64>,
}

impl AdviceSequencer {
    /// Create an empty sequencer
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request, superseding any in flight for the same subject
    pub fn begin(&self, subject: &str) -> RequestTicket {
        let sequence = self.next.fetch_add(1, Ordering::Relaxed) + 1;
        self.newest
            .entry(subject.to_owned())
            .and_modify(|current| *current = (*current).max(sequence))
            .or_insert(sequence);
        RequestTicket {
            subject: subject.to_owned(),
            sequence,
        }
    }

    /// Finish a request; returns `true` when its result should be used
    ///
    /// The subject entry is released once the newest request completes.
    pub fn complete(&self, ticket: &RequestTicket) -> bool {
        self.newest
            .remove_if(&ticket.subject, |_, newest| *newest == ticket.sequence)
            .is_some()
    }

    /// Number of subjects with a request in flight
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.newest.len()
    }
}
