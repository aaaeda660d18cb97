// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Turns validated form data into queued lead records.

use crate::clock::{ClockSource, IdClock, SystemClock};
use crate::lead::{DeliveryState, Lead, LeadFormData, LeadId, DEFAULT_ORIGIN};

/// Builds [`Lead`] records from form data.
///
/// Performs no validation; callers hand it forms that already passed the
/// form layer's checks.
pub struct LeadFactory<C: ClockSource = SystemClock> {
    ids: IdClock<C>,
    origin: String,
}

impl LeadFactory<SystemClock> {
    /// Creates a factory on the system clock with the default origin tag.
    pub fn new() -> Self {
        Self::with_clock(SystemClock, DEFAULT_ORIGIN)
    }
}

impl Default for LeadFactory<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ClockSource> LeadFactory<C> {
    pub fn with_clock(clock: C, origin: impl Into<String>) -> Self {
        LeadFactory {
            ids: IdClock::with_clock(clock),
            origin: origin.into(),
        }
    }

    /// The origin tag stamped on every lead.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Returns the id clock, e.g. to seed it from persisted ids.
    pub fn ids(&self) -> &IdClock<C> {
        &self.ids
    }

    /// Seeds the id clock so new ids sort after `id`.
    pub fn observe(&self, id: LeadId) {
        self.ids.observe(id);
    }

    /// Creates a lead from `form`, stamping id, timestamp and origin.
    pub fn create(&self, form: LeadFormData) -> Lead {
        let stamp = self.ids.next();
        Lead {
            id: stamp.id,
            timestamp: stamp.iso8601(),
            origin: self.origin.clone(),
            form,
            delivery: DeliveryState::default(),
        }
    }
}

#[cfg(test)]
#[path = "factory_tests.rs"]
mod tests;
