// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Single owned access point for the offline queue.
//!
//! Capture, queue management and sync all go through one [`LeadService`].
//! Mutations take `&mut self`, so a process holds at most one writer; the
//! store's transactional `update` serializes writers across processes.

use crate::clock::{ClockSource, SystemClock};
use crate::error::Result;
use crate::factory::LeadFactory;
use crate::lead::{Lead, LeadFormData, LeadId};
use crate::queue::LeadQueue;
use crate::store::{KeyValueStore, SqliteStore};

/// Owns the queue and the factory that feeds it.
pub struct LeadService<S: KeyValueStore = SqliteStore, C: ClockSource = SystemClock> {
    queue: LeadQueue<S>,
    factory: LeadFactory<C>,
}

impl<S: KeyValueStore, C: ClockSource> LeadService<S, C> {
    /// Wraps `queue`, seeding the factory's id clock from what is persisted.
    pub fn new(queue: LeadQueue<S>, factory: LeadFactory<C>) -> Self {
        if let Some(seq) = queue.load_seq() {
            factory.observe(seq);
        }
        if let Some(max) = queue.max_id() {
            factory.observe(max);
        }
        LeadService { queue, factory }
    }

    /// Read access for the reconciler and status views.
    pub fn queue(&self) -> &LeadQueue<S> {
        &self.queue
    }

    pub fn factory(&self) -> &LeadFactory<C> {
        &self.factory
    }

    /// Current wall-clock time from the factory's clock source.
    pub fn now_ms(&self) -> i64 {
        self.factory.ids().source().now_ms()
    }

    /// Create a lead from validated form data and append it to the queue.
    pub fn save(&mut self, form: LeadFormData) -> Result<Lead> {
        let lead = self.factory.create(form);
        self.queue.push(lead.clone())?;
        if let Err(e) = self.queue.store_seq(lead.id) {
            // The queue itself still seeds the clock on next open.
            tracing::warn!(id = lead.id, error = %e, "failed to record id high-water mark");
        }
        tracing::debug!(id = lead.id, "lead saved to offline queue");
        Ok(lead)
    }

    /// Replace the form data of a queued lead.
    ///
    /// Id, timestamp and origin are kept; delivery tracking is reset so the
    /// corrected lead is retried on the next pass.
    pub fn edit(&mut self, id: LeadId, form: LeadFormData) -> Result<Lead> {
        let edited = self.queue.get(id)?.with_form(form);
        self.queue.update(edited.clone())?;
        tracing::debug!(id, "lead edited");
        Ok(edited)
    }

    /// Remove a lead from the queue without delivering it.
    pub fn delete(&mut self, id: LeadId) -> Result<Lead> {
        let removed = self.queue.remove(id)?;
        tracing::debug!(id, "lead deleted");
        Ok(removed)
    }

    /// Return a lead to the retry cycle, clearing its failure history.
    pub fn retry(&mut self, id: LeadId) -> Result<Lead> {
        let lead = self.queue.get(id)?;
        let reset = lead.with_form(lead.form.clone());
        self.queue.update(reset.clone())?;
        Ok(reset)
    }

    /// Return every dead-lettered lead to the retry cycle.
    pub fn retry_all(&mut self) -> Result<usize> {
        let dead: Vec<LeadId> = self.dead_letters().iter().map(|l| l.id).collect();
        for id in &dead {
            self.retry(*id)?;
        }
        Ok(dead.len())
    }

    pub fn get(&self, id: LeadId) -> Result<Lead> {
        self.queue.get(id)
    }

    pub fn list(&self) -> Vec<Lead> {
        self.queue.load()
    }

    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// Leads excluded from automatic retry.
    pub fn dead_letters(&self) -> Vec<Lead> {
        self.queue
            .load()
            .into_iter()
            .filter(Lead::is_dead_letter)
            .collect()
    }
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;
