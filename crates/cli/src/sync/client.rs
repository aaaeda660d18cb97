// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Reconciliation of the offline queue against the forms endpoint.
//!
//! One pass:
//! - Checks connectivity (aborts untouched when offline)
//! - Loads the queue (aborts without network calls when empty)
//! - Submits eligible leads one at a time, in queue order
//! - Writes back only what failed, in a single update

use std::time::Duration;

use lq_core::{ClockSource, KeyValueStore, Lead, LeadId, LeadService};

use super::probe::Connectivity;
use super::transport::{SubmitOutcome, Submitter};
use crate::config::SyncConfig;

/// When a failed lead may be attempted again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Consecutive failures before a lead is dead-lettered (0 = never).
    pub max_attempts: u32,
    /// Delay after the first failure; doubles per failure (zero = no backoff).
    pub initial_backoff: Duration,
    pub max_backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from_config(&SyncConfig::default())
    }
}

impl RetryPolicy {
    pub fn from_config(config: &SyncConfig) -> Self {
        RetryPolicy {
            max_attempts: config.max_attempts,
            initial_backoff: Duration::from_secs(config.initial_backoff_secs),
            max_backoff: Duration::from_secs(config.max_backoff_secs),
        }
    }

    /// Retries forever, with no waiting between passes.
    pub fn unbounded() -> Self {
        RetryPolicy {
            max_attempts: 0,
            initial_backoff: Duration::ZERO,
            max_backoff: Duration::ZERO,
        }
    }

    /// Waiting period after `attempts` consecutive failures.
    pub fn backoff(&self, attempts: u32) -> Duration {
        if attempts == 0 || self.initial_backoff.is_zero() {
            return Duration::ZERO;
        }
        let factor = 1u32.checked_shl(attempts - 1).unwrap_or(u32::MAX);
        self.initial_backoff
            .checked_mul(factor)
            .unwrap_or(self.max_backoff)
            .min(self.max_backoff)
    }

    /// Whether `lead` has waited out its backoff at `now_ms`.
    ///
    /// A last attempt stamped after `now_ms` means the clock moved back;
    /// such a lead is due, so no wait ever exceeds `max_backoff`.
    pub fn is_due(&self, lead: &Lead, now_ms: i64) -> bool {
        let wait = self.backoff(lead.delivery.attempts);
        if wait.is_zero() {
            return true;
        }
        match lead.delivery.last_attempt() {
            Some(last) => {
                let elapsed = now_ms.saturating_sub(last.timestamp_millis());
                elapsed < 0 || elapsed >= i64::try_from(wait.as_millis()).unwrap_or(i64::MAX)
            }
            None => true,
        }
    }

    /// Whether `attempts` consecutive failures exhaust the retry budget.
    pub fn is_exhausted(&self, attempts: u32) -> bool {
        self.max_attempts > 0 && attempts >= self.max_attempts
    }
}

/// Reasons a pass ends before submitting anything.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyncError {
    #[error("no internet connection")]
    NotConnected,

    #[error("no leads to sync")]
    EmptyQueue,

    #[error("forms endpoint not configured")]
    NotConfigured,
}

/// Result type for reconciliation passes.
pub type SyncResult<T> = Result<T, SyncError>;

/// Outcome of one reconciliation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Leads accepted by the endpoint and dropped from the queue.
    pub delivered: usize,
    /// Leads attempted this pass that failed, with updated delivery state.
    pub failed: Vec<Lead>,
    /// Ids dead-lettered during this pass.
    pub dead_lettered: Vec<LeadId>,
    /// Leads left alone because their backoff has not elapsed.
    pub deferred: usize,
    /// Dead-lettered leads left alone.
    pub skipped_dead: usize,
    /// Whether the write-back succeeded.
    pub persisted: bool,
}

impl SyncReport {
    pub fn attempted(&self) -> usize {
        self.delivered + self.failed.len()
    }

    pub fn is_complete_success(&self) -> bool {
        self.failed.is_empty() && self.deferred == 0 && self.skipped_dead == 0
    }
}

/// Drains the offline queue against a [`Submitter`].
pub struct Reconciler<T: Submitter, P: Connectivity> {
    submitter: T,
    probe: P,
    policy: RetryPolicy,
    force: bool,
}

impl<T: Submitter, P: Connectivity> Reconciler<T, P> {
    pub fn new(submitter: T, probe: P, policy: RetryPolicy) -> Self {
        Reconciler {
            submitter,
            probe,
            policy,
            force: false,
        }
    }

    /// Ignore backoff for this reconciler's passes. Dead letters stay skipped.
    pub fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    pub fn submitter(&self) -> &T {
        &self.submitter
    }

    pub fn probe(&self) -> &P {
        &self.probe
    }

    /// Run one reconciliation pass over `service`'s queue.
    pub async fn reconcile<S, C>(&self, service: &mut LeadService<S, C>) -> SyncResult<SyncReport>
    where
        S: KeyValueStore,
        C: ClockSource,
    {
        if !self.probe.is_reachable().await {
            tracing::info!("sync skipped: network unreachable");
            return Err(SyncError::NotConnected);
        }

        let leads = service.queue().load();
        if leads.is_empty() {
            return Err(SyncError::EmptyQueue);
        }
        if !self.submitter.is_configured() {
            return Err(SyncError::NotConfigured);
        }

        let mut report = SyncReport::default();
        let mut delivered = Vec::new();

        for lead in leads {
            if lead.is_dead_letter() {
                report.skipped_dead += 1;
                continue;
            }
            let now_ms = service.now_ms();
            if !self.force && !self.policy.is_due(&lead, now_ms) {
                report.deferred += 1;
                continue;
            }

            let outcome = self.submitter.submit(&lead).await;
            if outcome.is_delivered() {
                tracing::debug!(id = lead.id, "lead delivered");
                delivered.push(lead);
                report.delivered += 1;
                continue;
            }

            let failed = self.record_failure(lead, &outcome, service.now_ms());
            if failed.is_dead_letter() {
                report.dead_lettered.push(failed.id);
            }
            report.failed.push(failed);
        }

        report.persisted = service.queue().apply_pass(&delivered, &report.failed);
        tracing::info!(
            delivered = report.delivered,
            failed = report.failed.len(),
            dead_lettered = report.dead_lettered.len(),
            deferred = report.deferred,
            persisted = report.persisted,
            "sync pass finished"
        );
        Ok(report)
    }

    fn record_failure(&self, mut lead: Lead, outcome: &SubmitOutcome, now_ms: i64) -> Lead {
        let delivery = &mut lead.delivery;
        delivery.attempts = delivery.attempts.saturating_add(1);
        delivery.last_error = outcome.reason();
        delivery.last_attempt_at = Some(lq_core::clock::to_iso8601(now_ms));
        if outcome.is_rejected() || self.policy.is_exhausted(delivery.attempts) {
            delivery.dead_letter = true;
        }
        tracing::debug!(
            id = lead.id,
            attempts = lead.delivery.attempts,
            dead_letter = lead.delivery.dead_letter,
            "lead kept for retry"
        );
        lead
    }
}
