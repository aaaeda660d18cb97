// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use lq_core::{ClockSource, KeyValueStore, LeadService};

use crate::config::Config;
use crate::error::Result;
use crate::sync::RetryPolicy;

use super::open_service;

/// Counts shown by `leadq status`.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct QueueStatus {
    pub total: usize,
    /// Eligible for the next pass.
    pub ready: usize,
    /// Waiting out retry backoff.
    pub backing_off: usize,
    pub dead: usize,
    pub quarantined: Vec<String>,
}

pub fn run() -> Result<()> {
    let (service, config, _) = open_service()?;
    let status = run_impl(&service, &config);

    println!("Queue:    {}", config.storage_key);
    println!(
        "Leads:    {} ({} ready, {} backing off, {} dead)",
        status.total, status.ready, status.backing_off, status.dead
    );
    if config.forms.is_configured() {
        println!("Endpoint: {}", config.forms.endpoint());
    } else {
        println!("Endpoint: not configured (set forms.portal_id and forms.form_guid)");
    }
    if !status.quarantined.is_empty() {
        println!("Quarantined payloads:");
        for key in &status.quarantined {
            println!("  {}", key);
        }
    }
    Ok(())
}

/// Internal implementation that accepts the service for testing.
pub(crate) fn run_impl<S: KeyValueStore, C: ClockSource>(
    service: &LeadService<S, C>,
    config: &Config,
) -> QueueStatus {
    let policy = RetryPolicy::from_config(&config.sync);
    let now_ms = service.now_ms();
    let leads = service.list();

    let mut status = QueueStatus {
        total: leads.len(),
        quarantined: service.queue().quarantined(),
        ..QueueStatus::default()
    };
    for lead in &leads {
        if lead.is_dead_letter() {
            status.dead += 1;
        } else if policy.is_due(lead, now_ms) {
            status.ready += 1;
        } else {
            status.backing_off += 1;
        }
    }
    status
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
