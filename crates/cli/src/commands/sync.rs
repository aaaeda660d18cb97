// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use lq_core::{ClockSource, KeyValueStore, LeadService};

use crate::display::format_sync_summary;
use crate::error::{Error, Result};
use crate::sync::{
    Connectivity, HttpProbe, HttpSubmitter, Reconciler, RetryPolicy, SyncError, SyncReport,
    Submitter,
};

use super::open_service;

pub fn run(force: bool, quiet: bool) -> Result<()> {
    let (mut service, config, _) = open_service()?;
    let submitter = HttpSubmitter::new(&config.forms)?;
    let probe = HttpProbe::new(&config.sync)?;
    let reconciler =
        Reconciler::new(submitter, probe, RetryPolicy::from_config(&config.sync)).force(force);

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let report = crate::time_phase!("sync::reconcile", {
        rt.block_on(run_impl(&reconciler, &mut service))?
    });

    match report {
        Some(report) => {
            if !quiet {
                for line in format_sync_summary(&report) {
                    println!("{}", line);
                }
            }
        }
        None => {
            if !quiet {
                println!("Nothing to sync: the offline queue is empty.");
            }
        }
    }
    Ok(())
}

/// Run one pass; `None` means the queue was empty.
pub(crate) async fn run_impl<T, P, S, C>(
    reconciler: &Reconciler<T, P>,
    service: &mut LeadService<S, C>,
) -> Result<Option<SyncReport>>
where
    T: Submitter,
    P: Connectivity,
    S: KeyValueStore,
    C: ClockSource,
{
    match reconciler.reconcile(service).await {
        Ok(report) => Ok(Some(report)),
        Err(SyncError::EmptyQueue) => Ok(None),
        Err(SyncError::NotConnected) => Err(Error::NoConnectivity),
        Err(SyncError::NotConfigured) => Err(Error::FormsNotConfigured),
    }
}

#[cfg(test)]
#[path = "sync_tests.rs"]
mod tests;
