// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use lq_core::{ClockSource, KeyValueStore, LeadService};

use crate::error::Result;

use super::{open_service, parse_ids};

pub fn run(ids: &[String]) -> Result<()> {
    let (mut service, _, _) = open_service()?;
    run_impl(&mut service, ids)
}

/// Internal implementation that accepts the service for testing.
///
/// Every id is parsed and looked up before anything is removed.
pub(crate) fn run_impl<S: KeyValueStore, C: ClockSource>(
    service: &mut LeadService<S, C>,
    ids: &[String],
) -> Result<()> {
    let ids = parse_ids(ids)?;
    for id in &ids {
        service.get(*id)?;
    }

    for id in ids {
        let lead = service.delete(id)?;
        println!("Deleted lead {} ({})", lead.id, lead.form.name);
    }
    Ok(())
}

#[cfg(test)]
#[path = "delete_tests.rs"]
mod tests;
