// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use lq_core::{ClockSource, KeyValueStore, LeadService};

use crate::error::Result;

use super::{open_service, parse_ids};

pub fn run(ids: &[String], all: bool) -> Result<()> {
    let (mut service, _, _) = open_service()?;
    let count = run_impl(&mut service, ids, all)?;
    match count {
        0 => println!("No leads to retry."),
        1 => println!("1 lead returned to the retry cycle."),
        n => println!("{} leads returned to the retry cycle.", n),
    }
    Ok(())
}

/// Reset delivery tracking on the given leads, or on every dead letter with `all`.
pub(crate) fn run_impl<S: KeyValueStore, C: ClockSource>(
    service: &mut LeadService<S, C>,
    ids: &[String],
    all: bool,
) -> Result<usize> {
    if all {
        return Ok(service.retry_all()?);
    }

    let ids = parse_ids(ids)?;
    for id in &ids {
        service.get(*id)?;
    }
    for id in &ids {
        service.retry(*id)?;
    }
    Ok(ids.len())
}

#[cfg(test)]
#[path = "retry_tests.rs"]
mod tests;
