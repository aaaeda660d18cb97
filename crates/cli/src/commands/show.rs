// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use lq_core::{ClockSource, KeyValueStore, LeadService};

use crate::cli::OutputFormat;
use crate::display::format_lead_details;
use crate::error::Result;

use super::{open_service, parse_id};

pub fn run(id: &str, output: OutputFormat) -> Result<()> {
    let (service, _, _) = open_service()?;
    run_impl(&service, id, output)
}

/// Internal implementation that accepts the service for testing.
pub(crate) fn run_impl<S: KeyValueStore, C: ClockSource>(
    service: &LeadService<S, C>,
    id: &str,
    output: OutputFormat,
) -> Result<()> {
    let lead = service.get(parse_id(id)?)?;
    match output {
        OutputFormat::Text => println!("{}", format_lead_details(&lead)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&lead)?),
        OutputFormat::Id => println!("{}", lead.id),
    }
    Ok(())
}

#[cfg(test)]
#[path = "show_tests.rs"]
mod tests;
