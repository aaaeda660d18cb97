// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use lq_core::{ClockSource, KeyValueStore, Lead, LeadService};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::display::format_lead_line;
use crate::error::Result;

use super::open_service;

/// JSON output structure for the list command.
#[derive(Serialize)]
struct ListOutputJson<'a> {
    leads: &'a [Lead],
    total: usize,
}

pub fn run(dead: bool, output: OutputFormat) -> Result<()> {
    let (service, _, _) = open_service()?;
    run_impl(&service, dead, output)
}

/// Leads shown by `list`, in queue order.
pub(crate) fn select<S: KeyValueStore, C: ClockSource>(
    service: &LeadService<S, C>,
    dead: bool,
) -> Vec<Lead> {
    if dead {
        service.dead_letters()
    } else {
        service.list()
    }
}

/// Internal implementation that accepts the service for testing.
pub(crate) fn run_impl<S: KeyValueStore, C: ClockSource>(
    service: &LeadService<S, C>,
    dead: bool,
    output: OutputFormat,
) -> Result<()> {
    let leads = select(service, dead);

    match output {
        OutputFormat::Text => {
            if leads.is_empty() {
                if dead {
                    println!("No dead-lettered leads.");
                } else {
                    println!("No leads waiting to sync.");
                }
            }
            for lead in &leads {
                println!("{}", format_lead_line(lead));
            }
        }
        OutputFormat::Json => {
            let json = ListOutputJson {
                leads: &leads,
                total: leads.len(),
            };
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Id => {
            let ids: Vec<String> = leads.iter().map(|l| l.id.to_string()).collect();
            if !ids.is_empty() {
                println!("{}", ids.join(" "));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
