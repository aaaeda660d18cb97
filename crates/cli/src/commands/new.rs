// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use lq_core::{ClockSource, KeyValueStore, LeadService};

use crate::catalog::Catalog;
use crate::cli::{LeadArgs, OutputFormat};
use crate::config::Config;
use crate::error::Result;
use crate::validate::{validate_form, RawForm};

use super::open_service;

pub fn run(lead: LeadArgs, output: OutputFormat) -> Result<()> {
    let (mut service, config, _) = open_service()?;
    run_impl(&mut service, &config, &lead.into(), output)
}

/// Internal implementation that accepts the service for testing.
pub(crate) fn run_impl<S: KeyValueStore, C: ClockSource>(
    service: &mut LeadService<S, C>,
    config: &Config,
    raw: &RawForm,
    output: OutputFormat,
) -> Result<()> {
    let catalog = Catalog::from_config(&config.catalog);
    let form = validate_form(raw, &catalog)?;
    let lead = service.save(form)?;

    match output {
        OutputFormat::Text => {
            println!("Saved lead {} ({}) to the offline queue", lead.id, lead.form.name);
            println!("{} pending; run 'leadq sync' when online", service.queue_len());
        }
        OutputFormat::Json => println!("{}", serde_json::to_string(&lead)?),
        OutputFormat::Id => println!("{}", lead.id),
    }
    Ok(())
}

#[cfg(test)]
#[path = "new_tests.rs"]
mod tests;
