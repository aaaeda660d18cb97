// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use lq_core::{ClockSource, KeyValueStore, LeadFormData, LeadService};

use crate::catalog::Catalog;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::validate::{
    optional, validate_email, validate_notes, validate_text, MAX_COMPANY_LENGTH, MAX_NAME_LENGTH,
    MAX_PHONE_LENGTH, MAX_VENDOR_LENGTH,
};

use super::{open_service, parse_id};

pub fn run(id: &str, field: &str, value: &str) -> Result<()> {
    let (mut service, config, _) = open_service()?;
    run_impl(&mut service, &config, id, field, value)
}

/// Internal implementation that accepts the service for testing.
pub(crate) fn run_impl<S: KeyValueStore, C: ClockSource>(
    service: &mut LeadService<S, C>,
    config: &Config,
    id: &str,
    field: &str,
    value: &str,
) -> Result<()> {
    let id = parse_id(id)?;
    let lead = service.get(id)?;
    let catalog = Catalog::from_config(&config.catalog);
    let field = field.to_lowercase();
    let form = apply_field(lead.form.clone(), &catalog, &field, value)?;

    if form == lead.form {
        println!("Lead {} unchanged", id);
        return Ok(());
    }
    service.edit(id, form)?;
    println!("Updated {} of lead {}", field, id);
    if lead.delivery.attempts > 0 || lead.is_dead_letter() {
        println!("Delivery history cleared; the lead will be retried on the next sync");
    }
    Ok(())
}

/// Return `form` with `field` set to the validated `value`.
pub(crate) fn apply_field(
    mut form: LeadFormData,
    catalog: &Catalog,
    field: &str,
    value: &str,
) -> Result<LeadFormData> {
    match field {
        "vendor" => {
            form.vendor = catalog.resolve_vendor(&validate_text("Vendor", value, MAX_VENDOR_LENGTH)?)?
        }
        "name" => form.name = validate_text("Name", value, MAX_NAME_LENGTH)?,
        "email" => form.email = validate_email(value)?,
        "phone" => form.phone = validate_text("Phone", value, MAX_PHONE_LENGTH)?,
        "company" => form.company = validate_text("Company", value, MAX_COMPANY_LENGTH)?,
        "employees" => form.employees = catalog.resolve_employees(value)?,
        "notes" => form.notes = validate_notes(cleared(value))?,
        "product" => {
            form.product = match optional(cleared(value)) {
                Some(p) => Some(catalog.resolve_product(p)?),
                None => None,
            }
        }
        _ => {
            return Err(Error::UnknownAttribute {
                attr: field.to_string(),
            })
        }
    }
    Ok(form)
}

/// `none` clears an optional field.
fn cleared(value: &str) -> Option<&str> {
    if value.trim().eq_ignore_ascii_case("none") {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
#[path = "edit_tests.rs"]
mod tests;
