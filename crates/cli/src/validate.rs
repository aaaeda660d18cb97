// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Capture form validation.

use lq_core::LeadFormData;

use crate::catalog::Catalog;
use crate::error::{Error, Result};

// Input length limits (characters)
pub const MAX_NAME_LENGTH: usize = 200;
pub const MAX_COMPANY_LENGTH: usize = 200;
pub const MAX_VENDOR_LENGTH: usize = 200;
pub const MAX_EMAIL_LENGTH: usize = 320;
pub const MAX_PHONE_LENGTH: usize = 50;
pub const MAX_NOTES_LENGTH: usize = 5_000;

/// Unvalidated form input, as entered.
#[derive(Debug, Clone, Default)]
pub struct RawForm {
    pub vendor: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub employees: Option<String>,
    pub notes: Option<String>,
    pub product: Option<String>,
}

/// Validates `raw` and resolves its option fields against `catalog`.
///
/// Fields are checked in form order; the first failure is returned.
pub fn validate_form(raw: &RawForm, catalog: &Catalog) -> Result<LeadFormData> {
    let vendor = required("Vendor", raw.vendor.as_deref())?;
    let vendor = catalog.resolve_vendor(&validate_text("Vendor", vendor, MAX_VENDOR_LENGTH)?)?;
    let name = validate_text("Name", required("Name", raw.name.as_deref())?, MAX_NAME_LENGTH)?;
    let email = validate_email(required("Email", raw.email.as_deref())?)?;
    let phone = validate_text("Phone", required("Phone", raw.phone.as_deref())?, MAX_PHONE_LENGTH)?;
    let company = validate_text(
        "Company",
        required("Company", raw.company.as_deref())?,
        MAX_COMPANY_LENGTH,
    )?;
    let employees = catalog.resolve_employees(required("Employees", raw.employees.as_deref())?)?;
    let notes = validate_notes(raw.notes.as_deref())?;
    let product = match optional(raw.product.as_deref()) {
        Some(p) => Some(catalog.resolve_product(p)?),
        None => None,
    };

    Ok(LeadFormData {
        vendor,
        name,
        email,
        phone,
        company,
        employees,
        notes,
        product,
    })
}

fn required<'a>(field: &'static str, value: Option<&'a str>) -> Result<&'a str> {
    value.ok_or(Error::FieldRequired { field })
}

/// Trimmed value, or `None` when blank.
pub fn optional(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Validate a required text field (non-empty after trimming, within length limits)
pub fn validate_text(field: &'static str, value: &str, max: usize) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::FieldEmpty { field });
    }
    check_length(field, trimmed, max)?;
    Ok(trimmed.to_string())
}

/// Validate an email address: required, within limits, shaped like `local@domain`.
pub fn validate_email(value: &str) -> Result<String> {
    let email = validate_text("Email", value, MAX_EMAIL_LENGTH)?;
    let well_formed = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    };
    if !well_formed {
        return Err(Error::InvalidEmail(email));
    }
    Ok(email)
}

/// Validate optional notes; blank notes are dropped.
pub fn validate_notes(value: Option<&str>) -> Result<Option<String>> {
    match optional(value) {
        Some(notes) => {
            check_length("Notes", notes, MAX_NOTES_LENGTH)?;
            Ok(Some(notes.to_string()))
        }
        None => Ok(None),
    }
}

fn check_length(field: &'static str, value: &str, max: usize) -> Result<()> {
    let actual = value.chars().count();
    if actual > max {
        return Err(Error::FieldTooLong { field, actual, max });
    }
    Ok(())
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
