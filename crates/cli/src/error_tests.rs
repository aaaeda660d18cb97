// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use yare::parameterized;

#[test]
fn test_error_not_initialized_display() {
    let err = Error::NotInitialized;
    assert!(err.to_string().contains("not initialized"));
    assert!(err.to_string().contains("leadq init"));
}

#[test]
fn test_error_already_initialized_display() {
    let err = Error::AlreadyInitialized("/path/to/.leadq".to_string());
    assert!(err.to_string().contains("already initialized"));
    assert!(err.to_string().contains("/path/to/.leadq"));
}

#[parameterized(
    not_found = { Error::LeadNotFound(42), "lead not found: 42" },
    bad_id = { Error::InvalidLeadId("abc".into()), "invalid lead ID 'abc'" },
    required = { Error::FieldRequired { field: "Email" }, "Email is required" },
    empty = { Error::FieldEmpty { field: "Name" }, "Name cannot be empty" },
    too_long = {
        Error::FieldTooLong { field: "Phone", actual: 60, max: 50 },
        "Phone too long (60 chars, max 50)"
    },
    email = { Error::InvalidEmail("nope".into()), "invalid email address: 'nope'" },
    forms = { Error::FormsNotConfigured, "forms endpoint not configured" },
    offline = { Error::NoConnectivity, "no internet connection" },
)]
fn error_display(err: Error, expected: &str) {
    assert!(
        err.to_string().contains(expected),
        "{:?} should contain {:?}",
        err.to_string(),
        expected
    );
}

#[test]
fn test_unknown_option_lists_valid_values() {
    let err = Error::UnknownOption {
        field: "vendor",
        value: "Zé".into(),
        valid: vec!["Kesley Oliveira".into(), "Lucio Ramos".into()],
    };
    let msg = err.to_string();
    assert!(msg.contains("unknown vendor 'Zé'"));
    assert!(msg.contains("Kesley Oliveira, Lucio Ramos"));
}

#[test]
fn test_ambiguous_option_lists_matches() {
    let err = Error::AmbiguousOption {
        field: "employees",
        value: "5".into(),
        matches: vec!["2 a 5".into(), "101 a 500".into()],
    };
    assert_eq!(err.to_string(), "ambiguous employees '5' matches: 2 a 5, 101 a 500");
}

#[test]
fn test_from_core_lead_not_found() {
    let err: Error = lq_core::Error::LeadNotFound(7).into();
    assert!(matches!(err, Error::LeadNotFound(7)));
}

#[test]
fn test_from_core_store_is_save_failure() {
    let err: Error = lq_core::Error::Store("disk full".into()).into();
    assert_eq!(err.to_string(), "failed to save lead: disk full");
}

#[test]
fn test_from_core_bracket_keeps_hint() {
    let err: Error = lq_core::Error::InvalidEmployeeBracket("7".into()).into();
    assert!(err.to_string().contains("hint: valid brackets are"));
}
