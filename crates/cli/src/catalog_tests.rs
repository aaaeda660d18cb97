// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::config::DEFAULT_VENDORS;
use yare::parameterized;

fn catalog() -> Catalog {
    Catalog::new(DEFAULT_VENDORS.iter().map(|v| v.to_string()).collect())
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn empty_query_returns_everything_in_order() {
    let options = strings(&["b", "a", "c"]);
    assert_eq!(filter_options(&options, ""), vec!["b", "a", "c"]);
    assert_eq!(filter_options(&options, "   "), vec!["b", "a", "c"]);
}

#[parameterized(
    lowercase = { "ramos", vec!["Lucio Ramos"] },
    uppercase = { "THOMAS", vec!["Thomas Ferreira"] },
    shared_fragment = { "ra", vec!["Kesley Oliveira", "Lucio Ramos", "Thomas Ferreira"] },
    accented = { "corrêa", vec!["Alexsandy Corrêa"] },
    none = { "zzz", vec![] },
)]
fn filter_matches_substrings(query: &str, expected: Vec<&str>) {
    let vendors = catalog().options(OptionList::Vendors);
    assert_eq!(filter_options(&vendors, query), expected);
}

#[test]
fn resolve_prefers_exact_match() {
    let options = strings(&["Core", "Core Plus"]);
    assert_eq!(resolve_option("product", &options, "core").unwrap(), "Core");
}

#[test]
fn resolve_accepts_unique_fragment() {
    assert_eq!(catalog().resolve_vendor("kesley").unwrap(), "Kesley Oliveira");
}

#[test]
fn resolve_rejects_ambiguous_fragment() {
    let err = catalog().resolve_vendor("ra").unwrap_err();
    match err {
        Error::AmbiguousOption { field, matches, .. } => {
            assert_eq!(field, "vendor");
            assert_eq!(matches.len(), 3);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn resolve_rejects_unknown_value() {
    let err = catalog().resolve_vendor("Fulano").unwrap_err();
    assert!(matches!(err, Error::UnknownOption { field: "vendor", .. }));
    assert!(err.to_string().contains("Kesley Oliveira"));
}

#[test]
fn resolve_rejects_blank_query() {
    let err = catalog().resolve_vendor("  ").unwrap_err();
    assert!(matches!(err, Error::FieldEmpty { field: "Vendor" }));
}

#[parameterized(
    label = { "21 a 100", EmployeeBracket::TwentyOneToHundred },
    alias = { "2-5", EmployeeBracket::TwoToFive },
    plus = { "+501", EmployeeBracket::OverFiveHundred },
    fragment = { "a 20", EmployeeBracket::SixToTwenty },
)]
fn resolve_employee_brackets(query: &str, expected: EmployeeBracket) {
    assert_eq!(catalog().resolve_employees(query).unwrap(), expected);
}

#[test]
fn resolve_employees_ambiguous_digit() {
    let err = catalog().resolve_employees("5").unwrap_err();
    assert!(matches!(err, Error::AmbiguousOption { .. }));
}

#[parameterized(
    exact = { "Core", Product::Core },
    case = { "agentes ia", Product::AiAgents },
    fragment = { "planej", Product::StrategicPlanning },
)]
fn resolve_products(query: &str, expected: Product) {
    assert_eq!(catalog().resolve_product(query).unwrap(), expected);
}

#[test]
fn options_list_fixed_sets() {
    let c = catalog();
    assert_eq!(
        c.options(OptionList::Employees),
        strings(&["1", "2 a 5", "6 a 20", "21 a 100", "101 a 500", "+501"])
    );
    assert_eq!(
        c.options(OptionList::Products),
        strings(&["Core", "Planejamento Estratégico", "Agentes IA"])
    );
    assert_eq!(c.vendors().len(), 6);
}
