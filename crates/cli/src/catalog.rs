// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Option catalogs for the capture form and case-insensitive option search.
//!
//! Vendors come from configuration; employee brackets and products are the
//! fixed sets defined in `lq_core::lead`.

use lq_core::{EmployeeBracket, Product};

use crate::config::CatalogConfig;
use crate::error::{Error, Result};

/// A searchable option list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OptionList {
    Vendors,
    Employees,
    Products,
}

/// The option lists offered on the capture form.
#[derive(Debug, Clone)]
pub struct Catalog {
    vendors: Vec<String>,
}

impl Catalog {
    pub fn new(vendors: Vec<String>) -> Self {
        Catalog { vendors }
    }

    pub fn from_config(config: &CatalogConfig) -> Self {
        Self::new(config.vendors.clone())
    }

    pub fn vendors(&self) -> &[String] {
        &self.vendors
    }

    pub fn options(&self, list: OptionList) -> Vec<String> {
        match list {
            OptionList::Vendors => self.vendors.clone(),
            OptionList::Employees => EmployeeBracket::ALL
                .iter()
                .map(|b| b.as_str().to_string())
                .collect(),
            OptionList::Products => Product::ALL.iter().map(|p| p.as_str().to_string()).collect(),
        }
    }

    /// Resolves user input to a roster vendor name.
    pub fn resolve_vendor(&self, query: &str) -> Result<String> {
        resolve_option("vendor", &self.vendors, query)
    }

    /// Resolves a bracket label, alias (`2-5`, `501+`) or unique fragment.
    pub fn resolve_employees(&self, query: &str) -> Result<EmployeeBracket> {
        if let Ok(bracket) = query.parse() {
            return Ok(bracket);
        }
        let label = resolve_option("employees", &self.options(OptionList::Employees), query)?;
        Ok(label.parse()?)
    }

    /// Resolves a product name or unique fragment.
    pub fn resolve_product(&self, query: &str) -> Result<Product> {
        if let Ok(product) = query.parse() {
            return Ok(product);
        }
        let label = resolve_option("product", &self.options(OptionList::Products), query)?;
        Ok(label.parse()?)
    }
}

/// Options containing `query` (case-insensitive), in catalog order.
///
/// An empty query returns every option.
pub fn filter_options<'a>(options: &'a [String], query: &str) -> Vec<&'a str> {
    let needle = query.trim().to_lowercase();
    options
        .iter()
        .filter(|opt| needle.is_empty() || opt.to_lowercase().contains(&needle))
        .map(String::as_str)
        .collect()
}

/// Resolves `query` to exactly one option.
///
/// An exact case-insensitive match wins; otherwise the query must match a
/// single option as a substring.
pub fn resolve_option(field: &'static str, options: &[String], query: &str) -> Result<String> {
    let needle = query.trim();
    if needle.is_empty() {
        return Err(Error::FieldEmpty {
            field: capitalized(field),
        });
    }
    if let Some(exact) = options.iter().find(|o| o.to_lowercase() == needle.to_lowercase()) {
        return Ok(exact.clone());
    }
    match filter_options(options, needle).as_slice() {
        [only] => Ok((*only).to_string()),
        [] => Err(Error::UnknownOption {
            field,
            value: needle.to_string(),
            valid: options.to_vec(),
        }),
        many => Err(Error::AmbiguousOption {
            field,
            value: needle.to_string(),
            matches: many.iter().map(|m| m.to_string()).collect(),
        }),
    }
}

fn capitalized(field: &'static str) -> &'static str {
    match field {
        "vendor" => "Vendor",
        "employees" => "Employees",
        "product" => "Product",
        other => other,
    }
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
