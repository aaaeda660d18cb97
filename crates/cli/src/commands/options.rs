// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::catalog::{filter_options, Catalog, OptionList};
use crate::config::{find_work_dir, Config};
use crate::error::Result;

pub fn run(list: OptionList, search: Option<&str>) -> Result<()> {
    // Option lists work outside a queue directory with the built-in catalog.
    let config = match find_work_dir() {
        Ok(work_dir) => Config::resolve(&work_dir)?,
        Err(_) => Config::default(),
    };
    let catalog = Catalog::from_config(&config.catalog);
    for option in run_impl(&catalog, list, search) {
        println!("{}", option);
    }
    Ok(())
}

/// Options from `list` matching `search`, in catalog order.
pub(crate) fn run_impl(catalog: &Catalog, list: OptionList, search: Option<&str>) -> Vec<String> {
    let options = catalog.options(list);
    match search {
        Some(query) => filter_options(&options, query)
            .into_iter()
            .map(str::to_string)
            .collect(),
        None => options,
    }
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;
