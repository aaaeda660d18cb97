// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::{Path, PathBuf};

use lq_core::SqliteStore;

use crate::config::{get_db_path, init_work_dir};
use crate::error::Result;

pub fn run(path: Option<String>) -> Result<()> {
    let target_path = match path {
        Some(p) => PathBuf::from(p),
        None => std::env::current_dir()?,
    };
    let work_dir = run_impl(&target_path)?;

    println!("Initialized lead queue at {}", work_dir.display());
    println!("Next: set forms.portal_id and forms.form_guid in {}", work_dir.join("config.toml").display());
    Ok(())
}

/// Create `.leadq/` under `target_path` with a default config and an empty queue database.
pub(crate) fn run_impl(target_path: &Path) -> Result<PathBuf> {
    let work_dir = init_work_dir(target_path)?;
    SqliteStore::open(&get_db_path(&work_dir))?;
    Ok(work_dir)
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
