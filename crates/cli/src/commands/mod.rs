// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod delete;
pub mod edit;
pub mod init;
pub mod list;
pub mod new;
pub mod options;
pub mod retry;
pub mod show;
pub mod status;
pub mod sync;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;

use std::path::PathBuf;

use lq_core::{LeadFactory, LeadId, LeadQueue, LeadService, SqliteStore, SystemClock};

use crate::config::{find_work_dir, get_db_path, Config};
use crate::error::{Error, Result};

/// Helper to open the lead service from the current context.
pub fn open_service() -> Result<(LeadService, Config, PathBuf)> {
    let work_dir = find_work_dir()?;
    let config = Config::resolve(&work_dir)?;
    let store = crate::time_phase!("db::open", { SqliteStore::open(&get_db_path(&work_dir))? });
    let queue = LeadQueue::new(store, config.storage_key.clone());
    let factory = LeadFactory::with_clock(SystemClock, config.origin.clone());
    Ok((LeadService::new(queue, factory), config, work_dir))
}

/// Parse a lead id as shown by `leadq list`.
pub fn parse_id(id: &str) -> Result<LeadId> {
    id.trim()
        .parse()
        .map_err(|_| Error::InvalidLeadId(id.to_string()))
}

/// Parse lead ids, dropping repeats while keeping first-seen order.
pub fn parse_ids(ids: &[String]) -> Result<Vec<LeadId>> {
    let mut parsed: Vec<LeadId> = Vec::with_capacity(ids.len());
    for id in ids {
        let id = parse_id(id)?;
        if !parsed.contains(&id) {
            parsed.push(id);
        }
    }
    Ok(parsed)
}
