// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! leadq - capture sales leads offline and sync them to a marketing-forms endpoint.
//!
//! This crate provides the command layer for the `leadq` CLI. Leads are
//! validated against the form catalog, kept in the offline queue from
//! [`lq_core`], and delivered by the [`sync`] reconciler.
//!
//! # Main Components
//!
//! - [`Config`] - `.leadq/config.toml` (forms endpoint, retry policy, vendor roster)
//! - [`catalog`] - option lists and case-insensitive option search
//! - [`sync`] - connectivity probe, HTTP submitter and the reconciler
//! - [`Error`] - Error types for all operations
//!
//! # Initialization
//!
//! ```rust,ignore
//! use leadq::{init_work_dir, find_work_dir, get_db_path, Config};
//! use lq_core::SqliteStore;
//!
//! let work_dir = init_work_dir(Path::new("."))?;
//!
//! // Later, find the queue and open it
//! let work_dir = find_work_dir()?;
//! let config = Config::resolve(&work_dir)?;
//! let store = SqliteStore::open(&get_db_path(&work_dir))?;
//! ```

mod cli;
mod commands;
mod display;
pub mod env;
pub mod timings;
mod validate;

pub mod catalog;
pub mod config;
pub mod error;
pub mod sync;

pub use cli::{Cli, Command, LeadArgs, OutputFormat};
pub use config::{find_work_dir, get_db_path, init_work_dir, Config};
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;

/// Execute a CLI command.
///
/// Opens `.leadq/` from the current directory (walking up) for every
/// command except `init`, `options` and `completion`.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Init { path } => commands::init::run(path),
        Command::New { lead, output } => commands::new::run(lead, output),
        Command::List { dead, output } => commands::list::run(dead, output),
        Command::Show { id, output } => commands::show::run(&id, output),
        Command::Edit { id, field, value } => commands::edit::run(&id, &field, &value),
        Command::Delete { ids } => commands::delete::run(&ids),
        Command::Retry { ids, all } => commands::retry::run(&ids, all),
        Command::Sync { force, quiet } => commands::sync::run(force, quiet),
        Command::Status => commands::status::run(),
        Command::Options { list, search } => commands::options::run(list, search.as_deref()),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "leadq", &mut std::io::stdout());
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
