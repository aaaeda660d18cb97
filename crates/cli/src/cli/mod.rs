// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use crate::catalog::OptionList;

pub use args::LeadArgs;

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    #[value(alias = "ids")]
    Id,
}

#[derive(Parser)]
#[command(name = "leadq")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Capture sales leads offline and sync them to a marketing-forms endpoint")]
#[command(
    long_about = "Capture sales leads offline and sync them to a marketing-forms endpoint.\n\n\
    Leads are validated, queued in a local database, and submitted one by one when \
    'leadq sync' runs with network access. Failed leads stay queued for the next pass."
)]
pub struct Cli {
    /// Run as if leadq was started in <path>
    #[arg(short = 'C', long = "directory", global = true, value_name = "path")]
    pub directory: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Initialize a .leadq directory (config and offline queue)
    Init {
        /// Directory to initialize (defaults to the current directory)
        #[arg(long)]
        path: Option<String>,
    },

    /// Capture a new lead into the offline queue
    #[command(after_help = "\
Examples:
  leadq new --vendor kesley --name \"Ana Souza\" --email ana@acme.com \\
            --phone \"11 99999-0000\" --company Acme --employees \"6 a 20\"
  leadq new ... --product core --notes \"Wants a demo\" -o id")]
    New {
        #[command(flatten)]
        lead: LeadArgs,

        /// Output format (text, json, id)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// List queued leads
    List {
        /// Show only dead-lettered leads
        #[arg(long)]
        dead: bool,

        /// Output format (text, json, id)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Show a queued lead
    #[command(arg_required_else_help = true)]
    Show {
        id: String,

        /// Output format (text, json, id)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Edit one field of a queued lead
    #[command(arg_required_else_help = true)]
    #[command(after_help = "\
Fields: vendor, name, email, phone, company, employees, notes, product
Use 'none' or an empty value to clear notes or product.")]
    Edit {
        id: String,

        /// Field to change
        field: String,

        /// New value
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Remove leads from the queue without sending them
    #[command(arg_required_else_help = true)]
    Delete {
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Return dead-lettered leads to the retry cycle
    #[command(arg_required_else_help = true)]
    Retry {
        ids: Vec<String>,

        /// Retry every dead-lettered lead
        #[arg(long, conflicts_with = "ids")]
        all: bool,
    },

    /// Submit queued leads to the forms endpoint
    Sync {
        /// Ignore retry backoff
        #[arg(long)]
        force: bool,

        /// Only print errors
        #[arg(long, short)]
        quiet: bool,
    },

    /// Show queue size, dead letters and endpoint configuration
    Status,

    /// List form options, optionally filtered
    #[command(arg_required_else_help = true)]
    Options {
        #[arg(value_enum)]
        list: OptionList,

        /// Case-insensitive search text
        #[arg(long, short)]
        search: Option<String>,
    },

    /// Generate shell completions
    #[command(arg_required_else_help = true)]
    Completion {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
