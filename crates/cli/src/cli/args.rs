// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared argument structs for CLI commands.

use clap::Args;

use crate::validate::RawForm;

/// Capture form fields.
///
/// Everything is optional at the parser level so validation can report
/// missing fields by name, in form order.
#[derive(Args, Clone, Debug, Default)]
pub struct LeadArgs {
    /// Vendor who captured the lead (name or unique fragment)
    #[arg(long)]
    pub vendor: Option<String>,

    /// Contact's full name
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub company: Option<String>,

    /// Employee count bracket (1, 2 a 5, 6 a 20, 21 a 100, 101 a 500, +501)
    #[arg(long, allow_hyphen_values = true)]
    pub employees: Option<String>,

    #[arg(long)]
    pub notes: Option<String>,

    /// Product of interest (Core, Planejamento Estratégico, Agentes IA)
    #[arg(long)]
    pub product: Option<String>,
}

impl From<LeadArgs> for RawForm {
    fn from(args: LeadArgs) -> Self {
        RawForm {
            vendor: args.vendor,
            name: args.name,
            email: args.email,
            phone: args.phone,
            company: args.company,
            employees: args.employees,
            notes: args.notes,
            product: args.product,
        }
    }
}
