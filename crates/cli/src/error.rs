// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the leadq library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("not initialized: run 'leadq init' first")]
    NotInitialized,

    #[error("already initialized at {0}")]
    AlreadyInitialized(String),

    #[error("lead not found: {0}\n  hint: run 'leadq list' to see queued leads")]
    LeadNotFound(i64),

    #[error("invalid lead ID '{0}'\n  hint: lead IDs are the numbers shown by 'leadq list'")]
    InvalidLeadId(String),

    #[error("{field} is required")]
    FieldRequired { field: &'static str },

    #[error("{field} cannot be empty")]
    FieldEmpty { field: &'static str },

    #[error("{field} too long ({actual} chars, max {max})")]
    FieldTooLong {
        field: &'static str,
        actual: usize,
        max: usize,
    },

    #[error("invalid email address: '{0}'\n  hint: expected something like name@company.com")]
    InvalidEmail(String),

    #[error("unknown {field} '{value}'\n  hint: valid values are: {}", valid.join(", "))]
    UnknownOption {
        field: &'static str,
        value: String,
        valid: Vec<String>,
    },

    #[error("ambiguous {field} '{value}' matches: {}", matches.join(", "))]
    AmbiguousOption {
        field: &'static str,
        value: String,
        matches: Vec<String>,
    },

    #[error("unknown attribute '{attr}'\n  hint: editable fields are: vendor, name, email, phone, company, employees, notes, product")]
    UnknownAttribute { attr: String },

    #[error("invalid employee bracket: '{0}'\n  hint: valid brackets are: 1, 2 a 5, 6 a 20, 21 a 100, 101 a 500, +501")]
    InvalidEmployeeBracket(String),

    #[error("invalid product: '{0}'\n  hint: valid products are: Core, Planejamento Estratégico, Agentes IA")]
    InvalidProduct(String),

    #[error("forms endpoint not configured\n  hint: set forms.portal_id and forms.form_guid in .leadq/config.toml, or LEADQ_PORTAL_ID and LEADQ_FORM_GUID")]
    FormsNotConfigured,

    #[error("no internet connection\n  hint: leads stay queued; run 'leadq sync' again once online")]
    NoConnectivity,

    #[error("failed to save lead: {0}")]
    SaveFailed(String),

    #[error("http client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("corrupted data: {0}")]
    CorruptedData(String),
}

/// A specialized Result type for leadq operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<lq_core::Error> for Error {
    fn from(e: lq_core::Error) -> Self {
        match e {
            lq_core::Error::LeadNotFound(id) => Error::LeadNotFound(id),
            lq_core::Error::InvalidEmployeeBracket(s) => Error::InvalidEmployeeBracket(s),
            lq_core::Error::InvalidProduct(s) => Error::InvalidProduct(s),
            lq_core::Error::Database(e) => Error::Database(e),
            lq_core::Error::Io(e) => Error::Io(e),
            lq_core::Error::Json(e) => Error::Json(e),
            lq_core::Error::CorruptedData(s) => Error::CorruptedData(s),
            lq_core::Error::Store(s) => Error::SaveFailed(s),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
