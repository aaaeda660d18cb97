// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for lq-core operations.

use thiserror::Error;

/// All possible errors that can occur in lq-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("lead not found: {0}")]
    LeadNotFound(i64),

    #[error("invalid employee bracket: '{0}'\n  hint: valid brackets are: 1, 2 a 5, 6 a 20, 21 a 100, 101 a 500, +501")]
    InvalidEmployeeBracket(String),

    #[error("invalid product: '{0}'\n  hint: valid products are: Core, Planejamento Estratégico, Agentes IA")]
    InvalidProduct(String),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("corrupted data: {0}")]
    CorruptedData(String),

    #[error("store error: {0}")]
    Store(String),
}

/// A specialized Result type for lq-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
