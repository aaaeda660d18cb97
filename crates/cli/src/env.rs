// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All runtime environment variables used by the CLI are defined here
//! with typed accessor functions. The variable name constants are generated
//! by `build.rs` and live in the [`vars`] submodule.

/// Generated environment variable name constants.
pub mod vars {
    include!(concat!(env!("OUT_DIR"), "/env_vars.rs"));
}

/// Default tracing filter when `LEADQ_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Returns `true` if `LEADQ_TIMINGS` is set (any value).
pub fn leadq_timings() -> bool {
    std::env::var(vars::LEADQ_TIMINGS).is_ok()
}

/// Returns the tracing filter from `LEADQ_LOG`, or [`DEFAULT_LOG_FILTER`].
pub fn log_filter() -> String {
    std::env::var(vars::LEADQ_LOG)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

/// Returns the value of `LEADQ_PORTAL_ID` if set.
pub fn portal_id() -> Option<String> {
    std::env::var(vars::LEADQ_PORTAL_ID).ok()
}

/// Returns the value of `LEADQ_FORM_GUID` if set.
pub fn form_guid() -> Option<String> {
    std::env::var(vars::LEADQ_FORM_GUID).ok()
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
