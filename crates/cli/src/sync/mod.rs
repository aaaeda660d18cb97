// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sync of the offline lead queue with the marketing-forms endpoint.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Reconciler  │────►│  Submitter  │────►│   Forms     │
//! │   (client)   │◄────│   (trait)   │◄────│  endpoint   │
//! └──────────────┘     └─────────────┘     └─────────────┘
//!        │     └──────►┌─────────────┐
//!        ▼             │Connectivity │  (HEAD probe)
//! ┌──────────────┐     └─────────────┘
//! │ LeadService  │  (offline queue)
//! └──────────────┘
//! ```
//!
//! # Features
//!
//! - Sequential submission in queue order, one attempt per lead per pass
//! - Single write-back of failures after the pass
//! - Failure classification, exponential backoff and dead-lettering
//! - Injectable submitter and probe traits for testing

mod client;
mod probe;
mod transport;

pub use client::{Reconciler, RetryPolicy, SyncError, SyncReport, SyncResult};
pub use probe::{Connectivity, HttpProbe};
pub use transport::{FormField, HttpSubmitter, SubmissionPayload, SubmitOutcome, Submitter};

#[cfg(test)]
pub(crate) mod test_helpers;


#[cfg(test)]
mod probe_tests;
