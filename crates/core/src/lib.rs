// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! lq-core: Shared library for the leadq offline lead queue
//!
//! This crate provides the lead model, id generation, durable key-value
//! storage, and the queue and service used by the leadq CLI.

pub mod clock;
pub mod error;
pub mod factory;
pub mod lead;
pub mod queue;
pub mod service;
pub mod store;

pub use clock::{ClockSource, IdClock, Stamp, SystemClock};
pub use error::{Error, Result};
pub use factory::LeadFactory;
pub use lead::{
    DeliveryState, EmployeeBracket, Lead, LeadFormData, LeadId, Product, DEFAULT_ORIGIN,
};
pub use queue::{LeadQueue, DEFAULT_QUEUE_KEY};
pub use service::LeadService;
pub use store::{KeyValueStore, MemoryStore, SqliteStore};
