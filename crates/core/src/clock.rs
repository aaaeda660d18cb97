// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Monotonic lead identifiers derived from the wall clock.
//!
//! A lead id is the creation time in milliseconds, bumped past the last
//! issued id when the wall clock stalls or goes backwards. Ids therefore
//! stay unique on a device even under clock rollback or rapid inserts.

use chrono::{DateTime, SecondsFormat, Utc};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::lead::LeadId;

/// Trait for getting the current wall clock time.
///
/// This allows injecting a mock clock for testing.
pub trait ClockSource: Send + Sync {
    /// Returns the current time in milliseconds since Unix epoch.
    fn now_ms(&self) -> i64;
}

/// System clock implementation using `std::time::SystemTime`.
#[derive(Debug, Default)]
pub struct SystemClock;

impl ClockSource for SystemClock {
    fn now_ms(&self) -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| i64::try_from(d.as_millis()).unwrap_or(i64::MAX))
            .unwrap_or(0)
    }
}

impl<C: ClockSource> ClockSource for &C {
    fn now_ms(&self) -> i64 {
        (*self).now_ms()
    }
}

/// One reading of an [`IdClock`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stamp {
    /// Unique, strictly increasing identifier.
    pub id: LeadId,
    /// Wall clock reading the id was derived from.
    pub wall_ms: i64,
}

impl Stamp {
    /// Renders the wall clock reading as ISO-8601 with millisecond precision.
    pub fn iso8601(&self) -> String {
        to_iso8601(self.wall_ms)
    }
}

/// Issues strictly increasing lead ids.
pub struct IdClock<C: ClockSource = SystemClock> {
    clock: C,
    last_id: Mutex<LeadId>,
}

impl IdClock<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for IdClock<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ClockSource> IdClock<C> {
    /// Creates an id clock over a custom clock source.
    pub fn with_clock(clock: C) -> Self {
        IdClock {
            clock,
            last_id: Mutex::new(0),
        }
    }

    /// Returns the underlying clock source.
    pub fn source(&self) -> &C {
        &self.clock
    }

    /// Returns the last id handed out or observed.
    pub fn last_id(&self) -> LeadId {
        *self.last_id.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Records an id issued elsewhere so later ids sort after it.
    pub fn observe(&self, id: LeadId) {
        let mut last = self.last_id.lock().unwrap_or_else(|e| e.into_inner());
        if id > *last {
            *last = id;
        }
    }

    /// Takes a clock reading and derives the next id from it.
    pub fn next(&self) -> Stamp {
        let wall_ms = self.clock.now_ms();
        let mut last = self.last_id.lock().unwrap_or_else(|e| e.into_inner());
        let id = if wall_ms > *last { wall_ms } else { *last + 1 };
        *last = id;
        Stamp { id, wall_ms }
    }
}

/// Formats milliseconds since the epoch as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
pub fn to_iso8601(wall_ms: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(wall_ms)
        .unwrap_or_default()
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
