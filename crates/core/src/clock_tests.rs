// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use std::sync::atomic::{AtomicI64, Ordering};

/// Mock clock for testing with controllable time.
struct MockClock {
    time_ms: AtomicI64,
}

impl MockClock {
    fn new(initial_ms: i64) -> Self {
        MockClock {
            time_ms: AtomicI64::new(initial_ms),
        }
    }

    fn set(&self, ms: i64) {
        self.time_ms.store(ms, Ordering::SeqCst);
    }
}

impl ClockSource for MockClock {
    fn now_ms(&self) -> i64 {
        self.time_ms.load(Ordering::SeqCst)
    }
}

#[test]
fn id_follows_wall_clock() {
    let clock = IdClock::with_clock(MockClock::new(1_000));
    let stamp = clock.next();
    assert_eq!(stamp.id, 1_000);
    assert_eq!(stamp.wall_ms, 1_000);

    clock.source().set(5_000);
    assert_eq!(clock.next().id, 5_000);
}

#[test]
fn ids_unique_when_clock_stalls() {
    let clock = IdClock::with_clock(MockClock::new(1_000));
    let ids: Vec<_> = (0..5).map(|_| clock.next().id).collect();
    assert_eq!(ids, vec![1_000, 1_001, 1_002, 1_003, 1_004]);
}

#[test]
fn ids_increase_across_clock_rollback() {
    let clock = IdClock::with_clock(MockClock::new(10_000));
    let first = clock.next();

    clock.source().set(2_000);
    let second = clock.next();

    assert!(second.id > first.id);
    // The timestamp still reports the actual reading.
    assert_eq!(second.wall_ms, 2_000);
}

#[test]
fn observe_seeds_high_water_mark() {
    let clock = IdClock::with_clock(MockClock::new(1_000));
    clock.observe(9_999);
    clock.observe(500);
    assert_eq!(clock.last_id(), 9_999);
    assert_eq!(clock.next().id, 10_000);
}

#[test]
fn system_clock_is_after_2020() {
    assert!(SystemClock.now_ms() > 1_577_836_800_000);
}

#[test]
fn iso8601_has_millis_and_z_suffix() {
    assert_eq!(to_iso8601(1_700_000_000_123), "2023-11-14T22:13:20.123Z");
    let stamp = Stamp {
        id: 1,
        wall_ms: 0,
    };
    assert_eq!(stamp.iso8601(), "1970-01-01T00:00:00.000Z");
}
