// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use crate::config::Config;
use crate::error::Error;
use tempfile::TempDir;

#[test]
fn test_init_creates_config_and_database() {
    let temp = TempDir::new().unwrap();
    let work_dir = run_impl(temp.path()).unwrap();

    assert_eq!(work_dir, temp.path().join(".leadq"));
    assert!(work_dir.join("config.toml").is_file());
    assert!(work_dir.join("leads.db").is_file());
    assert_eq!(Config::load(&work_dir).unwrap(), Config::default());
}

#[test]
fn test_init_twice_fails() {
    let temp = TempDir::new().unwrap();
    run_impl(temp.path()).unwrap();

    let err = run_impl(temp.path()).unwrap_err();
    assert!(matches!(err, Error::AlreadyInitialized(_)));
}
