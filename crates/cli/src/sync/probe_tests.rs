// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for the connectivity probe.

#![allow(clippy::unwrap_used)]

use std::time::Duration;

use super::probe::{Connectivity, HttpProbe};
use super::test_helpers::{serve_once, serve_silence};

fn client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .no_proxy()
        .timeout(timeout)
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_any_response_is_reachable() {
    let (url, server) = serve_once(204, "").await;
    let probe = HttpProbe::with_client(client(Duration::from_secs(5)), &url);

    assert!(probe.is_reachable().await);
    let request = server.await.unwrap();
    assert!(request.starts_with("HEAD / HTTP/1.1"));
}

#[tokio::test]
async fn test_error_status_is_still_reachable() {
    let (url, server) = serve_once(503, "").await;
    let probe = HttpProbe::with_client(client(Duration::from_secs(5)), &url);

    assert!(probe.is_reachable().await);
    server.await.unwrap();
}

#[tokio::test]
async fn test_refused_connection_is_unreachable() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let probe = HttpProbe::with_client(client(Duration::from_secs(5)), &format!("http://{addr}"));
    assert!(!probe.is_reachable().await);
}

#[tokio::test]
async fn test_timeout_is_unreachable() {
    let (url, server) = serve_silence().await;
    let probe = HttpProbe::with_client(client(Duration::from_millis(200)), &url);

    assert!(!probe.is_reachable().await);
    server.abort();
}
