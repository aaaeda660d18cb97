// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for sync module tests.

#![allow(clippy::unwrap_used)]

use std::collections::{HashMap, HashSet};
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::Mutex;

use lq_core::{
    ClockSource, EmployeeBracket, Lead, LeadFactory, LeadFormData, LeadId, LeadQueue,
    LeadService, MemoryStore, DEFAULT_QUEUE_KEY,
};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use super::probe::Connectivity;
use super::transport::{SubmitOutcome, Submitter};

/// Clock under test control.
#[derive(Debug, Default)]
pub struct ManualClock(AtomicI64);

impl ManualClock {
    pub fn at(ms: i64) -> Self {
        ManualClock(AtomicI64::new(ms))
    }

    pub fn advance(&self, ms: i64) {
        self.0.fetch_add(ms, Ordering::SeqCst);
    }
}

impl ClockSource for ManualClock {
    fn now_ms(&self) -> i64 {
        self.0.load(Ordering::SeqCst)
    }
}

pub type TestService = LeadService<MemoryStore, ManualClock>;

/// Service over an in-memory store whose clock starts at `now_ms`.
pub fn memory_service(now_ms: i64) -> TestService {
    LeadService::new(
        LeadQueue::new(MemoryStore::new(), DEFAULT_QUEUE_KEY),
        LeadFactory::with_clock(ManualClock::at(now_ms), "inbound"),
    )
}

pub fn make_form(name: &str) -> LeadFormData {
    LeadFormData {
        vendor: "Jehnnifer Padilha".into(),
        name: name.into(),
        email: format!("{}@example.com", name.to_lowercase()),
        phone: "47 3333-2222".into(),
        company: format!("{name} Ltda"),
        employees: EmployeeBracket::HundredOneToFiveHundred,
        notes: None,
        product: None,
    }
}

/// Queue a lead with an explicit id.
pub fn queue_lead(service: &TestService, id: LeadId, name: &str) -> Lead {
    let lead = Lead {
        id,
        timestamp: lq_core::clock::to_iso8601(id),
        origin: "inbound".into(),
        form: make_form(name),
        delivery: Default::default(),
    };
    service.queue().push(lead.clone()).unwrap();
    lead
}

/// Submitter that accepts a declared set of ids and records call order.
#[derive(Default)]
pub struct MockSubmitter {
    accept: HashSet<LeadId>,
    reject: HashMap<LeadId, u16>,
    calls: Mutex<Vec<LeadId>>,
    unconfigured: bool,
}

impl MockSubmitter {
    /// Accept exactly `ids`; every other lead fails transiently.
    pub fn accepting(ids: &[LeadId]) -> Self {
        MockSubmitter {
            accept: ids.iter().copied().collect(),
            ..Default::default()
        }
    }

    /// Answer `id` with a permanent rejection.
    pub fn rejecting(mut self, id: LeadId, status: u16) -> Self {
        self.reject.insert(id, status);
        self
    }

    pub fn unconfigured(mut self) -> Self {
        self.unconfigured = true;
        self
    }

    pub fn calls(&self) -> Vec<LeadId> {
        self.calls.lock().unwrap().clone()
    }
}

impl Submitter for MockSubmitter {
    fn submit<'a>(
        &'a self,
        lead: &'a Lead,
    ) -> Pin<Box<dyn Future<Output = SubmitOutcome> + Send + 'a>> {
        Box::pin(async move {
            self.calls.lock().unwrap().push(lead.id);
            if self.accept.contains(&lead.id) {
                SubmitOutcome::Delivered
            } else if let Some(status) = self.reject.get(&lead.id) {
                SubmitOutcome::Rejected {
                    status: *status,
                    detail: "invalid email".into(),
                }
            } else {
                SubmitOutcome::Failed {
                    reason: "HTTP 503: unavailable".into(),
                }
            }
        })
    }

    fn is_configured(&self) -> bool {
        !self.unconfigured
    }
}

/// Probe with a fixed answer that counts how often it was asked.
#[derive(Default)]
pub struct FixedProbe {
    online: bool,
    checks: AtomicUsize,
}

impl FixedProbe {
    pub fn online() -> Self {
        FixedProbe {
            online: true,
            checks: AtomicUsize::new(0),
        }
    }

    pub fn offline() -> Self {
        FixedProbe::default()
    }

    pub fn checks(&self) -> usize {
        self.checks.load(Ordering::SeqCst)
    }
}

impl Connectivity for FixedProbe {
    fn is_reachable(&self) -> Pin<Box<dyn Future<Output = bool> + Send + '_>> {
        self.checks.fetch_add(1, Ordering::SeqCst);
        let online = self.online;
        Box::pin(async move { online })
    }
}

/// Client that ignores proxy settings so loopback servers are reached directly.
pub fn direct_client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

/// Serve exactly one HTTP request with `status` and `body`.
///
/// Returns the base URL and a handle resolving to the raw request text.
pub async fn serve_once(status: u16, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let request = read_request(&mut socket).await;
        let response = format!(
            "HTTP/1.1 {status} X\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;
        request
    });
    (format!("http://{addr}"), handle)
}

/// Accept one connection and never answer it.
pub async fn serve_silence() -> (String, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        let (_socket, _) = listener.accept().await.unwrap();
        tokio::time::sleep(std::time::Duration::from_secs(30)).await;
    });
    (format!("http://{addr}"), handle)
}

async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let head = String::from_utf8_lossy(&buf[..end]).to_lowercase();
            let len = head
                .lines()
                .find_map(|l| l.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= end + 4 + len {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}
