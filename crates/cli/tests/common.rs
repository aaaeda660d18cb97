// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::mpsc::{self, Receiver};
use std::thread::JoinHandle;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// Probe target nothing listens on.
pub const UNREACHABLE_PROBE: &str = "http://127.0.0.1:9/";

/// `leadq` with forms and proxy settings cleared from the environment.
pub fn leadq() -> Command {
    let mut cmd = cargo_bin_cmd!("leadq");
    cmd.env_remove("LEADQ_PORTAL_ID")
        .env_remove("LEADQ_FORM_GUID")
        .env_remove("LEADQ_LOG")
        .env("NO_PROXY", "127.0.0.1")
        .env("no_proxy", "127.0.0.1");
    cmd
}

/// Helper to create an initialized temp directory
pub fn init_temp() -> TempDir {
    let temp = TempDir::new().unwrap();
    leadq()
        .arg("init")
        .current_dir(temp.path())
        .assert()
        .success();
    temp
}

/// Set `[section] key = value` in the config of an initialized directory.
pub fn set_config(temp: &TempDir, section: &str, key: &str, value: toml::Value) {
    let path = temp.path().join(".leadq/config.toml");
    let mut config: toml::Table = std::fs::read_to_string(&path).unwrap().parse().unwrap();
    config
        .entry(section)
        .or_insert_with(|| toml::Value::Table(toml::Table::new()))
        .as_table_mut()
        .unwrap()
        .insert(key.into(), value);
    std::fs::write(&path, toml::to_string(&config).unwrap()).unwrap();
}

/// Point the connectivity probe of an initialized directory at `url`.
pub fn set_probe_url(temp: &TempDir, url: &str) {
    set_config(temp, "sync", "probe_url", toml::Value::String(url.into()));
    set_config(temp, "sync", "probe_timeout_secs", toml::Value::Integer(2));
}

/// Point both the probe and the forms endpoint at `base_url`.
pub fn use_local_forms(temp: &TempDir, base_url: &str) {
    set_probe_url(temp, base_url);
    set_config(temp, "forms", "base_url", toml::Value::String(format!("{}submit", base_url)));
    set_config(temp, "forms", "portal_id", toml::Value::String("4242".into()));
    set_config(temp, "forms", "form_guid", toml::Value::String("guid-1".into()));
    set_config(temp, "forms", "timeout_secs", toml::Value::Integer(5));
}

/// Request line and body of one request seen by [`serve_forms`].
#[derive(Debug)]
pub struct SeenRequest {
    pub line: String,
    pub body: String,
}

/// Local forms endpoint: HEAD answers 204, each POST answers the next of
/// `post_statuses`. Every response closes its connection.
pub fn serve_forms(post_statuses: Vec<u16>) -> (String, Receiver<SeenRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}/", listener.local_addr().unwrap());
    let (tx, rx) = mpsc::channel();
    std::thread::spawn(move || {
        let mut statuses = post_statuses.into_iter();
        for stream in listener.incoming() {
            let Ok(mut stream) = stream else { break };
            let Some((head, body)) = read_http_request(&mut stream) else {
                continue;
            };
            let line = head.lines().next().unwrap_or_default().to_string();
            let status = if line.starts_with("POST") {
                statuses.next().unwrap_or(500)
            } else {
                204
            };
            let reply = format!(
                "HTTP/1.1 {} X\r\ncontent-length: 0\r\nconnection: close\r\n\r\n",
                status
            );
            let _ = stream.write_all(reply.as_bytes());
            if tx.send(SeenRequest { line, body }).is_err() {
                break;
            }
        }
    });
    (url, rx)
}

fn read_http_request(stream: &mut TcpStream) -> Option<(String, String)> {
    let mut data = Vec::new();
    let mut buf = [0u8; 4096];
    let header_end = loop {
        let n = stream.read(&mut buf).ok()?;
        if n == 0 {
            return None;
        }
        data.extend_from_slice(&buf[..n]);
        if let Some(pos) = data.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };
    let head = String::from_utf8_lossy(&data[..header_end]).to_string();
    let length = head
        .lines()
        .find_map(|l| {
            let (name, value) = l.split_once(':')?;
            name.eq_ignore_ascii_case("content-length")
                .then(|| value.trim().parse::<usize>().ok())
                .flatten()
        })
        .unwrap_or(0);
    while data.len() < header_end + length {
        let n = stream.read(&mut buf).ok()?;
        if n == 0 {
            break;
        }
        data.extend_from_slice(&buf[..n]);
    }
    let body = String::from_utf8_lossy(&data[header_end..]).to_string();
    Some((head, body))
}

/// Answer one HTTP request with `204 No Content`.
pub fn serve_probe_once() -> (String, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}/", listener.local_addr().unwrap());
    let handle = std::thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf);
            let _ = stream.write_all(b"HTTP/1.1 204 No Content\r\ncontent-length: 0\r\nconnection: close\r\n\r\n");
        }
    });
    (url, handle)
}

/// Save a valid lead and return its id.
pub fn create_lead(temp: &TempDir, name: &str) -> String {
    let output = leadq()
        .args(["new", "--vendor", "kesley", "--name", name])
        .args(["--email", &format!("{}@acme.com", name.to_lowercase())])
        .args(["--phone", "11 99999-0000", "--company", "Acme", "--employees", "6 a 20"])
        .args(["-o", "id"])
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Ids printed by `leadq list -o id`.
pub fn list_ids(temp: &TempDir) -> Vec<String> {
    let output = leadq()
        .args(["list", "-o", "id"])
        .current_dir(temp.path())
        .output()
        .unwrap();
    String::from_utf8_lossy(&output.stdout)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
