// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Network reachability check run before each reconciliation pass.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use crate::config::SyncConfig;

/// Answers whether the network is reachable.
pub trait Connectivity: Send + Sync {
    fn is_reachable(&self) -> Pin<Box<dyn Future<Output = bool> + Send + '_>>;
}

/// Probe that sends `HEAD` to a well-known URL.
///
/// Any HTTP response counts as reachable, whatever its status.
pub struct HttpProbe {
    client: reqwest::Client,
    url: String,
}

impl HttpProbe {
    pub fn new(config: &SyncConfig) -> reqwest::Result<Self> {
        let mut builder = reqwest::Client::builder();
        if config.probe_timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.probe_timeout_secs));
        }
        Ok(Self::with_client(builder.build()?, &config.probe_url))
    }

    pub fn with_client(client: reqwest::Client, url: &str) -> Self {
        HttpProbe {
            client,
            url: url.to_string(),
        }
    }
}

impl Connectivity for HttpProbe {
    fn is_reachable(&self) -> Pin<Box<dyn Future<Output = bool> + Send + '_>> {
        Box::pin(async move {
            match self.client.head(&self.url).send().await {
                Ok(response) => {
                    tracing::debug!(url = %self.url, status = response.status().as_u16(), "probe answered");
                    true
                }
                Err(e) => {
                    tracing::debug!(url = %self.url, error = %e, "probe failed");
                    false
                }
            }
        })
    }
}
