// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Offline queue of leads waiting for delivery.
//!
//! The whole queue is one JSON array stored under a single key. Every
//! mutation reads the full list, changes it in memory and writes it back in
//! one read-modify-write of that key.
//!
//! A payload that does not parse as a lead list reads as an empty queue.
//! Before any write replaces such a payload, its raw text is copied to
//! `<key>.corrupt.<unix-ms>` (once per distinct payload) so unsynced leads
//! can still be recovered.

use chrono::Utc;
use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::lead::{Lead, LeadId};
use crate::store::{KeyValueStore, SqliteStore};

/// Storage key used when none is configured.
pub const DEFAULT_QUEUE_KEY: &str = "@leadq/offline-leads";

/// Persistent queue of [`Lead`] records.
pub struct LeadQueue<S: KeyValueStore = SqliteStore> {
    store: S,
    key: String,
}

fn decode(raw: &str) -> Result<Vec<Lead>> {
    Ok(serde_json::from_str(raw)?)
}

impl<S: KeyValueStore> LeadQueue<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        LeadQueue {
            store,
            key: key.into(),
        }
    }

    /// The namespace key holding the queue.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn seq_key(&self) -> String {
        format!("{}.seq", self.key)
    }

    fn corrupt_prefix(&self) -> String {
        format!("{}.corrupt.", self.key)
    }

    /// Read the persisted queue.
    ///
    /// Missing, unreadable and unparseable payloads all read as empty.
    pub fn load(&self) -> Vec<Lead> {
        match self.store.get(&self.key) {
            Ok(Some(raw)) => match decode(&raw) {
                Ok(leads) => leads,
                Err(e) => {
                    tracing::warn!(key = %self.key, error = %e, "stored queue is not a lead list, reading as empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "failed to read offline queue");
                Vec::new()
            }
        }
    }

    /// Overwrite the whole queue with `leads`.
    ///
    /// Returns `false` (after logging) if the write failed.
    pub fn replace(&self, leads: &[Lead]) -> bool {
        match self.mutate(|current| {
            *current = leads.to_vec();
            Ok(())
        }) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(key = %self.key, error = %e, "failed to write offline queue");
                false
            }
        }
    }

    /// Number of queued leads.
    pub fn len(&self) -> usize {
        self.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the queued lead with the given id.
    pub fn get(&self, id: LeadId) -> Result<Lead> {
        self.load()
            .into_iter()
            .find(|l| l.id == id)
            .ok_or(Error::LeadNotFound(id))
    }

    /// Largest id currently queued.
    pub fn max_id(&self) -> Option<LeadId> {
        self.load().iter().map(|l| l.id).max()
    }

    /// Append a lead to the end of the queue.
    pub fn push(&self, lead: Lead) -> Result<()> {
        self.mutate(|leads| {
            leads.push(lead);
            Ok(())
        })
    }

    /// Replace the queued lead that has the same id, keeping its position.
    pub fn update(&self, lead: Lead) -> Result<()> {
        self.mutate(|leads| {
            let slot = leads
                .iter_mut()
                .find(|l| l.id == lead.id)
                .ok_or(Error::LeadNotFound(lead.id))?;
            *slot = lead;
            Ok(())
        })
    }

    /// Remove a lead from the queue, returning it.
    pub fn remove(&self, id: LeadId) -> Result<Lead> {
        self.mutate(|leads| {
            let pos = leads
                .iter()
                .position(|l| l.id == id)
                .ok_or(Error::LeadNotFound(id))?;
            Ok(leads.remove(pos))
        })
    }

    /// Write back the result of a reconciliation pass.
    ///
    /// `delivered` and `failed` hold the records as they were submitted.
    /// A delivered record is dropped and a failed one replaces the queued
    /// record with the same id, unless that record was edited meanwhile; an
    /// edited record stays queued as stored. Records not mentioned
    /// (including ones queued while the pass ran) are kept as they are.
    pub fn apply_pass(&self, delivered: &[Lead], failed: &[Lead]) -> bool {
        let delivered: HashMap<LeadId, &Lead> = delivered.iter().map(|l| (l.id, l)).collect();
        let failed: HashMap<LeadId, &Lead> = failed.iter().map(|l| (l.id, l)).collect();

        match self.mutate(|leads| {
            leads.retain(|l| !delivered.get(&l.id).is_some_and(|d| d.form == l.form));
            for lead in leads.iter_mut() {
                let updated = failed.get(&lead.id).filter(|u| u.form == lead.form);
                if let Some(updated) = updated {
                    *lead = (*updated).clone();
                }
            }
            Ok(())
        }) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(key = %self.key, error = %e, "failed to write back sync results");
                false
            }
        }
    }

    /// Persisted id high-water mark, if one was recorded.
    pub fn load_seq(&self) -> Option<LeadId> {
        self.store
            .get(&self.seq_key())
            .ok()
            .flatten()
            .and_then(|raw| raw.trim().parse().ok())
    }

    /// Record the id high-water mark.
    pub fn store_seq(&self, id: LeadId) -> Result<()> {
        self.store.put(&self.seq_key(), &id.to_string())
    }

    /// Keys holding payloads that were set aside as corrupt.
    pub fn quarantined(&self) -> Vec<String> {
        self.store
            .keys_with_prefix(&self.corrupt_prefix())
            .unwrap_or_default()
    }

    fn quarantine(&self, raw: &str) -> Result<()> {
        let prefix = self.corrupt_prefix();
        let existing = self.store.keys_with_prefix(&prefix)?;
        for key in &existing {
            if self.store.get(key)?.as_deref() == Some(raw) {
                // Already set aside by an earlier attempt whose write failed.
                return Ok(());
            }
        }

        let stamp = Utc::now().timestamp_millis();
        let mut backup_key = format!("{}{}", prefix, stamp);
        let mut suffix = 1;
        while existing.contains(&backup_key) {
            backup_key = format!("{}{}.{}", prefix, stamp, suffix);
            suffix += 1;
        }
        self.store.put(&backup_key, raw)?;
        tracing::warn!(key = %self.key, backup = %backup_key, "corrupt offline queue copied aside before overwrite");
        Ok(())
    }

    fn mutate<T>(&self, apply: impl FnOnce(&mut Vec<Lead>) -> Result<T>) -> Result<T> {
        if let Some(raw) = self.store.get(&self.key)? {
            if decode(&raw).is_err() {
                self.quarantine(&raw)?;
            }
        }

        let mut apply = Some(apply);
        let mut output = None;
        self.store.update(&self.key, &mut |raw| {
            let mut leads = match raw.as_deref().map(decode) {
                Some(Ok(leads)) => leads,
                _ => Vec::new(),
            };
            let apply = apply
                .take()
                .ok_or_else(|| Error::Store("queue mutation applied twice".to_string()))?;
            output = Some(apply(&mut leads)?);
            Ok(serde_json::to_string(&leads)?)
        })?;

        output.ok_or_else(|| Error::Store("queue mutation did not run".to_string()))
    }
}

#[cfg(test)]
#[path = "queue_tests.rs"]
mod tests;
