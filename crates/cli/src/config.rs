// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Project configuration management.
//!
//! Configuration is stored in `.leadq/config.toml` and includes:
//! - `origin` / `storage_key`: the origin tag stamped on new leads and the queue key
//! - `[forms]`: the marketing-forms endpoint leads are submitted to
//! - `[sync]`: connectivity probe and retry policy
//! - `[catalog]`: the vendor roster offered on the capture form
//!
//! Every field has a default, so a partial (or empty) file is valid.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::env;
use crate::error::{Error, Result};

const WORK_DIR_NAME: &str = ".leadq";
const CONFIG_FILE_NAME: &str = "config.toml";
const DB_FILE_NAME: &str = "leads.db";
const GITIGNORE_FILE_NAME: &str = ".gitignore";

/// Vendors offered when no roster is configured.
pub const DEFAULT_VENDORS: [&str; 6] = [
    "Kesley Oliveira",
    "Alexsandy Corrêa",
    "Jehnnifer Padilha",
    "Lucio Ramos",
    "Matheus Gerik",
    "Thomas Ferreira",
];

/// Project configuration stored in `.leadq/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Origin tag (`funil_de_origem`) stamped on every new lead.
    pub origin: String,
    /// Key under which the queue is stored.
    pub storage_key: String,
    pub forms: FormsConfig,
    pub sync: SyncConfig,
    pub catalog: CatalogConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            origin: lq_core::DEFAULT_ORIGIN.to_string(),
            storage_key: lq_core::DEFAULT_QUEUE_KEY.to_string(),
            forms: FormsConfig::default(),
            sync: SyncConfig::default(),
            catalog: CatalogConfig::default(),
        }
    }
}

/// Submission endpoint settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormsConfig {
    pub base_url: String,
    pub portal_id: String,
    pub form_guid: String,
    /// Reported to the endpoint as the submission context.
    pub page_uri: String,
    pub page_name: String,
    /// Request timeout. Unset means no timeout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for FormsConfig {
    fn default() -> Self {
        FormsConfig {
            base_url: "https://api.hsforms.com/submissions/v3/integration/submit".to_string(),
            portal_id: String::new(),
            form_guid: String::new(),
            page_uri: "www.grupo3c.com.br/evento-offline".to_string(),
            page_name: "App Captura Mobile".to_string(),
            timeout_secs: None,
        }
    }
}

impl FormsConfig {
    /// True when both the portal id and form GUID are set.
    pub fn is_configured(&self) -> bool {
        !self.portal_id.trim().is_empty() && !self.form_guid.trim().is_empty()
    }

    /// Full submission URL: `{base_url}/{portal_id}/{form_guid}`.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/{}/{}",
            self.base_url.trim_end_matches('/'),
            self.portal_id.trim(),
            self.form_guid.trim()
        )
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// Connectivity probe and retry policy settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    pub probe_url: String,
    pub probe_timeout_secs: u64,
    /// Consecutive failures before a lead is dead-lettered (0 = never).
    pub max_attempts: u32,
    /// Delay after the first failure; doubles per failure (0 = no backoff).
    pub initial_backoff_secs: u64,
    pub max_backoff_secs: u64,
}

impl Default for SyncConfig {
    fn default() -> Self {
        SyncConfig {
            probe_url: "https://clients3.google.com/generate_204".to_string(),
            probe_timeout_secs: 5,
            max_attempts: 10,
            initial_backoff_secs: 30,
            max_backoff_secs: 3600,
        }
    }
}

/// Options offered on the capture form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub vendors: Vec<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig {
            vendors: DEFAULT_VENDORS.iter().map(|v| v.to_string()).collect(),
        }
    }
}

impl Config {
    /// Loads configuration from the given `.leadq/` directory.
    pub fn load(work_dir: &Path) -> Result<Self> {
        let config_path = work_dir.join(CONFIG_FILE_NAME);
        let content = fs::read_to_string(&config_path)
            .map_err(|e| Error::Config(format!("failed to read config: {}", e)))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Loads configuration and applies environment overrides.
    pub fn resolve(work_dir: &Path) -> Result<Self> {
        let mut config = Self::load(work_dir)?;
        config.apply_overrides(env::portal_id(), env::form_guid());
        Ok(config)
    }

    /// Replaces endpoint credentials with non-empty overrides.
    pub fn apply_overrides(&mut self, portal_id: Option<String>, form_guid: Option<String>) {
        if let Some(id) = portal_id.filter(|v| !v.trim().is_empty()) {
            self.forms.portal_id = id;
        }
        if let Some(guid) = form_guid.filter(|v| !v.trim().is_empty()) {
            self.forms.form_guid = guid;
        }
    }

    /// Saves configuration to the given `.leadq/` directory.
    pub fn save(&self, work_dir: &Path) -> Result<()> {
        let config_path = work_dir.join(CONFIG_FILE_NAME);
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(&config_path, content)?;
        Ok(())
    }
}

/// Find the .leadq directory by walking up from the current directory
pub fn find_work_dir() -> Result<PathBuf> {
    let mut current = std::env::current_dir()?;
    loop {
        let work_dir = current.join(WORK_DIR_NAME);
        if work_dir.is_dir() {
            return Ok(work_dir);
        }
        if !current.pop() {
            return Err(Error::NotInitialized);
        }
    }
}

pub fn get_db_path(work_dir: &Path) -> PathBuf {
    work_dir.join(DB_FILE_NAME)
}

/// Initialize a new .leadq directory at the given path
pub fn init_work_dir(path: &Path) -> Result<PathBuf> {
    let work_dir = path.join(WORK_DIR_NAME);

    if work_dir.join(CONFIG_FILE_NAME).exists() {
        return Err(Error::AlreadyInitialized(work_dir.display().to_string()));
    }

    fs::create_dir_all(&work_dir)?;
    Config::default().save(&work_dir)?;
    write_gitignore(&work_dir)?;

    Ok(work_dir)
}

/// Keeps captured leads (personal data) out of version control.
fn write_gitignore(work_dir: &Path) -> Result<()> {
    let content = "# Offline queue (contains captured contact data)\nleads.db\nleads.db-*\n";
    fs::write(work_dir.join(GITIGNORE_FILE_NAME), content)?;
    Ok(())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
