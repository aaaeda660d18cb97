// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Lead records and the form data they are built from.
//!
//! Field names on the wire and in storage follow the capture form
//! (`vendedor`, `nome`, `telefone`, ...). The Rust field names are English.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Identifier of a queued lead (milliseconds-based, strictly increasing).
pub type LeadId = i64;

/// Origin tag attached to every lead captured through this channel.
pub const DEFAULT_ORIGIN: &str = "inbound";

/// Company size bracket offered by the capture form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmployeeBracket {
    Solo,
    TwoToFive,
    SixToTwenty,
    TwentyOneToHundred,
    HundredOneToFiveHundred,
    OverFiveHundred,
}

impl EmployeeBracket {
    /// All brackets in form order.
    pub const ALL: [EmployeeBracket; 6] = [
        EmployeeBracket::Solo,
        EmployeeBracket::TwoToFive,
        EmployeeBracket::SixToTwenty,
        EmployeeBracket::TwentyOneToHundred,
        EmployeeBracket::HundredOneToFiveHundred,
        EmployeeBracket::OverFiveHundred,
    ];

    /// Returns the label used in storage, display and the remote form.
    pub fn as_str(&self) -> &'static str {
        match self {
            EmployeeBracket::Solo => "1",
            EmployeeBracket::TwoToFive => "2 a 5",
            EmployeeBracket::SixToTwenty => "6 a 20",
            EmployeeBracket::TwentyOneToHundred => "21 a 100",
            EmployeeBracket::HundredOneToFiveHundred => "101 a 500",
            EmployeeBracket::OverFiveHundred => "+501",
        }
    }

    /// Short alias accepted on input (`2-5`, `501+`, ...).
    fn alias(&self) -> &'static str {
        match self {
            EmployeeBracket::Solo => "1",
            EmployeeBracket::TwoToFive => "2-5",
            EmployeeBracket::SixToTwenty => "6-20",
            EmployeeBracket::TwentyOneToHundred => "21-100",
            EmployeeBracket::HundredOneToFiveHundred => "101-500",
            EmployeeBracket::OverFiveHundred => "501+",
        }
    }
}

impl fmt::Display for EmployeeBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EmployeeBracket {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim().to_lowercase();
        EmployeeBracket::ALL
            .into_iter()
            .find(|b| b.as_str() == needle || b.alias() == needle)
            .ok_or_else(|| Error::InvalidEmployeeBracket(s.to_string()))
    }
}

/// Product of interest offered by the capture form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Product {
    Core,
    StrategicPlanning,
    AiAgents,
}

impl Product {
    /// All products in form order.
    pub const ALL: [Product; 3] = [Product::Core, Product::StrategicPlanning, Product::AiAgents];

    /// Returns the label used in storage, display and the remote form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Product::Core => "Core",
            Product::StrategicPlanning => "Planejamento Estratégico",
            Product::AiAgents => "Agentes IA",
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Product {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim().to_lowercase();
        Product::ALL
            .into_iter()
            .find(|p| p.as_str().to_lowercase() == needle)
            .ok_or_else(|| Error::InvalidProduct(s.to_string()))
    }
}

macro_rules! serde_as_label {
    ($ty:ty) => {
        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

serde_as_label!(EmployeeBracket);
serde_as_label!(Product);

/// Deserialize an optional field where a blank string means "not set".
fn blank_as_none<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

/// Fields entered on the capture form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadFormData {
    #[serde(rename = "vendedor")]
    pub vendor: String,
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    #[serde(rename = "telefone")]
    pub phone: String,
    #[serde(rename = "empresa")]
    pub company: String,
    #[serde(rename = "numero_de_funcionarios")]
    pub employees: EmployeeBracket,
    #[serde(
        rename = "observacoes",
        default,
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub notes: Option<String>,
    #[serde(
        rename = "produto",
        default,
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub product: Option<Product>,
}

/// Delivery bookkeeping for a queued lead.
///
/// All fields are omitted from storage while they hold their defaults, so
/// records written without delivery tracking still load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryState {
    /// Consecutive failed delivery attempts.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub attempts: u32,
    /// Reason reported for the most recent failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_error: Option<String>,
    /// ISO-8601 time of the most recent attempt.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_attempt_at: Option<String>,
    /// Excluded from automatic retry until reset.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub dead_letter: bool,
}

fn is_zero(n: &u32) -> bool {
    *n == 0
}

impl DeliveryState {
    /// Parses `last_attempt_at`, if present and well-formed.
    pub fn last_attempt(&self) -> Option<DateTime<Utc>> {
        self.last_attempt_at
            .as_deref()
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.with_timezone(&Utc))
    }
}

/// A captured lead waiting in the offline queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    pub id: LeadId,
    /// ISO-8601 creation time.
    pub timestamp: String,
    #[serde(rename = "funil_de_origem")]
    pub origin: String,
    #[serde(flatten)]
    pub form: LeadFormData,
    #[serde(flatten)]
    pub delivery: DeliveryState,
}

impl Lead {
    /// Parses the creation timestamp.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.timestamp)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    pub fn is_dead_letter(&self) -> bool {
        self.delivery.dead_letter
    }

    /// Returns a copy carrying `form` in place of the current form data.
    ///
    /// Identity (id, timestamp, origin) is kept; delivery tracking starts over.
    pub fn with_form(&self, form: LeadFormData) -> Lead {
        Lead {
            id: self.id,
            timestamp: self.timestamp.clone(),
            origin: self.origin.clone(),
            form,
            delivery: DeliveryState::default(),
        }
    }
}

#[cfg(test)]
#[path = "lead_tests.rs"]
mod tests;
