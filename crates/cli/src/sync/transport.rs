// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Submission client for the marketing-forms endpoint.
//!
//! Provides a trait-based submission layer that enables:
//! - Real HTTP submissions for production
//! - Mock submitters for unit testing

use std::future::Future;
use std::pin::Pin;

use lq_core::Lead;
use serde::Serialize;

use crate::config::FormsConfig;

/// Longest response excerpt kept in a failure reason.
const MAX_DETAIL_CHARS: usize = 500;

/// Result of submitting one lead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The endpoint accepted the lead (HTTP 200).
    Delivered,
    /// The endpoint refused the lead; resubmitting it unchanged will not help.
    Rejected { status: u16, detail: String },
    /// Transient failure: transport error, timeout, 5xx, 408, 429, or any other status.
    Failed { reason: String },
}

impl SubmitOutcome {
    /// Classify an HTTP response.
    pub fn from_status(status: u16, body: &str) -> Self {
        let detail = excerpt(body);
        match status {
            200 => SubmitOutcome::Delivered,
            408 | 429 => SubmitOutcome::Failed {
                reason: format!("HTTP {status}: {detail}"),
            },
            400..=499 => SubmitOutcome::Rejected { status, detail },
            _ => SubmitOutcome::Failed {
                reason: format!("HTTP {status}: {detail}"),
            },
        }
    }

    pub fn is_delivered(&self) -> bool {
        matches!(self, SubmitOutcome::Delivered)
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, SubmitOutcome::Rejected { .. })
    }

    /// Reason recorded on the lead, if the submission did not succeed.
    pub fn reason(&self) -> Option<String> {
        match self {
            SubmitOutcome::Delivered => None,
            SubmitOutcome::Rejected { status, detail } => Some(format!("HTTP {status}: {detail}")),
            SubmitOutcome::Failed { reason } => Some(reason.clone()),
        }
    }
}

fn excerpt(body: &str) -> String {
    let body = body.trim();
    if body.chars().count() <= MAX_DETAIL_CHARS {
        return body.to_string();
    }
    let mut cut: String = body.chars().take(MAX_DETAIL_CHARS).collect();
    cut.push_str("...");
    cut
}

/// Submits one lead to the remote endpoint.
///
/// Implementations never retry and never return errors: every failure is
/// folded into the returned [`SubmitOutcome`].
pub trait Submitter: Send + Sync {
    fn submit<'a>(
        &'a self,
        lead: &'a Lead,
    ) -> Pin<Box<dyn Future<Output = SubmitOutcome> + Send + 'a>>;

    /// Whether the endpoint credentials are present.
    fn is_configured(&self) -> bool {
        true
    }
}

/// One `{name, value}` entry of the submission body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormField {
    pub name: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionContext {
    pub page_uri: String,
    pub page_name: String,
}

/// Request body accepted by the forms endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionPayload {
    pub fields: Vec<FormField>,
    pub context: SubmissionContext,
}

impl SubmissionPayload {
    pub fn for_lead(lead: &Lead, page_uri: &str, page_name: &str) -> Self {
        let form = &lead.form;
        let employees = form.employees.as_str().to_string();
        let origin = if lead.origin.trim().is_empty() {
            lq_core::DEFAULT_ORIGIN.to_string()
        } else {
            lead.origin.clone()
        };
        let field = |name, value: String| FormField { name, value };

        SubmissionPayload {
            fields: vec![
                field("vendedor", form.vendor.clone()),
                field("firstname", form.name.clone()),
                field("email", form.email.clone()),
                field("phone", form.phone.clone()),
                field("numero_de_funcionarios", employees.clone()),
                field("observacoes", form.notes.clone().unwrap_or_default()),
                field(
                    "produto",
                    form.product.map(|p| p.as_str().to_string()).unwrap_or_default(),
                ),
                field("funil_de_origem", origin),
                field("aceita_receber_diagnostico_via_email", "true".to_string()),
                field("0-2/name", form.company.clone()),
                field("0-2/numero_de_funcionarios", employees),
            ],
            context: SubmissionContext {
                page_uri: page_uri.to_string(),
                page_name: page_name.to_string(),
            },
        }
    }
}

/// HTTP submitter using reqwest.
pub struct HttpSubmitter {
    client: reqwest::Client,
    endpoint: String,
    configured: bool,
    page_uri: String,
    page_name: String,
}

impl HttpSubmitter {
    /// Create a submitter for the configured endpoint.
    pub fn new(forms: &FormsConfig) -> reqwest::Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = forms.timeout() {
            builder = builder.timeout(timeout);
        }
        Ok(Self::with_client(builder.build()?, forms))
    }

    /// Create a submitter around an existing client.
    pub fn with_client(client: reqwest::Client, forms: &FormsConfig) -> Self {
        HttpSubmitter {
            client,
            endpoint: forms.endpoint(),
            configured: forms.is_configured(),
            page_uri: forms.page_uri.clone(),
            page_name: forms.page_name.clone(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Submitter for HttpSubmitter {
    fn submit<'a>(
        &'a self,
        lead: &'a Lead,
    ) -> Pin<Box<dyn Future<Output = SubmitOutcome> + Send + 'a>> {
        Box::pin(async move {
            let payload = SubmissionPayload::for_lead(lead, &self.page_uri, &self.page_name);
            let response = match self.client.post(&self.endpoint).json(&payload).send().await {
                Ok(response) => response,
                Err(e) => {
                    tracing::error!(lead = lead.id, error = %e, "submission failed");
                    return SubmitOutcome::Failed {
                        reason: e.to_string(),
                    };
                }
            };

            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            let outcome = SubmitOutcome::from_status(status, &body);
            if !outcome.is_delivered() {
                tracing::error!(lead = lead.id, status, body = %excerpt(&body), "submission not accepted");
            }
            outcome
        })
    }

    fn is_configured(&self) -> bool {
        self.configured
    }
}
