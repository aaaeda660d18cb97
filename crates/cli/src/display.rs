// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use lq_core::Lead;

use crate::sync::SyncReport;

/// Maximum line width for wrapped notes (excluding 4-space indent).
const WRAP_WIDTH: usize = 96;

/// Short delivery state: `pending`, `retry N`, or `dead`.
pub fn delivery_label(lead: &Lead) -> String {
    if lead.is_dead_letter() {
        "dead".to_string()
    } else if lead.delivery.attempts > 0 {
        format!("retry {}", lead.delivery.attempts)
    } else {
        "pending".to_string()
    }
}

/// Format a single lead line for list output
pub fn format_lead_line(lead: &Lead) -> String {
    format!(
        "- [{}] {}: {} <{}> ({}, {})",
        delivery_label(lead),
        lead.id,
        lead.form.name,
        lead.form.email,
        lead.form.company,
        lead.form.vendor
    )
}

/// Format lead details for the show command
pub fn format_lead_details(lead: &Lead) -> String {
    let form = &lead.form;
    let mut output = vec![
        format!("[{}] {}", delivery_label(lead), lead.id),
        format!("Name: {}", form.name),
        format!("Email: {}", form.email),
        format!("Phone: {}", form.phone),
        format!("Company: {}", form.company),
        format!("Employees: {}", form.employees),
        format!("Vendor: {}", form.vendor),
    ];
    if let Some(product) = form.product {
        output.push(format!("Product: {}", product));
    }
    output.push(format!("Origin: {}", lead.origin));
    match lead.created_at() {
        Some(created) => output.push(format!("Captured: {}", created.format("%Y-%m-%d %H:%M"))),
        None => output.push(format!("Captured: {}", lead.timestamp)),
    }

    if lead.delivery.attempts > 0 {
        output.push(String::new());
        output.push("Delivery:".to_string());
        output.push(format!("  Attempts: {}", lead.delivery.attempts));
        if let Some(at) = lead.delivery.last_attempt() {
            output.push(format!("  Last attempt: {}", at.format("%Y-%m-%d %H:%M")));
        }
        if let Some(err) = &lead.delivery.last_error {
            output.push(format!("  Last error: {}", err));
        }
        if lead.is_dead_letter() {
            output.push("  Dead-lettered: run 'leadq retry' after fixing the lead".to_string());
        }
    }

    if let Some(notes) = &form.notes {
        output.push(String::new());
        output.push("Notes:".to_string());
        for line in wrap_text(notes, WRAP_WIDTH).lines() {
            output.push(format!("    {}", line));
        }
    }

    output.join("\n")
}

/// Summary lines for a finished sync pass.
pub fn format_sync_summary(report: &SyncReport) -> Vec<String> {
    let mut lines = Vec::new();
    if report.is_complete_success() {
        lines.push(format!("All {} leads sent.", report.delivered));
    } else {
        lines.push(format!(
            "{} sent. {} failed.",
            report.delivered,
            report.failed.len()
        ));
    }
    if !report.dead_lettered.is_empty() {
        let ids: Vec<String> = report.dead_lettered.iter().map(|id| id.to_string()).collect();
        lines.push(format!("Dead-lettered: {}", ids.join(", ")));
    }
    if report.deferred > 0 {
        lines.push(format!(
            "{} waiting for retry backoff (use --force to send now).",
            report.deferred
        ));
    }
    if report.skipped_dead > 0 {
        lines.push(format!(
            "{} dead-lettered leads skipped (see 'leadq list --dead').",
            report.skipped_dead
        ));
    }
    if !report.persisted {
        lines.push("warning: failed to update the offline queue; delivered leads may be sent again".to_string());
    }
    lines
}

/// Wrap a single-line text at word boundaries; multi-line text is kept as written.
pub fn wrap_text(content: &str, width: usize) -> String {
    if content.contains('\n') || content.chars().count() <= width {
        return content.to_string();
    }

    let mut lines: Vec<String> = Vec::new();
    for word in content.split_whitespace() {
        match lines.last_mut() {
            Some(line) if line.chars().count() + 1 + word.chars().count() <= width => {
                line.push(' ');
                line.push_str(word);
            }
            _ => lines.push(word.to_string()),
        }
    }
    lines.join("\n")
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
