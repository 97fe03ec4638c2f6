// Report rendering for audit results

use crate::model::{AuditReport, CheckStatus, TaskPriority};
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;

const RULE: &str =
    "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ReportFormat {
    Text,
    Json,
    Markdown,
}

impl ReportFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" => Some(ReportFormat::Text),
            "json" => Some(ReportFormat::Json),
            "markdown" | "md" => Some(ReportFormat::Markdown),
            _ => None,
        }
    }
}

fn status_marker(status: CheckStatus) -> String {
    match status {
        CheckStatus::Pass => "✓".green().to_string(),
        CheckStatus::Warn => "⚠".yellow().to_string(),
        CheckStatus::Fail => "✗".red().to_string(),
    }
}

fn status_word(status: CheckStatus) -> &'static str {
    match status {
        CheckStatus::Pass => "pass",
        CheckStatus::Warn => "warn",
        CheckStatus::Fail => "fail",
    }
}

fn priority_label(priority: TaskPriority) -> &'static str {
    match priority {
        TaskPriority::High => "HIGH",
        TaskPriority::Medium => "MEDIUM",
        TaskPriority::Low => "LOW",
    }
}

pub fn generate_text_report(report: &AuditReport) -> String {
    let mut out = String::new();

    out.push_str(RULE);
    out.push_str("                        VIGIL PAGE MAINTENANCE REPORT\n");
    out.push_str(RULE);
    out.push('\n');

    out.push_str(&format!("Target:        {}\n", report.target_url));
    out.push_str(&format!(
        "Status:        {}\n",
        report
            .status_code
            .map(|c| c.to_string())
            .unwrap_or_else(|| "unreachable".to_string())
    ));
    out.push_str(&format!(
        "Response time: {}\n",
        report
            .response_time_ms
            .map(|ms| format!("{}ms", ms))
            .unwrap_or_else(|| "n/a".to_string())
    ));
    if let Some(ref last_modified) = report.last_modified {
        out.push_str(&format!("Last modified: {}\n", last_modified));
    }
    out.push_str(&format!("Generated:     {}\n", report.generated_at));
    out.push('\n');

    // Page signals
    out.push_str(RULE);
    out.push_str("PAGE SIGNALS\n");
    out.push_str(RULE);
    out.push('\n');
    out.push_str(&format!(
        "Title:            {}\n",
        if report.title.is_empty() {
            "(none)"
        } else {
            &report.title
        }
    ));
    out.push_str(&format!(
        "Meta description: {}\n",
        report.meta_description.as_deref().unwrap_or("(none)")
    ));
    out.push_str(&format!("Word count:       {}\n", report.word_count));

    if report.headings.is_empty() {
        out.push_str("Headings:         (none)\n");
    } else {
        let summary: Vec<String> = report
            .headings
            .iter()
            .map(|(level, count)| format!("{}: {}", level, count))
            .collect();
        out.push_str(&format!("Headings:         {}\n", summary.join(", ")));
    }

    out.push_str(&format!(
        "Images:           {} ({} missing alt text)\n",
        report.image_count, report.images_missing_alt
    ));
    out.push_str(&format!(
        "Links sampled:    {} ({} broken)\n",
        report.link_sample_size,
        report.broken_links.len()
    ));
    out.push('\n');

    // Checks
    out.push_str(RULE);
    out.push_str("CHECKS\n");
    out.push_str(RULE);
    out.push('\n');

    for check in &report.checks {
        out.push_str(&format!(
            "{} [{}] {}\n",
            status_marker(check.status),
            status_word(check.status).to_uppercase(),
            check.label
        ));
        out.push_str(&format!("    {}\n", check.details));
        if !check.recommendation.is_empty() {
            out.push_str(&format!("    → {}\n", check.recommendation));
        }
        out.push('\n');
    }

    // Tasks, highest priority first
    if !report.tasks.is_empty() {
        out.push_str(RULE);
        out.push_str("MAINTENANCE TASKS\n");
        out.push_str(RULE);
        out.push('\n');

        for priority in [TaskPriority::High, TaskPriority::Medium, TaskPriority::Low] {
            for task in report.tasks.iter().filter(|t| t.priority == priority) {
                out.push_str(&format!("  [{}] {}\n", priority_label(task.priority), task.title));
                out.push_str(&format!("         {}\n", task.description));
            }
        }
        out.push('\n');
    }

    // Insights
    if !report.insights.is_empty() {
        out.push_str(RULE);
        out.push_str("INSIGHTS\n");
        out.push_str(RULE);
        out.push('\n');

        for insight in &report.insights {
            out.push_str(&format!("  [{}] {}\n", insight.category, insight.message));
        }
        out.push('\n');
    }

    if !report.broken_links.is_empty() {
        out.push_str(RULE);
        out.push_str("BROKEN LINKS\n");
        out.push_str(RULE);
        out.push('\n');

        for link in &report.broken_links {
            match link.status {
                Some(status) => out.push_str(&format!("  [{}] {}\n", status, link.href)),
                None => out.push_str(&format!("  [unreachable] {}\n", link.href)),
            }
        }
        out.push('\n');
    }

    out.push_str(RULE);
    out.push_str("                          End of Report\n");
    out.push_str(RULE);
    out.push_str("\nGenerated by Vigil - single-page maintenance auditor\n");

    out
}

/// The JSON rendering is the report itself: exactly the wire shape, camelCase.
pub fn generate_json_report(report: &AuditReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

pub fn generate_markdown_report(report: &AuditReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("# Maintenance audit: {}\n\n", report.target_url));
    out.push_str(&format!("Generated: {}\n\n", report.generated_at));

    out.push_str("## Summary\n\n");
    out.push_str(&format!(
        "- Status: {}\n",
        report
            .status_code
            .map(|c| c.to_string())
            .unwrap_or_else(|| "unreachable".to_string())
    ));
    out.push_str(&format!(
        "- Response time: {}\n",
        report
            .response_time_ms
            .map(|ms| format!("{}ms", ms))
            .unwrap_or_else(|| "n/a".to_string())
    ));
    out.push_str(&format!("- Word count: {}\n", report.word_count));
    out.push_str(&format!(
        "- Images: {} ({} missing alt text)\n",
        report.image_count, report.images_missing_alt
    ));
    out.push_str(&format!(
        "- Links sampled: {} ({} broken)\n\n",
        report.link_sample_size,
        report.broken_links.len()
    ));

    out.push_str("## Checks\n\n");
    out.push_str("| Check | Status | Details |\n");
    out.push_str("|-------|--------|---------|\n");
    for check in &report.checks {
        out.push_str(&format!(
            "| {} | {} | {} |\n",
            check.label,
            status_word(check.status),
            check.details
        ));
    }
    out.push('\n');

    if !report.tasks.is_empty() {
        out.push_str("## Tasks\n\n");
        out.push_str("| Priority | Task | Description |\n");
        out.push_str("|----------|------|-------------|\n");
        for priority in [TaskPriority::High, TaskPriority::Medium, TaskPriority::Low] {
            for task in report.tasks.iter().filter(|t| t.priority == priority) {
                out.push_str(&format!(
                    "| {} | {} | {} |\n",
                    priority_label(task.priority),
                    task.title,
                    task.description
                ));
            }
        }
        out.push('\n');
    }

    if !report.insights.is_empty() {
        out.push_str("## Insights\n\n");
        for insight in &report.insights {
            out.push_str(&format!("- **{}**: {}\n", insight.category, insight.message));
        }
        out.push('\n');
    }

    out
}

pub fn save_report(content: &str, path: &Path) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}
