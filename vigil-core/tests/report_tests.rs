// Tests for report rendering and persistence

use std::collections::BTreeMap;
use vigil_core::report::{
    generate_json_report, generate_markdown_report, generate_text_report, save_report,
    ReportFormat,
};
use vigil_core::{
    AuditCheck, AuditInsight, AuditReport, BrokenLink, CheckStatus, InsightCategory,
    MaintenanceTask, TaskPriority,
};

fn sample_report() -> AuditReport {
    let mut headings = BTreeMap::new();
    headings.insert("h1".to_string(), 1);
    headings.insert("h2".to_string(), 3);

    AuditReport {
        target_url: "https://example.com/".to_string(),
        status_code: Some(200),
        response_time_ms: Some(412),
        last_modified: Some("Wed, 01 Jan 2025 00:00:00 GMT".to_string()),
        title: "Example Domain".to_string(),
        meta_description: Some("An example page.".to_string()),
        word_count: 320,
        headings,
        image_count: 4,
        images_missing_alt: 1,
        link_sample_size: 5,
        broken_links: vec![BrokenLink {
            href: "https://example.com/dead".to_string(),
            status: Some(404),
        }],
        checks: vec![
            AuditCheck {
                id: "uptime".to_string(),
                label: "Uptime".to_string(),
                status: CheckStatus::Pass,
                details: "The page answered with HTTP 200.".to_string(),
                recommendation: String::new(),
            },
            AuditCheck {
                id: "alt-text".to_string(),
                label: "Image alt text".to_string(),
                status: CheckStatus::Warn,
                details: "1 of 4 images are missing alt text.".to_string(),
                recommendation: "Add descriptive alt text.".to_string(),
            },
        ],
        tasks: vec![MaintenanceTask {
            id: "task-alt-text".to_string(),
            priority: TaskPriority::Low,
            title: "Address image alt text".to_string(),
            description: "Add descriptive alt text.".to_string(),
        }],
        insights: vec![AuditInsight {
            id: "insight-accessibility".to_string(),
            category: InsightCategory::Accessibility,
            message: "Accessibility needs attention.".to_string(),
        }],
        generated_at: "2025-01-01T00:00:00+00:00".to_string(),
    }
}

// ============================================================================
// Report Format Tests
// ============================================================================

#[test]
fn test_report_format_from_str_text() {
    assert!(matches!(
        ReportFormat::from_str("text"),
        Some(ReportFormat::Text)
    ));
}

#[test]
fn test_report_format_from_str_json() {
    assert!(matches!(
        ReportFormat::from_str("json"),
        Some(ReportFormat::Json)
    ));
}

#[test]
fn test_report_format_from_str_markdown_and_md() {
    assert!(matches!(
        ReportFormat::from_str("markdown"),
        Some(ReportFormat::Markdown)
    ));
    assert!(matches!(
        ReportFormat::from_str("md"),
        Some(ReportFormat::Markdown)
    ));
}

#[test]
fn test_report_format_from_str_case_insensitive() {
    assert!(matches!(
        ReportFormat::from_str("TEXT"),
        Some(ReportFormat::Text)
    ));
    assert!(matches!(
        ReportFormat::from_str("Json"),
        Some(ReportFormat::Json)
    ));
}

#[test]
fn test_report_format_from_str_invalid() {
    assert!(ReportFormat::from_str("pdf").is_none());
    assert!(ReportFormat::from_str("").is_none());
}

// ============================================================================
// Text report
// ============================================================================

#[test]
fn test_text_report_contains_sections() {
    let report = sample_report();
    let text = generate_text_report(&report);

    assert!(text.contains("VIGIL PAGE MAINTENANCE REPORT"));
    assert!(text.contains("https://example.com/"));
    assert!(text.contains("PAGE SIGNALS"));
    assert!(text.contains("CHECKS"));
    assert!(text.contains("MAINTENANCE TASKS"));
    assert!(text.contains("INSIGHTS"));
    assert!(text.contains("BROKEN LINKS"));
    assert!(text.contains("https://example.com/dead"));
}

#[test]
fn test_text_report_shows_unreachable_target() {
    let mut report = sample_report();
    report.status_code = None;
    report.response_time_ms = None;

    let text = generate_text_report(&report);
    assert!(text.contains("unreachable"));
    assert!(text.contains("n/a"));
}

#[test]
fn test_text_report_omits_empty_sections() {
    let mut report = sample_report();
    report.tasks.clear();
    report.insights.clear();
    report.broken_links.clear();

    let text = generate_text_report(&report);
    assert!(!text.contains("MAINTENANCE TASKS"));
    assert!(!text.contains("INSIGHTS"));
    assert!(!text.contains("BROKEN LINKS"));
}

// ============================================================================
// JSON report
// ============================================================================

#[test]
fn test_json_report_uses_camel_case_wire_shape() {
    let report = sample_report();
    let json = generate_json_report(&report).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["targetUrl"], "https://example.com/");
    assert_eq!(value["statusCode"], 200);
    assert_eq!(value["responseTimeMs"], 412);
    assert_eq!(value["wordCount"], 320);
    assert_eq!(value["imagesMissingAlt"], 1);
    assert_eq!(value["linkSampleSize"], 5);
    assert_eq!(value["headings"]["h2"], 3);
    assert_eq!(value["brokenLinks"][0]["href"], "https://example.com/dead");
    assert_eq!(value["checks"][1]["status"], "warn");
    assert_eq!(value["tasks"][0]["priority"], "low");
    assert_eq!(value["insights"][0]["category"], "accessibility");
    assert_eq!(value["generatedAt"], "2025-01-01T00:00:00+00:00");
}

#[test]
fn test_json_report_nulls_unmeasured_fields() {
    let mut report = sample_report();
    report.status_code = None;
    report.response_time_ms = None;
    report.last_modified = None;
    report.meta_description = None;

    let json = generate_json_report(&report).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert!(value["statusCode"].is_null());
    assert!(value["responseTimeMs"].is_null());
    assert!(value["lastModified"].is_null());
    assert!(value["metaDescription"].is_null());
}

#[test]
fn test_json_report_round_trips() {
    let report = sample_report();
    let json = generate_json_report(&report).unwrap();
    let parsed: AuditReport = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.target_url, report.target_url);
    assert_eq!(parsed.checks.len(), report.checks.len());
    assert_eq!(parsed.generated_at, report.generated_at);
}

// ============================================================================
// Markdown report
// ============================================================================

#[test]
fn test_markdown_report_structure() {
    let report = sample_report();
    let md = generate_markdown_report(&report);

    assert!(md.contains("# Maintenance audit: https://example.com/"));
    assert!(md.contains("## Checks"));
    assert!(md.contains("| Uptime | pass |"));
    assert!(md.contains("## Tasks"));
    assert!(md.contains("| LOW | Address image alt text |"));
    assert!(md.contains("**accessibility**"));
}

// ============================================================================
// Persistence
// ============================================================================

#[test]
fn test_save_report_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.txt");

    let report = sample_report();
    let text = generate_text_report(&report);
    save_report(&text, &path).unwrap();

    let read_back = std::fs::read_to_string(&path).unwrap();
    assert_eq!(read_back, text);
}
