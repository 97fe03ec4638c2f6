use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Verdict of a single audit rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Pass,
    Warn,
    Fail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightCategory {
    Content,
    Seo,
    Accessibility,
    Performance,
    Reliability,
}

impl fmt::Display for InsightCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InsightCategory::Content => "content",
            InsightCategory::Seo => "seo",
            InsightCategory::Accessibility => "accessibility",
            InsightCategory::Performance => "performance",
            InsightCategory::Reliability => "reliability",
        };
        write!(f, "{}", name)
    }
}

/// One rule's verdict with supporting detail.
///
/// Ids are stable across runs and unique within a report; downstream triage
/// keys off them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditCheck {
    pub id: String,
    pub label: String,
    pub status: CheckStatus,
    pub details: String,
    pub recommendation: String,
}

/// Actionable follow-up derived from a non-passing check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaintenanceTask {
    pub id: String,
    pub priority: TaskPriority,
    pub title: String,
    pub description: String,
}

/// Category-level narrative summary derived from non-passing checks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditInsight {
    pub id: String,
    pub category: InsightCategory,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrokenLink {
    pub href: String,
    pub status: Option<u16>,
}

/// The complete, immutable audit report.
///
/// Serializes to camelCase JSON; numeric fields are null when the underlying
/// signal could not be measured (e.g. the target never answered).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    pub target_url: String,
    pub status_code: Option<u16>,
    pub response_time_ms: Option<u64>,
    pub last_modified: Option<String>,
    pub title: String,
    pub meta_description: Option<String>,
    pub word_count: usize,
    pub headings: BTreeMap<String, usize>,
    pub image_count: usize,
    pub images_missing_alt: usize,
    pub link_sample_size: usize,
    pub broken_links: Vec<BrokenLink>,
    pub checks: Vec<AuditCheck>,
    pub tasks: Vec<MaintenanceTask>,
    pub insights: Vec<AuditInsight>,
    pub generated_at: String,
}
