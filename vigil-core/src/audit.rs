//! The audit pipeline: fetch, analyze, sample, grade, assemble.

use crate::model::{AuditReport, BrokenLink};
use crate::rules::evaluate_checks;
use crate::triage::{derive_insights, derive_tasks};
use tracing::info;
use url::Url;
use vigil_scanner::error::Result;
use vigil_scanner::fetcher::DEFAULT_TIMEOUT_SECS;
use vigil_scanner::{analyze_page, AuditError, LinkSampler, PageFetcher};

/// Options for configuring an audit run.
pub struct AuditOptions {
    /// Timeout for the primary page fetch, in seconds.
    pub timeout_secs: u64,
}

impl Default for AuditOptions {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Validate a raw target string before any network activity.
///
/// Rejects empty input, unparseable URLs and non-http(s) schemes.
pub fn validate_target(raw: &str) -> Result<Url> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AuditError::InvalidUrl("missing URL".to_string()));
    }

    let url = Url::parse(trimmed).map_err(|e| AuditError::InvalidUrl(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(AuditError::UnsupportedScheme(other.to_string())),
    }
}

/// Run one complete audit against a target URL.
///
/// Everything the target site does wrong, including being completely
/// unreachable, is absorbed into the report as a negative signal. Only
/// invalid input surfaces as an error.
pub async fn run_audit(raw_url: &str, options: &AuditOptions) -> Result<AuditReport> {
    let target = validate_target(raw_url)?;
    info!("Starting audit of {}", target);

    let fetcher = PageFetcher::with_timeout(options.timeout_secs);
    let fetch = fetcher.fetch(&target).await;

    let signals = analyze_page(&fetch.body, &target);

    let sampler = LinkSampler::new();
    let link_checks = sampler.sample(&signals.links).await;

    let checks = evaluate_checks(&fetch, &signals, &link_checks);
    let tasks = derive_tasks(&checks);
    let insights = derive_insights(&checks);

    let broken_links: Vec<BrokenLink> = link_checks
        .iter()
        .filter(|check| check.broken)
        .map(|check| BrokenLink {
            href: check.href.clone(),
            status: check.status,
        })
        .collect();

    info!(
        "Audit of {} complete: {} checks, {} tasks, {} insights",
        target,
        checks.len(),
        tasks.len(),
        insights.len()
    );

    // The timestamp is stamped here, at assembly, and nowhere else.
    Ok(AuditReport {
        target_url: target.to_string(),
        status_code: fetch.status,
        response_time_ms: fetch.response_time_ms,
        last_modified: fetch.last_modified,
        title: signals.title,
        meta_description: signals.meta_description,
        word_count: signals.word_count,
        headings: signals.headings,
        image_count: signals.image_count,
        images_missing_alt: signals.images_missing_alt,
        link_sample_size: link_checks.len(),
        broken_links,
        checks,
        tasks,
        insights,
        generated_at: chrono::Utc::now().to_rfc3339(),
    })
}
