//! The fixed heuristic rule set.
//!
//! Pure and order-stable: the same inputs always produce the same checks in
//! the same order. Missing inputs (no response, nothing sampled) map to the
//! conservative verdict for reachability-style rules and to pass for rules
//! that have nothing to grade (no images, no links).

use crate::model::{AuditCheck, CheckStatus};
use vigil_scanner::{FetchResult, LinkCheckResult, PageSignals};

/// Response time below this is considered fast.
pub const FAST_RESPONSE_MS: u64 = 800;
/// Response time at or above this is considered failing.
pub const SLOW_RESPONSE_MS: u64 = 2500;
/// Word counts below this floor fail the content-depth rule.
pub const MIN_WORD_COUNT: usize = 100;
/// Word counts below this are thin but tolerable.
pub const HEALTHY_WORD_COUNT: usize = 300;
/// Recommended title length in characters.
pub const TITLE_LENGTH: std::ops::RangeInclusive<usize> = 30..=60;
/// Recommended meta description length in characters.
pub const DESCRIPTION_LENGTH: std::ops::RangeInclusive<usize> = 70..=160;
/// Above this share of images without alt text the rule fails outright.
pub const ALT_MISSING_FAIL_RATIO: f64 = 0.5;
/// Above this share of broken sampled links the rule fails outright.
pub const BROKEN_LINK_FAIL_RATIO: f64 = 0.25;

/// Evaluate every rule against the gathered signals.
pub fn evaluate_checks(
    fetch: &FetchResult,
    signals: &PageSignals,
    link_checks: &[LinkCheckResult],
) -> Vec<AuditCheck> {
    vec![
        check_uptime(fetch),
        check_response_time(fetch),
        check_content_depth(signals),
        check_seo_presence(signals),
        check_alt_text(signals),
        check_link_health(link_checks),
    ]
}

fn check_uptime(fetch: &FetchResult) -> AuditCheck {
    let (status, details, recommendation) = match fetch.status {
        None => (
            CheckStatus::Fail,
            "The page could not be reached; no HTTP response was received.".to_string(),
            "Confirm the host is online, DNS resolves and the server accepts connections."
                .to_string(),
        ),
        Some(code) if code >= 500 => (
            CheckStatus::Fail,
            format!("The server answered with HTTP {}.", code),
            "Inspect server logs for the error and restore the page.".to_string(),
        ),
        // The audited URL itself being gone is the worst client error.
        Some(code @ (404 | 410)) => (
            CheckStatus::Fail,
            format!("The page answered with HTTP {}; it no longer exists at this URL.", code),
            "Restore the page or set up a redirect to its new location.".to_string(),
        ),
        Some(code) if code >= 400 => (
            CheckStatus::Warn,
            format!("The page answered with client error HTTP {}.", code),
            "Check whether the page requires authentication or blocks automated requests."
                .to_string(),
        ),
        Some(code) => (
            CheckStatus::Pass,
            format!("The page answered with HTTP {}.", code),
            String::new(),
        ),
    };

    AuditCheck {
        id: "uptime".to_string(),
        label: "Uptime".to_string(),
        status,
        details,
        recommendation,
    }
}

fn check_response_time(fetch: &FetchResult) -> AuditCheck {
    let (status, details, recommendation) = match fetch.response_time_ms {
        None => (
            CheckStatus::Fail,
            "Response time could not be measured because the fetch failed.".to_string(),
            "Bring the page back online so latency can be measured.".to_string(),
        ),
        Some(ms) if ms < FAST_RESPONSE_MS => (
            CheckStatus::Pass,
            format!("The page responded in {}ms.", ms),
            String::new(),
        ),
        Some(ms) if ms < SLOW_RESPONSE_MS => (
            CheckStatus::Warn,
            format!("The page responded in {}ms, slower than the {}ms target.", ms, FAST_RESPONSE_MS),
            "Enable caching or a CDN and trim render-blocking work to speed up responses."
                .to_string(),
        ),
        Some(ms) => (
            CheckStatus::Fail,
            format!("The page took {}ms to respond.", ms),
            "Profile the backend for slow queries and add caching; responses this slow lose visitors."
                .to_string(),
        ),
    };

    AuditCheck {
        id: "response-time".to_string(),
        label: "Response time".to_string(),
        status,
        details,
        recommendation,
    }
}

fn check_content_depth(signals: &PageSignals) -> AuditCheck {
    let words = signals.word_count;
    let (status, details, recommendation) = if words < MIN_WORD_COUNT {
        (
            CheckStatus::Fail,
            format!("Only {} words of visible text were found.", words),
            format!(
                "Add substantive content; aim for at least {} words of useful text.",
                HEALTHY_WORD_COUNT
            ),
        )
    } else if words < HEALTHY_WORD_COUNT {
        (
            CheckStatus::Warn,
            format!("The page has {} words of visible text, on the thin side.", words),
            format!(
                "Expand the page toward {} words or more to give visitors and crawlers something to work with.",
                HEALTHY_WORD_COUNT
            ),
        )
    } else {
        (
            CheckStatus::Pass,
            format!("The page has {} words of visible text.", words),
            String::new(),
        )
    };

    AuditCheck {
        id: "content-depth".to_string(),
        label: "Content depth".to_string(),
        status,
        details,
        recommendation,
    }
}

fn check_seo_presence(signals: &PageSignals) -> AuditCheck {
    let title = signals.title.trim();
    let description = signals.meta_description.as_deref().unwrap_or("").trim();

    let (status, details, recommendation) = match (title.is_empty(), description.is_empty()) {
        (true, true) => (
            CheckStatus::Fail,
            "The page has neither a title nor a meta description.".to_string(),
            "Add a <title> and a meta description; both are the page's search listing.".to_string(),
        ),
        (true, false) => (
            CheckStatus::Warn,
            "The page has a meta description but no title.".to_string(),
            "Add a descriptive <title> element.".to_string(),
        ),
        (false, true) => (
            CheckStatus::Warn,
            "The page has a title but no meta description.".to_string(),
            "Add a meta description summarizing the page.".to_string(),
        ),
        (false, false) => {
            let title_ok = TITLE_LENGTH.contains(&title.chars().count());
            let description_ok = DESCRIPTION_LENGTH.contains(&description.chars().count());

            if title_ok && description_ok {
                (
                    CheckStatus::Pass,
                    "Title and meta description are present and within recommended lengths."
                        .to_string(),
                    String::new(),
                )
            } else {
                (
                    CheckStatus::Warn,
                    format!(
                        "Title ({} chars) or meta description ({} chars) is outside the recommended length.",
                        title.chars().count(),
                        description.chars().count()
                    ),
                    format!(
                        "Keep the title between {}-{} characters and the description between {}-{} characters.",
                        TITLE_LENGTH.start(),
                        TITLE_LENGTH.end(),
                        DESCRIPTION_LENGTH.start(),
                        DESCRIPTION_LENGTH.end()
                    ),
                )
            }
        }
    };

    AuditCheck {
        id: "seo-presence".to_string(),
        label: "SEO metadata".to_string(),
        status,
        details,
        recommendation,
    }
}

fn check_alt_text(signals: &PageSignals) -> AuditCheck {
    let total = signals.image_count;
    let missing = signals.images_missing_alt;

    let (status, details, recommendation) = if total == 0 {
        (
            CheckStatus::Pass,
            "No images on the page.".to_string(),
            String::new(),
        )
    } else if missing == 0 {
        (
            CheckStatus::Pass,
            format!("All {} images have alt text.", total),
            String::new(),
        )
    } else {
        let ratio = missing as f64 / total as f64;
        let status = if ratio > ALT_MISSING_FAIL_RATIO {
            CheckStatus::Fail
        } else {
            CheckStatus::Warn
        };
        (
            status,
            format!("{} of {} images are missing alt text.", missing, total),
            "Add descriptive alt text to every meaningful image so screen readers can announce them."
                .to_string(),
        )
    };

    AuditCheck {
        id: "alt-text".to_string(),
        label: "Image alt text".to_string(),
        status,
        details,
        recommendation,
    }
}

fn check_link_health(link_checks: &[LinkCheckResult]) -> AuditCheck {
    let sampled = link_checks.len();
    let broken = link_checks.iter().filter(|c| c.broken).count();

    let (status, details, recommendation) = if sampled == 0 {
        (
            CheckStatus::Pass,
            "No outbound links were sampled.".to_string(),
            String::new(),
        )
    } else if broken == 0 {
        (
            CheckStatus::Pass,
            format!("All {} sampled links answered.", sampled),
            String::new(),
        )
    } else {
        let ratio = broken as f64 / sampled as f64;
        let status = if ratio > BROKEN_LINK_FAIL_RATIO {
            CheckStatus::Fail
        } else {
            CheckStatus::Warn
        };
        (
            status,
            format!("{} of {} sampled links are broken.", broken, sampled),
            "Fix or remove the broken links; dead links erode trust and waste crawl budget."
                .to_string(),
        )
    };

    AuditCheck {
        id: "link-health".to_string(),
        label: "Link health".to_string(),
        status,
        details,
        recommendation,
    }
}
