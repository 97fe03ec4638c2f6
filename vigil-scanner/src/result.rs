use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Outcome of the primary page fetch.
///
/// A fetch that never produced an HTTP response (timeout, DNS failure,
/// connection refused) is represented with `status: None` rather than an
/// error, so the rule engine can grade reachability like any other signal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchResult {
    pub status: Option<u16>,
    pub response_time_ms: Option<u64>,
    pub last_modified: Option<String>,
    pub body: String,
}

impl FetchResult {
    pub fn unreachable() -> Self {
        Self {
            status: None,
            response_time_ms: None,
            last_modified: None,
            body: String::new(),
        }
    }

    /// True if the fetch produced any HTTP response at all.
    pub fn responded(&self) -> bool {
        self.status.is_some()
    }
}

/// Signals extracted from the fetched page body.
///
/// Non-HTML or malformed input degrades to the defaults: empty title, no
/// description, zero counts, no links.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageSignals {
    pub title: String,
    pub meta_description: Option<String>,
    pub word_count: usize,
    /// Heading level ("h1".."h6") to occurrence count, only for levels present.
    pub headings: BTreeMap<String, usize>,
    pub image_count: usize,
    pub images_missing_alt: usize,
    /// Absolute http(s) link targets, deduplicated in first-seen order.
    pub links: Vec<String>,
}

/// Result of probing a single sampled outbound link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkCheckResult {
    pub href: String,
    pub status: Option<u16>,
    pub broken: bool,
}

impl LinkCheckResult {
    pub fn from_status(href: String, status: u16) -> Self {
        Self {
            href,
            status: Some(status),
            broken: !(200..400).contains(&status),
        }
    }

    pub fn failed(href: String) -> Self {
        Self {
            href,
            status: None,
            broken: true,
        }
    }
}
