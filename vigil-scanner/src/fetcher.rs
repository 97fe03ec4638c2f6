use crate::result::FetchResult;
use reqwest::Client;
use reqwest::header::LAST_MODIFIED;
use std::time::Instant;
use tracing::{debug, warn};
use url::Url;

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Fetches the audit target with a bounded timeout.
///
/// Transport failures are folded into the returned [`FetchResult`] instead of
/// propagating: reachability is one of the things being audited, so a dead
/// host must still yield a report.
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT_SECS)
    }

    pub fn with_timeout(timeout_secs: u64) -> Self {
        let client = Client::builder()
            .user_agent("Vigil/0.1 (https://github.com/trapdoorsec/vigil)")
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .connect_timeout(std::time::Duration::from_secs(timeout_secs.div_ceil(2)))
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    /// Issue one GET against the target and capture status, timing,
    /// Last-Modified and body text.
    pub async fn fetch(&self, url: &Url) -> FetchResult {
        debug!("Fetching {}", url);

        let start = Instant::now();
        let response = match self.client.get(url.as_str()).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("Fetch of {} failed: {}", url, e);
                return FetchResult::unreachable();
            }
        };

        let status = response.status().as_u16();
        let last_modified = response
            .headers()
            .get(LAST_MODIFIED)
            .and_then(|v| v.to_str().ok())
            .map(String::from);

        // Timing covers headers plus body download, matching what a visitor
        // waits for.
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                warn!("Body read from {} failed: {}", url, e);
                String::new()
            }
        };
        let response_time_ms = start.elapsed().as_millis() as u64;

        debug!(
            "Fetched {} - status {}, {} bytes in {}ms",
            url,
            status,
            body.len(),
            response_time_ms
        );

        FetchResult {
            status: Some(status),
            response_time_ms: Some(response_time_ms),
            last_modified,
            body,
        }
    }
}

impl Default for PageFetcher {
    fn default() -> Self {
        Self::new()
    }
}
