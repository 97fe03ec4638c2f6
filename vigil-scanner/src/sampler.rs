use crate::result::LinkCheckResult;
use futures::future::join_all;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

/// Upper bound on outbound links probed per audit.
pub const LINK_SAMPLE_CAP: usize = 20;

/// Per-link request timeout. Deliberately shorter than the page fetch
/// timeout: a sampled link only needs to prove it answers.
const LINK_TIMEOUT_SECS: u64 = 5;

/// Probes a bounded sample of outbound links with lightweight HEAD requests.
///
/// Checks run concurrently and independently: each request carries its own
/// timeout, and a slow or dead link never blocks or fails the others. There
/// are no retries; a timed-out link is simply recorded as broken.
pub struct LinkSampler {
    client: Client,
}

impl LinkSampler {
    pub fn new() -> Self {
        let client = Client::builder()
            .user_agent("Vigil/0.1 (https://github.com/trapdoorsec/vigil)")
            .redirect(reqwest::redirect::Policy::limited(3))
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    /// Check up to [`LINK_SAMPLE_CAP`] links in parallel.
    pub async fn sample(&self, links: &[String]) -> Vec<LinkCheckResult> {
        let sample: Vec<&String> = links.iter().take(LINK_SAMPLE_CAP).collect();
        if sample.is_empty() {
            return Vec::new();
        }

        info!("Sampling {} of {} outbound links", sample.len(), links.len());

        let checks = sample.iter().map(|href| self.check_link(href));
        let results = join_all(checks).await;

        let broken = results.iter().filter(|r| r.broken).count();
        info!("Link sample complete: {}/{} broken", broken, results.len());

        results
    }

    async fn check_link(&self, href: &str) -> LinkCheckResult {
        let response = self
            .client
            .head(href)
            .timeout(Duration::from_secs(LINK_TIMEOUT_SECS))
            .send()
            .await;

        match response {
            Ok(response) => {
                let status = response.status().as_u16();
                debug!("Link {} answered {}", href, status);
                LinkCheckResult::from_status(href.to_string(), status)
            }
            Err(e) => {
                debug!("Link {} failed: {}", href, e);
                LinkCheckResult::failed(href.to_string())
            }
        }
    }
}

impl Default for LinkSampler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_sample_classifies_statuses() {
        let mock_server = MockServer::start().await;

        Mock::given(method("HEAD"))
            .and(path("/ok"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&mock_server)
            .await;
        Mock::given(method("HEAD"))
            .and(path("/moved"))
            .respond_with(ResponseTemplate::new(301))
            .mount(&mock_server)
            .await;
        Mock::given(method("HEAD"))
            .and(path("/gone"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let links = vec![
            format!("{}/ok", mock_server.uri()),
            format!("{}/moved", mock_server.uri()),
            format!("{}/gone", mock_server.uri()),
        ];

        let sampler = LinkSampler::new();
        let results = sampler.sample(&links).await;

        assert_eq!(results.len(), 3);
        assert!(!results[0].broken);
        assert!(!results[1].broken);
        assert!(results[2].broken);
        assert_eq!(results[2].status, Some(404));
    }

    #[tokio::test]
    async fn test_sample_respects_cap() {
        let mock_server = MockServer::start().await;

        Mock::given(method("HEAD"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&mock_server)
            .await;

        let links: Vec<String> = (0..50)
            .map(|i| format!("{}/page{}", mock_server.uri(), i))
            .collect();

        let sampler = LinkSampler::new();
        let results = sampler.sample(&links).await;

        assert_eq!(results.len(), LINK_SAMPLE_CAP);
    }

    #[tokio::test]
    async fn test_unreachable_link_is_broken_and_isolated() {
        let mock_server = MockServer::start().await;

        Mock::given(method("HEAD"))
            .and(path("/alive"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&mock_server)
            .await;

        // A port nothing is listening on.
        let dead_uri = {
            // An unpooled server actually shuts down on drop, freeing the port.
            let dead_server = MockServer::builder().start().await;
            dead_server.uri()
        };

        let links = vec![format!("{}/alive", mock_server.uri()), dead_uri];

        let sampler = LinkSampler::new();
        let results = sampler.sample(&links).await;

        assert_eq!(results.len(), 2);
        assert!(!results[0].broken, "live link must not share the dead link's fate");
        assert!(results[1].broken);
        assert_eq!(results[1].status, None);
    }

    #[tokio::test]
    async fn test_empty_link_list() {
        let sampler = LinkSampler::new();
        let results = sampler.sample(&[]).await;
        assert!(results.is_empty());
    }
}
