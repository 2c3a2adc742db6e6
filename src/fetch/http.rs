//! reqwest-backed fetcher
//!
//! Sends the headers a desktop browser would send, but does not attempt to
//! emulate a browser's TLS fingerprint or solve challenge pages. A challenge
//! usually shows up as a 403/503 and is reported as [`FetchError::Status`].

use std::time::Duration;

use reqwest::Client;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue};
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::fetch::error::FetchError;
use crate::fetch::fetcher::Fetcher;

const ACCEPT_HTML: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";
const ACCEPT_LANGUAGE_EN: &str = "en-US,en;q=0.9";

/// Fetcher implementation backed by a plain reqwest client
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Creates a new HttpFetcher with the given timeout and user agent
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_HTML));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(ACCEPT_LANGUAGE_EN));

        let client = Client::builder()
            .user_agent(user_agent)
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self { client })
    }

    /// Creates a new HttpFetcher from client configuration
    pub fn from_config(config: &ClientConfig) -> Result<Self, FetchError> {
        Self::new(Duration::from_secs(config.timeout_secs), &config.user_agent)
    }
}

#[async_trait::async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        debug!("Fetching {}", url);

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Origin returned status {}: {}", status, url);
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response.text().await.map_err(|e| {
            warn!("Failed to read response body from {}: {}", url, e);
            FetchError::Body(e.to_string())
        })
    }
}
