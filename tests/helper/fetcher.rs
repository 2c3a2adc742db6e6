//! Fetcher test utilities

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use apkpure_versions::fetch::{FetchError, Fetcher};

/// Fetcher serving fixed bodies by URL and recording every request
pub struct StaticFetcher {
    pages: HashMap<String, String>,
    requests: Mutex<Vec<String>>,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self {
            pages: HashMap::new(),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_page(mut self, url: &str, body: &str) -> Self {
        self.pages.insert(url.to_string(), body.to_string());
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Fetcher for StaticFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        self.requests.lock().unwrap().push(url.to_string());
        match self.pages.get(url) {
            Some(body) => Ok(body.clone()),
            None => Err(FetchError::Status {
                status: 404,
                url: url.to_string(),
            }),
        }
    }
}
