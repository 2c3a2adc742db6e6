//! Fetcher trait for retrieving pages from the origin

#[cfg(test)]
use mockall::automock;

use crate::fetch::error::FetchError;

/// Trait for performing HTTP GET requests against the origin
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetches the body of the page at `url`
    ///
    /// # Arguments
    /// * `url` - Absolute URL to fetch
    ///
    /// # Returns
    /// * `Ok(String)` - Response body of a successful (2xx) response
    /// * `Err(FetchError)` - Network failure, non-success status or unreadable body
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}
