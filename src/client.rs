//! Fetch-and-extract pipeline against an APKPure origin
//!
//! Groups the fetcher with the locator and both page parsers. Every call
//! fetches fresh pages; nothing is cached or retried.

use std::sync::Arc;

use tracing::{debug, error};

use crate::config::ClientConfig;
use crate::fetch::{FetchError, Fetcher, HttpFetcher};
use crate::scrape::error::ScrapeError;
use crate::scrape::locator::Locator;
use crate::scrape::types::{VariantRecord, VersionSummary};
use crate::scrape::variants::VariantParser;
use crate::scrape::version_list::VersionListParser;

/// Client listing versions and variants of packages
pub struct ApkPureClient {
    fetcher: Arc<dyn Fetcher>,
    locator: Locator,
    version_list_parser: VersionListParser,
    variant_parser: VariantParser,
}

impl ApkPureClient {
    /// Create a new ApkPureClient fetching through `fetcher`
    pub fn new(fetcher: Arc<dyn Fetcher>, config: &ClientConfig) -> Self {
        Self {
            fetcher,
            locator: Locator::new(&config.base_url),
            version_list_parser: VersionListParser::new(&config.download_base_url),
            variant_parser: VariantParser::new(),
        }
    }

    /// Create a new ApkPureClient with the bundled HTTP fetcher
    pub fn from_config(config: &ClientConfig) -> Result<Self, FetchError> {
        let fetcher = HttpFetcher::from_config(config)?;
        Ok(Self::new(Arc::new(fetcher), config))
    }

    /// Resolves a package id to the URL of its listing page
    ///
    /// # Returns
    /// * `Ok(String)` - Listing URL (origin + first matching path in search results)
    /// * `Err(ScrapeError::NotFound)` - Search results mention no page for the package
    pub async fn resolve_package_url(&self, package_id: &str) -> Result<String, ScrapeError> {
        let package_id = package_id.trim();
        if package_id.is_empty() {
            return Err(ScrapeError::EmptyPackageId);
        }

        let search_url = self.locator.search_url(package_id);
        let body = self.fetcher.fetch(&search_url).await.map_err(|e| {
            error!("Failed to fetch search results for {}: {}", package_id, e);
            e
        })?;

        self.locator
            .find_listing_url(&body, package_id)
            .ok_or_else(|| {
                error!("No package page found in search results for {}", package_id);
                ScrapeError::NotFound(format!("package page for {}", package_id))
            })
    }

    /// Lists the published versions of a package, newest first as rendered
    pub async fn list_versions(&self, package_id: &str) -> Result<Vec<VersionSummary>, ScrapeError> {
        let listing_url = self.resolve_package_url(package_id).await?;
        let package_id = package_id.trim();

        let versions_url = format!("{}/versions", listing_url);
        debug!("Version list URL for {}: {}", package_id, versions_url);

        let body = self.fetcher.fetch(&versions_url).await?;
        self.version_list_parser
            .parse(&body, package_id, &versions_url)
            .inspect_err(|e| error!("Failed to list versions of {}: {}", package_id, e))
    }

    /// Lists the build variants of a single version
    pub async fn list_variants(
        &self,
        summary: &VersionSummary,
    ) -> Result<Vec<VariantRecord>, ScrapeError> {
        if summary.detail_url.is_empty() {
            error!("Version {} has no detail URL", summary.version_name);
            return Err(ScrapeError::MissingDetailUrl);
        }

        let body = self.fetcher.fetch(&summary.detail_url).await?;
        self.variant_parser
            .parse(&body, &summary.detail_url)
            .inspect_err(|e| error!("Failed to list variants of {}: {}", summary.detail_url, e))
    }
}
