//! Resolves a package id to its listing page via the origin's search results

use regex::Regex;
use reqwest::Url;
use tracing::debug;

/// Finds a package's canonical listing URL in search result pages
pub struct Locator {
    base_url: String,
}

impl Locator {
    /// Creates a new Locator for the given origin
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// URL of the search page for `package_id`
    pub fn search_url(&self, package_id: &str) -> String {
        let search = format!("{}/search", self.base_url);
        Url::parse_with_params(&search, &[("q", package_id)])
            .map(String::from)
            .unwrap_or_else(|_| format!("{}?q={}", search, package_id))
    }

    /// Scans a search results page for the first `/<segment>/<package_id>` path.
    ///
    /// The package id is matched literally and must not run on into a longer
    /// identifier, so `com.example` does not match `/slug/com.example.pro`;
    /// a trailing full stop still ends it. JSON-escaped slashes (`\/`) are
    /// accepted and unescaped. Returns the origin joined with the matched path.
    pub fn find_listing_url(&self, html: &str, package_id: &str) -> Option<String> {
        let pattern = format!(
            r#"(\\?/[^/\\"'<>\s?#]+\\?/{})(?:[^A-Za-z0-9_.\-]|\.(?:[^A-Za-z0-9_]|$)|$)"#,
            regex::escape(package_id)
        );
        let re = Regex::new(&pattern).ok()?;

        let path = re.captures(html)?.get(1)?.as_str().replace('\\', "");
        debug!("Listing path match for {}: {}", package_id, path);

        Some(format!("{}{}", self.base_url, path))
    }
}
