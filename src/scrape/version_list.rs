//! Parser for a package's `/versions` page

use scraper::Selector;
use tracing::{debug, info, warn};

use crate::scrape::error::ScrapeError;
use crate::scrape::html::{attr, parse_document, resolve_url, select_text};
use crate::scrape::types::VersionSummary;
use crate::scrape::version_code::extract_version_code;

/// Parser for the version list of a single package
pub struct VersionListParser {
    download_base_url: String,
    /// Page heading carrying the package display name
    title_selector: Selector,
    /// One link per published version
    link_selector: Selector,
    size_selector: Selector,
    updated_selector: Selector,
}

impl VersionListParser {
    /// Creates a new VersionListParser building download URLs on `download_base_url`
    pub fn new(download_base_url: &str) -> Self {
        Self {
            download_base_url: download_base_url.trim_end_matches('/').to_string(),
            title_selector: Selector::parse(".ver_title h1").unwrap(),
            link_selector: Selector::parse(".ver_download_link").unwrap(),
            size_selector: Selector::parse(".ver-item-s").unwrap(),
            updated_selector: Selector::parse(".update-on").unwrap(),
        }
    }

    /// Direct download URL for a version of `package_id`
    pub fn download_url(&self, package_id: &str, version_code: u64) -> String {
        format!(
            "{}/b/APK/{}?versionCode={}",
            self.download_base_url, package_id, version_code
        )
    }

    /// Parses the version list page fetched from `page_url`.
    ///
    /// Versions are returned in document order. Links without a target are
    /// skipped; a page without any usable link is reported as not found.
    pub fn parse(
        &self,
        html: &str,
        package_id: &str,
        page_url: &str,
    ) -> Result<Vec<VersionSummary>, ScrapeError> {
        let document = parse_document(html)?;
        let root = document.root_element();

        let title = select_text(root, &self.title_selector);
        debug!("Title: {}", title);

        let mut versions = Vec::new();
        for (index, link) in document.select(&self.link_selector).enumerate() {
            let detail_url = resolve_url(page_url, &attr(link, "href"));
            if detail_url.is_empty() {
                warn!(
                    "Skipping version entry {} of {}: link has no target",
                    index, package_id
                );
                continue;
            }

            let version_code = extract_version_code(&attr(link, "data-dt-versioncode"));
            let summary = VersionSummary {
                title: title.clone(),
                detail_url,
                version_name: attr(link, "data-dt-version"),
                version_code,
                size: select_text(link, &self.size_selector),
                updated_on: select_text(link, &self.updated_selector),
                download_url: self.download_url(package_id, version_code),
            };
            debug!(
                "Version {} ({}): {}",
                summary.version_name, summary.version_code, summary.detail_url
            );
            versions.push(summary);
        }

        if versions.is_empty() {
            return Err(ScrapeError::NotFound(format!(
                "no versions found for package {}",
                package_id
            )));
        }

        info!("Found {} versions for package {}", versions.len(), package_id);
        Ok(versions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE_URL: &str = "https://apkpure.com/example/com.example.app/versions";
    const DOWNLOAD_BASE: &str = "https://d.apkpure.com";

    fn version_link(href: &str, version: &str, code: &str, size: &str, date: &str) -> String {
        format!(
            r#"<li><a class="ver_download_link" href="{href}" data-dt-version="{version}" data-dt-versioncode="{code}">
                <div class="ver-item-n">Example {version}</div>
                <div class="ver-item-s">{size}</div>
                <div class="update-on">{date}</div>
            </a></li>"#
        )
    }

    fn page(links: &[String]) -> String {
        format!(
            r#"<html><body>
                <div class="ver_title"><h1>  Example App  </h1></div>
                <ul class="ver-wrap">{}</ul>
            </body></html>"#,
            links.concat()
        )
    }

    #[test]
    fn parse_returns_one_summary_per_link_in_document_order() {
        let html = page(&[
            version_link(
                "https://apkpure.com/example/com.example.app/download/3.0",
                "3.0",
                "300",
                "25.1 MB",
                "Oct 1, 2026",
            ),
            version_link(
                "https://apkpure.com/example/com.example.app/download/2.0",
                "2.0",
                "200",
                "24.9 MB",
                "Sep 1, 2026",
            ),
            version_link(
                "https://apkpure.com/example/com.example.app/download/1.0",
                "1.0",
                "100",
                "20 MB",
                "Jan 1, 2026",
            ),
        ]);

        let parser = VersionListParser::new(DOWNLOAD_BASE);
        let versions = parser.parse(&html, "com.example.app", PAGE_URL).unwrap();

        assert_eq!(versions.len(), 3);
        assert_eq!(
            versions[0],
            VersionSummary {
                title: "Example App".to_string(),
                detail_url: "https://apkpure.com/example/com.example.app/download/3.0".to_string(),
                version_name: "3.0".to_string(),
                version_code: 300,
                size: "25.1 MB".to_string(),
                updated_on: "Oct 1, 2026".to_string(),
                download_url: "https://d.apkpure.com/b/APK/com.example.app?versionCode=300"
                    .to_string(),
            }
        );
        let names: Vec<&str> = versions.iter().map(|v| v.version_name.as_str()).collect();
        assert_eq!(names, vec!["3.0", "2.0", "1.0"]);
    }

    #[test]
    fn parse_fails_with_not_found_when_no_links() {
        let html = page(&[]);

        let parser = VersionListParser::new(DOWNLOAD_BASE);
        let result = parser.parse(&html, "com.example.app", PAGE_URL);

        assert!(matches!(result, Err(ScrapeError::NotFound(_))));
    }

    #[test]
    fn parse_fails_with_malformed_document_for_blank_body() {
        let parser = VersionListParser::new(DOWNLOAD_BASE);
        let result = parser.parse("   ", "com.example.app", PAGE_URL);

        assert!(matches!(result, Err(ScrapeError::MalformedDocument(_))));
    }

    #[test]
    fn parse_skips_links_without_target() {
        let html = page(&[
            r#"<a class="ver_download_link" data-dt-version="9.9" data-dt-versioncode="999"></a>"#
                .to_string(),
            version_link("/example/com.example.app/download/1.0", "1.0", "100", "20 MB", "Jan 1"),
        ]);

        let parser = VersionListParser::new(DOWNLOAD_BASE);
        let versions = parser.parse(&html, "com.example.app", PAGE_URL).unwrap();

        assert_eq!(versions.len(), 1);
        assert_eq!(versions[0].version_name, "1.0");
    }

    #[test]
    fn parse_fails_when_every_link_lacks_target() {
        let html = page(&[r#"<a class="ver_download_link" data-dt-version="1.0"></a>"#.to_string()]);

        let parser = VersionListParser::new(DOWNLOAD_BASE);
        let result = parser.parse(&html, "com.example.app", PAGE_URL);

        assert!(matches!(result, Err(ScrapeError::NotFound(_))));
    }

    #[test]
    fn parse_resolves_relative_detail_url_against_page() {
        let html = page(&[version_link(
            "/example/com.example.app/download/1.0",
            "1.0",
            "100",
            "20 MB",
            "Jan 1",
        )]);

        let parser = VersionListParser::new(DOWNLOAD_BASE);
        let versions = parser.parse(&html, "com.example.app", PAGE_URL).unwrap();

        assert_eq!(
            versions[0].detail_url,
            "https://apkpure.com/example/com.example.app/download/1.0"
        );
    }

    #[test]
    fn parse_degrades_missing_fields_to_defaults() {
        let html = r#"<html><body>
            <a class="ver_download_link" href="https://apkpure.com/x/com.example.app/download/1"></a>
        </body></html>"#;

        let parser = VersionListParser::new(DOWNLOAD_BASE);
        let versions = parser.parse(html, "com.example.app", PAGE_URL).unwrap();

        assert_eq!(
            versions[0],
            VersionSummary {
                title: String::new(),
                detail_url: "https://apkpure.com/x/com.example.app/download/1".to_string(),
                version_name: String::new(),
                version_code: 0,
                size: String::new(),
                updated_on: String::new(),
                download_url: "https://d.apkpure.com/b/APK/com.example.app?versionCode=0"
                    .to_string(),
            }
        );
    }

    #[test]
    fn parse_extracts_version_code_from_noisy_attribute() {
        let html = page(&[version_link(
            "/x/com.example.app/download/1",
            "1.0",
            "code: 4521",
            "1 MB",
            "Jan 1",
        )]);

        let parser = VersionListParser::new(DOWNLOAD_BASE);
        let versions = parser.parse(&html, "com.example.app", PAGE_URL).unwrap();

        assert_eq!(versions[0].version_code, 4521);
    }

    #[test]
    fn parse_is_idempotent() {
        let html = page(&[
            version_link("/x/com.example.app/download/2", "2.0", "2", "2 MB", "Feb 1"),
            version_link("/x/com.example.app/download/1", "1.0", "1", "1 MB", "Jan 1"),
        ]);

        let parser = VersionListParser::new(DOWNLOAD_BASE);
        let first = parser.parse(&html, "com.example.app", PAGE_URL).unwrap();
        let second = parser.parse(&html, "com.example.app", PAGE_URL).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn download_url_trims_trailing_slash_from_base() {
        let parser = VersionListParser::new("http://localhost:1234/");

        assert_eq!(
            parser.download_url("com.example.app", 7),
            "http://localhost:1234/b/APK/com.example.app?versionCode=7"
        );
    }
}
