//! Parser for a version-detail page listing build variants

use scraper::{ElementRef, Selector};
use tracing::{debug, info, warn};

use crate::scrape::details::{DetailLabel, VariantDetails};
use crate::scrape::error::ScrapeError;
use crate::scrape::html::{parse_document, resolve_url, select_attr, select_text};
use crate::scrape::types::VariantRecord;
use crate::scrape::version_code::extract_version_code;

/// Number of items in the statistics block when it has its usual layout
const STATS_ITEM_COUNT: usize = 5;

/// Position of the downloads count within the statistics block
const DOWNLOADS_STAT_INDEX: usize = 2;

/// Page-level fields shared by every variant of a version
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageContext {
    pub title: String,
    pub version_name: String,
    pub downloads: String,
    pub detail_url: String,
}

/// Parser for the variants of a single version
pub struct VariantParser {
    title_selector: Selector,
    version_selector: Selector,
    stats_item_selector: Selector,
    stats_head_selector: Selector,
    variant_selector: Selector,
    download_selector: Selector,
    code_selector: Selector,
    time_selector: Selector,
    size_selector: Selector,
    sdk_selector: Selector,
    detail_pair_selector: Selector,
    detail_label_selector: Selector,
    detail_value_selector: Selector,
}

impl Default for VariantParser {
    fn default() -> Self {
        Self::new()
    }
}

impl VariantParser {
    pub fn new() -> Self {
        Self {
            title_selector: Selector::parse(".info-title").unwrap(),
            version_selector: Selector::parse(".version-name").unwrap(),
            stats_item_selector: Selector::parse(".dev-partnership-head-info li").unwrap(),
            stats_head_selector: Selector::parse(".head").unwrap(),
            variant_selector: Selector::parse("#version-list .apk").unwrap(),
            download_selector: Selector::parse(".download-btn").unwrap(),
            code_selector: Selector::parse(".code").unwrap(),
            time_selector: Selector::parse("span.time").unwrap(),
            size_selector: Selector::parse("span.size").unwrap(),
            sdk_selector: Selector::parse("span.sdk").unwrap(),
            detail_pair_selector: Selector::parse(".variants-desc-dialog .content p").unwrap(),
            detail_label_selector: Selector::parse(".label").unwrap(),
            detail_value_selector: Selector::parse(".value").unwrap(),
        }
    }

    /// Parses the version-detail page fetched from `page_url`.
    ///
    /// Variants are returned in document order. A page without any variant
    /// element is reported as not found rather than as an empty list.
    pub fn parse(&self, html: &str, page_url: &str) -> Result<Vec<VariantRecord>, ScrapeError> {
        let document = parse_document(html)?;
        let context = self.read_context(document.root_element(), page_url);

        let variants: Vec<VariantRecord> = document
            .select(&self.variant_selector)
            .map(|element| self.read_variant(&context, element))
            .collect();

        if variants.is_empty() {
            return Err(ScrapeError::NotFound(format!(
                "no variants found for {}",
                page_url
            )));
        }

        info!("Found {} variants for {}", variants.len(), page_url);
        Ok(variants)
    }

    /// Reads the fields shared by every variant on the page
    fn read_context(&self, root: ElementRef<'_>, page_url: &str) -> PageContext {
        let title = select_text(root, &self.title_selector);
        let version_name = select_text(root, &self.version_selector);
        debug!("Title: {}, version: {}", title, version_name);

        let stats: Vec<ElementRef<'_>> = root.select(&self.stats_item_selector).collect();
        let downloads = if stats.len() == STATS_ITEM_COUNT {
            select_text(stats[DOWNLOADS_STAT_INDEX], &self.stats_head_selector)
        } else {
            warn!(
                "Unexpected statistics block size for {}: expected {}, found {}",
                page_url,
                STATS_ITEM_COUNT,
                stats.len()
            );
            String::new()
        };
        debug!("Downloads: {}", downloads);

        PageContext {
            title,
            version_name,
            downloads,
            detail_url: page_url.to_string(),
        }
    }

    fn read_variant(&self, context: &PageContext, element: ElementRef<'_>) -> VariantRecord {
        let download_href = select_attr(element, &self.download_selector, "href");
        let version_code = extract_version_code(&select_text(element, &self.code_selector));

        // The dialog's "Requires Android" supersedes the summary line
        let sdk_summary = select_text(element, &self.sdk_selector);
        debug!("SDK summary for {}: {}", version_code, sdk_summary);

        let details = VariantDetails::collect(
            element,
            &self.detail_pair_selector,
            &self.detail_label_selector,
            &self.detail_value_selector,
        );

        VariantRecord {
            title: context.title.clone(),
            version_name: context.version_name.clone(),
            downloads: context.downloads.clone(),
            detail_url: context.detail_url.clone(),
            version_code,
            download_url: resolve_url(&context.detail_url, &download_href),
            updated_on: select_text(element, &self.time_selector),
            size: select_text(element, &self.size_selector),
            android_version_required: details.get(DetailLabel::RequiresAndroid),
            architecture: details.get(DetailLabel::Architecture),
            screen_dpi: details.get(DetailLabel::ScreenDpi),
            signature: details.get(DetailLabel::Signature),
            sha1_hash: details.get(DetailLabel::FileSha1),
            base_apk: details.get(DetailLabel::BaseApk),
            split_apk: details.get(DetailLabel::SplitApk),
        }
    }
}
