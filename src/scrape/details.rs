//! Label/value mapping read from a variant's detail dialog
//!
//! The dialog renders one `<p>` per fact, each holding a `.label` and a
//! `.value`. Every pair is collected once; the record fields are then read
//! through [`DetailLabel`], so a new label only needs a new variant here.

use std::collections::HashMap;

use scraper::{ElementRef, Selector};
use tracing::debug;

use crate::scrape::html::select_text;

/// Labels the variant parser knows how to map onto record fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DetailLabel {
    Architecture,
    RequiresAndroid,
    Signature,
    ScreenDpi,
    BaseApk,
    SplitApk,
    FileSha1,
}

impl DetailLabel {
    /// Label text as rendered by the origin
    pub fn as_str(&self) -> &'static str {
        match self {
            DetailLabel::Architecture => "Architecture",
            DetailLabel::RequiresAndroid => "Requires Android",
            DetailLabel::Signature => "Signature",
            DetailLabel::ScreenDpi => "Screen DPI",
            DetailLabel::BaseApk => "Base APK",
            DetailLabel::SplitApk => "Split APK",
            DetailLabel::FileSha1 => "File SHA1",
        }
    }
}

/// Trimmed label text to trimmed value text for one variant
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantDetails {
    entries: HashMap<String, String>,
}

impl VariantDetails {
    /// Collects every label/value pair under `dialog` matching `pair_selector`.
    /// Later duplicates of a label overwrite earlier ones.
    pub fn collect(
        dialog: ElementRef<'_>,
        pair_selector: &Selector,
        label_selector: &Selector,
        value_selector: &Selector,
    ) -> Self {
        let entries = dialog
            .select(pair_selector)
            .map(|pair| {
                let label = select_text(pair, label_selector);
                let value = select_text(pair, value_selector);
                debug!("Detail: {} -> {}", label, value);
                (label, value)
            })
            .collect();

        Self { entries }
    }

    /// Value for `label`, or an empty string when the dialog lacks it
    pub fn get(&self, label: DetailLabel) -> String {
        self.entries
            .get(label.as_str())
            .cloned()
            .unwrap_or_default()
    }
}
