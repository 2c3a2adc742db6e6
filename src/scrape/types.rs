//! Record types produced by the parsers

use serde::Serialize;

/// One published version of a package, as listed on its `/versions` page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionSummary {
    /// Package display name
    pub title: String,
    /// Absolute URL of the page listing this version's variants
    pub detail_url: String,
    /// Human-readable version (e.g. "1.2.3")
    pub version_name: String,
    /// Build ordinal, 0 when unknown
    pub version_code: u64,
    /// Size as rendered by the origin (e.g. "25.3 MB")
    pub size: String,
    /// Date as rendered by the origin
    pub updated_on: String,
    /// Direct download URL built from the package id and version code
    pub download_url: String,
}

/// One build variant (architecture/DPI/SDK combination) of a version
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantRecord {
    // Shared by every variant of the same version
    /// Package display name
    pub title: String,
    /// Human-readable version of the containing version
    pub version_name: String,
    /// Download count as rendered in the page's statistics block, empty when absent
    pub downloads: String,
    /// Page the variant was read from
    pub detail_url: String,

    /// Build ordinal of this variant, 0 when unknown
    pub version_code: u64,
    /// Direct download URL of this variant's binary
    pub download_url: String,
    /// Date as rendered by the origin
    pub updated_on: String,
    /// Size as rendered by the origin
    pub size: String,
    /// Minimum Android version (e.g. "Android 8.0+ (O, API 26)")
    pub android_version_required: String,
    /// Supported ABIs (e.g. "arm64-v8a")
    pub architecture: String,
    /// Target screen density (e.g. "nodpi")
    pub screen_dpi: String,
    /// Signing certificate fingerprint
    pub signature: String,
    /// SHA-1 digest of the downloadable file
    pub sha1_hash: String,
    /// Base APK flag/name as rendered by the origin
    pub base_apk: String,
    /// Split APK flag/name as rendered by the origin
    pub split_apk: String,
}
