//! Lists published versions and build variants of Android packages on APKPure
//!
//! ```text
//! package id ──▶ Locator ──▶ /versions ──▶ VersionSummary ──▶ detail page ──▶ VariantRecord
//!               (search)     (list parser)                   (variant parser)
//! ```

pub mod client;
pub mod config;
pub mod fetch;
pub mod logging;
pub mod scrape;

pub use client::ApkPureClient;
pub use scrape::types::{VariantRecord, VersionSummary};
