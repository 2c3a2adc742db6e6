//! Extraction layer for APKPure pages
//!
//! Each parser works on an already fetched HTML body and is free of I/O, so
//! parsing the same document twice always yields the same records.
//!
//! # Modules
//!
//! - [`locator`]: Finds a package's listing page in search results
//! - [`version_list`]: Parses the `/versions` page into [`VersionSummary`] records
//! - [`variants`]: Parses a version-detail page into [`VariantRecord`] records
//! - [`details`]: Label/value mapping read from a variant's detail dialog
//! - [`version_code`]: Shared version-code extraction rule
//! - [`html`]: Small selection helpers over `scraper`
//! - [`error`]: Error type for scraping operations
//! - [`types`]: Record types

pub mod details;
pub mod error;
pub mod html;
pub mod locator;
pub mod types;
pub mod variants;
pub mod version_code;
pub mod version_list;

pub use error::ScrapeError;
pub use locator::Locator;
pub use types::{VariantRecord, VersionSummary};
pub use variants::VariantParser;
pub use version_code::extract_version_code;
pub use version_list::VersionListParser;
