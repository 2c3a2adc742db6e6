//! Transport layer
//!
//! The scraping core only ever needs "GET this URL and give me the body".
//! Anything beyond that (browser fingerprints, challenge pages) is the
//! business of the [`Fetcher`] implementation.
//!
//! - [`fetcher`]: Fetcher trait definition
//! - [`http`]: reqwest-backed implementation
//! - [`error`]: Error type for fetch operations

pub mod error;
pub mod fetcher;
pub mod http;

pub use error::FetchError;
pub use fetcher::Fetcher;
pub use http::HttpFetcher;
