use thiserror::Error;

use crate::fetch::FetchError;

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Transport failure: {0}")]
    Transport(#[from] FetchError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    #[error("Package id is empty")]
    EmptyPackageId,

    #[error("Version has no detail URL")]
    MissingDetailUrl,
}
