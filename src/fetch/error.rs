use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected status {status} for {url}")]
    Status { status: u16, url: String },

    #[error("Failed to read response body: {0}")]
    Body(String),
}
