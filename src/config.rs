use serde::Deserialize;
use std::path::PathBuf;

// =============================================================================
// Origin endpoints
// =============================================================================

/// Default origin serving search, listing and version-detail pages
pub const DEFAULT_BASE_URL: &str = "https://apkpure.com";

/// Default host serving direct APK downloads
pub const DEFAULT_DOWNLOAD_BASE_URL: &str = "https://d.apkpure.com";

// =============================================================================
// Transport
// =============================================================================

/// Timeout for a single fetch in seconds
pub const FETCH_TIMEOUT_SECS: u64 = 10;

/// User agent sent by the bundled HTTP fetcher
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

/// Client configuration structure
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ClientConfig {
    /// Origin used for search and listing pages
    pub base_url: String,
    /// Host used to build direct download URLs
    pub download_base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            download_base_url: DEFAULT_DOWNLOAD_BASE_URL.to_string(),
            timeout_secs: FETCH_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Returns the path to the data directory for apkpure-versions.
/// Uses $XDG_DATA_HOME/apkpure-versions if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/apkpure-versions,
/// or ./apkpure-versions if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the log file.
pub fn log_path() -> PathBuf {
    data_dir().join("apkpure-versions.log")
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("apkpure-versions")
}
