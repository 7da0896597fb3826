//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use springbank_infra::FileSessionStore;
use springbank_infra::http::DEFAULT_BASE_URL;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Origin of the remote banking API, e.g. `http://localhost:8080/api`.
    pub api_url: String,
    /// Directory holding the persisted session.
    pub data_dir: PathBuf,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            api_url: env::var("SPRINGBANK_API_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            data_dir: env::var("SPRINGBANK_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| FileSessionStore::default_dir()),
        }
    }
}
