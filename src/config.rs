use serde::Deserialize;
use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

// Default configuration constants
pub const DEFAULT_CONFIG_PATH: &str = "config.json";
pub const DEFAULT_API_BASE_URL: &str = "https://api.digitalocean.com";
pub const DEFAULT_PAGE_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_PER_PAGE: u32 = 200;
pub const MAX_PER_PAGE: u32 = 200;

/// Errors raised while reading `config.json`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Credentials read from `config.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(rename = "PersonalAccessToken")]
    pub personal_access_token: String,
}

impl Config {
    /// Read and parse the config file at `path`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Open` if the file cannot be opened and
    /// `ConfigError::Parse` if it is not a JSON object with a
    /// `PersonalAccessToken` string.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ConfigError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = serde_json::from_reader(BufReader::new(file)).map_err(|source| {
            ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            }
        })?;
        tracing::debug!("Loaded access token from {}", path.display());
        Ok(config)
    }
}

/// Runtime settings that are not credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_base_url: String,
    pub page_timeout: Duration,
    pub per_page: u32,
}

impl Settings {
    /// Settings from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        Self {
            api_base_url: get_api_base_url(),
            page_timeout: get_page_timeout(),
            per_page: get_per_page(),
        }
    }

    /// Apply command-line overrides on top of these settings.
    pub fn with_overrides(
        mut self,
        api_base_url: Option<&str>,
        page_timeout_secs: Option<u64>,
        per_page: Option<u32>,
    ) -> Self {
        if let Some(url) = api_base_url {
            self.api_base_url = sanitize_base_url(url);
        }
        if let Some(secs) = page_timeout_secs.filter(|s| *s > 0) {
            self.page_timeout = Duration::from_secs(secs);
        }
        if let Some(n) = per_page {
            self.per_page = clamp_per_page(n);
        }
        self
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            page_timeout: Duration::from_secs(DEFAULT_PAGE_TIMEOUT_SECS),
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        dotenvy::from_path(Path::new(path)).ok();
    } else {
        dotenvy::dotenv().ok();
    }
}

pub fn get_api_base_url() -> String {
    sanitize_base_url(&env::var("DO_API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()))
}

pub fn get_page_timeout() -> Duration {
    let secs = env::var("DO_PAGE_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|s| *s > 0)
        .unwrap_or(DEFAULT_PAGE_TIMEOUT_SECS);
    Duration::from_secs(secs)
}

pub fn get_per_page() -> u32 {
    env::var("DO_PER_PAGE")
        .ok()
        .and_then(|v| v.trim().parse::<u32>().ok())
        .map(clamp_per_page)
        .unwrap_or(DEFAULT_PER_PAGE)
}

/// The listing endpoint accepts between 1 and 200 records per page.
pub fn clamp_per_page(per_page: u32) -> u32 {
    per_page.clamp(1, MAX_PER_PAGE)
}

pub fn sanitize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE_URL.to_string()
    } else {
        trimmed.to_string()
    }
}
