//! Client configuration — endpoint, timeout and data locations.
//!
//! The defaults reproduce a stock run against the public SWAPI mirror with
//! the Wookieepedia supplements in `./data`. A JSON file can override any
//! subset of fields:
//!
//! ```
//! use holonet_client::config::{ClientConfig, validate_config};
//!
//! let config: ClientConfig = serde_json::from_str(r#"{ "timeout_secs": 30 }"#).unwrap();
//! assert_eq!(config.endpoint, "https://swapi.py4e.com/api");
//! assert!(validate_config(&config).is_empty());
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::ClientError;

pub const DEFAULT_ENDPOINT: &str = "https://swapi.py4e.com/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// SWAPI base URL, without a trailing slash.
    pub endpoint: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Directory holding the Wookieepedia CSV/JSON supplements.
    pub data_dir: PathBuf,
    /// Directory the scenario documents are written to.
    pub output_dir: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            data_dir: PathBuf::from("data"),
            output_dir: PathBuf::from("."),
        }
    }
}

impl ClientConfig {
    /// Load a config file; missing keys fall back to defaults.
    pub fn from_file(path: &Path) -> Result<Self, ClientError> {
        let text = std::fs::read_to_string(path).map_err(|source| ClientError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ClientError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Endpoint with any trailing slashes removed.
    pub fn base_url(&self) -> &str {
        self.endpoint.trim_end_matches('/')
    }

    pub fn data_path(&self, file: &str) -> PathBuf {
        self.data_dir.join(file)
    }

    pub fn output_path(&self, file: &str) -> PathBuf {
        self.output_dir.join(file)
    }

    /// Validate, turning any problems into a single error.
    pub fn validated(self) -> Result<Self, ClientError> {
        let errors = validate_config(&self);
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(ClientError::Config(errors))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("endpoint is empty")]
    EmptyEndpoint,
    #[error("endpoint {0:?} is not an http(s) URL")]
    InvalidEndpoint(String),
    #[error("timeout must be at least one second")]
    ZeroTimeout,
}

/// Validate a configuration, returning all errors found.
pub fn validate_config(config: &ClientConfig) -> Vec<ConfigError> {
    let mut errors = Vec::new();

    let endpoint = config.endpoint.trim();
    if endpoint.is_empty() {
        errors.push(ConfigError::EmptyEndpoint);
    } else if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
        errors.push(ConfigError::InvalidEndpoint(config.endpoint.clone()));
    }

    if config.timeout_secs == 0 {
        errors.push(ConfigError::ZeroTimeout);
    }

    errors
}
