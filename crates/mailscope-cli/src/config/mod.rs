//! Configuration management.

use anyhow::{Context as _, Result};
use directories::ProjectDirs;
use mailscope::{Credentials, Endpoints};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cli::args::Cli;
use crate::output::OutputFormat;

/// Request timeout when neither flag nor file sets one
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration file contents.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Hunter.io API key.
    pub hunter_api_key: Option<String>,

    /// Clearbit API key.
    pub clearbit_api_key: Option<String>,

    /// Report file.
    pub output: Option<PathBuf>,

    /// Report format.
    pub format: Option<OutputFormat>,

    /// HTTP request timeout in seconds.
    pub timeout_secs: Option<u64>,

    /// Service base URLs.
    #[serde(default)]
    pub endpoints: Endpoints,
}

impl Config {
    /// Get the default config file path.
    pub fn path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("io", "mailscope", "mailscope")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from the default location.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load configuration from `path`, falling back to defaults when the
    /// file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file '{}'", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("invalid config file '{}'", path.display()))?;

        Ok(config)
    }
}

/// Effective settings after merging flags, environment and config file.
pub struct Settings {
    /// API keys
    pub credentials: Credentials,
    /// Service base URLs
    pub endpoints: Endpoints,
    /// Report file
    pub output: PathBuf,
    /// Report format
    pub format: OutputFormat,
    /// HTTP request timeout
    pub timeout: Duration,
}

impl Settings {
    /// Merge settings; flags and environment win over the file.
    #[must_use]
    pub fn resolve(cli: &Cli, config: Config) -> Self {
        let format = cli.format.or(config.format).unwrap_or_default();
        let output = cli
            .output
            .clone()
            .or(config.output)
            .unwrap_or_else(|| format.default_path());

        let mut credentials = Credentials::new();
        if let Some(key) = cli.hunter_key.clone().or(config.hunter_api_key) {
            credentials = credentials.hunter(key);
        }
        if let Some(key) = cli.clearbit_key.clone().or(config.clearbit_api_key) {
            credentials = credentials.clearbit(key);
        }

        let timeout_secs = cli
            .timeout
            .or(config.timeout_secs)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            credentials,
            endpoints: config.endpoints,
            output,
            format,
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}
