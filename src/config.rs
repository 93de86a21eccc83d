//! Layered configuration for the atelier client.
//!
//! Values resolve file → environment → CLI:
//! 1. `atelier.toml` in the project directory (optional)
//! 2. `ATELIER_API_URL` / `ATELIER_TIMEOUT_SECS` environment variables
//! 3. the `--api-url` CLI flag
//!
//! # Configuration File Format
//!
//! ```toml
//! [backend]
//! base_url = "http://localhost:8000"
//! timeout_secs = 120
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
const CONFIG_FILE: &str = "atelier.toml";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    120
}

/// `[backend]` section of `atelier.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the platform service.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Hard per-request timeout in seconds. Deployment submission is
    /// fire-and-forget, so this is the only bound on how long a deploy
    /// call may hang.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    backend: BackendConfig,
}

/// Resolved runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub timeout_secs: u64,
    /// Where the config file lives (whether or not it exists).
    pub config_path: PathBuf,
}

impl Config {
    /// Resolve configuration for `project_dir`, applying the layering
    /// described in the module docs.
    pub fn load(project_dir: &Path, cli_api_url: Option<&str>) -> Result<Self> {
        let config_path = project_dir.join(CONFIG_FILE);

        let file = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read {}", config_path.display()))?;
            toml::from_str::<ConfigFile>(&content)
                .with_context(|| format!("Failed to parse {}", config_path.display()))?
        } else {
            ConfigFile::default()
        };

        let mut base_url = file.backend.base_url;
        let mut timeout_secs = file.backend.timeout_secs;

        if let Ok(url) = std::env::var("ATELIER_API_URL") {
            if !url.trim().is_empty() {
                base_url = url;
            }
        }
        if let Ok(secs) = std::env::var("ATELIER_TIMEOUT_SECS") {
            timeout_secs = secs
                .parse()
                .context("ATELIER_TIMEOUT_SECS must be an integer number of seconds")?;
        }

        if let Some(url) = cli_api_url {
            base_url = url.to_string();
        }

        Ok(Self {
            base_url,
            timeout_secs,
            config_path,
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Write a default `atelier.toml` into `project_dir`. Refuses to
    /// overwrite an existing file.
    pub fn write_default(project_dir: &Path) -> Result<PathBuf> {
        let config_path = project_dir.join(CONFIG_FILE);
        if config_path.exists() {
            anyhow::bail!("{} already exists", config_path.display());
        }
        let content = toml::to_string_pretty(&ConfigFile::default())
            .context("Failed to serialize default configuration")?;
        std::fs::write(&config_path, content)
            .with_context(|| format!("Failed to write {}", config_path.display()))?;
        Ok(config_path)
    }
}
