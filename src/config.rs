//! Tool configuration
//!
//! Configuration is optional. Without a file every field takes its
//! default; a JSON file passed with `--config` may override any subset.
//! No environment variables are read.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::cli::{CliError, CliResult};
use crate::observability::Severity;
use crate::persist::Format;
use crate::query::DEFAULT_SEARCH_BASE;
use crate::results::DisplayLimits;

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Search endpoint that queries are appended to as `?q=`
    #[serde(default = "default_search_base_url")]
    pub search_base_url: String,

    /// Maximum number of results listed (default 10)
    #[serde(default = "default_display_limit")]
    pub display_limit: usize,

    /// Title column width in the result list (default 60)
    #[serde(default = "default_title_width")]
    pub title_width: usize,

    /// URL column width in the result list (default 50)
    #[serde(default = "default_url_width")]
    pub url_width: usize,

    /// Export format when `--formato` is not given
    #[serde(default)]
    pub default_format: Format,

    /// Directory for timestamped result files (default: working directory)
    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    /// Minimum log severity: "trace", "info", "warn", "error" or "fatal"
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_search_base_url() -> String {
    DEFAULT_SEARCH_BASE.to_string()
}
fn default_display_limit() -> usize {
    10
}
fn default_title_width() -> usize {
    60
}
fn default_url_width() -> usize {
    50
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search_base_url: default_search_base_url(),
            display_limit: default_display_limit(),
            title_width: default_title_width(),
            url_width: default_url_width(),
            default_format: Format::default(),
            output_dir: None,
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        Self::from_json(&content)
    }

    /// Parse and validate configuration JSON
    pub fn from_json(content: &str) -> CliResult<Self> {
        let config: Config = serde_json::from_str(content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if self.search_base_url.trim().is_empty() {
            return Err(CliError::config_error("search_base_url must not be empty"));
        }

        if self.display_limit == 0 {
            return Err(CliError::config_error("display_limit must be > 0"));
        }

        if self.title_width == 0 || self.url_width == 0 {
            return Err(CliError::config_error(
                "title_width and url_width must be > 0",
            ));
        }

        self.log_severity()?;

        Ok(())
    }

    /// Parsed log threshold
    pub fn log_severity(&self) -> CliResult<Severity> {
        Severity::parse(&self.log_level).ok_or_else(|| {
            CliError::config_error(format!(
                "Invalid log_level: '{}'. Must be one of trace, info, warn, error, fatal.",
                self.log_level
            ))
        })
    }

    /// Result list limits derived from this config
    pub fn display_limits(&self) -> DisplayLimits {
        DisplayLimits {
            max_entries: self.display_limit,
            title_width: self.title_width,
            url_width: self.url_width,
        }
    }
}
