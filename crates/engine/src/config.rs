//! Evaluator configuration via TOML
//!
//! A job supplies the date pattern and perspective date once; every row is
//! then evaluated against them.

use appver_core::{Error, Result};
use appver_temporal::{DatePattern, ParseCache};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

use crate::schema::VERSION_INFO_FIELD;

/// Parse cache settings
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CacheConfig {
    /// Stop caching new values for a pattern after this many entries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_entries_per_pattern: Option<usize>,
}

impl CacheConfig {
    /// Build a cache with these settings
    pub fn build(&self) -> Arc<ParseCache> {
        let cache = match self.max_entries_per_pattern {
            Some(max) => ParseCache::with_limit(max),
            None => ParseCache::new(),
        };
        Arc::new(cache)
    }
}

/// Evaluator configuration.
///
/// # Example
///
/// ```toml
/// date_pattern = "yyyy-MM-dd"
/// perspective_date = "2013-03-25"
///
/// [cache]
/// max_entries_per_pattern = 100000
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EvaluatorConfig {
    /// Pattern for day keys and the perspective date
    #[serde(default = "default_date_pattern")]
    pub date_pattern: String,
    /// Date as of which versions are resolved; omit to pass one per call
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub perspective_date: Option<String>,
    /// Per-day field holding version info
    #[serde(default = "default_version_info_field")]
    pub version_info_field: String,
    /// Parse cache settings
    #[serde(default)]
    pub cache: CacheConfig,
}

fn default_date_pattern() -> String {
    "yyyy-MM-dd".to_string()
}

fn default_version_info_field() -> String {
    VERSION_INFO_FIELD.to_string()
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            date_pattern: default_date_pattern(),
            perspective_date: None,
            version_info_field: default_version_info_field(),
            cache: CacheConfig::default(),
        }
    }
}

impl EvaluatorConfig {
    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Version-on-date evaluator configuration
#
# Pattern for day keys and the perspective date (default: "yyyy-MM-dd")
date_pattern = "yyyy-MM-dd"

# Date as of which versions are resolved. Leave unset to supply one per call.
# perspective_date = "2013-03-25"

# Per-day field holding version info
version_info_field = "org.mozilla.appInfo.versions"

# [cache]
# max_entries_per_pattern = 100000
"#
    }

    /// Parse and validate config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML, the pattern does not
    /// compile, or the perspective date does not match the pattern.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: EvaluatorConfig = toml::from_str(content)
            .map_err(|e| Error::config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content).map_err(|e| match e {
            Error::Config(msg) => Error::config(format!("{} ({})", msg, path.display())),
            other => other,
        })
    }

    /// Serialize this config to TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| Error::config(format!("Failed to serialize config: {}", e)))
    }

    /// Compile the pattern and parse the perspective date eagerly
    pub fn validate(&self) -> Result<()> {
        if self.version_info_field.is_empty() {
            return Err(Error::config("version_info_field must not be empty"));
        }
        let pattern = DatePattern::compile(&self.date_pattern)?;
        if let Some(perspective) = &self.perspective_date {
            pattern.parse(perspective)?;
        }
        Ok(())
    }
}
