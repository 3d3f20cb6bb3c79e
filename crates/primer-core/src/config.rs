//! Provider configuration.
//!
//! Resolution order: defaults → user config file
//! (`<config_dir>/primer/config.toml`) → `PRIMER_OLLAMA_HOST` /
//! `PRIMER_OLLAMA_MODEL` environment overrides. A missing config file
//! is not an error; a present-but-broken one is.

use std::env;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::hierarchy::DEFAULT_STUDY_HOURS;

/// Settings for the Ollama-backed hierarchy provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Base URL of the Ollama server.
    #[serde(default = "default_host")]
    pub host: String,
    /// Model name passed with every generate request.
    #[serde(default = "default_model")]
    pub model: String,
    /// Fallback study-hours estimate for items the source leaves
    /// unspecified.
    #[serde(default = "default_study_hours")]
    pub default_study_hours: f64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            model: default_model(),
            default_study_hours: default_study_hours(),
        }
    }
}

fn default_host() -> String {
    "http://localhost:11434".to_string()
}

fn default_model() -> String {
    "llama3.2".to_string()
}

fn default_study_hours() -> f64 {
    DEFAULT_STUDY_HOURS
}

/// Load config from `path`, falling back to defaults when the file
/// does not exist.
pub fn load_config_file(path: &Path) -> Result<ProviderConfig> {
    if !path.exists() {
        return Ok(ProviderConfig::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    toml::from_str::<ProviderConfig>(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

/// Load the user-level config (`<config_dir>/primer/config.toml`) and
/// apply environment overrides.
pub fn load_config() -> Result<ProviderConfig> {
    let mut config = match dirs::config_dir() {
        Some(dir) => load_config_file(&dir.join("primer/config.toml"))?,
        None => ProviderConfig::default(),
    };

    if let Ok(host) = env::var("PRIMER_OLLAMA_HOST") {
        if !host.is_empty() {
            config.host = host;
        }
    }
    if let Ok(model) = env::var("PRIMER_OLLAMA_MODEL") {
        if !model.is_empty() {
            config.model = model;
        }
    }

    Ok(config)
}
