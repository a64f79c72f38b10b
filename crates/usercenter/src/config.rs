// File: src/config.rs
// Purpose: Configuration parsing from usercenter.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::message::{Catalog, Locale};
use crate::validation::{Limits, Validators};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub validation: Limits,

    #[serde(default)]
    pub messages: MessagesConfig,
}

/// Message catalog configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct MessagesConfig {
    #[serde(default)]
    pub locale: Locale,

    /// Replace or add catalog entries, keyed by message code
    #[serde(default)]
    pub overrides: HashMap<String, String>,

    /// Field labels used when showing upstream API errors
    #[serde(default)]
    pub labels: HashMap<String, String>,
}

impl Config {
    /// Load configuration from usercenter.toml
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            debug!(?path, "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from default path (./usercenter.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("usercenter.toml")
    }

    /// The message catalog to inject into rendering and normalization
    pub fn catalog(&self) -> Catalog {
        Catalog::builtin(self.messages.locale)
            .with_messages(self.messages.overrides.clone())
            .with_labels(self.messages.labels.clone())
    }

    /// The entity validators with the configured limits
    pub fn validators(&self) -> Validators {
        Validators::new(self.validation)
    }
}
