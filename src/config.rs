//! Configuration handling for the form

use crate::validation::RawValue;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormConfig {
    /// Values to pre-fill, merged over the built-in defaults
    pub initial_values: Option<HashMap<String, RawValue>>,
    /// Validate a field as soon as focus leaves it
    pub validate_on_blur: Option<bool>,
}

impl FormConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "basic-form", "basic-form")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the platform config directory
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: FormConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Built-in defaults overlaid with the configured initial values
    pub fn initial_values(&self, defaults: HashMap<String, RawValue>) -> HashMap<String, RawValue> {
        let mut values = defaults;
        if let Some(configured) = &self.initial_values {
            values.extend(configured.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
        values
    }

    pub fn validate_on_blur(&self) -> bool {
        self.validate_on_blur.unwrap_or(false)
    }
}
