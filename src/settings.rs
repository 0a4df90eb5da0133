//! Installer settings.
//!
//! Read from an optional TOML file (`installer.toml` in the install root by
//! default). A missing file means built-in defaults; CLI flags are applied on
//! top by the caller.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use appconfig::Format;
use serde::Deserialize;

use crate::commands::install::{ProvisioningStep, default_steps};

/// Default settings file name, looked up in the install root
pub const SETTINGS_FILE: &str = "installer.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Cached derived config, dropped before installing
    pub cache_file: PathBuf,
    /// Generated config target
    pub config_file: PathBuf,
    /// Output format; inferred from `config_file` when unset
    pub format: Option<Format>,
    /// Provisioning sequence, run in order
    pub steps: Vec<ProvisioningStep>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cache_file: PathBuf::from("data/cache/app_config.php"),
            config_file: PathBuf::from("config/params/generated_config.php"),
            format: None,
            steps: default_steps(),
        }
    }
}

impl Settings {
    /// Load settings from `path`, falling back to defaults if it does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Could not read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Invalid settings in {}", path.display()))
    }

    /// Format to write the config in: explicit setting, else the file extension.
    pub fn resolve_format(&self) -> Result<Format> {
        match self.format {
            Some(format) => Ok(format),
            None => Format::from_path(&self.config_file).with_context(|| {
                format!(
                    "Cannot infer config format from {}; pass --format",
                    self.config_file.display()
                )
            }),
        }
    }
}
