//! Persisting a [`GeneratedConfig`] to disk.
//!
//! The [`DocumentWriter`] trait is the seam the installer writes through, so
//! tests can capture the document instead of touching the filesystem.

mod php;

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::document::GeneratedConfig;
use crate::error::{Error, Result};

/// On-disk formats a config can be written in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// PHP file returning a nested array
    #[default]
    Php,
    Json,
    Toml,
}

impl Format {
    pub fn name(self) -> &'static str {
        match self {
            Self::Php => "php",
            Self::Json => "json",
            Self::Toml => "toml",
        }
    }

    /// Infer the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| Error::UnsupportedFormat(path.display().to_string()))?;
        ext.parse()
    }

    /// Serialize a document in this format.
    pub fn render<T: Serialize + ?Sized>(self, document: &T) -> Result<String> {
        let value = serde_json::to_value(document).map_err(|e| Error::serialize(self.name(), e))?;
        match self {
            Self::Php => Ok(php::render(&value)),
            Self::Json => serde_json::to_string_pretty(&value)
                .map(|mut s| {
                    s.push('\n');
                    s
                })
                .map_err(|e| Error::serialize(self.name(), e)),
            Self::Toml => toml::to_string(&value).map_err(|e| Error::serialize(self.name(), e)),
        }
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "php" => Ok(Self::Php),
            "json" => Ok(Self::Json),
            "toml" => Ok(Self::Toml),
            other => Err(Error::UnsupportedFormat(other.to_string())),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Destination for the generated configuration.
pub trait DocumentWriter {
    /// Persist `config` at `path`. Either the whole document lands or an
    /// error is returned.
    fn write(&self, config: &GeneratedConfig, path: &Path) -> Result<()>;
}

/// Writes documents to the local filesystem in a fixed format.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileWriter {
    format: Format,
}

impl FileWriter {
    pub fn new(format: Format) -> Self {
        Self { format }
    }

    pub fn format(&self) -> Format {
        self.format
    }
}

impl DocumentWriter for FileWriter {
    fn write(&self, config: &GeneratedConfig, path: &Path) -> Result<()> {
        let content = self.format.render(config)?;
        write_atomic(path, content.as_bytes())
    }
}

/// Write through a sibling temp file and rename it over the target.
fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    let wrap = |source: std::io::Error| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(wrap)?;
    }

    let tmp = temp_path(path);
    if let Err(e) = fs::write(&tmp, content) {
        let _ = fs::remove_file(&tmp);
        return Err(wrap(e));
    }
    fs::rename(&tmp, path).map_err(|e| {
        let _ = fs::remove_file(&tmp);
        wrap(e)
    })
}

fn temp_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{name}.tmp"))
}
