use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while producing or persisting a generated config.
#[derive(Debug, Error)]
pub enum Error {
    /// Writing the target file failed
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document could not be converted to the requested format
    #[error("failed to serialize config as {format}: {message}")]
    Serialize {
        format: &'static str,
        message: String,
    },

    /// No writer exists for the requested format name or file extension
    #[error("unsupported config format: {0}")]
    UnsupportedFormat(String),
}

impl Error {
    pub(crate) fn serialize(format: &'static str, err: impl std::fmt::Display) -> Self {
        Self::Serialize {
            format,
            message: err.to_string(),
        }
    }
}

/// Result type for config generation
pub type Result<T> = std::result::Result<T, Error>;
