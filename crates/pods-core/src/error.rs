//! Error types for pods-core

use std::path::PathBuf;

/// Result type for pods-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in pods-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The user settings file exists but is not a YAML mapping
    #[error("Failed to parse settings at {path}: {message}")]
    SettingsParse { path: PathBuf, message: String },

    /// The manifest exists but could not be parsed
    #[error("Failed to parse manifest at {path}: {message}")]
    ManifestParse { path: PathBuf, message: String },

    /// The lockfile exists but could not be parsed
    #[error("Failed to parse lockfile at {path}: {message}")]
    LockfileParse { path: PathBuf, message: String },

    /// The working directory could not be determined
    #[error("Could not determine the current directory: {0}")]
    CurrentDir(#[source] std::io::Error),

    /// Filesystem error from pods-fs
    #[error(transparent)]
    Fs(#[from] pods_fs::Error),
}

impl Error {
    pub(crate) fn manifest(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::ManifestParse {
            path: path.into(),
            message: message.into(),
        }
    }

    pub(crate) fn lockfile(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::LockfileParse {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Whether this error reports malformed file content rather than a
    /// failure to reach the file.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Self::SettingsParse { .. } | Self::ManifestParse { .. } | Self::LockfileParse { .. }
        )
    }
}
