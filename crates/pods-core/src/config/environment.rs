//! Snapshot of the process environment the configuration depends on

use std::path::PathBuf;

use pods_fs::PodPath;

use crate::{Error, Result};

/// Overrides the default sources directory.
pub const REPOS_DIR_VAR: &str = "CP_REPOS_DIR";

/// Disables aggressive caching when set to exactly `FALSE`.
pub const AGGRESSIVE_CACHE_VAR: &str = "CP_AGGRESSIVE_CACHE";

/// Everything [`Config`](super::Config) reads from outside the settings file.
///
/// Captured once so that a `Config` never observes the environment changing
/// underneath it, and so tests can describe an environment without touching
/// the real process state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    /// Directory the installation root search starts from.
    pub working_dir: PathBuf,
    /// User home directory, parent of the default sources directory.
    pub home_dir: Option<PathBuf>,
    /// Value of `CP_REPOS_DIR`, if set and non-empty.
    pub repos_dir: Option<PathBuf>,
    /// Raw value of `CP_AGGRESSIVE_CACHE`, if set.
    pub aggressive_cache: Option<String>,
}

impl Environment {
    /// Capture the current process environment.
    pub fn capture() -> Result<Self> {
        let working_dir = std::env::current_dir().map_err(Error::CurrentDir)?;

        Ok(Self {
            working_dir,
            home_dir: dirs::home_dir(),
            repos_dir: std::env::var_os(REPOS_DIR_VAR)
                .filter(|value| !value.is_empty())
                .map(PathBuf::from),
            aggressive_cache: std::env::var(AGGRESSIVE_CACHE_VAR).ok(),
        })
    }

    /// An environment with an explicit working directory and sources
    /// directory and nothing else set.
    ///
    /// Primarily useful for tests and for embedding, where the real home
    /// directory and environment variables must not leak in.
    pub fn isolated(working_dir: impl Into<PathBuf>, repos_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
            home_dir: None,
            repos_dir: Some(repos_dir.into()),
            aggressive_cache: None,
        }
    }

    /// Set the raw `CP_AGGRESSIVE_CACHE` value.
    pub fn with_aggressive_cache(mut self, value: impl Into<String>) -> Self {
        self.aggressive_cache = Some(value.into());
        self
    }

    /// Sources directory: `CP_REPOS_DIR` if set, else `~/.cocoapods`.
    ///
    /// Without a home directory the relative `.cocoapods` is used.
    pub fn default_repos_dir(&self) -> PathBuf {
        if let Some(ref repos_dir) = self.repos_dir {
            return repos_dir.clone();
        }
        match self.home_dir {
            Some(ref home) => home.join(PodPath::ReposDir),
            None => PathBuf::from(PodPath::ReposDir.as_str()),
        }
    }

    /// Aggressive caching is on unless the variable is exactly `FALSE`.
    pub fn aggressive_cache_enabled(&self) -> bool {
        self.aggressive_cache.as_deref() != Some("FALSE")
    }
}
