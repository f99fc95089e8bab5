//! Serializable snapshot of a resolved configuration

use std::path::PathBuf;

use serde::Serialize;

use super::Config;

/// Effective flags and resolved paths, as reported by `pods config`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigReport {
    pub verbose: bool,
    pub silent: bool,
    pub skip_repo_update: bool,
    pub aggressive_cache: bool,
    pub clean: bool,
    pub integrate_targets: bool,
    pub new_version_message: bool,
    pub repos_dir: PathBuf,
    pub installation_root: PathBuf,
    pub sandbox_root: PathBuf,
    pub manifest_path: Option<PathBuf>,
    pub lockfile_path: PathBuf,
    /// Keys of settings file entries that were ignored.
    pub ignored_settings: Vec<String>,
}

impl Config {
    /// Resolve every path and capture the effective state.
    pub fn report(&mut self) -> ConfigReport {
        ConfigReport {
            verbose: self.verbose(),
            silent: self.silent(),
            skip_repo_update: self.skip_repo_update(),
            aggressive_cache: self.aggressive_cache(),
            clean: self.clean(),
            integrate_targets: self.integrate_targets(),
            new_version_message: self.new_version_message(),
            repos_dir: self.repos_dir().to_path_buf(),
            installation_root: self.installation_root().to_path_buf(),
            sandbox_root: self.sandbox_root().to_path_buf(),
            manifest_path: self.manifest_path().map(|p| p.to_path_buf()),
            lockfile_path: self.lockfile_path().to_path_buf(),
            ignored_settings: self.unknown_settings().keys().cloned().collect(),
        }
    }
}
