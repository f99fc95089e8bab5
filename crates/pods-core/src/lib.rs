//! Configuration core for the pods dependency manager
//!
//! This crate holds the process configuration and the project collaborators
//! it resolves:
//!
//! - **Config**: feature flags from defaults and the user settings file, plus
//!   lazily resolved project paths
//! - **Global instance**: a narrow accessor for code that cannot receive a
//!   `Config` explicitly
//! - **Collaborators**: [`Manifest`], [`Lockfile`] and [`Sandbox`], built
//!   from the resolved paths
//!
//! # Architecture
//!
//! ```text
//!        pods-cli
//!            |
//!        pods-core
//!            |
//!         pods-fs
//! ```

pub mod config;
pub mod dependency;
pub mod error;
pub mod global;
pub mod lockfile;
pub mod manifest;
pub mod notify;
pub mod sandbox;

pub use config::{Config, ConfigReport, Environment, Flag, Settings};
pub use dependency::Dependency;
pub use error::{Error, Result};
pub use lockfile::{LockedPod, Lockfile};
pub use manifest::{Manifest, ManifestFormat, Platform};
pub use notify::{Notifier, RecordingNotifier, StdoutNotifier};
pub use sandbox::Sandbox;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn error_manifest_parse_displays_path() {
        let error = Error::ManifestParse {
            path: PathBuf::from("/project/Podfile"),
            message: "line 3: malformed pod statement".into(),
        };

        let display = error.to_string();
        assert!(display.contains("/project/Podfile"), "got: {}", display);
        assert!(display.contains("line 3"), "got: {}", display);
        assert!(error.is_parse_error());
    }

    #[test]
    fn fs_errors_are_not_parse_errors() {
        let error = Error::from(pods_fs::Error::io(
            "/project/Podfile",
            std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        ));
        assert!(!error.is_parse_error());
    }
}
