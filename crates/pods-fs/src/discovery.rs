//! Installation root discovery
//!
//! Walks up the directory tree from a starting directory looking for the
//! first directory that holds a recognized manifest, so that commands work
//! from anywhere inside a project.

use std::path::{Path, PathBuf};

use crate::PodPath;

/// Outcome of an upward manifest search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discovery {
    /// Directory considered the project root. Equal to the starting
    /// directory when no manifest was found.
    pub root: PathBuf,
    /// Manifest that selected `root`, if any.
    pub manifest: Option<PathBuf>,
}

impl Discovery {
    /// Whether a manifest was found anywhere in the ancestor chain.
    pub fn found(&self) -> bool {
        self.manifest.is_some()
    }
}

/// Return the highest-priority manifest present directly in `dir`.
pub fn manifest_in(dir: &Path) -> Option<PathBuf> {
    PodPath::MANIFESTS
        .iter()
        .map(|name| dir.join(name))
        .find(|candidate| candidate.exists())
}

/// Find the installation root for `start`.
///
/// Each candidate directory is probed for the manifest names in priority
/// order; the walk stops at the first hit or at the filesystem root. With no
/// hit the starting directory itself is returned.
pub fn find_installation_root(start: &Path) -> Discovery {
    let mut current = start.to_path_buf();

    loop {
        if let Some(manifest) = manifest_in(&current) {
            tracing::debug!(?manifest, "Found manifest");
            return Discovery {
                root: current,
                manifest: Some(manifest),
            };
        }

        // Move up to parent directory
        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            // Reached filesystem root
            None => break,
        }
    }

    tracing::debug!(?start, "No manifest in any ancestor, using start directory");
    Discovery {
        root: start.to_path_buf(),
        manifest: None,
    }
}
