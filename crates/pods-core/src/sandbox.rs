//! On-disk area where resolved dependencies are materialized

use std::path::{Path, PathBuf};

/// Handle to the `Pods/` directory of a project.
///
/// Only knows its layout; creating and populating it is the installer's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sandbox {
    root: PathBuf,
}

impl Sandbox {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Public headers of all installed pods.
    pub fn headers_root(&self) -> PathBuf {
        self.root.join("Headers")
    }

    /// Generated project that builds the pods.
    pub fn project_path(&self) -> PathBuf {
        self.root.join("Pods.xcodeproj")
    }

    /// Directory a single pod is installed into.
    pub fn pod_dir(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    pub fn exists(&self) -> bool {
        self.root.is_dir()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn layout_is_relative_to_root() {
        let sandbox = Sandbox::new("/project/Pods");

        assert_eq!(sandbox.root(), Path::new("/project/Pods"));
        assert_eq!(sandbox.headers_root(), PathBuf::from("/project/Pods/Headers"));
        assert_eq!(sandbox.project_path(), PathBuf::from("/project/Pods/Pods.xcodeproj"));
        assert_eq!(sandbox.pod_dir("JSONKit"), PathBuf::from("/project/Pods/JSONKit"));
    }

    #[test]
    fn exists_only_once_created() {
        let temp = TempDir::new().unwrap();
        let sandbox = Sandbox::new(temp.path().join("Pods"));
        assert!(!sandbox.exists());

        std::fs::create_dir(sandbox.root()).unwrap();
        assert!(sandbox.exists());
    }
}
