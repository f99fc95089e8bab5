//! [`TestProject`] builder for pods test scenarios.

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A temporary directory holding a project tree and a separate sources
/// (repos) directory, with helpers for test setup.
///
/// # Example
///
/// ```rust,no_run
/// use pods_test_utils::TestProject;
///
/// let project = TestProject::new();
/// project.write_podfile("platform :ios, '6.0'\npod 'JSONKit'\n");
/// let nested = project.mkdir("Sources/App");
/// project.write_settings("verbose: true\n");
/// assert!(nested.starts_with(project.root()));
/// ```
pub struct TestProject {
    temp_dir: TempDir,
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProject {
    /// Create an empty temporary project with an empty `repos/` directory
    /// next to the `project/` directory.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("project")).unwrap();
        fs::create_dir_all(temp_dir.path().join("repos")).unwrap();
        Self { temp_dir }
    }

    /// Project root directory.
    pub fn root(&self) -> PathBuf {
        self.temp_dir.path().join("project")
    }

    /// Sources directory to use as the repos directory in tests.
    pub fn repos_dir(&self) -> PathBuf {
        self.temp_dir.path().join("repos")
    }

    /// Create `relative` (and its parents) under the project root.
    pub fn mkdir(&self, relative: &str) -> PathBuf {
        let dir = self.root().join(relative);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    /// Write `content` to `relative` under the project root, creating parent
    /// directories as needed.
    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    /// Write a `Podfile` at the project root.
    pub fn write_podfile(&self, content: &str) -> PathBuf {
        self.write_file("Podfile", content)
    }

    /// Write a `Podfile.lock` at the project root.
    pub fn write_lockfile(&self, content: &str) -> PathBuf {
        self.write_file("Podfile.lock", content)
    }

    /// Write the user settings file `config.yaml` into the repos directory.
    pub fn write_settings(&self, content: &str) -> PathBuf {
        let path = self.repos_dir().join("config.yaml");
        fs::write(&path, content).unwrap();
        path
    }
}
