//! Constants and enums for pods project paths.

use std::path::Path;

/// Well-known file and directory names of a pods project and of the user's
/// sources directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PodPath {
    /// `CocoaPods.podfile.yaml`, the YAML manifest
    YamlManifest,
    /// `CocoaPods.podfile`, the DSL manifest under its long name
    DslManifest,
    /// `Podfile`, the DSL manifest under its short name
    Podfile,
    /// `Podfile.lock`
    Lockfile,
    /// `Pods`, the sandbox directory beside the manifest
    SandboxDir,
    /// `.cocoapods`, the default sources directory under the home directory
    ReposDir,
    /// `config.yaml`, the user settings file inside the sources directory
    UserSettings,
    /// `templates`, inside the sources directory
    TemplatesDir,
}

impl PodPath {
    /// Manifest names in lookup priority order. The first one present in a
    /// directory wins.
    pub const MANIFESTS: [PodPath; 3] = [Self::YamlManifest, Self::DslManifest, Self::Podfile];

    /// Get the string representation of the path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::YamlManifest => "CocoaPods.podfile.yaml",
            Self::DslManifest => "CocoaPods.podfile",
            Self::Podfile => "Podfile",
            Self::Lockfile => "Podfile.lock",
            Self::SandboxDir => "Pods",
            Self::ReposDir => ".cocoapods",
            Self::UserSettings => "config.yaml",
            Self::TemplatesDir => "templates",
        }
    }

    /// Whether this name is one of the recognized manifest names.
    pub fn is_manifest(&self) -> bool {
        Self::MANIFESTS.contains(self)
    }
}

impl AsRef<Path> for PodPath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for PodPath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for PodPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifests_are_in_priority_order() {
        let names: Vec<&str> = PodPath::MANIFESTS.iter().map(PodPath::as_str).collect();
        assert_eq!(names, ["CocoaPods.podfile.yaml", "CocoaPods.podfile", "Podfile"]);
    }

    #[test]
    fn only_manifest_names_are_manifests() {
        assert!(PodPath::Podfile.is_manifest());
        assert!(PodPath::YamlManifest.is_manifest());
        assert!(!PodPath::Lockfile.is_manifest());
        assert!(!PodPath::SandboxDir.is_manifest());
    }

    #[test]
    fn joins_as_a_path_segment() {
        let joined = Path::new("/project").join(PodPath::Lockfile);
        assert_eq!(joined, Path::new("/project/Podfile.lock"));
    }
}
