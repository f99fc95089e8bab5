//! Project manifest parsing
//!
//! A manifest declares the platform and the pods a project depends on. Two
//! formats are recognized, chosen by file name:
//!
//! - `CocoaPods.podfile.yaml` is a YAML mapping:
//!
//!   ```yaml
//!   platform:
//!     name: ios
//!     deployment_target: "6.0"
//!   dependencies:
//!     - JSONKit (~> 1.4)
//!     - Reachability
//!   ```
//!
//! - `CocoaPods.podfile` and `Podfile` use the line-oriented DSL:
//!
//!   ```text
//!   platform :ios, '6.0'
//!   pod 'JSONKit', '~> 1.4'
//!   pod 'Reachability'
//!   ```
//!
//! Only `platform` and `pod` statements are interpreted; other statements
//! (targets, hooks, blocks) are skipped.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::dependency::Dependency;
use crate::{Error, Result};

static POD_STATEMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^pod\s*\(?\s*['"]([^'"]+)['"]\s*(?:,\s*['"]([^'"]+)['"])?\s*(?:,.*)?\)?$"#)
        .expect("Invalid pod statement regex")
});

/// The version may be positional or passed as an option, e.g.
/// `platform :ios, :deployment_target => '6.0'`.
static PLATFORM_STATEMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^platform\s*\(?\s*:(\w+)\s*(?:,\s*['"]([^'"]+)['"])?\s*(,\s*:?\w+\s*(?:=>|:).*)?\)?$"#,
    )
    .expect("Invalid platform statement regex")
});

static DEPLOYMENT_TARGET_OPTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?::deployment_target\s*=>|\bdeployment_target:)\s*['"]([^'"]+)['"]"#)
        .expect("Invalid deployment target regex")
});

/// On-disk format of a manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ManifestFormat {
    Yaml,
    Dsl,
}

impl ManifestFormat {
    /// `.yaml`/`.yml` files are YAML, everything else is the DSL.
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml" | "yml") => Self::Yaml,
            _ => Self::Dsl,
        }
    }
}

/// Target platform and optional minimum OS version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Platform {
    pub name: String,
    #[serde(default)]
    pub deployment_target: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum YamlPlatform {
    Name(String),
    Detailed(Platform),
}

#[derive(Debug, Default, Deserialize)]
struct YamlManifest {
    #[serde(default)]
    platform: Option<YamlPlatform>,
    #[serde(default)]
    dependencies: Vec<String>,
}

/// A parsed project manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Manifest {
    path: PathBuf,
    format: ManifestFormat,
    platform: Option<Platform>,
    dependencies: Vec<Dependency>,
}

impl Manifest {
    /// Read and parse the manifest at `path`.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = pods_fs::read_text(path)?;
        Self::parse(path, &content)
    }

    /// Parse manifest `content`; `path` selects the format and is recorded
    /// for error messages.
    pub fn parse(path: &Path, content: &str) -> Result<Self> {
        match ManifestFormat::for_path(path) {
            ManifestFormat::Yaml => Self::parse_yaml(path, content),
            ManifestFormat::Dsl => Self::parse_dsl(path, content),
        }
    }

    fn parse_yaml(path: &Path, content: &str) -> Result<Self> {
        let raw: YamlManifest = if content.trim().is_empty() {
            YamlManifest::default()
        } else {
            serde_yaml::from_str(content).map_err(|e| Error::manifest(path, e.to_string()))?
        };

        let platform = raw.platform.map(|platform| match platform {
            YamlPlatform::Name(name) => Platform {
                name,
                deployment_target: None,
            },
            YamlPlatform::Detailed(platform) => platform,
        });

        let dependencies = raw
            .dependencies
            .iter()
            .map(|entry| {
                Dependency::parse(entry)
                    .ok_or_else(|| Error::manifest(path, format!("invalid dependency `{entry}`")))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            path: path.to_path_buf(),
            format: ManifestFormat::Yaml,
            platform,
            dependencies,
        })
    }

    fn parse_dsl(path: &Path, content: &str) -> Result<Self> {
        let mut platform = None;
        let mut dependencies = Vec::new();

        for (index, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let line_no = index + 1;

            if is_statement(line, "pod") {
                let caps = POD_STATEMENT.captures(line).ok_or_else(|| {
                    Error::manifest(path, format!("line {line_no}: malformed pod statement"))
                })?;
                dependencies.push(Dependency::new(
                    &caps[1],
                    caps.get(2).map(|m| m.as_str().to_string()),
                ));
            } else if is_statement(line, "platform") {
                let caps = PLATFORM_STATEMENT.captures(line).ok_or_else(|| {
                    Error::manifest(path, format!("line {line_no}: malformed platform statement"))
                })?;
                platform = Some(Platform {
                    name: caps[1].to_string(),
                    deployment_target: caps
                        .get(2)
                        .or_else(|| {
                            caps.get(3)
                                .and_then(|options| DEPLOYMENT_TARGET_OPTION.captures(options.as_str()))
                                .and_then(|option| option.get(1))
                        })
                        .map(|m| m.as_str().to_string()),
                });
            } else {
                tracing::trace!(line_no, "Skipping manifest statement");
            }
        }

        Ok(Self {
            path: path.to_path_buf(),
            format: ManifestFormat::Dsl,
            platform,
            dependencies,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> ManifestFormat {
        self.format
    }

    pub fn platform(&self) -> Option<&Platform> {
        self.platform.as_ref()
    }

    pub fn dependencies(&self) -> &[Dependency] {
        &self.dependencies
    }

    /// Look up a declared dependency by pod name.
    pub fn dependency(&self, name: &str) -> Option<&Dependency> {
        self.dependencies.iter().find(|d| d.name == name)
    }
}

/// Whether `line` starts with the keyword `word` as a whole word.
fn is_statement(line: &str, word: &str) -> bool {
    line.strip_prefix(word)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with([' ', '\t', '(']))
}
