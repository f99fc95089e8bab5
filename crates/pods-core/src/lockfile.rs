//! `Podfile.lock` parsing
//!
//! The lockfile records the exact versions an install resolved:
//!
//! ```yaml
//! PODS:
//!   - JSONKit (1.4)
//!   - AFNetworking (1.0):
//!     - JSONKit (~> 1.4)
//! DEPENDENCIES:
//!   - AFNetworking
//! SPEC CHECKSUMS:
//!   JSONKit: 7a7fd8d0a5e8f0a1c2b3d4e5f60718293a4b5c6d
//! COCOAPODS: 0.16.0
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_yaml::Value;

use crate::dependency::Dependency;
use crate::{Error, Result};

#[derive(Debug, Default, Deserialize)]
struct RawLockfile {
    #[serde(rename = "PODS", default)]
    pods: Vec<Value>,
    #[serde(rename = "DEPENDENCIES", default)]
    dependencies: Vec<String>,
    #[serde(rename = "SPEC CHECKSUMS", default)]
    checksums: BTreeMap<String, Value>,
    #[serde(rename = "COCOAPODS", default)]
    cocoapods: Option<Value>,
}

/// A pod pinned by the lockfile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LockedPod {
    pub name: String,
    pub version: Option<String>,
    /// Dependencies of this pod, as declared by its spec.
    pub dependencies: Vec<Dependency>,
}

/// A parsed `Podfile.lock`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lockfile {
    path: PathBuf,
    pods: Vec<LockedPod>,
    dependencies: Vec<Dependency>,
    checksums: BTreeMap<String, String>,
    cocoapods_version: Option<String>,
}

impl Lockfile {
    /// Parse the lockfile at `path`, or return `None` if there is none.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        match pods_fs::read_optional(path)? {
            Some(content) => Self::parse(path, &content).map(Some),
            None => Ok(None),
        }
    }

    /// Read and parse the lockfile at `path`; a missing file is an error.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = pods_fs::read_text(path)?;
        Self::parse(path, &content)
    }

    /// Parse lockfile `content`; `path` is recorded for error messages.
    pub fn parse(path: &Path, content: &str) -> Result<Self> {
        let raw: RawLockfile = if content.trim().is_empty() {
            RawLockfile::default()
        } else {
            serde_yaml::from_str(content).map_err(|e| Error::lockfile(path, e.to_string()))?
        };

        let pods = raw
            .pods
            .iter()
            .map(|entry| locked_pod(path, entry))
            .collect::<Result<Vec<_>>>()?;

        let dependencies = raw
            .dependencies
            .iter()
            .map(|entry| parse_dependency(path, entry))
            .collect::<Result<Vec<_>>>()?;

        let checksums = raw
            .checksums
            .into_iter()
            .map(|(name, value)| {
                scalar(&value)
                    .map(|checksum| (name.clone(), checksum))
                    .ok_or_else(|| Error::lockfile(path, format!("invalid checksum for `{name}`")))
            })
            .collect::<Result<BTreeMap<_, _>>>()?;

        let cocoapods_version = match raw.cocoapods {
            Some(value) => Some(
                scalar(&value)
                    .ok_or_else(|| Error::lockfile(path, "COCOAPODS must be a version"))?,
            ),
            None => None,
        };

        Ok(Self {
            path: path.to_path_buf(),
            pods,
            dependencies,
            checksums,
            cocoapods_version,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn pods(&self) -> &[LockedPod] {
        &self.pods
    }

    pub fn pod_names(&self) -> Vec<&str> {
        self.pods.iter().map(|pod| pod.name.as_str()).collect()
    }

    /// Locked version of the pod `name`.
    pub fn version_of(&self, name: &str) -> Option<&str> {
        self.pods
            .iter()
            .find(|pod| pod.name == name)
            .and_then(|pod| pod.version.as_deref())
    }

    /// Dependencies as declared by the manifest at install time.
    pub fn dependencies(&self) -> &[Dependency] {
        &self.dependencies
    }

    pub fn checksum(&self, name: &str) -> Option<&str> {
        self.checksums.get(name).map(String::as_str)
    }

    /// Version of the tool that wrote the lockfile.
    pub fn cocoapods_version(&self) -> Option<&str> {
        self.cocoapods_version.as_deref()
    }
}

/// A `PODS` entry is either `"Name (version)"` or a single-key mapping
/// from that string to the pod's own dependencies.
fn locked_pod(path: &Path, entry: &Value) -> Result<LockedPod> {
    let (head, children): (&str, &[Value]) = match entry {
        Value::String(head) => (head.as_str(), &[]),
        Value::Mapping(mapping) if mapping.len() == 1 => {
            let Some((key, value)) = mapping.iter().next() else {
                return Err(Error::lockfile(path, "empty PODS entry"));
            };
            let head = key
                .as_str()
                .ok_or_else(|| Error::lockfile(path, "PODS entry key must be a string"))?;
            let children = value
                .as_sequence()
                .ok_or_else(|| Error::lockfile(path, format!("dependencies of `{head}` must be a list")))?;
            (head, children.as_slice())
        }
        _ => return Err(Error::lockfile(path, "PODS entries must be strings or single-key mappings")),
    };

    let pod = parse_dependency(path, head)?;
    let dependencies = children
        .iter()
        .map(|child| {
            child
                .as_str()
                .ok_or_else(|| Error::lockfile(path, format!("dependencies of `{head}` must be strings")))
                .and_then(|child| parse_dependency(path, child))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(LockedPod {
        name: pod.name,
        version: pod.requirement,
        dependencies,
    })
}

fn parse_dependency(path: &Path, entry: &str) -> Result<Dependency> {
    Dependency::parse(entry).ok_or_else(|| Error::lockfile(path, format!("invalid entry `{entry}`")))
}

/// Render a scalar as text; YAML reads `COCOAPODS: 0.16` as a number.
fn scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
