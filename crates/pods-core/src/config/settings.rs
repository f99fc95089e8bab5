//! Boolean feature flags and the user settings file merge
//!
//! The settings file is a YAML mapping from flag name to value. Known flags
//! are applied to typed fields; everything else is kept aside untouched.

use std::collections::BTreeMap;
use std::path::Path;

use serde_yaml::{Mapping, Value};

use crate::{Error, Result};

/// A boolean flag that can be set from the settings file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flag {
    Verbose,
    Silent,
    SkipRepoUpdate,
    AggressiveCache,
    Clean,
    IntegrateTargets,
    NewVersionMessage,
}

impl Flag {
    pub const ALL: [Flag; 7] = [
        Self::Verbose,
        Self::Silent,
        Self::SkipRepoUpdate,
        Self::AggressiveCache,
        Self::Clean,
        Self::IntegrateTargets,
        Self::NewVersionMessage,
    ];

    /// Canonical snake_case key.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Verbose => "verbose",
            Self::Silent => "silent",
            Self::SkipRepoUpdate => "skip_repo_update",
            Self::AggressiveCache => "aggressive_cache",
            Self::Clean => "clean",
            Self::IntegrateTargets => "integrate_targets",
            Self::NewVersionMessage => "new_version_message",
        }
    }

    /// camelCase spelling, also accepted in the settings file.
    pub fn camel_key(&self) -> &'static str {
        match self {
            Self::Verbose => "verbose",
            Self::Silent => "silent",
            Self::SkipRepoUpdate => "skipRepoUpdate",
            Self::AggressiveCache => "aggressiveCache",
            Self::Clean => "clean",
            Self::IntegrateTargets => "integrateTargets",
            Self::NewVersionMessage => "newVersionMessage",
        }
    }

    /// Look up a flag by either spelling of its key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|flag| flag.key() == key || flag.camel_key() == key)
    }
}

impl std::fmt::Display for Flag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Stored flag values.
///
/// These are the raw values; [`Config`](super::Config) derives the effective
/// `verbose` and `aggressive_cache` from them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub verbose: bool,
    pub silent: bool,
    pub skip_repo_update: bool,
    /// Only forces the cache on; `CP_AGGRESSIVE_CACHE` can still enable it.
    pub aggressive_cache: bool,
    pub clean: bool,
    pub integrate_targets: bool,
    pub new_version_message: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            verbose: false,
            silent: false,
            skip_repo_update: false,
            aggressive_cache: false,
            clean: true,
            integrate_targets: true,
            new_version_message: true,
        }
    }
}

impl Settings {
    /// Store `value` for `flag`.
    pub fn set(&mut self, flag: Flag, value: bool) {
        match flag {
            Flag::Verbose => self.verbose = value,
            Flag::Silent => self.silent = value,
            Flag::SkipRepoUpdate => self.skip_repo_update = value,
            Flag::AggressiveCache => self.aggressive_cache = value,
            Flag::Clean => self.clean = value,
            Flag::IntegrateTargets => self.integrate_targets = value,
            Flag::NewVersionMessage => self.new_version_message = value,
        }
    }

    /// Stored value for `flag`.
    pub fn get(&self, flag: Flag) -> bool {
        match flag {
            Flag::Verbose => self.verbose,
            Flag::Silent => self.silent,
            Flag::SkipRepoUpdate => self.skip_repo_update,
            Flag::AggressiveCache => self.aggressive_cache,
            Flag::Clean => self.clean,
            Flag::IntegrateTargets => self.integrate_targets,
            Flag::NewVersionMessage => self.new_version_message,
        }
    }

    /// Apply the entries of a settings mapping.
    ///
    /// Keys naming a flag with a boolean value are applied. Every other
    /// entry (an unknown key, a known key with a non-boolean value, a
    /// non-string key) is returned untouched and logged, and has no effect.
    pub fn merge(&mut self, overrides: &Mapping) -> BTreeMap<String, Value> {
        let mut ignored = BTreeMap::new();

        for (key, value) in overrides {
            let Some(name) = key.as_str() else {
                tracing::warn!(?key, "Ignoring settings entry with a non-string key");
                continue;
            };

            match (Flag::from_key(name), value.as_bool()) {
                (Some(flag), Some(enabled)) => {
                    tracing::debug!(%flag, enabled, "Applying user setting");
                    self.set(flag, enabled);
                }
                (Some(flag), None) => {
                    tracing::warn!(%flag, ?value, "Ignoring non-boolean value for setting");
                    ignored.insert(name.to_string(), value.clone());
                }
                (None, _) => {
                    tracing::warn!(key = name, "Ignoring unknown setting");
                    ignored.insert(name.to_string(), value.clone());
                }
            }
        }

        ignored
    }
}

/// Parse the content of a settings file.
///
/// An empty document is an empty mapping. Anything other than a mapping is
/// a parse error.
pub fn parse_settings(path: &Path, content: &str) -> Result<Mapping> {
    let document: Value = serde_yaml::from_str(content).map_err(|e| Error::SettingsParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    match document {
        Value::Null => Ok(Mapping::new()),
        Value::Mapping(mapping) => Ok(mapping),
        other => Err(Error::SettingsParse {
            path: path.to_path_buf(),
            message: format!("expected a mapping, found {}", describe(&other)),
        }),
    }
}

/// Read and parse the settings file at `path`; `None` if it does not exist.
pub fn read_settings(path: &Path) -> Result<Option<Mapping>> {
    match pods_fs::read_optional(path)? {
        Some(content) => {
            tracing::debug!(?path, "Loading user settings");
            parse_settings(path, &content).map(Some)
        }
        None => {
            tracing::debug!(?path, "No user settings found, skipping");
            Ok(None)
        }
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(yaml: &str) -> Mapping {
        parse_settings(Path::new("config.yaml"), yaml).unwrap()
    }

    #[test]
    fn defaults() {
        let settings = Settings::default();
        assert!(!settings.verbose);
        assert!(!settings.silent);
        assert!(!settings.skip_repo_update);
        assert!(!settings.aggressive_cache);
        assert!(settings.clean);
        assert!(settings.integrate_targets);
        assert!(settings.new_version_message);
    }

    #[test]
    fn flag_keys_round_trip() {
        for flag in Flag::ALL {
            assert_eq!(Flag::from_key(flag.key()), Some(flag));
            assert_eq!(Flag::from_key(flag.camel_key()), Some(flag));
        }
        assert_eq!(Flag::from_key("Verbose"), None);
    }

    #[test]
    fn merge_applies_both_spellings() {
        let mut settings = Settings::default();
        let ignored = settings.merge(&mapping("skip_repo_update: true\nintegrateTargets: false\n"));

        assert!(ignored.is_empty());
        assert!(settings.skip_repo_update);
        assert!(!settings.integrate_targets);
    }

    #[test]
    fn merge_keeps_unknown_and_mistyped_entries() {
        let mut settings = Settings::default();
        let ignored = settings.merge(&mapping("colour: blue\nclean: \"no\"\nverbose: true\n"));

        assert!(settings.verbose);
        assert!(settings.clean);
        assert_eq!(ignored.len(), 2);
        assert_eq!(ignored["colour"], Value::from("blue"));
        assert_eq!(ignored["clean"], Value::from("no"));
    }

    #[test]
    fn merge_sets_aggressive_cache() {
        let mut settings = Settings::default();
        settings.merge(&mapping("aggressiveCache: true\n"));
        assert!(settings.get(Flag::AggressiveCache));
    }

    #[test]
    fn empty_document_is_empty_mapping() {
        assert!(mapping("").is_empty());
        assert!(mapping("# only a comment\n").is_empty());
    }

    #[test]
    fn non_mapping_document_is_rejected() {
        let err = parse_settings(Path::new("config.yaml"), "- verbose\n").unwrap_err();
        assert!(matches!(err, Error::SettingsParse { .. }));
        assert!(err.to_string().contains("a sequence"));
    }

    #[test]
    fn malformed_yaml_is_rejected() {
        let err = parse_settings(Path::new("config.yaml"), "verbose: [true\n").unwrap_err();
        assert!(err.is_parse_error());
    }
}
