//! Dependency declarations in the `Name (requirement)` notation

use serde::Serialize;

/// A pod name with an optional version requirement.
///
/// Manifests and lockfiles write these as `JSONKit` or `JSONKit (~> 1.4)`.
/// In a lockfile's `PODS` section the parenthesised part is the exact
/// locked version.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Dependency {
    pub name: String,
    pub requirement: Option<String>,
}

impl Dependency {
    pub fn new(name: impl Into<String>, requirement: Option<String>) -> Self {
        Self {
            name: name.into(),
            requirement,
        }
    }

    /// Parse `Name` or `Name (requirement)`.
    ///
    /// Returns `None` for an empty name, a name containing whitespace, or an
    /// unbalanced parenthesis.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        let (name, requirement) = match input.split_once('(') {
            Some((name, rest)) => {
                let requirement = rest.strip_suffix(')')?.trim();
                if requirement.is_empty() || requirement.contains(['(', ')']) {
                    return None;
                }
                (name.trim(), Some(requirement.to_string()))
            }
            None if input.contains(')') => return None,
            None => (input, None),
        };

        if name.is_empty() || name.contains(char::is_whitespace) {
            return None;
        }

        Some(Self::new(name, requirement))
    }
}

impl std::fmt::Display for Dependency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.requirement {
            Some(ref requirement) => write!(f, "{} ({})", self.name, requirement),
            None => write!(f, "{}", self.name),
        }
    }
}
