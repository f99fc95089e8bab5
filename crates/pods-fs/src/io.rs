//! Text reads that carry the offending path in their errors

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::{Error, Result};

/// Read text content from a file.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

/// Read text content from a file that may legitimately be missing.
///
/// Returns `Ok(None)` when the file does not exist. Any other failure
/// (permissions, invalid UTF-8, a directory in the way) is an error.
pub fn read_optional(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(?path, "File not found, treating as absent");
            Ok(None)
        }
        Err(e) => Err(Error::io(path, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn read_optional_returns_none_for_missing_file() {
        let temp = TempDir::new().unwrap();
        let result = read_optional(&temp.path().join("missing.yaml")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn read_optional_returns_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yaml");
        fs::write(&path, "verbose: true\n").unwrap();

        assert_eq!(read_optional(&path).unwrap().as_deref(), Some("verbose: true\n"));
    }

    #[test]
    fn read_text_reports_the_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nope");

        let err = read_text(&path).unwrap_err();
        assert_eq!(err.path(), path.as_path());
        assert!(err.to_string().contains("nope"));
    }

    #[test]
    fn read_optional_fails_on_directory() {
        let temp = TempDir::new().unwrap();
        assert!(read_optional(temp.path()).is_err());
    }
}
