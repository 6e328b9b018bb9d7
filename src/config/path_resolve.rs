// src/config/path_resolve.rs

use crate::errors::{Error, Result};
use std::path::PathBuf;

/// A validated root path for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedInput {
    /// The canonicalized absolute path.
    pub path: PathBuf,
    /// `true` if the root is a regular file rather than a directory.
    pub is_file: bool,
}

impl ResolvedInput {
    /// The directory relative paths are computed from: the root itself, or its
    /// parent when the root is a file.
    pub fn base_dir(&self) -> PathBuf {
        if self.is_file {
            self.path
                .parent()
                .map(PathBuf::from)
                .unwrap_or_else(|| self.path.clone())
        } else {
            self.path.clone()
        }
    }
}

/// Resolves the input path string to an absolute, canonicalized path.
///
/// # Errors
/// Returns `Error::InvalidTarget` if the path does not exist or is neither a
/// regular file nor a directory.
pub fn resolve_input(input_path_str: &str) -> Result<ResolvedInput> {
    let invalid = || Error::InvalidTarget {
        path: input_path_str.to_string(),
    };
    let path = PathBuf::from(input_path_str)
        .canonicalize()
        .map_err(|_| invalid())?;
    let metadata = path.metadata().map_err(|_| invalid())?;
    if metadata.is_file() {
        Ok(ResolvedInput {
            path,
            is_file: true,
        })
    } else if metadata.is_dir() {
        Ok(ResolvedInput {
            path,
            is_file: false,
        })
    } else {
        Err(invalid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_resolve_existing_dir() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let resolved = resolve_input(temp.path().to_str().unwrap())?;
        assert!(resolved.path.is_absolute());
        assert!(!resolved.is_file);
        assert_eq!(resolved.base_dir(), resolved.path);
        Ok(())
    }

    #[test]
    fn test_resolve_existing_file() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let file_path = temp.path().join("Button.tsx");
        fs::write(&file_path, "export {}")?;
        let resolved = resolve_input(file_path.to_str().unwrap())?;
        assert!(resolved.is_file);
        assert_eq!(resolved.base_dir(), temp.path().canonicalize()?);
        Ok(())
    }

    #[test]
    fn test_resolve_non_existent_path() {
        let result = resolve_input("non_existent_path_for_testing_tokenshift");
        assert!(matches!(result, Err(Error::InvalidTarget { path }) if path.contains("non_existent")));
    }
}
