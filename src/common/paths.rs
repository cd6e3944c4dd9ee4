//! Utilities for directory management.

use std::fs;
use std::path::Path;

use crate::error::{PrepareError, Result};

/// Ensure a directory exists, creating parents as needed.
///
/// Does not fail if the directory already exists.
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if path.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(path).map_err(PrepareError::io("create directory", path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_ensure_dir_exists_creates_parents_and_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let deep = tmp.path().join("a/b/c");
        ensure_dir_exists(&deep).unwrap();
        assert!(deep.is_dir());
        ensure_dir_exists(&deep).unwrap();
    }

    #[test]
    fn test_ensure_dir_exists_over_file_fails() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("file");
        fs::write(&file, "").unwrap();
        let err = ensure_dir_exists(&file.join("sub")).unwrap_err();
        assert!(err.to_string().starts_with("failed to create directory"), "{}", err);
    }
}
