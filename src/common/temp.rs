//! Scoped temporary directory for the init binary.

use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::files::{copy_into_dir, make_executable};
use crate::error::{PrepareError, Result};

/// Prefix of the temporary directory holding the init binary.
pub const INIT_DIR_PREFIX: &str = "initvm_";

/// An executable copy of the init binary in a private temporary directory.
///
/// The directory is removed when this value is dropped.
pub struct StagedInit {
    dir: TempDir,
    binary: PathBuf,
}

impl StagedInit {
    /// Copy `init` into a fresh `initvm_*` directory and make it 0755.
    pub fn stage(init: &Path) -> Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix(INIT_DIR_PREFIX)
            .tempdir()
            .map_err(PrepareError::io("create temporary directory for", init))?;
        let binary = copy_into_dir(init, dir.path())?;
        make_executable(&binary)?;
        Ok(Self { dir, binary })
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }
}
