//! File copy helpers with path-carrying errors.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use crate::error::{PrepareError, Result};

/// Copy `src` into `dir`, keeping its file name.
///
/// Returns the destination path.
pub fn copy_into_dir(src: &Path, dir: &Path) -> Result<PathBuf> {
    let name = src.file_name().ok_or_else(|| PrepareError::Io {
        action: "copy",
        path: src.to_path_buf(),
        source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "path has no file name"),
    })?;
    let dest = dir.join(name);
    copy_as(src, &dest)?;
    Ok(dest)
}

/// Copy `src` to the exact path `dest`.
pub fn copy_as(src: &Path, dest: &Path) -> Result<()> {
    fs::copy(src, dest).map_err(PrepareError::io("copy", src))?;
    Ok(())
}

/// Set the mode of `path` to 0755, whatever it was before.
pub fn make_executable(path: &Path) -> Result<()> {
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
        .map_err(PrepareError::io("set permissions on", path))
}
