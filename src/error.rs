//! Error types for the cross preparation.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a cross preparation.
///
/// Every variant is fatal. Directories created before the failure are left
/// in place, so a retry needs `--allow-existing-root`.
#[derive(Debug, Error)]
pub enum PrepareError {
    /// Running inside a privileged container.
    #[error(
        "cross architecture setup is disabled in privileged container; \
         ensure the binfmt_misc handler got enabled externally before"
    )]
    UnsupportedEnvironment,

    #[error("target architecture must not be empty")]
    InvalidTargetArch,

    #[error("init binary '{}' not found", .path.display())]
    InitBinaryNotFound { path: PathBuf },

    #[error("image target dir '{}' already exists", .path.display())]
    TargetDirExists { path: PathBuf },

    /// A required host QEMU binary is missing. `path` is the host path.
    #[error("QEMU binary '{path}' not found")]
    QemuBinaryNotFound { path: String },

    /// Filesystem operation failed.
    #[error("failed to {action} '{}': {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The init binary could not be spawned.
    #[error("failed to execute init binary '{}': {source}", .path.display())]
    LaunchFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl PrepareError {
    /// Build a closure mapping an `io::Error` for use with `map_err`.
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Self {
        let path = path.into();
        move |source| PrepareError::Io { action, path, source }
    }
}

pub type Result<T> = std::result::Result<T, PrepareError>;
