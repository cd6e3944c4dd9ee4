//! Shared filesystem utilities.

pub mod files;
pub mod paths;
pub mod temp;

pub use files::{copy_as, copy_into_dir, make_executable};
pub use paths::ensure_dir_exists;
pub use temp::{StagedInit, INIT_DIR_PREFIX};
