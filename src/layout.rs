//! Paths of the staged image root.
//!
//! The tree matches what a later `build` run expects under
//! `<target_dir>/build/image-root/`, so the same target dir can be reused.

use std::path::{Path, PathBuf};

/// A statically linked helper copied into the emulation side directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticHelper {
    /// Absolute host path of the static binary.
    pub source: &'static str,
    /// Subdirectory below `emul/<host>-for-<arch>/`.
    pub target_subdir: &'static str,
    /// File name inside the image.
    pub target_name: &'static str,
}

/// Helpers staged when present on the host. Missing ones are skipped.
pub const STATIC_HELPERS: &[StaticHelper] = &[
    StaticHelper {
        source: "/usr/sbin/mkfs.btrfs.static",
        target_subdir: "usr/sbin",
        target_name: "mkfs.btrfs",
    },
    StaticHelper {
        source: "/usr/bin/xz.static",
        target_subdir: "usr/bin",
        target_name: "xz",
    },
    StaticHelper {
        source: "/usr/bin/zstd.static",
        target_subdir: "usr/bin",
        target_name: "zstd",
    },
];

/// Directory layout below a target dir.
#[derive(Debug, Clone)]
pub struct StagingLayout {
    target_dir: PathBuf,
}

impl StagingLayout {
    pub fn new(target_dir: impl Into<PathBuf>) -> Self {
        Self {
            target_dir: target_dir.into(),
        }
    }

    pub fn target_dir(&self) -> &Path {
        &self.target_dir
    }

    /// `<target_dir>/build/image-root`
    pub fn root_dir(&self) -> PathBuf {
        self.target_dir.join("build/image-root")
    }

    /// Drop point for the QEMU binaries.
    pub fn bin_dir(&self) -> PathBuf {
        self.root_dir().join("usr/bin")
    }

    /// Empty placeholder the build step fills later.
    pub fn image_dir(&self) -> PathBuf {
        self.root_dir().join("image")
    }

    /// `emul/<host_arch>-for-<qemu_arch>`, the path the binfmt helper searches.
    pub fn emul_dir(&self, host_arch: &str, qemu_arch: &str) -> PathBuf {
        self.root_dir()
            .join("emul")
            .join(format!("{}-for-{}", host_arch, qemu_arch))
    }

    /// Destination file for a static helper.
    pub fn helper_target(&self, host_arch: &str, qemu_arch: &str, helper: &StaticHelper) -> PathBuf {
        self.emul_dir(host_arch, qemu_arch)
            .join(helper.target_subdir)
            .join(helper.target_name)
    }
}
