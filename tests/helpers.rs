//! Shared test utilities for crossprepare tests.

#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crossprepare::host::HostEnv;

/// Test environment with a fake host root and a work area.
pub struct TestEnv {
    /// Temporary directory (kept alive for lifetime of TestEnv)
    pub _temp_dir: TempDir,
    /// Fake host filesystem root (source of QEMU binaries)
    pub host_root: PathBuf,
    /// Scratch area holding the init binary
    pub work: PathBuf,
    /// Target dir passed to the preparation (not created)
    pub target_dir: PathBuf,
}

impl TestEnv {
    /// Create a new test environment with temporary directories.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let base = temp_dir.path();

        let host_root = base.join("host");
        let work = base.join("work");
        let target_dir = base.join("out");

        fs::create_dir_all(&host_root).expect("Failed to create host root");
        fs::create_dir_all(&work).expect("Failed to create work dir");

        Self {
            _temp_dir: temp_dir,
            host_root,
            work,
            target_dir,
        }
    }

    pub fn host(&self) -> HostEnv {
        HostEnv::new(&self.host_root)
    }

    /// Path of `host_path` inside the fake host.
    pub fn host_path(&self, host_path: &str) -> PathBuf {
        self.host_root.join(host_path.trim_start_matches('/'))
    }

    /// Install QEMU binfmt binaries for `qemu_arch` on the fake host.
    pub fn install_qemu(&self, qemu_arch: &str) {
        for name in [
            "qemu-binfmt".to_string(),
            format!("qemu-{}-binfmt", qemu_arch),
            format!("qemu-{}", qemu_arch),
        ] {
            create_mock_binary(&self.host_path(&format!("/usr/bin/{}", name)));
        }
    }

    /// Install a file at an absolute host path on the fake host.
    pub fn install(&self, host_path: &str) {
        create_mock_binary(&self.host_path(host_path));
    }

    /// Mark the fake host as a privileged container.
    pub fn mark_privileged(&self) {
        fs::write(self.host_path("/.dockerenv.privileged"), "").expect("Failed to write marker");
    }

    /// Write an init program into the work area with the given mode.
    pub fn write_init(&self, name: &str, script: &str, mode: u32) -> PathBuf {
        let path = self.work.join(name);
        fs::write(&path, script).expect("Failed to write init");
        fs::set_permissions(&path, fs::Permissions::from_mode(mode)).expect("Failed to chmod init");
        path
    }

    /// `<target_dir>/build/image-root`
    pub fn image_root(&self) -> PathBuf {
        self.target_dir.join("build/image-root")
    }
}

/// Create a mock executable file whose content is its own path.
pub fn create_mock_binary(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent dir for binary");
    }
    fs::write(path, path.to_string_lossy().as_bytes()).expect("Failed to create mock binary");
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).expect("Failed to set permissions");
}

/// Assert that a file contains expected content.
pub fn assert_file_contains(path: &Path, expected: &str) {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read file {}: {}", path.display(), e));
    assert!(
        content.contains(expected),
        "File {} does not contain expected content.\nExpected to find: {}\nActual content: {}",
        path.display(),
        expected,
        content
    );
}

/// Assert that a file exists.
pub fn assert_file_exists(path: &Path) {
    assert!(path.is_file(), "Expected file to exist: {}", path.display());
}

/// Assert that a directory exists.
pub fn assert_dir_exists(path: &Path) {
    assert!(path.is_dir(), "Expected directory to exist: {}", path.display());
}

/// List a directory's entry names, sorted.
pub fn dir_entries(path: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(path)
        .unwrap_or_else(|e| panic!("Failed to read dir {}: {}", path.display(), e))
        .map(|e| e.expect("dir entry").file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
