//! View of the build host filesystem.

use std::path::{Path, PathBuf};

/// Marker file present when running inside a privileged docker container.
pub const PRIVILEGED_MARKER: &str = "/.dockerenv.privileged";

/// Host filesystem rooted at `root`.
///
/// Absolute host paths (QEMU binaries, static helpers, the container marker)
/// are resolved below `root`. The real host uses `/`.
#[derive(Debug, Clone)]
pub struct HostEnv {
    root: PathBuf,
}

impl Default for HostEnv {
    fn default() -> Self {
        Self::new("/")
    }
}

impl HostEnv {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve an absolute host path below the root.
    pub fn resolve(&self, host_path: &str) -> PathBuf {
        self.root.join(host_path.trim_start_matches('/'))
    }

    /// Whether `host_path` exists on the host.
    pub fn exists(&self, host_path: &str) -> bool {
        self.resolve(host_path).exists()
    }

    /// Detect a privileged container via its marker file.
    pub fn is_privileged_container(&self) -> bool {
        self.resolve(PRIVILEGED_MARKER).is_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_default_root() {
        let host = HostEnv::default();
        assert_eq!(host.resolve("/usr/bin/qemu-binfmt"), PathBuf::from("/usr/bin/qemu-binfmt"));
    }

    #[test]
    fn test_resolve_below_custom_root() {
        let host = HostEnv::new("/srv/host");
        assert_eq!(
            host.resolve("/usr/bin/qemu-arm"),
            PathBuf::from("/srv/host/usr/bin/qemu-arm")
        );
    }

    #[test]
    fn test_privileged_marker_detection() {
        let tmp = TempDir::new().unwrap();
        let host = HostEnv::new(tmp.path());
        assert!(!host.is_privileged_container());

        fs::write(tmp.path().join(".dockerenv.privileged"), "").unwrap();
        assert!(host.is_privileged_container());
    }

    #[test]
    fn test_marker_directory_is_not_a_marker() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join(".dockerenv.privileged")).unwrap();
        assert!(!HostEnv::new(tmp.path()).is_privileged_container());
    }
}
