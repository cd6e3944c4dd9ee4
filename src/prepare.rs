//! Cross architecture preparation of an image root.
//!
//! Stages QEMU binfmt emulators (plus optional static helpers) into
//! `<target_dir>/build/image-root` and hands control to a caller-supplied
//! init program. The init program is trusted to do the rest of the setup;
//! it runs on the host and becomes PID 1 of the emulated environment.
//!
//! Steps run in a fixed order and the first failure aborts. Nothing already
//! created under the target dir is rolled back.

use std::path::{Path, PathBuf};

use crate::arch;
use crate::common::{self, StagedInit};
use crate::error::{PrepareError, Result};
use crate::host::HostEnv;
use crate::layout::{StagingLayout, STATIC_HELPERS};
use crate::process::InitLauncher;
use crate::report::Reporter;

/// Input of one preparation.
#[derive(Debug, Clone)]
pub struct PreparationRequest {
    /// Image architecture, e.g. `aarch64` or `armv7l`.
    pub target_arch: String,
    /// Host-executable init program.
    pub init_binary: PathBuf,
    /// Directory receiving `build/image-root`.
    pub target_dir: PathBuf,
    /// Reuse a target dir left behind by an earlier attempt.
    pub allow_existing_root: bool,
    /// Build host architecture. Detected at runtime when `None`.
    pub host_arch: Option<String>,
}

impl PreparationRequest {
    pub fn new(
        target_arch: impl Into<String>,
        init_binary: impl Into<PathBuf>,
        target_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            target_arch: target_arch.into(),
            init_binary: init_binary.into(),
            target_dir: target_dir.into(),
            allow_existing_root: false,
            host_arch: None,
        }
    }

    pub fn allow_existing_root(mut self, allow: bool) -> Self {
        self.allow_existing_root = allow;
        self
    }

    pub fn host_arch(mut self, host_arch: impl Into<String>) -> Self {
        self.host_arch = Some(host_arch.into());
        self
    }

    fn resolved_host_arch(&self) -> &str {
        self.host_arch.as_deref().unwrap_or(arch::host_arch())
    }
}

/// What happened to the init program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    /// Init ran; exit code is `None` when killed by a signal.
    Launched { exit_code: Option<i32> },
    /// Privileged container detected right before launch.
    SkippedPrivileged,
}

/// Result of a successful preparation.
#[derive(Debug, Clone)]
pub struct PrepareSummary {
    pub layout: StagingLayout,
    pub qemu_arch: String,
    /// Destination paths of the copied QEMU binaries.
    pub qemu_binaries: Vec<PathBuf>,
    /// Destination paths of the copied static helpers.
    pub helpers: Vec<PathBuf>,
    pub init: InitOutcome,
}

/// The preparation operation with its collaborators.
pub struct CrossPrepare<'a> {
    host: HostEnv,
    reporter: &'a dyn Reporter,
    launcher: &'a dyn InitLauncher,
}

impl<'a> CrossPrepare<'a> {
    pub fn new(host: HostEnv, reporter: &'a dyn Reporter, launcher: &'a dyn InitLauncher) -> Self {
        Self {
            host,
            reporter,
            launcher,
        }
    }

    /// Run the whole preparation.
    pub fn execute(&self, request: &PreparationRequest) -> Result<PrepareSummary> {
        self.check_preconditions(request)?;

        // Held until return; dropping it removes the temporary directory.
        let staged = StagedInit::stage(&request.init_binary)?;

        let qemu_arch = arch::qemu_arch(&request.target_arch).to_string();
        let layout = StagingLayout::new(&request.target_dir);

        common::ensure_dir_exists(&layout.bin_dir())?;
        common::ensure_dir_exists(&layout.image_dir())?;

        let qemu_binaries = self.stage_qemu_binaries(&layout, &qemu_arch)?;
        let helpers = self.stage_static_helpers(&layout, request.resolved_host_arch(), &qemu_arch)?;

        let init = self.launch_init(staged.binary())?;

        Ok(PrepareSummary {
            layout,
            qemu_arch,
            qemu_binaries,
            helpers,
            init,
        })
    }

    fn check_preconditions(&self, request: &PreparationRequest) -> Result<()> {
        if self.host.is_privileged_container() {
            return Err(PrepareError::UnsupportedEnvironment);
        }

        if request.target_arch.trim().is_empty() {
            return Err(PrepareError::InvalidTargetArch);
        }

        if !request.init_binary.is_file() {
            return Err(PrepareError::InitBinaryNotFound {
                path: request.init_binary.clone(),
            });
        }

        if request.target_dir.exists() && !request.allow_existing_root {
            return Err(PrepareError::TargetDirExists {
                path: request.target_dir.clone(),
            });
        }

        Ok(())
    }

    fn stage_qemu_binaries(&self, layout: &StagingLayout, qemu_arch: &str) -> Result<Vec<PathBuf>> {
        let bin_dir = layout.bin_dir();
        self.reporter
            .info(&format!("Copying QEMU binaries to: '{}'", bin_dir.display()));

        let mut staged = Vec::new();
        for qemu_binary in arch::qemu_binaries(qemu_arch) {
            if !self.host.exists(&qemu_binary) {
                return Err(PrepareError::QemuBinaryNotFound { path: qemu_binary });
            }
            self.reporter.info(&format!("--> {}", qemu_binary));
            staged.push(common::copy_into_dir(&self.host.resolve(&qemu_binary), &bin_dir)?);
        }
        Ok(staged)
    }

    fn stage_static_helpers(
        &self,
        layout: &StagingLayout,
        host_arch: &str,
        qemu_arch: &str,
    ) -> Result<Vec<PathBuf>> {
        let mut staged = Vec::new();
        for helper in STATIC_HELPERS {
            if !self.host.exists(helper.source) {
                continue;
            }
            let dest = layout.helper_target(host_arch, qemu_arch, helper);
            if let Some(parent) = dest.parent() {
                common::ensure_dir_exists(parent)?;
            }
            self.reporter
                .info(&format!("--> {} as {}", helper.source, dest.display()));
            common::copy_as(&self.host.resolve(helper.source), &dest)?;
            staged.push(dest);
        }
        Ok(staged)
    }

    fn launch_init(&self, init: &Path) -> Result<InitOutcome> {
        if self.host.is_privileged_container() {
            self.reporter.warn(
                "cross architecture setup is disabled in privileged docker. \
                 Ensure binfmt_misc handler got enabled external before",
            );
            return Ok(InitOutcome::SkippedPrivileged);
        }

        self.reporter
            .info(&format!("Calling init binary '{}'", init.display()));
        let status = self
            .launcher
            .launch(init)
            .map_err(|source| PrepareError::LaunchFailed {
                path: init.to_path_buf(),
                source,
            })?;

        if !status.success() {
            // Reported only; a failing init does not fail the preparation.
            self.reporter.warn(&format!(
                "init binary '{}' exited with {}",
                init.display(),
                status
            ));
        }

        Ok(InitOutcome::Launched {
            exit_code: status.code(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::RecordingLauncher;
    use crate::report::RecordingReporter;
    use std::fs;
    use tempfile::TempDir;

    fn host_with(files: &[&str]) -> TempDir {
        let host = TempDir::new().unwrap();
        for file in files {
            let path = host.path().join(file.trim_start_matches('/'));
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, file).unwrap();
        }
        host
    }

    #[test]
    fn test_empty_target_arch_is_rejected() {
        let host = host_with(&[]);
        let work = TempDir::new().unwrap();
        let init = work.path().join("init");
        fs::write(&init, "").unwrap();

        let reporter = RecordingReporter::new();
        let launcher = RecordingLauncher::new();
        let op = CrossPrepare::new(HostEnv::new(host.path()), &reporter, &launcher);
        let err = op
            .execute(&PreparationRequest::new(" ", &init, work.path().join("out")))
            .unwrap_err();

        assert!(matches!(err, PrepareError::InvalidTargetArch));
        assert!(!work.path().join("out").exists());
    }

    #[test]
    fn test_init_binary_directory_is_not_found() {
        let host = host_with(&[]);
        let work = TempDir::new().unwrap();

        let reporter = RecordingReporter::new();
        let launcher = RecordingLauncher::new();
        let op = CrossPrepare::new(HostEnv::new(host.path()), &reporter, &launcher);
        let err = op
            .execute(&PreparationRequest::new("x86_64", work.path(), work.path().join("out")))
            .unwrap_err();

        assert!(matches!(err, PrepareError::InitBinaryNotFound { .. }));
    }

    #[test]
    fn test_host_arch_override_wins() {
        let request = PreparationRequest::new("aarch64", "/init", "/out").host_arch("riscv64");
        assert_eq!(request.resolved_host_arch(), "riscv64");

        let request = PreparationRequest::new("aarch64", "/init", "/out");
        assert_eq!(request.resolved_host_arch(), arch::host_arch());
    }
}
