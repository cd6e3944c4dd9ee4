//! Prepare command - stages the image root and calls the init program.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::config::Config;
use crate::prepare::{CrossPrepare, InitOutcome, PreparationRequest};
use crate::process::SystemLauncher;
use crate::report::TracingReporter;

/// Arguments of the prepare command.
#[derive(Debug, Clone)]
pub struct PrepareArgs {
    pub target_arch: String,
    pub init: PathBuf,
    pub target_dir: PathBuf,
    pub allow_existing_root: bool,
    /// Overrides `CROSSPREPARE_HOST_ARCH`.
    pub host_arch: Option<String>,
}

/// Execute the prepare command.
pub fn cmd_prepare(config: &Config, args: PrepareArgs) -> Result<()> {
    let host_arch = args.host_arch.unwrap_or_else(|| config.host_arch.clone());
    let request = PreparationRequest::new(args.target_arch, args.init, args.target_dir)
        .allow_existing_root(args.allow_existing_root)
        .host_arch(host_arch);

    let reporter = TracingReporter;
    let launcher = SystemLauncher;
    let summary = CrossPrepare::new(config.host(), &reporter, &launcher)
        .execute(&request)
        .with_context(|| {
            format!(
                "Cross preparation of '{}' failed",
                request.target_dir.display()
            )
        })?;

    println!("Image root: {}", summary.layout.root_dir().display());
    println!("  QEMU ({}): {} binaries", summary.qemu_arch, summary.qemu_binaries.len());
    println!("  Static helpers: {}", summary.helpers.len());
    match summary.init {
        InitOutcome::Launched { exit_code: Some(code) } => println!("  Init: exited with code {}", code),
        InitOutcome::Launched { exit_code: None } => println!("  Init: terminated by signal"),
        InitOutcome::SkippedPrivileged => println!("  Init: skipped (privileged container)"),
    }
    Ok(())
}
