//! Preflight checks for a cross preparation.
//!
//! Reports which host binaries a `prepare` run would need, without touching
//! the target dir. Run with `crossprepare preflight --target-arch <arch>`.

mod host_tools;
mod types;

use anyhow::{bail, Result};

use crate::host::HostEnv;

pub use types::{CheckResult, CheckStatus, PreflightReport};

/// Run all preflight checks for `target_arch`.
pub fn run_preflight(host: &HostEnv, target_arch: &str) -> PreflightReport {
    let mut checks = Vec::new();

    tracing::debug!("checking environment");
    checks.push(host_tools::check_environment(host));

    tracing::debug!("checking QEMU binaries for {}", target_arch);
    checks.extend(host_tools::check_qemu_binaries(host, target_arch));

    tracing::debug!("checking static helpers");
    checks.extend(host_tools::check_static_helpers(host));

    PreflightReport { checks }
}

/// Run preflight and bail if any checks fail.
pub fn run_preflight_or_fail(host: &HostEnv, target_arch: &str) -> Result<PreflightReport> {
    let report = run_preflight(host, target_arch);
    report.print();

    if !report.all_passed() {
        bail!(
            "Preflight failed: {} check(s) failed. Fix the issues above before preparing.",
            report.fail_count()
        );
    }

    Ok(report)
}
