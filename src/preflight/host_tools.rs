//! Host binary availability checks.

use crate::arch;
use crate::host::{HostEnv, PRIVILEGED_MARKER};
use crate::layout::STATIC_HELPERS;

use super::types::CheckResult;

/// Fail when running inside a privileged container.
pub fn check_environment(host: &HostEnv) -> CheckResult {
    if host.is_privileged_container() {
        CheckResult::fail(
            "container",
            &format!(
                "{} present - enable the binfmt_misc handler outside the container",
                PRIVILEGED_MARKER
            ),
        )
    } else {
        CheckResult::pass("container")
    }
}

/// Check every QEMU binary required for `target_arch`.
pub fn check_qemu_binaries(host: &HostEnv, target_arch: &str) -> Vec<CheckResult> {
    arch::qemu_binaries(arch::qemu_arch(target_arch))
        .iter()
        .map(|binary| {
            if host.exists(binary) {
                CheckResult::pass(binary)
            } else {
                CheckResult::fail(binary, "Not found. Install the qemu-linux-user package.")
            }
        })
        .collect()
}

/// Check the optional static helpers. Missing ones only warn.
pub fn check_static_helpers(host: &HostEnv) -> Vec<CheckResult> {
    STATIC_HELPERS
        .iter()
        .map(|helper| {
            if host.exists(helper.source) {
                CheckResult::pass(helper.source)
            } else {
                CheckResult::warn(
                    helper.source,
                    &format!("Not found - {} will not be staged", helper.target_name),
                )
            }
        })
        .collect()
}
