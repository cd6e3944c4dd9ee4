//! Architecture naming for QEMU binfmt emulation.
//!
//! QEMU ships a single `arm` user-mode emulator for all 32-bit ARM variants,
//! so the image architecture has to be normalized before the emulator
//! binaries can be looked up on the host.

/// Image architectures served by the `qemu-arm` emulator.
pub const ARM_ARCHS: &[&str] = &["armv6l", "armv6hl", "armv7l", "armv7hl"];

/// Directory holding the host QEMU binaries.
pub const QEMU_BIN_DIR: &str = "/usr/bin";

/// Map an image target architecture to the QEMU emulator name.
pub fn qemu_arch(target_arch: &str) -> &str {
    if ARM_ARCHS.contains(&target_arch) {
        "arm"
    } else {
        target_arch
    }
}

/// QEMU binaries required on the host for `qemu_arch`, in copy order.
///
/// Paths are absolute host paths; callers resolve them against the host root.
pub fn qemu_binaries(qemu_arch: &str) -> Vec<String> {
    vec![
        format!("{}/qemu-binfmt", QEMU_BIN_DIR),
        format!("{}/qemu-{}-binfmt", QEMU_BIN_DIR, qemu_arch),
        format!("{}/qemu-{}", QEMU_BIN_DIR, qemu_arch),
    ]
}

/// Architecture of the machine this binary runs on.
pub fn host_arch() -> &'static str {
    std::env::consts::ARCH
}
