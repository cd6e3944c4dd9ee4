//! Manual pages shown by the `help` command.

use std::io::{self, Write};
use thiserror::Error;

/// Topic of the crossprepare manual.
pub const CROSSPREPARE_TOPIC: &str = "system::crossprepare";

const CROSSPREPARE_MANUAL: &str = "\
usage: crossprepare prepare --target-arch=<arch> --init=<name> --target-dir=<directory>
           [--allow-existing-root] [--host-arch=<arch>]
       crossprepare preflight --target-arch=<arch> [--strict]
       crossprepare help

commands:
    prepare
        prepare an image root tree for a cross architecture build process
    preflight
        check the host for the QEMU binfmt binaries and static helpers
    help
        show this manual

options:
    --target-arch=<arch>
        name of image target architecture. The 32-bit ARM variants
        armv6l, armv6hl, armv7l and armv7hl all use the qemu-arm emulator.
    --init=<name>
        path to the init program. The init program is a host architecture
        compatible binary used as PID 1 in the QEMU binfmt setup from which
        binaries of the image architecture can be called. It implements a
        custom initialization procedure; it is copied to a private
        temporary directory, made executable and called without arguments.
    --target-dir=<directory>
        path to store the build results. A new root directory is initialized
        at <directory>/build/image-root/, the same place a subsequent image
        build expects it, so <directory> can be passed on to that build.
    --allow-existing-root
        allow to use an existing root directory from an earlier
        preparation attempt.
    --host-arch=<arch>
        architecture of the build host, used for the emul/<host>-for-<arch>
        helper directory. Detected at runtime by default.
";

#[derive(Debug, Error)]
pub enum HelpError {
    #[error("no manual for topic '{0}'")]
    UnknownHelpTopic(String),
    #[error("failed to write manual: {0}")]
    Io(#[from] io::Error),
}

/// Look up the manual text for `topic`.
pub fn manual(topic: &str) -> Option<&'static str> {
    match topic {
        CROSSPREPARE_TOPIC => Some(CROSSPREPARE_MANUAL),
        _ => None,
    }
}

/// Write the manual for `topic` to `out`.
pub fn show(topic: &str, out: &mut impl Write) -> Result<(), HelpError> {
    let text = manual(topic).ok_or_else(|| HelpError::UnknownHelpTopic(topic.to_string()))?;
    out.write_all(text.as_bytes())?;
    Ok(())
}
