//! crossprepare - cross architecture image root preparation.
//!
//! Stages the QEMU binfmt emulators for an image architecture into
//! `<target_dir>/build/image-root` and calls a host-side init program that
//! finishes the environment setup. The resulting target dir can be handed to
//! a regular image build.

pub mod arch;
pub mod commands;
pub mod common;
pub mod config;
pub mod error;
pub mod help;
pub mod host;
pub mod layout;
pub mod preflight;
pub mod prepare;
pub mod process;
pub mod report;

pub use error::PrepareError;
pub use prepare::{CrossPrepare, InitOutcome, PreparationRequest, PrepareSummary};
