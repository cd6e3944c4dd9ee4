//! CLI command handlers.
//!
//! Each submodule handles a specific CLI command:
//! - `prepare` - Stage the image root and call the init program
//! - `preflight` - Check host binaries
//! - `show` - Display configuration and the manual

mod preflight;
mod prepare;
mod show;

pub use preflight::cmd_preflight;
pub use prepare::{cmd_prepare, PrepareArgs};
pub use show::{cmd_config, cmd_help};
