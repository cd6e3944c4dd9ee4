//! Show commands - display configuration and the manual.

use anyhow::{Context, Result};
use std::io::Write;

use crate::config::Config;
use crate::help;

/// Print the effective configuration.
pub fn cmd_config(config: &Config) -> Result<()> {
    config.print();
    Ok(())
}

/// Write the crossprepare manual to `out`. No filesystem action is taken.
pub fn cmd_help(out: &mut impl Write) -> Result<()> {
    help::show(help::CROSSPREPARE_TOPIC, out).context("Failed to show manual")
}
