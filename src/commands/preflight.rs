//! Preflight command - runs preflight checks.

use anyhow::Result;

use crate::config::Config;
use crate::preflight;

/// Execute the preflight command.
pub fn cmd_preflight(config: &Config, target_arch: &str, strict: bool) -> Result<()> {
    let host = config.host();
    if strict {
        preflight::run_preflight_or_fail(&host, target_arch)?;
        println!("All preflight checks passed!");
    } else {
        let report = preflight::run_preflight(&host, target_arch);
        report.print();
        if !report.all_passed() {
            println!("Some checks failed. Use --strict to fail with a non-zero exit code.");
        }
    }
    Ok(())
}
