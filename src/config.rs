//! Configuration management for crossprepare.
//!
//! Values come from the process environment. `main` loads a `.env` file via
//! dotenvy first, so real environment variables take precedence over it.
//! Command line flags override both.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::arch;
use crate::host::HostEnv;

/// Default log filter when neither `RUST_LOG` nor `CROSSPREPARE_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// crossprepare configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root under which host paths are looked up (default: /)
    pub host_root: PathBuf,
    /// Build host architecture (default: detected at runtime)
    pub host_arch: String,
    /// tracing filter directive (e.g., "debug", "crossprepare=trace")
    pub log_filter: String,
}

impl Config {
    /// Load configuration from the environment.
    pub fn load() -> Self {
        Self::from_vars(std::env::vars().collect())
    }

    /// Build configuration from an explicit variable map.
    pub fn from_vars(vars: HashMap<String, String>) -> Self {
        let non_empty = |key: &str| vars.get(key).map(|v| v.trim()).filter(|v| !v.is_empty());

        let host_root = non_empty("CROSSPREPARE_HOST_ROOT")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("/"));

        let host_arch = non_empty("CROSSPREPARE_HOST_ARCH")
            .unwrap_or(arch::host_arch())
            .to_string();

        let log_filter = non_empty("CROSSPREPARE_LOG")
            .unwrap_or(DEFAULT_LOG_FILTER)
            .to_string();

        Self {
            host_root,
            host_arch,
            log_filter,
        }
    }

    /// Host filesystem view for this configuration.
    pub fn host(&self) -> HostEnv {
        HostEnv::new(&self.host_root)
    }

    /// Print configuration for debugging.
    pub fn print(&self) {
        println!("Configuration:");
        println!("  CROSSPREPARE_HOST_ROOT: {}", self.host_root.display());
        println!("  CROSSPREPARE_HOST_ARCH: {}", self.host_arch);
        println!("  CROSSPREPARE_LOG: {}", self.log_filter);
    }
}
