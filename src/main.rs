//! crossprepare - prepare an image root tree for a cross architecture build.
//!
//! The init program passed with `--init` is called as the last step. It is
//! a host architecture binary that runs as PID 1 of the QEMU binfmt
//! environment and is trusted to do the rest of the setup.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crossprepare::commands::{self, PrepareArgs};
use crossprepare::config::Config;

#[derive(Parser)]
#[command(name = "crossprepare", version)]
#[command(about = "Prepare an image root tree for a cross architecture build")]
#[command(disable_help_subcommand = true)]
#[command(
    after_help = "QUICK START:\n  crossprepare preflight --target-arch aarch64\n  crossprepare prepare --target-arch aarch64 --init ./init --target-dir ./out\n  crossprepare help"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Stage QEMU binaries into <target-dir>/build/image-root and call the init program
    Prepare {
        /// Name of the image target architecture
        #[arg(long)]
        target_arch: String,

        /// Path to the host architecture init program
        #[arg(long)]
        init: PathBuf,

        /// Directory to store the build results
        #[arg(long)]
        target_dir: PathBuf,

        /// Allow to use an existing root directory from an earlier attempt
        #[arg(long)]
        allow_existing_root: bool,

        /// Build host architecture (default: detected)
        #[arg(long)]
        host_arch: Option<String>,
    },

    /// Check the host for the binaries a preparation needs
    Preflight {
        /// Name of the image target architecture
        #[arg(long)]
        target_arch: String,

        /// Fail if any checks fail (exit code 1)
        #[arg(long)]
        strict: bool,
    },

    /// Show current configuration
    Config,

    /// Show the crossprepare manual
    Help,
}

fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    let _ = tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load .env if present
    dotenvy::dotenv().ok();
    let config = Config::load();
    init_logging(&config);

    match cli.command {
        Commands::Prepare {
            target_arch,
            init,
            target_dir,
            allow_existing_root,
            host_arch,
        } => commands::cmd_prepare(
            &config,
            PrepareArgs {
                target_arch,
                init,
                target_dir,
                allow_existing_root,
                host_arch,
            },
        ),
        Commands::Preflight {
            target_arch,
            strict,
        } => commands::cmd_preflight(&config, &target_arch, strict),
        Commands::Config => commands::cmd_config(&config),
        Commands::Help => commands::cmd_help(&mut std::io::stdout().lock()),
    }
}
