//! Running external programs.
//!
//! The init binary is the only program started during a preparation. It runs
//! in the foreground with the caller's terminal attached, and nothing is
//! captured.

use std::ffi::OsString;
use std::io;
use std::os::unix::process::ExitStatusExt;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use std::sync::Mutex;

/// Builder for a foreground command.
pub struct Cmd {
    program: PathBuf,
    args: Vec<OsString>,
    current_dir: Option<PathBuf>,
}

impl Cmd {
    /// Create a new command builder.
    pub fn new(program: impl AsRef<Path>) -> Self {
        Self {
            program: program.as_ref().to_path_buf(),
            args: Vec::new(),
            current_dir: None,
        }
    }

    /// Add a single argument.
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Add multiple arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Set the working directory.
    pub fn dir(mut self, dir: &Path) -> Self {
        self.current_dir = Some(dir.to_path_buf());
        self
    }

    /// Run with inherited stdio and wait for completion.
    ///
    /// Only spawn failures are errors; the exit status is handed back as is.
    pub fn run_interactive(self) -> io::Result<ExitStatus> {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd.stdin(Stdio::inherit());
        cmd.stdout(Stdio::inherit());
        cmd.stderr(Stdio::inherit());

        if let Some(ref dir) = self.current_dir {
            cmd.current_dir(dir);
        }

        cmd.status()
    }
}

/// Starts the staged init binary.
pub trait InitLauncher {
    /// Run `init` without arguments and wait for it.
    fn launch(&self, init: &Path) -> io::Result<ExitStatus>;
}

/// Launcher spawning a real subprocess.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl InitLauncher for SystemLauncher {
    fn launch(&self, init: &Path) -> io::Result<ExitStatus> {
        Cmd::new(init).run_interactive()
    }
}

/// Launcher recording calls instead of spawning. Used by tests.
#[derive(Debug, Default)]
pub struct RecordingLauncher {
    exit_code: i32,
    calls: Mutex<Vec<PathBuf>>,
}

impl RecordingLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report `code` as the exit code of every launch.
    pub fn with_exit_code(code: i32) -> Self {
        Self {
            exit_code: code,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Paths launched so far, in order.
    pub fn calls(&self) -> Vec<PathBuf> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl InitLauncher for RecordingLauncher {
    fn launch(&self, init: &Path) -> io::Result<ExitStatus> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(init.to_path_buf());
        }
        // Wait status encoding: exit code lives in the second byte.
        Ok(ExitStatus::from_raw((self.exit_code & 0xff) << 8))
    }
}
