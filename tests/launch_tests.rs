//! Runs a real init program through the system launcher.
//!
//! Kept in its own test binary: no other test here spawns processes while
//! the staged init is written.

mod helpers;

use helpers::TestEnv;
use std::fs;

use crossprepare::process::SystemLauncher;
use crossprepare::report::RecordingReporter;
use crossprepare::{CrossPrepare, InitOutcome, PreparationRequest};

#[test]
fn test_init_runs_once_without_arguments() {
    let env = TestEnv::new();
    env.install_qemu("aarch64");
    let marker = env.work.join("init-ran");
    let init = env.write_init(
        "init",
        &format!("#!/bin/sh\necho \"args=$#\" >> '{}'\nexit 5\n", marker.display()),
        0o644,
    );

    let reporter = RecordingReporter::new();
    let summary = CrossPrepare::new(env.host(), &reporter, &SystemLauncher)
        .execute(&PreparationRequest::new("aarch64", &init, &env.target_dir))
        .expect("preparation should succeed");

    assert_eq!(fs::read_to_string(&marker).unwrap(), "args=0\n");
    assert_eq!(summary.init, InitOutcome::Launched { exit_code: Some(5) });
}
