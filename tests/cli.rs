//! Exit-code contract of the `boxpack` binary.
//!
//! Serial so no stub script is still open for writing while another test spawns.

#![cfg(unix)]

mod common;

use assert_cmd::Command;
use common::{Workspace, compiler_stub, packer_stub};
use predicates::prelude::*;
use serial_test::serial;
use std::path::Path;

fn boxpack(ws: &Workspace, path_dir: &Path) -> Command {
    let path = match std::env::var_os("PATH") {
        Some(existing) => {
            let mut dirs = vec![path_dir.to_path_buf()];
            dirs.extend(std::env::split_paths(&existing));
            std::env::join_paths(dirs).unwrap()
        }
        None => path_dir.as_os_str().to_os_string(),
    };

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("boxpack"));
    cmd.env("PATH", path)
        .env_remove("ProgramFiles")
        .env_remove("ProgramFiles(x86)")
        .env_remove("BOXPACK_ROOT")
        .env_remove("BOXPACK_PACKER_DIR")
        .arg("--root")
        .arg(ws.root())
        .arg("--packer-dir")
        .arg(ws.tools());
    cmd
}

#[test]
#[serial]
fn success_exits_zero_and_reports_artifacts() {
    let ws = Workspace::new();
    let bin = tempfile::tempdir().unwrap();
    compiler_stub(bin.path(), 0);
    packer_stub(&ws.tools().join("enigmavbconsole.exe"), &ws.packer_log(), 0);

    boxpack(&ws, bin.path())
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Hotkeys_boxed.exe"))
        .stdout(predicate::str::contains("SHA256"));

    assert!(ws.artifact().is_file());
    assert!(ws.boxed_artifact().is_file());
}

#[test]
#[serial]
fn build_failure_code_becomes_process_exit_code() {
    let ws = Workspace::new();
    let bin = tempfile::tempdir().unwrap();
    compiler_stub(bin.path(), 2);
    packer_stub(&ws.tools().join("enigmavbconsole.exe"), &ws.packer_log(), 0);

    boxpack(&ws, bin.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("compile error"))
        .stderr(predicate::str::contains("build stage failed with exit code 2"));

    assert!(ws.packer_calls().is_empty());
}

#[test]
#[serial]
fn missing_packer_exits_one_with_diagnostic() {
    let ws = Workspace::new();
    let bin = tempfile::tempdir().unwrap();
    compiler_stub(bin.path(), 0);

    boxpack(&ws, bin.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "package stage failed with exit code 1: packer console not found",
        ));
}

#[test]
#[serial]
fn invalid_root_is_rejected() {
    let ws = Workspace::new();
    let bin = tempfile::tempdir().unwrap();

    Command::new(assert_cmd::cargo::cargo_bin!("boxpack"))
        .env_remove("BOXPACK_ROOT")
        .arg("--root")
        .arg(ws.root().join("nope"))
        .arg("--packer-dir")
        .arg(bin.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid arguments"));
}
