// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The sauna-rs Authors

//! Workspace-level integration tests: the six literal end-to-end scenarios
//! from spec.md §8 are covered as unit/integration tests in the crates
//! that own the relevant logic (`sauna-scheduler`, `sauna-wire`,
//! `sauna-store`, `sauna-consumers`). This file instead exercises the
//! compiled `sauna` binary across crate boundaries, the way the teacher's
//! own root-level `specs` test exercises its compiled binary.

use std::io::Write;

use assert_cmd::Command;

fn sauna() -> Command {
    Command::cargo_bin("sauna").expect("sauna binary built")
}

fn write_config(dir: &tempfile::TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("sauna.yml");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

const MINIMAL_CONFIG: &str = r#"
hostname: test-host
plugins:
  dummy:
    checks:
      - type: dummy
        name: always_ok
      - type: dummy
        name: always_warn
        status: 1
        output: "degraded"
consumers:
  - type: Stdout
"#;

#[test]
fn sample_writes_a_starter_configuration() {
    let dir = tempfile::tempdir().unwrap();
    sauna().arg("sample").current_dir(dir.path()).assert().success();
    assert!(dir.path().join("sauna-sample.yml").exists());
}

#[test]
fn list_available_checks_enumerates_every_built_in_plugin() {
    let assert = sauna().arg("list-available-checks").assert().success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(output.contains("dummy.dummy"));
    assert!(output.contains("load.load1"));
    assert!(output.contains("memory.used_percent"));
    assert!(output.contains("disk.used_percent"));
    assert!(output.contains("process.running"));
}

#[test]
fn list_available_consumers_enumerates_every_built_in_consumer() {
    let assert = sauna().arg("list-available-consumers").assert().success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(output.contains("Stdout (queued)"));
    assert!(output.contains("NSCA (queued)"));
    assert!(output.contains("HTTPServer (pull)"));
    assert!(output.contains("TCPServer (pull)"));
}

#[test]
fn list_active_checks_reports_the_resolved_checks_sorted_by_name() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(&dir, MINIMAL_CONFIG);

    let assert = sauna().arg("--config").arg(&config).arg("list-active-checks").assert().success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines, vec!["always_ok every 120s", "always_warn every 120s"]);
}

#[test]
fn status_runs_every_check_once_and_prints_sorted_rows() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(&dir, MINIMAL_CONFIG);

    let assert = sauna().arg("--config").arg(&config).arg("status").assert().success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines, vec!["always_ok OK OK", "always_warn WARNING degraded"]);
}

#[test]
fn missing_configuration_file_is_a_clean_error_exit() {
    sauna().arg("--config").arg("/nonexistent/sauna.yml").arg("status").assert().failure().code(1);
}

#[test]
fn unknown_plugin_name_is_a_clean_error_exit() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(&dir, "plugins:\n  not-a-real-plugin:\n    checks: []\n");

    sauna().arg("--config").arg(&config).arg("status").assert().failure().code(1);
}
