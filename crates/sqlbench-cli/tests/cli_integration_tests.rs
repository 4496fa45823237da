// Dweve SQLBench - Release-History SQL Engine Benchmarks
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::{tempdir, TempDir};

// Test helper to create a sqlbench command
fn sqlbench_cmd() -> Command {
    Command::cargo_bin("sqlbench").expect("Failed to find sqlbench binary")
}

// Test helper to write a versions manifest into a fresh directory
fn write_manifest(content: &str) -> (TempDir, std::path::PathBuf) {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("versions.json");
    fs::write(&path, content).expect("Failed to write manifest");
    (dir, path)
}

fn ndjson(stdout: &[u8]) -> Vec<Value> {
    String::from_utf8_lossy(stdout)
        .lines()
        .map(|line| serde_json::from_str(line).expect("each line is a JSON object"))
        .collect()
}

// ===== Help and Version Tests =====

#[test]
fn test_help_output() {
    sqlbench_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Compare SQL engine releases"))
        .stdout(predicate::str::contains("--cycles"))
        .stdout(predicate::str::contains("--edge"));
}

#[test]
fn test_version_output() {
    sqlbench_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("sqlbench"));
}

// ===== Argument Validation Tests =====

#[test]
fn test_zero_cycles_rejected() {
    sqlbench_cmd()
        .args(["--cycles", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--cycles"));
}

#[test]
fn test_unknown_format_rejected() {
    sqlbench_cmd()
        .args(["--format", "xml"])
        .assert()
        .failure();
}

#[test]
fn test_filter_without_match_fails() {
    sqlbench_cmd()
        .args(["--filter", "no such workload", "--cycles", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no test case matches"));
}

// ===== Run Tests =====

#[test]
fn test_text_report_for_bundled_engine() {
    sqlbench_cmd()
        .args(["--filter", "simple", "--cycles", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Simple SELECT (100 rows)"))
        .stdout(predicate::str::contains("✅"))
        .stdout(predicate::str::contains("| --- |"))
        .stdout(predicate::str::contains("Benchmark complete"));
}

#[test]
fn test_json_report_for_bundled_engine() {
    let output = sqlbench_cmd()
        .args(["--filter", "Simple", "--cycles", "1", "--format", "json"])
        .output()
        .expect("Failed to run sqlbench");
    assert!(output.status.success());

    let records = ndjson(&output.stdout);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["record"], "result");
    assert_eq!(records[0]["test_name"], "Simple SELECT (100 rows)");
    assert_eq!(records[0]["iterations"], 1);
    assert_eq!(records[1]["record"], "rank");
    assert_eq!(records[1]["rank"], 1);
}

#[test]
fn test_edge_not_built_is_reported_once_and_run_continues() {
    let dir = tempdir().expect("Failed to create temp dir");

    sqlbench_cmd()
        .args(["--filter", "simple", "--cycles", "1", "--edge", "--edge-dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Edge build: not built").count(1))
        .stdout(predicate::str::contains("Benchmark complete"))
        .stderr(predicate::str::contains("not built").not());
}

// ===== Manifest Tests =====

#[test]
fn test_missing_manifest_fails() {
    let dir = tempdir().expect("Failed to create temp dir");

    sqlbench_cmd()
        .arg("--versions")
        .arg(dir.path().join("absent.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("versions manifest"));
}

#[test]
fn test_duplicate_labels_rejected() {
    let (_dir, path) = write_manifest(
        r#"{"engines": [
            {"name": "a", "version": "3.0.0", "kind": "shell", "program": "sqlite3-a"},
            {"name": "b", "version": "3.0.0", "kind": "shell", "program": "sqlite3-b"}
        ]}"#,
    );

    sqlbench_cmd()
        .arg("--versions")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate version label"));
}

#[test]
fn test_broken_version_is_isolated() {
    let (_dir, path) = write_manifest(
        r#"{"engines": [
            {"name": "bundled", "kind": "bundled"},
            {"name": "ghost", "version": "99.0.0", "kind": "shell", "program": "missing-sqlite3"}
        ]}"#,
    );

    let output = sqlbench_cmd()
        .args(["--filter", "Simple", "--cycles", "1", "--format", "json", "--versions"])
        .arg(&path)
        .output()
        .expect("Failed to run sqlbench");
    assert!(output.status.success());

    let records = ndjson(&output.stdout);
    let kinds: Vec<&str> = records.iter().filter_map(|r| r["record"].as_str()).collect();
    assert_eq!(kinds, vec!["result", "failure", "rank", "rank"]);
    assert_eq!(records[1]["version"], "99.0.0");
    assert_eq!(records[3]["version"], "99.0.0");
    assert!(records[3]["mean_ops"].is_null());
}
