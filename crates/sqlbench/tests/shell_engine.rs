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

//! Shell engine against a real `sqlite3` binary.
//!
//! Every test returns early when `sqlite3` is not on PATH.

use sqlbench::core::VersionedEngine;
use sqlbench::engine::ShellEngine;
use sqlbench::harness::{run_all, Silent};
use sqlbench::{test_cases, Engine, EngineError, Value};
use std::process::Command;

fn sqlite3() -> Option<ShellEngine> {
    let found = Command::new("sqlite3")
        .arg("-version")
        .output()
        .map(|out| out.status.success())
        .unwrap_or(false);
    if !found {
        eprintln!("sqlite3 not on PATH, skipping");
    }
    found.then(|| ShellEngine::new("sqlite3"))
}

#[test]
fn every_catalog_case_completes() {
    let Some(engine) = sqlite3() else { return };
    let mut engines = vec![VersionedEngine::new("sqlite3", "system", Box::new(engine))];
    let cases = test_cases();

    let report = run_all(&mut engines, &cases, 2, &mut Silent);

    assert!(report.failures.is_empty(), "failures: {:?}", report.failures);
    assert_eq!(report.results.len(), cases.len());
}

#[test]
fn rows_and_parameters_round_trip() {
    let Some(mut engine) = sqlite3() else { return };
    engine
        .execute("CREATE TABLE t (id INT, name TEXT)", &[])
        .unwrap();
    engine
        .execute("INSERT INTO t VALUES (?, ?)", &[Value::from(1_i64), Value::from("O'Brien")])
        .unwrap();

    let rows = engine.execute("SELECT id, name FROM t", &[]).unwrap();
    assert_eq!(rows, vec![vec![Value::from("1"), Value::from("O'Brien")]]);
    assert!(!engine.server_version().unwrap().is_empty());
}

#[test]
fn failure_reports_stderr_then_respawns_fresh() {
    let Some(mut engine) = sqlite3() else { return };
    engine.execute("CREATE TABLE kept (a INT)", &[]).unwrap();

    match engine.execute("SELECT * FROM nope", &[]).unwrap_err() {
        EngineError::Statement { message } => assert!(message.contains("no such table: nope")),
        other => panic!("expected a statement error, got {:?}", other),
    }

    // The restarted shell has an empty in-memory database.
    let err = engine.execute("SELECT * FROM kept", &[]).unwrap_err();
    assert!(err.to_string().contains("no such table: kept"));
    assert_eq!(engine.execute("SELECT 1", &[]).unwrap(), vec![vec![Value::from("1")]]);
}
