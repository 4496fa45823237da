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

//! Engines driven through an external `sqlite3`-compatible shell.
//!
//! Each historical release is a separately built shell binary. The process
//! runs in batch mode against an in-memory database; statements go in on
//! stdin, rows come back on stdout one per line, and a sentinel `SELECT`
//! marks the end of each result. With `-bail` a failing statement makes the
//! shell exit, and whatever it wrote to stderr becomes the error message.
//! stderr goes to an anonymous temp file so the shell never blocks on it.

use super::{inline_params, Engine, Rows, Value};
use crate::error::EngineError;
use std::fs::File;
use std::io::{BufRead, BufReader, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};
use tracing::debug;

const END_OF_RESULT: &str = "__sqlbench_end_of_result__";
const FIELD_SEPARATOR: &str = "\u{1f}";

/// Default arguments passed before any user supplied ones.
const BASE_ARGS: &[&str] = &["-batch", "-bail", "-noheader", "-list"];

struct ShellProcess {
    child: Child,
    stdin: ChildStdin,
    stdout: BufReader<ChildStdout>,
    stderr: File,
}

impl Drop for ShellProcess {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

/// Engine handle for one shell binary.
///
/// The process is spawned on first use, so constructing a handle never
/// fails; a broken binary surfaces on the first `execute`. After a failed
/// statement the process has exited and the next `execute` starts a fresh
/// one with an empty database.
///
/// Rows are read line by line in list mode, so every value comes back as
/// [`Value::Text`] and a text value containing a newline is split across two
/// rows. The harness discards run results, so only row counts of
/// newline-free data are reliable.
pub struct ShellEngine {
    program: PathBuf,
    args: Vec<String>,
    process: Option<ShellProcess>,
}

impl ShellEngine {
    /// Creates a handle for `program` without starting it.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            process: None,
        }
    }

    /// Adds extra arguments placed before the database name.
    pub fn with_args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Path of the shell binary.
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Runs `SELECT sqlite_version()` and returns the reported version.
    pub fn server_version(&mut self) -> Result<String, EngineError> {
        let rows = self.execute("SELECT sqlite_version()", &[])?;
        rows.into_iter()
            .next()
            .and_then(|row| row.into_iter().next())
            .map(|v| v.to_string())
            .ok_or_else(|| self.process_error("no version reported"))
    }

    fn process_error(&self, message: impl Into<String>) -> EngineError {
        EngineError::Process {
            program: self.program.clone(),
            message: message.into(),
        }
    }

    fn spawn(&self) -> Result<ShellProcess, EngineError> {
        debug!(program = %self.program.display(), "starting engine shell");
        let stderr = tempfile::tempfile().map_err(|e| self.process_error(e.to_string()))?;
        let child_stderr = stderr
            .try_clone()
            .map_err(|e| self.process_error(e.to_string()))?;
        let mut child = Command::new(&self.program)
            .args(BASE_ARGS)
            .args(["-separator", FIELD_SEPARATOR])
            .args(&self.args)
            .arg(":memory:")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::from(child_stderr))
            .spawn()
            .map_err(|e| self.process_error(e.to_string()))?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| self.process_error("stdin not captured"))?;
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| self.process_error("stdout not captured"))?;

        Ok(ShellProcess {
            child,
            stdin,
            stdout: BufReader::new(stdout),
            stderr,
        })
    }

    /// Collects the exit diagnostics of a process that stopped mid-statement.
    fn reap(&self, mut process: ShellProcess) -> EngineError {
        let status = process.child.wait();
        let mut stderr = String::new();
        if process.stderr.seek(SeekFrom::Start(0)).is_ok() {
            let _ = process.stderr.read_to_string(&mut stderr);
        }
        let stderr = stderr.trim();
        if !stderr.is_empty() {
            return EngineError::statement(stderr);
        }
        match status {
            Ok(status) => self.process_error(format!("exited with {}", status)),
            Err(e) => self.process_error(e.to_string()),
        }
    }
}

impl Engine for ShellEngine {
    fn execute(&mut self, sql: &str, params: &[Value]) -> Result<Rows, EngineError> {
        let statement = inline_params(sql, params)?;
        let mut process = match self.process.take() {
            Some(process) => process,
            None => self.spawn()?,
        };

        let script = format!("{}\n;\nSELECT '{}';\n", statement.trim(), END_OF_RESULT);
        if process
            .stdin
            .write_all(script.as_bytes())
            .and_then(|_| process.stdin.flush())
            .is_err()
        {
            return Err(self.reap(process));
        }

        let mut rows = Rows::new();
        let mut line = String::new();
        loop {
            line.clear();
            match process.stdout.read_line(&mut line) {
                Ok(0) | Err(_) => return Err(self.reap(process)),
                Ok(_) => {}
            }
            let text = line.trim_end_matches(['\n', '\r']);
            if text == END_OF_RESULT {
                break;
            }
            rows.push(
                text.split(FIELD_SEPARATOR)
                    .map(|field| Value::Text(field.to_string()))
                    .collect(),
            );
        }

        self.process = Some(process);
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_binary_fails_lazily() {
        let mut engine = ShellEngine::new("/nonexistent/sqlite3-0.0.0");
        assert_eq!(engine.program(), Path::new("/nonexistent/sqlite3-0.0.0"));

        let err = engine.execute("SELECT 1", &[]).unwrap_err();
        assert!(matches!(err, EngineError::Process { .. }));
    }

    #[test]
    fn test_parameter_mismatch_is_reported_before_spawning() {
        let mut engine = ShellEngine::new("/nonexistent/sqlite3");
        let err = engine.execute("SELECT ?", &[]).unwrap_err();
        assert!(matches!(err, EngineError::ParameterMismatch { .. }));
    }

    #[test]
    fn test_with_args_appends() {
        let engine = ShellEngine::new("sqlite3").with_args(["-cmd", ".timer off"]);
        assert_eq!(engine.args, vec!["-cmd".to_string(), ".timer off".to_string()]);
    }
    #[cfg(unix)]
    mod scripted {
        use super::super::fake::write_shell;
        use super::*;
        use std::fs;
        use tempfile::TempDir;

        fn starts(program: &Path) -> usize {
            let log = format!("{}.starts", program.display());
            fs::read_to_string(log).map(|s| s.lines().count()).unwrap_or(0)
        }

        #[test]
        fn test_rows_end_at_sentinel() {
            let dir = TempDir::new().unwrap();
            let mut engine = ShellEngine::new(write_shell(dir.path()));

            let rows = engine.execute("SELECT pairs", &[]).unwrap();
            assert_eq!(
                rows,
                vec![
                    vec![Value::from("a"), Value::from("1")],
                    vec![Value::from("b"), Value::from("2")],
                ]
            );
            assert!(engine.execute("CREATE TABLE t (a INT)", &[]).unwrap().is_empty());
            assert_eq!(starts(engine.program()), 1);
        }

        #[test]
        fn test_failed_statement_reports_stderr_and_respawns() {
            let dir = TempDir::new().unwrap();
            let mut engine = ShellEngine::new(write_shell(dir.path()));
            engine.execute("SELECT pairs", &[]).unwrap();

            let err = engine.execute("SELECT boom", &[]).unwrap_err();
            match err {
                EngineError::Statement { message } => {
                    assert_eq!(message, "Parse error near line 1: no such table: boom");
                }
                other => panic!("expected a statement error, got {:?}", other),
            }

            assert_eq!(engine.execute("SELECT pairs", &[]).unwrap().len(), 2);
            assert_eq!(starts(engine.program()), 2);
        }

        #[test]
        fn test_version_query_reports_version() {
            let dir = TempDir::new().unwrap();
            let mut engine = ShellEngine::new(write_shell(dir.path()));
            assert_eq!(engine.server_version().unwrap(), "3.99.0");
        }

        #[test]
        fn test_noisy_stderr_does_not_block() {
            let dir = TempDir::new().unwrap();
            let mut engine = ShellEngine::new(write_shell(dir.path()));

            assert!(engine.execute("SELECT warnings", &[]).unwrap().is_empty());
            assert_eq!(engine.execute("SELECT pairs", &[]).unwrap().len(), 2);
        }
    }
}
