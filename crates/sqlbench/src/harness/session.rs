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

//! Sequential driver over every (test case, version) pair.

use super::aggregator::{BenchmarkResult, Failure, ResultSet};
use super::runner::run_benchmark;
use crate::catalog::TestCase;
use crate::core::registry::VersionedEngine;
use serde::Serialize;
use tracing::{debug, warn};

/// Observer notified as a session advances.
///
/// Every method defaults to a no-op.
pub trait Progress {
    /// A test case is about to run against every version.
    fn on_test_start(&mut self, _case: &TestCase) {}
    /// A pair completed.
    fn on_result(&mut self, _result: &BenchmarkResult) {}
    /// A pair failed and was left out of the results.
    fn on_failure(&mut self, _failure: &Failure) {}
    /// Every version has been attempted for a test case.
    fn on_test_complete(&mut self, _case: &TestCase, _results: &ResultSet) {}
}

/// Progress observer that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl Progress for Silent {}

/// Everything a session produced.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunReport {
    /// Version labels in registry order.
    pub versions: Vec<String>,
    /// Test case names in catalog order.
    pub tests: Vec<String>,
    /// Completed pairs.
    pub results: ResultSet,
    /// Pairs that failed.
    pub failures: Vec<Failure>,
}

/// Benchmark session over a fixed set of engines and test cases.
pub struct Session<'a> {
    engines: &'a mut [VersionedEngine],
    cases: &'a [TestCase],
    cycles: u64,
}

impl<'a> Session<'a> {
    /// Creates a session running `cycles` timed iterations per pair.
    pub fn new(engines: &'a mut [VersionedEngine], cases: &'a [TestCase], cycles: u64) -> Self {
        Self {
            engines,
            cases,
            cycles,
        }
    }

    /// Runs every pair, one at a time.
    ///
    /// A failing pair is recorded as a [`Failure`] and the session moves on;
    /// nothing here aborts the run.
    pub fn run(self, progress: &mut dyn Progress) -> RunReport {
        let mut report = RunReport {
            versions: self.engines.iter().map(|e| e.version.clone()).collect(),
            tests: self.cases.iter().map(|c| c.name.to_string()).collect(),
            ..RunReport::default()
        };

        for case in self.cases {
            progress.on_test_start(case);

            for entry in self.engines.iter_mut() {
                debug!(test = case.name, version = %entry.version, "running pair");
                match run_benchmark(entry.engine.as_mut(), case, self.cycles) {
                    Ok(measurement) => {
                        let result = BenchmarkResult::from_measurement(
                            &entry.version,
                            case.name,
                            &measurement,
                        );
                        progress.on_result(&result);
                        report.results.push(result);
                    }
                    Err(e) => {
                        warn!(
                            test = case.name,
                            version = %entry.version,
                            error = %e,
                            "pair failed"
                        );
                        let failure = Failure {
                            version: entry.version.clone(),
                            test_name: case.name.to_string(),
                            message: e.to_string(),
                        };
                        progress.on_failure(&failure);
                        report.failures.push(failure);
                    }
                }
            }

            progress.on_test_complete(case, &report.results);
        }

        report
    }
}

/// Convenience wrapper around [`Session`].
pub fn run_all(
    engines: &mut [VersionedEngine],
    cases: &[TestCase],
    cycles: u64,
    progress: &mut dyn Progress,
) -> RunReport {
    Session::new(engines, cases, cycles).run(progress)
}
