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

//! Result aggregation, ranking and matrix views.
//!
//! Results are collected append-only, one per successful (version, test
//! case) pair. Failed pairs are never recorded, not even as zero, so every
//! derived figure is computed over completed pairs only.

use crate::core::config::Orientation;
use crate::core::measurement::Measurement;
use serde::{Deserialize, Serialize};

/// Outcome of one successful (version, test case) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkResult {
    /// Version label.
    pub version: String,
    /// Test case name.
    pub test_name: String,
    /// Timed loop duration in milliseconds.
    pub elapsed_ms: f64,
    /// Timed iterations.
    pub iterations: u64,
    /// `iterations / elapsed_ms * 1000`.
    pub ops_per_second: f64,
}

impl BenchmarkResult {
    /// Builds a result from a runner measurement.
    pub fn from_measurement(
        version: impl Into<String>,
        test_name: impl Into<String>,
        measurement: &Measurement,
    ) -> Self {
        Self {
            version: version.into(),
            test_name: test_name.into(),
            elapsed_ms: measurement.elapsed_ms(),
            iterations: measurement.iterations,
            ops_per_second: measurement.ops_per_second(),
        }
    }
}

/// A pair that did not produce a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Failure {
    /// Version label.
    pub version: String,
    /// Test case name.
    pub test_name: String,
    /// Underlying error message.
    pub message: String,
}

/// A version's position in the overall ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankEntry {
    /// Version label.
    pub version: String,
    /// Mean ops/s over completed test cases; `None` when none completed.
    pub mean_ops: Option<f64>,
    /// Number of completed test cases.
    pub completed: usize,
}

/// A version's result within one test case, relative to the slowest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    /// Version label.
    pub version: String,
    /// Measured ops/s.
    pub ops_per_second: f64,
    /// Multiple of the slowest version's ops/s (slowest is 1.0).
    pub speedup: f64,
}

/// One row of the detailed matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixRow {
    /// Row key: a version label or a test case name.
    pub label: String,
    /// Rounded ops/s per column; `None` for missing or failed pairs.
    pub cells: Vec<Option<u64>>,
    /// Sum of the completed cells; `None` when the row has none.
    pub total: Option<u64>,
}

/// Two-dimensional view of rounded ops/s.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matrix {
    /// Which axis the rows represent.
    #[serde(skip)]
    pub orientation: Orientation,
    /// Column keys.
    pub columns: Vec<String>,
    /// Rows in input order.
    pub rows: Vec<MatrixRow>,
}

/// Append-only collection of results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
    results: Vec<BenchmarkResult>,
}

impl ResultSet {
    /// Creates an empty result set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a result.
    pub fn push(&mut self, result: BenchmarkResult) {
        self.results.push(result);
    }

    /// Number of results.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether no results were recorded.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Results in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &BenchmarkResult> {
        self.results.iter()
    }

    /// The result for one pair, if it completed.
    pub fn get(&self, version: &str, test_name: &str) -> Option<&BenchmarkResult> {
        self.results
            .iter()
            .find(|r| r.version == version && r.test_name == test_name)
    }

    /// Results for one test case in insertion order.
    pub fn for_test<'a>(
        &'a self,
        test_name: &'a str,
    ) -> impl Iterator<Item = &'a BenchmarkResult> {
        self.results.iter().filter(move |r| r.test_name == test_name)
    }

    /// Results for one version in insertion order.
    pub fn for_version<'a>(
        &'a self,
        version: &'a str,
    ) -> impl Iterator<Item = &'a BenchmarkResult> {
        self.results.iter().filter(move |r| r.version == version)
    }

    /// Highest ops/s for a test case. Ties go to the first recorded result.
    pub fn best_for_test(&self, test_name: &str) -> Option<&BenchmarkResult> {
        let candidates = self.results.iter().filter(|r| r.test_name == test_name);
        candidates.fold(None, |best, r| match best {
            Some(b) if b.ops_per_second >= r.ops_per_second => Some(b),
            _ => Some(r),
        })
    }

    /// Arithmetic mean of ops/s over the version's completed test cases.
    ///
    /// Returns `None` when the version completed nothing.
    pub fn version_mean(&self, version: &str) -> Option<f64> {
        let (sum, count) = self
            .for_version(version)
            .fold((0.0, 0usize), |(sum, count), r| (sum + r.ops_per_second, count + 1));
        (count > 0).then(|| sum / count as f64)
    }

    /// Versions sorted by descending mean ops/s.
    ///
    /// The sort is stable: equal means keep the order of `versions`. Versions
    /// without a mean are ranked after every version with one.
    pub fn ranking(&self, versions: &[String]) -> Vec<RankEntry> {
        let mut entries: Vec<RankEntry> = versions
            .iter()
            .map(|v| RankEntry {
                version: v.clone(),
                mean_ops: self.version_mean(v),
                completed: self.for_version(v).count(),
            })
            .collect();

        entries.sort_by(|a, b| match (a.mean_ops, b.mean_ops) {
            (Some(a), Some(b)) => b.total_cmp(&a),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        });
        entries
    }

    /// A test case's results, fastest first, with speedup over the slowest.
    pub fn standings(&self, test_name: &str) -> Vec<Standing> {
        let mut results: Vec<&BenchmarkResult> = self.for_test(test_name).collect();
        results.sort_by(|a, b| b.ops_per_second.total_cmp(&a.ops_per_second));

        let baseline = match results.last() {
            Some(slowest) if slowest.ops_per_second > 0.0 => slowest.ops_per_second,
            _ => return Vec::new(),
        };

        results
            .into_iter()
            .map(|r| Standing {
                version: r.version.clone(),
                ops_per_second: r.ops_per_second,
                speedup: r.ops_per_second / baseline,
            })
            .collect()
    }

    /// Builds the detailed matrix over the given axes.
    pub fn matrix(
        &self,
        versions: &[String],
        tests: &[String],
        orientation: Orientation,
    ) -> Matrix {
        let (row_keys, column_keys) = match orientation {
            Orientation::VersionsAsRows => (versions, tests),
            Orientation::TestsAsRows => (tests, versions),
        };

        let rows = row_keys
            .iter()
            .map(|row| {
                let cells: Vec<Option<u64>> = column_keys
                    .iter()
                    .map(|column| {
                        let (version, test) = match orientation {
                            Orientation::VersionsAsRows => (row, column),
                            Orientation::TestsAsRows => (column, row),
                        };
                        self.get(version, test)
                            .map(|r| r.ops_per_second.round() as u64)
                    })
                    .collect();
                let total = cells
                    .iter()
                    .flatten()
                    .fold(None, |acc: Option<u64>, v| Some(acc.unwrap_or(0) + v));
                MatrixRow {
                    label: row.clone(),
                    cells,
                    total,
                }
            })
            .collect();

        Matrix {
            orientation,
            columns: column_keys.to_vec(),
            rows,
        }
    }
}
