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

//! Benchmark harness.
//!
//! Runs workloads against engine versions and aggregates what they report.
//!
//! # Modules
//!
//! - `runner`: Single-pair execution with guaranteed teardown
//! - `session`: Sequential driver over every (test case, version) pair
//! - `aggregator`: Result collection, ranking, standings and matrix views

pub mod aggregator;
pub mod runner;
pub mod session;

pub use aggregator::{
    BenchmarkResult, Failure, Matrix, MatrixRow, RankEntry, ResultSet, Standing,
};
pub use runner::run_benchmark;
pub use session::{run_all, Progress, RunReport, Session, Silent};
