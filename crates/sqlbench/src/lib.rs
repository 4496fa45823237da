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

//! SQLBench
//!
//! Comparative throughput benchmarks across releases of an embedded SQL
//! engine.
//!
//! ## Features
//!
//! - **Dataset generators**: Deterministic users and orders
//! - **Engine boundary**: One `execute` capability, backed by the bundled
//!   SQLite library or an external shell binary per release
//! - **Version registry**: Releases described as data in a JSON manifest,
//!   plus an optional bleeding-edge build
//! - **Harness**: Warm-up plus timed loop per (test case, version) pair,
//!   failures isolated per pair
//! - **Reporters**: Console, Markdown matrix and NDJSON
//!
//! ## Usage
//!
//! ```no_run
//! use sqlbench::{catalog, core::Registry, harness, reporters};
//!
//! let mut engines = Registry::bundled()?.into_engines();
//! let cases = catalog::test_cases();
//! let report = harness::run_all(&mut engines, &cases, 10, &mut reporters::ConsoleProgress);
//! reporters::print_report(&report, Default::default());
//! # Ok::<(), sqlbench::BenchError>(())
//! ```

pub mod catalog;
pub mod core;
pub mod datasets;
pub mod engine;
pub mod error;
pub mod harness;
pub mod reporters;

// Re-export key types for convenience
pub use catalog::{filter_cases, test_cases, TestCase};
pub use datasets::{generate_orders, generate_users, Order, User};
pub use engine::{Engine, Row, Rows, Value};
pub use error::{BenchError, EngineError, Result};
pub use harness::{run_all, run_benchmark, BenchmarkResult, ResultSet, RunReport};
