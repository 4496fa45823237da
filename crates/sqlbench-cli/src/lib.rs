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

//! sqlbench CLI library for argument parsing and run wiring.
//!
//! Turns command-line options into a [`sqlbench::core::HarnessConfig`],
//! resolves the engine versions it names, runs every (test case, version)
//! pair and writes the report to stdout. Logging goes to stderr.
//!
//! # Options
//!
//! - `--cycles N`: timed iterations per pair (default 50)
//! - `--quick`: lower the default to 10 iterations
//! - `--versions FILE`: JSON manifest of engine versions
//! - `--edge`, `--edge-dir`, `--edge-artifact`: include the bleeding-edge build
//! - `--filter TEXT`: restrict to matching test cases
//! - `--format text|json`: console report or NDJSON records
//! - `--orientation versions|tests`: rows of the detailed matrix
//! - `--verbose`: debug logging

pub mod cli;
pub mod error;

pub use cli::{run, Cli};
pub use error::CliError;
