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

//! Benchmark reporters for various output formats.
//!
//! # Modules
//!
//! - `console`: Live progress and the final human-readable report
//! - `markdown`: Pipe-table rendering of the detailed matrix
//! - `json`: Newline-delimited JSON records

pub mod console;
pub mod json;
pub mod markdown;

pub use console::{
    format_duration, format_ops, print_banner, print_report, render_report, render_summary,
    ConsoleProgress,
};
pub use json::{write_ndjson, Record};
pub use markdown::{render_matrix, MISSING};
