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

//! Newline-delimited JSON output.
//!
//! One object per line, tagged by `record`: every completed pair, every
//! failed pair, then the version ranking.

use crate::harness::aggregator::{BenchmarkResult, Failure, RankEntry};
use crate::harness::session::RunReport;
use serde::Serialize;
use std::io::{self, Write};

/// A single output line.
#[derive(Debug, Serialize)]
#[serde(tag = "record", rename_all = "snake_case")]
pub enum Record<'a> {
    /// A completed pair.
    Result(&'a BenchmarkResult),
    /// A failed pair.
    Failure(&'a Failure),
    /// A version's position in the ranking (1-based).
    Rank {
        /// Position, starting at 1
        rank: usize,
        /// The ranked entry
        #[serde(flatten)]
        entry: &'a RankEntry,
    },
}

/// Writes the report as NDJSON.
pub fn write_ndjson<W: Write>(report: &RunReport, mut out: W) -> io::Result<()> {
    for result in report.results.iter() {
        write_record(&mut out, &Record::Result(result))?;
    }
    for failure in &report.failures {
        write_record(&mut out, &Record::Failure(failure))?;
    }
    let ranking = report.results.ranking(&report.versions);
    for (i, entry) in ranking.iter().enumerate() {
        write_record(&mut out, &Record::Rank { rank: i + 1, entry })?;
    }
    out.flush()
}

fn write_record<W: Write>(out: &mut W, record: &Record<'_>) -> io::Result<()> {
    serde_json::to_writer(&mut *out, record)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    out.write_all(b"\n")
}
