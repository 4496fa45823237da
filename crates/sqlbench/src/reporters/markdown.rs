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

//! Markdown rendering of the detailed results matrix.

use crate::harness::aggregator::Matrix;

/// Sentinel for pairs without a result.
pub const MISSING: &str = "N/A";

/// Renders the matrix as a pipe-delimited Markdown table.
///
/// The first column holds row labels and the last holds row totals. Missing
/// cells and empty totals render as [`MISSING`].
pub fn render_matrix(matrix: &Matrix) -> String {
    let mut md = String::new();

    let mut header = vec![String::new()];
    header.extend(matrix.columns.iter().cloned());
    header.push("Total".to_string());

    md.push_str(&format!("| {} |\n", header.join(" | ")));
    md.push_str(&format!(
        "| {} |\n",
        header.iter().map(|_| "---").collect::<Vec<_>>().join(" | ")
    ));

    for row in &matrix.rows {
        let mut cells = vec![row.label.clone()];
        cells.extend(row.cells.iter().map(|c| cell(*c)));
        cells.push(cell(row.total));
        md.push_str(&format!("| {} |\n", cells.join(" | ")));
    }

    md
}

fn cell(value: Option<u64>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| MISSING.to_string())
}
