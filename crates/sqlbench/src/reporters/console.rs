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

//! Console reporter for benchmark sessions.
//!
//! Live progress lines while a session runs, then a summary ranking and the
//! detailed matrix once it finishes.

use super::markdown::{render_matrix, MISSING};
use crate::catalog::TestCase;
use crate::core::config::Orientation;
use crate::harness::aggregator::{BenchmarkResult, Failure, RankEntry, ResultSet, Standing};
use crate::harness::session::{Progress, RunReport};

const MEDALS: [&str; 3] = ["🥇", "🥈", "🥉"];
const MAX_BAR: usize = 40;

/// Formats a duration given in milliseconds.
pub fn format_duration(ms: f64) -> String {
    if ms < 1.0 {
        format!("{:.2}µs", ms * 1000.0)
    } else if ms < 1000.0 {
        format!("{:.2}ms", ms)
    } else {
        format!("{:.2}s", ms / 1000.0)
    }
}

/// Formats an ops/s rate with a K or M suffix.
pub fn format_ops(ops: f64) -> String {
    if ops >= 1_000_000.0 {
        format!("{:.2}M", ops / 1_000_000.0)
    } else if ops >= 1000.0 {
        format!("{:.2}K", ops / 1000.0)
    } else {
        format!("{:.2}", ops)
    }
}

/// Decoration for a 0-based rank. Ranks past the podium get padding.
pub fn medal(rank: usize) -> &'static str {
    MEDALS.get(rank).copied().unwrap_or("  ")
}

/// Bar of `min(round(speedup * 10), 40)` blocks.
pub fn speedup_bar(speedup: f64) -> String {
    let blocks = (speedup * 10.0).round().clamp(0.0, MAX_BAR as f64) as usize;
    "█".repeat(blocks)
}

/// Prints the run banner.
pub fn print_banner(cycles: u64, versions: &[String]) {
    println!("{}", "=".repeat(80));
    println!("SQL ENGINE HISTORICAL PERFORMANCE BENCHMARK");
    println!("{}", "=".repeat(80));
    println!("Iterations per test: {}", cycles);
    println!("Versions: {}", versions.join(", "));
    println!();
}

/// Renders the per-test standings table.
pub fn render_standings(standings: &[Standing]) -> String {
    let mut out = String::new();
    for (i, s) in standings.iter().enumerate() {
        out.push_str(&format!(
            "   {} {:<15} │ {:>12} ops/s │ {:>6.2}x │ {}\n",
            medal(i),
            s.version,
            format_ops(s.ops_per_second),
            s.speedup,
            speedup_bar(s.speedup)
        ));
    }
    out
}

/// Renders the summary ranking. Versions without a mean show `N/A`.
pub fn render_summary(ranking: &[RankEntry]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", "=".repeat(80)));
    out.push_str("SUMMARY: average operations per second by version\n");
    out.push_str(&format!("{}\n\n", "=".repeat(80)));
    out.push_str("   Rank │ Version         │ Avg Ops/s\n");
    out.push_str("   ─────┼─────────────────┼──────────────\n");

    for (i, entry) in ranking.iter().enumerate() {
        let mean = entry
            .mean_ops
            .map(|m| format!("{}", m.round() as u64))
            .unwrap_or_else(|| MISSING.to_string());
        out.push_str(&format!(
            "   {} {:>2} │ {:<15} │ {:>12}\n",
            medal(i),
            i + 1,
            entry.version,
            mean
        ));
    }
    out
}

/// Renders everything printed after the last test case.
pub fn render_report(report: &RunReport, orientation: Orientation) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(&render_summary(&report.results.ranking(&report.versions)));

    out.push_str(&format!("\n{}\n", "=".repeat(80)));
    out.push_str("DETAILED RESULTS (ops/s)\n");
    out.push_str(&format!("{}\n\n", "=".repeat(80)));
    let matrix = report
        .results
        .matrix(&report.versions, &report.tests, orientation);
    out.push_str(&render_matrix(&matrix));

    if !report.failures.is_empty() {
        out.push_str(&format!("\n{} pair(s) failed\n", report.failures.len()));
    }

    out.push_str(&format!("\n{}\n", "=".repeat(80)));
    out.push_str("Benchmark complete\n");
    out.push_str(&format!("{}\n", "=".repeat(80)));
    out
}

/// Prints the summary, detailed matrix and footer.
pub fn print_report(report: &RunReport, orientation: Orientation) {
    print!("{}", render_report(report, orientation));
}

/// Prints progress for every test case and pair as a session runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn on_test_start(&mut self, case: &TestCase) {
        println!("\n{}", "-".repeat(80));
        println!("Test: {}", case.name);
        println!("   {}", case.description);
        println!("{}", "-".repeat(80));
    }

    fn on_result(&mut self, result: &BenchmarkResult) {
        println!(
            "   ✅ {:<15} │ {:>10} │ {:>12} ops/s",
            result.version,
            format_duration(result.elapsed_ms),
            format_ops(result.ops_per_second)
        );
    }

    fn on_failure(&mut self, failure: &Failure) {
        println!("   ❌ {:<15} │ Error: {}", failure.version, failure.message);
    }

    fn on_test_complete(&mut self, case: &TestCase, results: &ResultSet) {
        if let Some(best) = results.best_for_test(case.name) {
            println!(
                "   🏆 Best: {} ({} ops/s)",
                best.version,
                format_ops(best.ops_per_second)
            );
            let standings = results.standings(case.name);
            if standings.len() > 1 {
                println!();
                print!("{}", render_standings(&standings));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration_units() {
        assert_eq!(format_duration(0.5), "500.00µs");
        assert_eq!(format_duration(12.345), "12.35ms");
        assert_eq!(format_duration(2500.0), "2.50s");
    }

    #[test]
    fn test_format_ops_suffixes() {
        assert_eq!(format_ops(999.0), "999.00");
        assert_eq!(format_ops(1500.0), "1.50K");
        assert_eq!(format_ops(2_500_000.0), "2.50M");
    }

    #[test]
    fn test_medals() {
        assert_eq!(medal(0), "🥇");
        assert_eq!(medal(2), "🥉");
        assert_eq!(medal(3), "  ");
    }

    #[test]
    fn test_speedup_bar_is_capped() {
        assert_eq!(speedup_bar(1.0).chars().count(), 10);
        assert_eq!(speedup_bar(2.54).chars().count(), 25);
        assert_eq!(speedup_bar(100.0).chars().count(), MAX_BAR);
    }

    #[test]
    fn test_summary_renders_missing_mean_as_na() {
        let ranking = vec![
            RankEntry {
                version: "2.0".to_string(),
                mean_ops: Some(100.4),
                completed: 1,
            },
            RankEntry {
                version: "1.0".to_string(),
                mean_ops: None,
                completed: 0,
            },
        ];
        let summary = render_summary(&ranking);
        let rows: Vec<&str> = summary.lines().filter(|l| l.contains('│')).skip(1).collect();
        assert!(rows[0].contains("2.0") && rows[0].ends_with("100"));
        assert!(rows[1].contains("1.0") && rows[1].ends_with("N/A"));
    }
}
