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

//! Command-line arguments and the run they drive.

use crate::error::CliError;
use clap::{Parser, ValueEnum};
use sqlbench::catalog::{filter_cases, test_cases};
use sqlbench::core::config::{DEFAULT_EDGE_ARTIFACT, DEFAULT_EDGE_CHECKOUT};
use sqlbench::core::{
    EdgeConfig, EdgeResolver, HarnessConfig, Orientation, OutputFormat, Registry, Resolution,
    DEFAULT_CYCLES, QUICK_CYCLES,
};
use sqlbench::harness::{run_all, Silent};
use sqlbench::reporters::{print_banner, print_report, write_ndjson, ConsoleProgress};
use std::io;
use std::path::PathBuf;
use tracing::info;

/// Report format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Human readable text with a Markdown matrix
    Text,
    /// Newline-delimited JSON records
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

/// Rows of the detailed matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OrientationArg {
    /// One row per version
    Versions,
    /// One row per test case
    Tests,
}

impl From<OrientationArg> for Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Versions => Orientation::VersionsAsRows,
            OrientationArg::Tests => Orientation::TestsAsRows,
        }
    }
}

/// sqlbench - compare SQL engine releases on identical workloads
///
/// Runs every test case against every configured engine version, one pair at
/// a time, and reports operations per second.
///
/// # Examples
///
/// ```bash
/// # Bundled engine only, quick mode
/// sqlbench --quick
///
/// # Historical releases from a manifest, plus the edge build
/// sqlbench --versions versions.json --edge --cycles 100
///
/// # Machine-readable output for the JOIN workload
/// sqlbench --filter join --format json
/// ```
#[derive(Debug, Clone, Parser)]
#[command(name = "sqlbench")]
#[command(
    author,
    version,
    about = "Compare SQL engine releases on identical workloads",
    long_about = None
)]
pub struct Cli {
    /// Timed iterations per test case and version
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub cycles: Option<u64>,

    /// Lower the default iteration count for a fast run
    #[arg(long)]
    pub quick: bool,

    /// Include the bleeding-edge build
    #[arg(long)]
    pub edge: bool,

    /// Source checkout of the bleeding-edge build
    #[arg(long, value_name = "DIR", default_value = DEFAULT_EDGE_CHECKOUT)]
    pub edge_dir: PathBuf,

    /// Built shell binary, relative to the edge checkout
    #[arg(long, value_name = "PATH", default_value = DEFAULT_EDGE_ARTIFACT)]
    pub edge_artifact: PathBuf,

    /// JSON manifest of engine versions (default: bundled engine only)
    #[arg(long, value_name = "FILE")]
    pub versions: Option<PathBuf>,

    /// Only run test cases whose name contains TEXT (case-insensitive)
    #[arg(long, value_name = "TEXT")]
    pub filter: Option<String>,

    /// Report format
    #[arg(long, value_enum, default_value_t = FormatArg::Text)]
    pub format: FormatArg,

    /// Rows of the detailed matrix
    #[arg(long, value_enum, default_value_t = OrientationArg::Versions)]
    pub orientation: OrientationArg,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Builds the harness configuration from the parsed arguments.
    pub fn config(&self) -> HarnessConfig {
        let default_cycles = if self.quick { QUICK_CYCLES } else { DEFAULT_CYCLES };
        let mut config = HarnessConfig::default()
            .with_cycles(self.cycles.unwrap_or(default_cycles))
            .with_output(self.format.into())
            .with_orientation(self.orientation.into());

        if self.edge {
            config = config.with_edge(EdgeConfig {
                checkout: self.edge_dir.clone(),
                artifact: self.edge_artifact.clone(),
            });
        }
        if let Some(path) = &self.versions {
            config = config.with_manifest(path);
        }
        if let Some(filter) = &self.filter {
            config = config.with_filter(filter);
        }
        config
    }

    /// Runs the benchmark and writes the report to stdout.
    pub fn execute(&self) -> Result<(), CliError> {
        run(&self.config())
    }
}

/// Resolves versions and test cases, runs every pair and reports.
pub fn run(config: &HarnessConfig) -> Result<(), CliError> {
    config.validate()?;

    let mut registry = match &config.manifest {
        Some(path) => Registry::from_manifest(path)?,
        None => Registry::bundled()?,
    };

    if config.include_edge {
        let resolution = EdgeResolver::new(config.edge.clone()).resolve();
        let message = format!("Edge build: {}", resolution.describe());
        match config.output {
            OutputFormat::Text => println!("{}", message),
            OutputFormat::Json => eprintln!("{}", message),
        }
        // Already reported; into_engine would log it again.
        if let Resolution::Available(engine) = resolution {
            registry.push(engine)?;
        }
    }

    let mut cases = test_cases();
    if let Some(filter) = &config.filter {
        cases = filter_cases(cases, filter);
        if cases.is_empty() {
            return Err(CliError::NoMatchingTests {
                filter: filter.clone(),
            });
        }
    }

    info!(
        versions = registry.len(),
        tests = cases.len(),
        cycles = config.cycles,
        "starting benchmark"
    );

    let versions = registry.versions();
    let mut engines = registry.into_engines();

    match config.output {
        OutputFormat::Text => {
            print_banner(config.cycles, &versions);
            let report = run_all(&mut engines, &cases, config.cycles, &mut ConsoleProgress);
            print_report(&report, config.orientation);
        }
        OutputFormat::Json => {
            let report = run_all(&mut engines, &cases, config.cycles, &mut Silent);
            write_ndjson(&report, io::stdout().lock()).map_err(CliError::output)?;
        }
    }

    Ok(())
}
