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

//! Centralized harness configuration.
//!
//! Provides cycle counts, version sources, workload filtering and output
//! settings for one benchmark run.

use crate::error::{BenchError, Result};
use std::path::PathBuf;

/// Default number of timed iterations per (version, test case) pair.
pub const DEFAULT_CYCLES: u64 = 50;

/// Timed iterations used by quick mode.
pub const QUICK_CYCLES: u64 = 10;

/// Default checkout directory of the bleeding-edge engine source.
pub const DEFAULT_EDGE_CHECKOUT: &str = "sqlite-next";

/// Default shell artifact path inside the edge checkout.
pub const DEFAULT_EDGE_ARTIFACT: &str = "sqlite3";

/// Output format options for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// Human readable text with an embedded markdown matrix.
    #[default]
    Text,
    /// Newline-delimited JSON records.
    Json,
}

/// Which axis forms the rows of the detailed matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    /// One row per version, one column per test case.
    #[default]
    VersionsAsRows,
    /// One row per test case, one column per version.
    TestsAsRows,
}

/// Where the bleeding-edge build lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeConfig {
    /// Source checkout; must be a git work tree.
    pub checkout: PathBuf,
    /// Built shell binary, relative to `checkout` unless absolute.
    pub artifact: PathBuf,
}

impl EdgeConfig {
    /// Full path of the built artifact.
    pub fn artifact_path(&self) -> PathBuf {
        self.checkout.join(&self.artifact)
    }
}

impl Default for EdgeConfig {
    fn default() -> Self {
        Self {
            checkout: PathBuf::from(DEFAULT_EDGE_CHECKOUT),
            artifact: PathBuf::from(DEFAULT_EDGE_ARTIFACT),
        }
    }
}

/// Configuration for one benchmark run.
///
/// # Example
///
/// ```no_run
/// use sqlbench::core::config::{HarnessConfig, OutputFormat};
///
/// let config = HarnessConfig::default()
///     .with_cycles(20)
///     .with_filter("join")
///     .with_output(OutputFormat::Json);
/// config.validate().unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Timed iterations per pair.
    pub cycles: u64,
    /// Whether to resolve and include the bleeding-edge build.
    pub include_edge: bool,
    /// Location of the bleeding-edge build.
    pub edge: EdgeConfig,
    /// Versions manifest; `None` means only the bundled engine.
    pub manifest: Option<PathBuf>,
    /// Case-insensitive test name filter.
    pub filter: Option<String>,
    /// Report format.
    pub output: OutputFormat,
    /// Matrix orientation for the detailed view.
    pub orientation: Orientation,
}

impl HarnessConfig {
    /// Configuration for quick mode: fewer cycles, everything else default.
    pub fn quick() -> Self {
        Self::default().with_cycles(QUICK_CYCLES)
    }

    /// Sets the timed iteration count.
    pub fn with_cycles(mut self, cycles: u64) -> Self {
        self.cycles = cycles;
        self
    }

    /// Enables the bleeding-edge build.
    pub fn with_edge(mut self, edge: EdgeConfig) -> Self {
        self.include_edge = true;
        self.edge = edge;
        self
    }

    /// Loads static versions from a manifest.
    pub fn with_manifest(mut self, path: impl Into<PathBuf>) -> Self {
        self.manifest = Some(path.into());
        self
    }

    /// Restricts the run to matching test cases.
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Sets the report format.
    pub fn with_output(mut self, output: OutputFormat) -> Self {
        self.output = output;
        self
    }

    /// Sets the matrix orientation.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Checks that the configuration can drive a run.
    pub fn validate(&self) -> Result<()> {
        if self.cycles == 0 {
            return Err(BenchError::invalid_config("cycles", "must be at least 1"));
        }
        if self.include_edge && self.edge.artifact.as_os_str().is_empty() {
            return Err(BenchError::invalid_config("edge.artifact", "must not be empty"));
        }
        Ok(())
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            cycles: DEFAULT_CYCLES,
            include_edge: false,
            edge: EdgeConfig::default(),
            manifest: None,
            filter: None,
            output: OutputFormat::default(),
            orientation: Orientation::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HarnessConfig::default();
        assert_eq!(config.cycles, DEFAULT_CYCLES);
        assert!(!config.include_edge);
        assert_eq!(config.output, OutputFormat::Text);
        assert_eq!(config.orientation, Orientation::VersionsAsRows);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_quick_lowers_cycles() {
        assert_eq!(HarnessConfig::quick().cycles, QUICK_CYCLES);
        assert!(QUICK_CYCLES < DEFAULT_CYCLES);
    }

    #[test]
    fn test_zero_cycles_rejected() {
        let err = HarnessConfig::default().with_cycles(0).validate().unwrap_err();
        assert!(
            matches!(err, BenchError::InvalidConfig { ref parameter, .. } if parameter == "cycles")
        );
    }

    #[test]
    fn test_edge_paths() {
        let config = HarnessConfig::default().with_edge(EdgeConfig {
            checkout: PathBuf::from("/src/next"),
            artifact: PathBuf::from("build/sqlite3"),
        });
        assert!(config.include_edge);
        assert_eq!(
            config.edge.artifact_path(),
            PathBuf::from("/src/next/build/sqlite3")
        );
    }

    #[test]
    fn test_builder_chain() {
        let config = HarnessConfig::default()
            .with_manifest("versions.json")
            .with_filter("join")
            .with_output(OutputFormat::Json)
            .with_orientation(Orientation::TestsAsRows);
        assert_eq!(config.manifest, Some(PathBuf::from("versions.json")));
        assert_eq!(config.filter.as_deref(), Some("join"));
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.orientation, Orientation::TestsAsRows);
    }
}
