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

//! Bleeding-edge build resolution.
//!
//! The edge engine is a shell binary built from a source checkout that may
//! or may not exist. Resolution never fails loudly: it reports one of three
//! outcomes, and only [`Resolution::Available`] carries a handle, which has
//! already answered a version query.

use super::config::EdgeConfig;
use super::registry::VersionedEngine;
use crate::engine::ShellEngine;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, warn};

/// Display name of the edge entry.
pub const EDGE_NAME: &str = "sqlite-next";

/// Outcome of resolving the edge build.
#[derive(Debug)]
pub enum Resolution {
    /// The build exists, is identified and answers queries.
    Available(VersionedEngine),
    /// No artifact at the expected path.
    NotBuilt {
        /// Where the artifact was expected
        artifact: PathBuf,
    },
    /// The artifact exists but could not be identified or started.
    Failed {
        /// What went wrong
        reason: String,
    },
}

impl Resolution {
    /// Returns the engine if available, logging why it is not otherwise.
    pub fn into_engine(self) -> Option<VersionedEngine> {
        match self {
            Resolution::Available(engine) => Some(engine),
            Resolution::NotBuilt { artifact } => {
                warn!(artifact = %artifact.display(), "edge engine not built");
                None
            }
            Resolution::Failed { reason } => {
                warn!(%reason, "edge engine unavailable");
                None
            }
        }
    }

    /// One-line diagnostic for console output.
    pub fn describe(&self) -> String {
        match self {
            Resolution::Available(engine) => format!("loaded {} ({})", engine.name, engine.version),
            Resolution::NotBuilt { artifact } => {
                format!("not built: no artifact at {}", artifact.display())
            }
            Resolution::Failed { reason } => format!("failed to load: {}", reason),
        }
    }
}

/// Resolves the bleeding-edge engine from a checkout.
#[derive(Debug, Clone)]
pub struct EdgeResolver {
    config: EdgeConfig,
}

impl EdgeResolver {
    /// Creates a resolver for the given checkout layout.
    pub fn new(config: EdgeConfig) -> Self {
        Self { config }
    }

    /// Locates, identifies and queries the edge build.
    pub fn resolve(&self) -> Resolution {
        let artifact = self.config.artifact_path();
        if !artifact.is_file() {
            return Resolution::NotBuilt { artifact };
        }

        let commit = match short_commit(&self.config.checkout) {
            Ok(commit) => commit,
            Err(reason) => return Resolution::Failed { reason },
        };

        let mut engine = ShellEngine::new(&artifact);
        match engine.server_version() {
            Ok(reported) => {
                debug!(%commit, %reported, "edge engine answered");
                Resolution::Available(VersionedEngine::new(
                    EDGE_NAME,
                    edge_label(&commit),
                    Box::new(engine),
                ))
            }
            Err(e) => Resolution::Failed {
                reason: e.to_string(),
            },
        }
    }
}

/// Version label for an edge build identified by `commit`.
pub fn edge_label(commit: &str) -> String {
    format!("NEXT-{}", commit)
}

fn short_commit(checkout: &Path) -> Result<String, String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .current_dir(checkout)
        .output()
        .map_err(|e| format!("cannot run git: {}", e))?;

    if !output.status.success() {
        return Err(format!(
            "git rev-parse failed in {}: {}",
            checkout.display(),
            String::from_utf8_lossy(&output.stderr).trim()
        ));
    }

    let commit = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if commit.is_empty() {
        return Err("git reported an empty commit hash".to_string());
    }
    Ok(commit)
}
