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

//! Static registry of engine versions.
//!
//! The registry is data, not code: an ordered list of [`EngineSpec`] entries
//! loaded from a JSON manifest, each resolved to a ready-to-call handle.
//! Shell handles start their process lazily, so a broken entry is detected
//! when the runner first uses it rather than at load time.

use crate::engine::{Engine, ShellEngine};
use crate::error::{BenchError, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// One named, labelled engine instance to benchmark.
///
/// The version label is the identity used for grouping and ranking.
pub struct VersionedEngine {
    /// Display name, e.g. `sqlite-3.45.1`.
    pub name: String,
    /// Version label, e.g. `3.45.1` or `NEXT-1a2b3c4`.
    pub version: String,
    /// The handle under test.
    pub engine: Box<dyn Engine>,
}

impl VersionedEngine {
    /// Creates a new versioned engine.
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        engine: Box<dyn Engine>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            engine,
        }
    }
}

impl std::fmt::Debug for VersionedEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VersionedEngine")
            .field("name", &self.name)
            .field("version", &self.version)
            .finish_non_exhaustive()
    }
}

/// How an entry's handle is obtained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EngineSource {
    /// The SQLite library linked into this binary.
    Bundled,
    /// An external shell binary.
    Shell {
        /// Path to the binary; relative paths resolve against the manifest.
        program: PathBuf,
        /// Extra arguments.
        #[serde(default)]
        args: Vec<String>,
    },
}

/// One manifest entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSpec {
    /// Display name.
    pub name: String,
    /// Version label. Optional only for the bundled engine.
    #[serde(default)]
    pub version: Option<String>,
    /// Where the handle comes from.
    #[serde(flatten)]
    pub source: EngineSource,
}

/// The versions manifest file.
///
/// ```json
/// { "engines": [
///     { "name": "sqlite-3.39.4", "version": "3.39.4", "kind": "shell", "program": "bin/sqlite3-3.39.4" },
///     { "name": "sqlite-bundled", "kind": "bundled" }
/// ] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Entries in ascending release order.
    pub engines: Vec<EngineSpec>,
}

impl Manifest {
    /// Reads and parses a manifest file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| BenchError::Manifest {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        serde_json::from_str(&contents).map_err(|e| BenchError::Manifest {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

/// Ordered, resolved list of engines.
#[derive(Debug, Default)]
pub struct Registry {
    engines: Vec<VersionedEngine>,
}

impl Registry {
    /// A registry holding only the bundled engine.
    #[cfg(feature = "sqlite")]
    pub fn bundled() -> Result<Self> {
        let spec = EngineSpec {
            name: format!("sqlite-{}", crate::engine::SqliteEngine::library_version()),
            version: None,
            source: EngineSource::Bundled,
        };
        Self::from_specs(vec![spec], Path::new("."))
    }

    /// Loads and resolves a manifest file.
    pub fn from_manifest(path: &Path) -> Result<Self> {
        let manifest = Manifest::load(path)?;
        let base = path.parent().unwrap_or_else(|| Path::new("."));
        let registry = Self::from_specs(manifest.engines, base)?;
        info!(
            manifest = %path.display(),
            engines = registry.len(),
            "loaded versions manifest"
        );
        Ok(registry)
    }

    /// Resolves specs in order. Relative shell programs are joined to `base`.
    ///
    /// # Errors
    ///
    /// Fails on duplicate version labels, on shell entries without a version,
    /// and on bundled entries when the `sqlite` feature is disabled.
    pub fn from_specs(specs: Vec<EngineSpec>, base: &Path) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut engines = Vec::with_capacity(specs.len());

        for spec in specs {
            let engine = resolve(spec, base)?;
            if !seen.insert(engine.version.clone()) {
                return Err(duplicate_label(&engine.version));
            }
            engines.push(engine);
        }

        let registry = Self { engines };
        if !registry.is_ascending() {
            warn!("versions manifest is not in ascending release order");
        }
        Ok(registry)
    }

    /// Appends an engine, e.g. a resolved bleeding-edge build.
    ///
    /// # Errors
    ///
    /// Fails if an engine with the same version label is already registered.
    pub fn push(&mut self, engine: VersionedEngine) -> Result<()> {
        if self.engines.iter().any(|e| e.version == engine.version) {
            return Err(duplicate_label(&engine.version));
        }
        self.engines.push(engine);
        Ok(())
    }

    /// Number of engines.
    pub fn len(&self) -> usize {
        self.engines.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.engines.is_empty()
    }

    /// Version labels in registry order.
    pub fn versions(&self) -> Vec<String> {
        self.engines.iter().map(|e| e.version.clone()).collect()
    }

    /// Whether labels are in non-decreasing release order.
    pub fn is_ascending(&self) -> bool {
        self.engines
            .windows(2)
            .all(|pair| compare_versions(&pair[0].version, &pair[1].version) != Ordering::Greater)
    }

    /// Consumes the registry, yielding the engines in order.
    pub fn into_engines(self) -> Vec<VersionedEngine> {
        self.engines
    }
}

fn duplicate_label(version: &str) -> BenchError {
    BenchError::invalid_config("engines", format!("duplicate version label '{}'", version))
}

fn resolve(spec: EngineSpec, base: &Path) -> Result<VersionedEngine> {
    match spec.source {
        EngineSource::Bundled => resolve_bundled(spec.name, spec.version),
        EngineSource::Shell { program, args } => {
            let version = spec.version.ok_or_else(|| {
                BenchError::invalid_config(
                    format!("engines.{}.version", spec.name),
                    "required for shell engines",
                )
            })?;
            let program = if program.is_absolute() {
                program
            } else {
                base.join(program)
            };
            let engine = ShellEngine::new(program).with_args(args);
            Ok(VersionedEngine::new(spec.name, version, Box::new(engine)))
        }
    }
}

#[cfg(feature = "sqlite")]
fn resolve_bundled(name: String, version: Option<String>) -> Result<VersionedEngine> {
    use crate::engine::SqliteEngine;

    let engine = SqliteEngine::open().map_err(|e| {
        BenchError::invalid_config(format!("engines.{}", name), e.to_string())
    })?;
    let version = version.unwrap_or_else(|| SqliteEngine::library_version().to_string());
    Ok(VersionedEngine::new(name, version, Box::new(engine)))
}

#[cfg(not(feature = "sqlite"))]
fn resolve_bundled(name: String, _version: Option<String>) -> Result<VersionedEngine> {
    Err(BenchError::invalid_config(
        format!("engines.{}", name),
        "bundled engine requires the `sqlite` feature",
    ))
}

/// Compares dotted version labels numerically, component by component.
///
/// Non-numeric components compare as text, and missing components count as
/// zero, so `4.10.0` sorts after `4.9.0` and `4.1` equals `4.1.0`.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let left: Vec<&str> = a.split('.').collect();
    let right: Vec<&str> = b.split('.').collect();

    for idx in 0..left.len().max(right.len()) {
        let l = left.get(idx).copied().unwrap_or("0");
        let r = right.get(idx).copied().unwrap_or("0");
        let ord = match (l.parse::<u64>(), r.parse::<u64>()) {
            (Ok(l), Ok(r)) => l.cmp(&r),
            _ => l.cmp(r),
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
    Ordering::Equal
}
