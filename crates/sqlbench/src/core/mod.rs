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

//! Core benchmark infrastructure.
//!
//! Provides centralized configuration, measurement primitives and the
//! sources of engine versions to benchmark.
//!
//! # Modules
//!
//! - `config`: Harness configuration
//! - `measurement`: Warm-up plus timed-loop measurement
//! - `registry`: Static, manifest-driven version registry
//! - `edge`: Resolution of the optional bleeding-edge build

pub mod config;
pub mod edge;
pub mod measurement;
pub mod registry;

// Re-export commonly used types
pub use config::{
    EdgeConfig, HarnessConfig, Orientation, OutputFormat, DEFAULT_CYCLES, QUICK_CYCLES,
};
pub use edge::{edge_label, EdgeResolver, Resolution};
pub use measurement::{measure, Measurement};
pub use registry::{compare_versions, EngineSource, EngineSpec, Manifest, Registry, VersionedEngine};
