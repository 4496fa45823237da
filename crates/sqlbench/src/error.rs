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

//! Error types for benchmark execution.
//!
//! Two layers of errors exist: [`EngineError`] is what an engine handle
//! reports for a single statement, and [`BenchError`] is what the harness
//! reports for a whole (version, test case) pair or for configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for benchmarking operations
pub type Result<T> = std::result::Result<T, BenchError>;

/// Failure reported by an engine handle for one `execute` call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The engine rejected or failed the statement.
    #[error("{message}")]
    Statement {
        /// Message reported by the engine
        message: String,
    },

    /// Placeholder count does not match the supplied parameters.
    #[error("statement expects {expected} parameters, {supplied} supplied")]
    ParameterMismatch {
        /// Placeholders found in the statement
        expected: usize,
        /// Parameters passed by the caller
        supplied: usize,
    },

    /// The engine process could not be started or talked to.
    #[error("engine process '{program}': {message}")]
    Process {
        /// Program that was launched
        program: PathBuf,
        /// Underlying failure
        message: String,
    },
}

impl EngineError {
    /// Creates a statement error from any displayable message.
    pub fn statement(message: impl Into<String>) -> Self {
        EngineError::Statement {
            message: message.into(),
        }
    }
}

#[cfg(feature = "sqlite")]
impl From<rusqlite::Error> for EngineError {
    fn from(err: rusqlite::Error) -> Self {
        EngineError::statement(err.to_string())
    }
}

/// Errors that can occur during benchmarking operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BenchError {
    /// Schema creation or data load failed.
    #[error("setup of '{test_name}' failed: {source}")]
    SetupFailed {
        /// Test case being prepared
        test_name: String,
        /// Engine failure
        source: EngineError,
    },

    /// The warm-up or a timed iteration failed.
    #[error("run of '{test_name}' failed: {source}")]
    RunFailed {
        /// Test case being measured
        test_name: String,
        /// Engine failure
        source: EngineError,
    },

    /// Dropping the test case's tables failed after a clean run.
    #[error("teardown of '{test_name}' failed: {source}")]
    TeardownFailed {
        /// Test case being torn down
        test_name: String,
        /// Engine failure
        source: EngineError,
    },

    /// Invalid configuration parameter
    #[error("invalid configuration parameter '{parameter}': {reason}")]
    InvalidConfig {
        /// Parameter name
        parameter: String,
        /// Reason for invalidity
        reason: String,
    },

    /// Versions manifest could not be read or parsed.
    #[error("versions manifest '{path}': {message}")]
    Manifest {
        /// Manifest location
        path: PathBuf,
        /// Error message
        message: String,
    },
}

impl BenchError {
    /// Creates an invalid configuration error.
    pub fn invalid_config(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        BenchError::InvalidConfig {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }

    /// Returns the engine message behind a pair failure, if any.
    pub fn engine_error(&self) -> Option<&EngineError> {
        match self {
            BenchError::SetupFailed { source, .. }
            | BenchError::RunFailed { source, .. }
            | BenchError::TeardownFailed { source, .. } => Some(source),
            _ => None,
        }
    }
}
