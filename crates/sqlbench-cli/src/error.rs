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

//! Structured error types for the sqlbench CLI.
//!
//! Every command path returns `Result<T, CliError>`; `main` turns the error
//! into a one-line message and a failing exit code.

use sqlbench::BenchError;
use std::io;
use thiserror::Error;

/// The main error type for CLI operations.
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration, manifest or harness failure.
    #[error(transparent)]
    Bench(#[from] BenchError),

    /// Writing the report failed.
    #[error("failed to write report: {message}")]
    Output {
        /// The error message
        message: String,
    },

    /// The filter matched no test case.
    #[error("no test case matches '{filter}'")]
    NoMatchingTests {
        /// The filter as given
        filter: String,
    },
}

impl CliError {
    /// Creates an output error.
    pub fn output(err: io::Error) -> Self {
        CliError::Output {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bench_error_is_transparent() {
        let err: CliError = BenchError::invalid_config("cycles", "must be at least 1").into();
        assert_eq!(
            err.to_string(),
            "invalid configuration parameter 'cycles': must be at least 1"
        );
    }

    #[test]
    fn test_no_matching_tests_message() {
        let err = CliError::NoMatchingTests {
            filter: "nope".to_string(),
        };
        assert_eq!(err.to_string(), "no test case matches 'nope'");
    }
}
