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

//! Single-pair benchmark execution.

use crate::catalog::TestCase;
use crate::core::measurement::{measure, Measurement};
use crate::engine::Engine;
use crate::error::{BenchError, Result};
use tracing::{debug, warn};

/// Runs one test case against one engine.
///
/// 1. `setup`; on failure, `teardown` is attempted once to drop whatever
///    setup had already created, and the setup error is returned.
/// 2. One untimed warm-up `run`.
/// 3. `iterations` timed `run` calls.
/// 4. `teardown`, attempted whenever setup succeeded, even if the warm-up
///    or a timed call failed.
///
/// The returned measurement covers step 3 only. If a run call failed, that
/// error is returned and a teardown error is only logged. If every run call
/// succeeded, a teardown failure is returned as
/// [`BenchError::TeardownFailed`].
pub fn run_benchmark(
    engine: &mut dyn Engine,
    case: &TestCase,
    iterations: u64,
) -> Result<Measurement> {
    if let Err(source) = (case.setup)(&mut *engine) {
        if let Err(e) = (case.teardown)(&mut *engine) {
            warn!(test = case.name, error = %e, "teardown after failed setup also failed");
        }
        return Err(BenchError::SetupFailed {
            test_name: case.name.to_string(),
            source,
        });
    }

    let measured = measure(iterations, || (case.run)(&mut *engine));
    let teardown = (case.teardown)(&mut *engine);

    match (measured, teardown) {
        (Ok(measurement), Ok(())) => {
            debug!(
                test = case.name,
                elapsed_ms = measurement.elapsed_ms(),
                iterations,
                "pair measured"
            );
            Ok(measurement)
        }
        (Ok(_), Err(source)) => Err(BenchError::TeardownFailed {
            test_name: case.name.to_string(),
            source,
        }),
        (Err(source), teardown) => {
            if let Err(e) = teardown {
                warn!(test = case.name, error = %e, "teardown after failed run also failed");
            }
            Err(BenchError::RunFailed {
                test_name: case.name.to_string(),
                source,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Rows, Value};
    use crate::error::EngineError;

    #[derive(Default)]
    struct Counter {
        setups: usize,
        runs: usize,
        teardowns: usize,
        fail_run_at: Option<usize>,
    }

    impl Engine for Counter {
        fn execute(
            &mut self,
            sql: &str,
            _params: &[Value],
        ) -> std::result::Result<Rows, EngineError> {
            match sql {
                "setup" => self.setups += 1,
                "teardown" => self.teardowns += 1,
                _ => {
                    self.runs += 1;
                    if Some(self.runs) == self.fail_run_at {
                        return Err(EngineError::statement("run failed"));
                    }
                }
            }
            Ok(Rows::new())
        }
    }

    fn counting_case() -> TestCase {
        TestCase {
            name: "counting",
            description: "counts lifecycle calls",
            setup: |db| db.execute("setup", &[]).map(|_| ()),
            run: |db| db.execute("run", &[]),
            teardown: |db| db.execute("teardown", &[]).map(|_| ()),
        }
    }

    #[test]
    fn test_lifecycle_call_counts() {
        for n in [1, 5, 50] {
            let mut engine = Counter::default();
            let m = run_benchmark(&mut engine, &counting_case(), n).unwrap();
            assert_eq!(engine.setups, 1);
            assert_eq!(engine.runs as u64, n + 1);
            assert_eq!(engine.teardowns, 1);
            assert_eq!(m.iterations, n);
        }
    }

    #[test]
    fn test_teardown_runs_after_failed_iteration() {
        let mut engine = Counter {
            fail_run_at: Some(3),
            ..Counter::default()
        };
        let err = run_benchmark(&mut engine, &counting_case(), 10).unwrap_err();
        assert!(matches!(err, BenchError::RunFailed { .. }));
        assert_eq!(engine.runs, 3);
        assert_eq!(engine.teardowns, 1);
    }

    #[test]
    fn test_setup_failure_skips_runs_but_cleans_up() {
        let mut case = counting_case();
        case.setup = |_| Err(EngineError::statement("no schema"));

        let mut engine = Counter::default();
        let err = run_benchmark(&mut engine, &case, 5).unwrap_err();
        assert!(matches!(err, BenchError::SetupFailed { .. }));
        assert_eq!(engine.runs, 0);
        assert_eq!(engine.teardowns, 1);
    }

    #[test]
    fn test_setup_failure_reported_even_if_cleanup_fails() {
        let mut case = counting_case();
        case.setup = |_| Err(EngineError::statement("no schema"));
        case.teardown = |_| Err(EngineError::statement("cannot drop"));

        let mut engine = Counter::default();
        let err = run_benchmark(&mut engine, &case, 5).unwrap_err();
        assert!(matches!(err, BenchError::SetupFailed { .. }));
    }

    #[test]
    fn test_teardown_failure_after_clean_run() {
        let mut case = counting_case();
        case.teardown = |_| Err(EngineError::statement("cannot drop"));

        let mut engine = Counter::default();
        let err = run_benchmark(&mut engine, &case, 2).unwrap_err();
        assert!(matches!(err, BenchError::TeardownFailed { .. }));
        assert_eq!(engine.runs, 3);
    }
}
