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

//! Measurement primitives.
//!
//! A [`Measurement`] is the raw output of one timed loop: how long the loop
//! took and how many iterations it ran. Rates are derived from it on demand.

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Smallest elapsed time used when deriving rates.
///
/// `Instant` can report zero for very short loops on coarse clocks; flooring
/// keeps operations-per-second finite.
pub const TIMER_FLOOR: Duration = Duration::from_nanos(1);

/// A timed loop result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Measurement {
    /// Time spent in the timed iterations only.
    pub elapsed: Duration,
    /// Number of timed iterations.
    pub iterations: u64,
}

impl Measurement {
    /// Creates a new measurement.
    pub fn new(elapsed: Duration, iterations: u64) -> Self {
        Self {
            elapsed,
            iterations,
        }
    }

    /// Elapsed time in milliseconds with sub-millisecond precision.
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1_000.0
    }

    /// Operations per second: `iterations / elapsed_ms * 1000`.
    pub fn ops_per_second(&self) -> f64 {
        let elapsed = self.elapsed.max(TIMER_FLOOR);
        self.iterations as f64 / (elapsed.as_secs_f64() * 1_000.0) * 1_000.0
    }
}

/// Times `iterations` calls of `f` after one untimed warm-up call.
///
/// Stops at the first error. The warm-up result and every timed result are
/// discarded.
///
/// # Example
///
/// ```no_run
/// use sqlbench::core::measurement::measure;
///
/// let m = measure(100, || Ok::<_, ()>(())).unwrap();
/// println!("{:.2} ops/s", m.ops_per_second());
/// ```
pub fn measure<T, E, F>(iterations: u64, mut f: F) -> Result<Measurement, E>
where
    F: FnMut() -> Result<T, E>,
{
    // Warm-up, excluded from timing
    f()?;

    let start = Instant::now();
    for _ in 0..iterations {
        f()?;
    }
    let elapsed = start.elapsed();

    Ok(Measurement::new(elapsed, iterations))
}
