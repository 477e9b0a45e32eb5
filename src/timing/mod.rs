//! Self-calibrating repetition loop.
//!
//! [`BenchTimer`] runs a closure once, then keeps re-running it with a growing repetition count
//! until a single run lasts at least the configured bench time. The growth rule predicts the
//! count needed to hit the target from the previous run, overshoots by 20% and never grows by
//! more than 100x per step, so a run converges in a handful of steps without wildly overshooting.

use std::time::{Duration, Instant};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_BENCH_TIME, MAX_ITERATIONS};


// TIMING SAMPLE
// ================================================================================================

/// Outcome of the final calibrated run: how many times the closure ran and how long it took.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimingSample {
    iterations: u64,
    elapsed: Duration,
}

impl TimingSample {
    pub const fn new(iterations: u64, elapsed: Duration) -> Self {
        Self { iterations, elapsed }
    }

    pub const fn iterations(&self) -> u64 {
        self.iterations
    }

    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Average duration of one iteration in nanoseconds, or 0 if nothing ran.
    pub fn ns_per_op(&self) -> u64 {
        if self.iterations == 0 {
            return 0;
        }
        let ns = self.elapsed.as_nanos() / self.iterations as u128;
        u64::try_from(ns).unwrap_or(u64::MAX)
    }
}

// BENCH TIMER
// ================================================================================================

/// Repetition loop which sizes its final run to last about `bench_time`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BenchTimer {
    bench_time: Duration,
    max_iterations: u64,
}

impl BenchTimer {
    pub fn new(bench_time: Duration) -> Self {
        Self { bench_time, max_iterations: MAX_ITERATIONS }
    }

    /// Caps the repetition count of a single run. A cap of zero is treated as one.
    pub fn with_max_iterations(mut self, max_iterations: u64) -> Self {
        self.max_iterations = max_iterations.max(1);
        self
    }

    pub fn bench_time(&self) -> Duration {
        self.bench_time
    }

    pub fn max_iterations(&self) -> u64 {
        self.max_iterations
    }

    /// Measures `f`, returning the sample of the final run.
    ///
    /// The first error returned by `f` stops the measurement and is returned as is.
    pub fn run<F, E>(&self, mut f: F) -> Result<TimingSample, E>
    where
        F: FnMut() -> Result<(), E>,
    {
        let mut sample = run_n(&mut f, 1)?;
        while sample.elapsed < self.bench_time && sample.iterations < self.max_iterations {
            let iterations = self.next_iterations(&sample);
            tracing::trace!(
                iterations,
                previous_ns = sample.elapsed.as_nanos() as u64,
                "extending measurement"
            );
            sample = run_n(&mut f, iterations)?;
        }
        Ok(sample)
    }

    /// Predicts the repetition count of the run following `last`.
    pub(crate) fn next_iterations(&self, last: &TimingSample) -> u64 {
        let goal_ns = self.bench_time.as_nanos();
        let prev_ns = last.elapsed.as_nanos().max(1);
        let prev_iterations = last.iterations as u128;

        let mut n = goal_ns.saturating_mul(prev_iterations) / prev_ns;
        n = n.saturating_add(n / 5);
        n = n.min(prev_iterations.saturating_mul(100));
        n = n.max(prev_iterations + 1);
        n.min(self.max_iterations as u128) as u64
    }
}

impl Default for BenchTimer {
    fn default() -> Self {
        Self::new(DEFAULT_BENCH_TIME)
    }
}

// HELPER FUNCTIONS
// ================================================================================================

fn run_n<F, E>(f: &mut F, iterations: u64) -> Result<TimingSample, E>
where
    F: FnMut() -> Result<(), E>,
{
    let start = Instant::now();
    for _ in 0..iterations {
        f()?;
    }
    Ok(TimingSample::new(iterations, start.elapsed()))
}
