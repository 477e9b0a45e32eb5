//! Calibration constants and default benchmark parameters.
//!
//! All defaults used by the driver, the binary and the criterion benches live here so the
//! measured sizes stay consistent across the crate.

use std::time::Duration;

// === Gas Conversion ===
/// Gas a block is expected to burn per second of execution (35 Mgas/s).
pub const DEFAULT_GAS_PER_SECOND: u64 = 35_000_000;

/// Nanoseconds in one second.
pub const NANOS_PER_SECOND: u64 = 1_000_000_000;

// === Timing ===
/// Target duration of the final calibrated run for every measured size.
pub const DEFAULT_BENCH_TIME: Duration = Duration::from_secs(1);

/// Upper bound on the number of repetitions in one calibrated run.
pub const MAX_ITERATIONS: u64 = 1_000_000_000;

// === Input Shapes ===
/// Exclusive upper bound on the input length of the hash cases (in bytes).
pub const HASH_INPUT_LIMIT: usize = 1024;

/// Step between consecutive hash input lengths (in bytes).
pub const HASH_INPUT_STEP: usize = 8;

/// Round counts measured for the BLAKE2f compression function.
pub const BLAKE2F_ROUNDS: &[u32] =
    &[0, 1, 2, 4, 8, 16, 32, 64, 128, 256, 512, 1024, 2048, 4096, 8192];

/// Length of a BLAKE2f precompile input: rounds (4) + h (64) + m (128) + t (16) + f (1).
pub const BLAKE2F_INPUT_LEN: usize = 213;

/// Returns the hash input lengths `0, 8, 16, ..., 1016`.
pub fn hash_input_lengths() -> impl Iterator<Item = usize> + Clone {
    (0..HASH_INPUT_LIMIT).step_by(HASH_INPUT_STEP)
}
