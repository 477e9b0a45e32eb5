//! Benchmark configuration constants.

use std::time::Duration;

/// Measurement time for every benchmark in a group.
pub const DEFAULT_MEASUREMENT_TIME: Duration = Duration::from_secs(5);

/// Sample size for statistical significance.
pub const DEFAULT_SAMPLE_SIZE: usize = 50;

/// Seed of the input generator, fixed so runs are comparable.
pub const INPUT_SEED: u64 = 0x5eed;

/// Input sizes for the hash precompiles (in bytes).
pub const HASH_INPUT_SIZES: &[usize] = &[
    0,    // Empty input, fixed overhead only
    8,    // Smallest non-empty size of the calibration run
    32,   // One word
    64,   // Two words
    128,  //
    256,  //
    512,  //
    1016, // Largest size of the calibration run
];

/// Round counts for the BLAKE2f precompile.
pub const BLAKE2F_ROUNDS: &[u32] = &[0, 1, 12, 64, 512, 8192];
