//! Synthetic inputs for the measured primitives.
//!
//! Hash inputs are uniformly random byte strings of a requested length. BLAKE2f inputs always
//! have the fixed precompile layout, with the round count written into the first four bytes and
//! the final-block flag masked so the precompile accepts the input.

use rand_core::RngCore;

use crate::{
    config::{BLAKE2F_INPUT_LEN, BLAKE2F_ROUNDS, hash_input_lengths},
    precompile::PrecompileKind,
    report::InputSize,
};


// INPUT GENERATION
// ================================================================================================

/// Returns `len` random bytes.
pub fn hash_input<R: RngCore + ?Sized>(rng: &mut R, len: usize) -> Vec<u8> {
    let mut input = vec![0u8; len];
    rng.fill_bytes(&mut input);
    input
}

/// Returns a random BLAKE2f input which performs `rounds` compression rounds.
pub fn blake2f_input<R: RngCore + ?Sized>(rng: &mut R, rounds: u32) -> Vec<u8> {
    let mut input = vec![0u8; BLAKE2F_INPUT_LEN];
    rng.fill_bytes(&mut input);
    // the final-block indicator must be 0 or 1
    input[BLAKE2F_INPUT_LEN - 1] &= 1;
    input[..4].copy_from_slice(&rounds.to_be_bytes());
    input
}

/// Returns the input for `kind` at the given size.
///
/// Byte-sized kinds get [`hash_input`], round-based kinds get [`blake2f_input`]. Sizes of the
/// wrong unit are reinterpreted, so `Iterations(8)` on SHA-256 yields an 8-byte input.
pub fn generate<R: RngCore + ?Sized>(
    rng: &mut R,
    kind: PrecompileKind,
    size: InputSize,
) -> Vec<u8> {
    if kind.is_round_based() {
        let rounds = u32::try_from(size.value()).unwrap_or(u32::MAX);
        blake2f_input(rng, rounds)
    } else {
        hash_input(rng, size.value())
    }
}

// SIZE SEQUENCES
// ================================================================================================

/// Returns the sizes measured for `kind`.
pub fn sizes(kind: PrecompileKind) -> Vec<InputSize> {
    if kind.is_round_based() {
        BLAKE2F_ROUNDS.iter().map(|&rounds| InputSize::Iterations(rounds as usize)).collect()
    } else {
        hash_input_lengths().map(InputSize::Bytes).collect()
    }
}
