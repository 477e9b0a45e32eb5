use sha3::Digest;

use super::{Precompile, PrecompileError, PrecompileKind, PrecompileOutput, linear_cost};
use crate::Bytes;

// CONSTANTS
// ================================================================================================

const DIGEST_BYTES: usize = 32;

/// Static gas of the `KECCAK256` opcode.
pub const KECCAK256_BASE_GAS: u64 = 30;

/// Dynamic gas of the `KECCAK256` opcode per 32-byte word of input.
pub const KECCAK256_WORD_GAS: u64 = 6;

// KECCAK256 HASHER
// ================================================================================================

/// Keccak256 hash function, priced like the `KECCAK256` opcode.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub struct Keccak256;

impl Keccak256 {
    /// Returns a hash of the provided sequence of bytes.
    #[inline(always)]
    pub fn hash(bytes: &[u8]) -> [u8; DIGEST_BYTES] {
        let mut hasher = sha3::Keccak256::new();
        hasher.update(bytes);

        hasher.finalize().into()
    }
}

impl Precompile for Keccak256 {
    fn kind(&self) -> PrecompileKind {
        PrecompileKind::Keccak256
    }

    fn run(&self, input: &Bytes) -> Result<PrecompileOutput, PrecompileError> {
        let digest = Self::hash(input);
        Ok(PrecompileOutput {
            bytes: Bytes::copy_from_slice(&digest),
            charged_gas: linear_cost(input.len(), KECCAK256_BASE_GAS, KECCAK256_WORD_GAS),
        })
    }
}
