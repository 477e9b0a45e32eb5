//! Precompiles measured by the harness and the capability traits used to invoke them.

use core::{fmt, str::FromStr};

use revm_precompile::{Address, Bytes, u64_to_address};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod error;
pub use error::{ParseKindError, PrecompileError};

mod evm;
pub use evm::{EvmPrecompile, EvmPrecompiles};

mod keccak;
pub use keccak::Keccak256;


// PRECOMPILE KIND
// ================================================================================================

/// The cryptographic primitives the harness knows how to measure.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PrecompileKind {
    /// SHA-256 hash, precompile `0x02`.
    Sha256,
    /// RIPEMD-160 hash, precompile `0x03`.
    Ripemd160,
    /// BLAKE2 compression function F, precompile `0x09`.
    Blake2fCompress,
    /// Keccak-256 hash. Not a precompile, exposed through the `KECCAK256` opcode.
    Keccak256,
}

impl PrecompileKind {
    /// All kinds in the order they are benchmarked.
    pub const ALL: [Self; 4] =
        [Self::Sha256, Self::Ripemd160, Self::Blake2fCompress, Self::Keccak256];

    /// Label used in report lines.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sha256 => "SHA256",
            Self::Ripemd160 => "RIPEMD",
            Self::Blake2fCompress => "Blake2f",
            Self::Keccak256 => "Keccak256",
        }
    }

    /// Lowercase identifier accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sha256 => "sha256",
            Self::Ripemd160 => "ripemd160",
            Self::Blake2fCompress => "blake2f",
            Self::Keccak256 => "keccak256",
        }
    }

    /// Index of the precompile in the EVM address space, if the primitive is a precompile.
    pub const fn precompile_id(self) -> Option<u64> {
        match self {
            Self::Sha256 => Some(0x02),
            Self::Ripemd160 => Some(0x03),
            Self::Blake2fCompress => Some(0x09),
            Self::Keccak256 => None,
        }
    }

    /// Address the precompile is deployed at.
    pub fn address(self) -> Option<Address> {
        self.precompile_id().map(u64_to_address)
    }

    /// Returns true if inputs of this kind are sized by compression rounds rather than bytes.
    pub const fn is_round_based(self) -> bool {
        matches!(self, Self::Blake2fCompress)
    }
}

impl fmt::Display for PrecompileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PrecompileKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == lowered || kind.label().eq_ignore_ascii_case(&lowered))
            .ok_or_else(|| ParseKindError(s.to_string()))
    }
}

// PRECOMPILE OUTPUT
// ================================================================================================

/// Result of a successful precompile invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrecompileOutput {
    /// Bytes returned by the precompile.
    pub bytes: Bytes,
    /// Gas charged for the invocation by the precompile's current pricing schedule.
    pub charged_gas: u64,
}

// TRAITS
// ================================================================================================

/// A cryptographic function that can be measured: bytes in, bytes or an error out.
pub trait Precompile {
    /// The primitive this function implements.
    fn kind(&self) -> PrecompileKind;

    /// Invokes the function on `input`.
    fn run(&self, input: &Bytes) -> Result<PrecompileOutput, PrecompileError>;
}

/// A table of measurable functions keyed by [`PrecompileKind`].
pub trait PrecompileSet {
    /// Returns the implementation registered for `kind`, if any.
    fn get(&self, kind: PrecompileKind) -> Option<&dyn Precompile>;

    /// Returns true if an implementation is registered for `kind`.
    fn contains(&self, kind: PrecompileKind) -> bool {
        self.get(kind).is_some()
    }
}

// HELPER FUNCTIONS
// ================================================================================================

/// Cost of a function priced linearly in the number of 32-byte words of its input.
pub const fn linear_cost(len: usize, base: u64, word: u64) -> u64 {
    let words = len.div_ceil(32) as u64;
    base + word * words
}
