use revm_precompile::{
    Bytes, Precompile as RevmPrecompile, PrecompileResult, Precompiles, StandardPrecompileFn,
};

use super::{
    Keccak256, Precompile, PrecompileError, PrecompileKind, PrecompileOutput, PrecompileSet,
};

/// Gas limit handed to every invocation. Measurements must never be cut short by gas.
const GAS_LIMIT: u64 = u64::MAX;

// EVM PRECOMPILE
// ================================================================================================

/// A precompile resolved from the `revm` precompile table.
#[derive(Clone, Copy)]
pub struct EvmPrecompile {
    kind: PrecompileKind,
    run: StandardPrecompileFn,
}

impl EvmPrecompile {
    /// Looks `kind` up in `table` by its precompile address.
    ///
    /// Returns `None` for kinds which are not precompiles, for addresses missing from the table,
    /// and for entries which need the execution environment to run.
    pub fn resolve(table: &Precompiles, kind: PrecompileKind) -> Option<Self> {
        let address = kind.address()?;
        match table.get(&address)? {
            RevmPrecompile::Standard(run) => Some(Self { kind, run: *run }),
            _ => None,
        }
    }
}

impl Precompile for EvmPrecompile {
    fn kind(&self) -> PrecompileKind {
        self.kind
    }

    fn run(&self, input: &Bytes) -> Result<PrecompileOutput, PrecompileError> {
        into_output(self.kind, (self.run)(input, GAS_LIMIT))
    }
}

impl core::fmt::Debug for EvmPrecompile {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EvmPrecompile").field("kind", &self.kind).finish_non_exhaustive()
    }
}

fn into_output(
    kind: PrecompileKind,
    result: PrecompileResult,
) -> Result<PrecompileOutput, PrecompileError> {
    result
        .map(|output| PrecompileOutput { bytes: output.bytes, charged_gas: output.gas_used })
        .map_err(|err| PrecompileError::Failed { kind, reason: err.to_string() })
}

// EVM PRECOMPILE SET
// ================================================================================================

/// The measured primitives as shipped with the EVM: SHA-256, RIPEMD-160 and BLAKE2f taken from
/// the Istanbul precompile table, Keccak-256 from [`Keccak256`].
#[derive(Debug, Clone)]
pub struct EvmPrecompiles {
    sha256: Option<EvmPrecompile>,
    ripemd160: Option<EvmPrecompile>,
    blake2f: Option<EvmPrecompile>,
    keccak256: Keccak256,
}

impl EvmPrecompiles {
    /// Returns the precompiles active since the Istanbul hard fork.
    pub fn istanbul() -> Self {
        Self::from_table(Precompiles::istanbul())
    }

    /// Resolves the measured precompiles from an arbitrary `revm` table.
    pub fn from_table(table: &Precompiles) -> Self {
        Self {
            sha256: EvmPrecompile::resolve(table, PrecompileKind::Sha256),
            ripemd160: EvmPrecompile::resolve(table, PrecompileKind::Ripemd160),
            blake2f: EvmPrecompile::resolve(table, PrecompileKind::Blake2fCompress),
            keccak256: Keccak256,
        }
    }
}

impl Default for EvmPrecompiles {
    fn default() -> Self {
        Self::istanbul()
    }
}

impl PrecompileSet for EvmPrecompiles {
    fn get(&self, kind: PrecompileKind) -> Option<&dyn Precompile> {
        match kind {
            PrecompileKind::Sha256 => self.sha256.as_ref().map(|p| p as &dyn Precompile),
            PrecompileKind::Ripemd160 => self.ripemd160.as_ref().map(|p| p as &dyn Precompile),
            PrecompileKind::Blake2fCompress => self.blake2f.as_ref().map(|p| p as &dyn Precompile),
            PrecompileKind::Keccak256 => Some(&self.keccak256),
        }
    }
}
