//! Gas calibration harness for EVM hashing precompiles.
//!
//! The crate measures how long the SHA-256, RIPEMD-160, BLAKE2f and Keccak-256 primitives take
//! on synthetic inputs and converts the measured time into a gas estimate. The measurements are
//! used to calibrate gas-pricing constants; nothing here implements the primitives themselves.

pub mod config;
pub mod driver;
pub mod gas;
pub mod input;
pub mod precompile;
pub mod report;
pub mod runner;
pub mod timing;

// RE-EXPORTS
// ================================================================================================

pub use driver::{
    Driver, DriverConfig, DriverError, FailurePolicy, MeasurementFailure, RunOutcome,
};
pub use gas::GasCalibration;
pub use precompile::{
    EvmPrecompiles, Precompile, PrecompileError, PrecompileKind, PrecompileOutput, PrecompileSet,
};
pub use report::{GasReport, InputSize};
pub use revm_precompile::Bytes;
pub use timing::{BenchTimer, TimingSample};
