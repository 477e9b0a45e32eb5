//! Gas reports produced for every measured (primitive, size) pair.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{gas::GasCalibration, precompile::PrecompileKind, timing::TimingSample};

// INPUT SIZE
// ================================================================================================

/// Size of a measured input.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum InputSize {
    /// Input length in bytes.
    Bytes(usize),
    /// Number of compression rounds.
    Iterations(usize),
}

impl InputSize {
    /// Returns the numeric size regardless of its unit.
    pub const fn value(self) -> usize {
        match self {
            Self::Bytes(n) | Self::Iterations(n) => n,
        }
    }

    /// Returns the unit the size is expressed in.
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Bytes(_) => "bytes",
            Self::Iterations(_) => "iterations",
        }
    }
}

impl fmt::Display for InputSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value(), self.unit())
    }
}

// GAS REPORT
// ================================================================================================

/// Measured cost of one primitive on one input size.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GasReport {
    pub kind: PrecompileKind,
    pub size: InputSize,
    /// Average wall-clock time of one invocation.
    pub ns_per_op: u64,
    /// Gas the measured time is worth under the calibration in use.
    pub gas: u64,
    /// Gas the primitive's current pricing schedule charges for the same input.
    pub charged_gas: u64,
}

impl GasReport {
    /// Derives a report from a timing sample.
    pub fn new(
        kind: PrecompileKind,
        size: InputSize,
        sample: &TimingSample,
        calibration: &GasCalibration,
        charged_gas: u64,
    ) -> Self {
        let ns_per_op = sample.ns_per_op();
        Self {
            kind,
            size,
            ns_per_op,
            gas: calibration.estimate(ns_per_op),
            charged_gas,
        }
    }

    /// Ratio between the estimated gas and the gas currently charged.
    ///
    /// Values above 1.0 mean the primitive is underpriced for this input.
    pub fn pricing_ratio(&self) -> Option<f64> {
        (self.charged_gas > 0).then(|| self.gas as f64 / self.charged_gas as f64)
    }

    /// Emits the report as an `INFO` event.
    pub fn emit(&self) {
        tracing::info!(
            kind = self.kind.name(),
            size = self.size.value(),
            unit = self.size.unit(),
            ns_per_op = self.ns_per_op,
            gas = self.gas,
            charged_gas = self.charged_gas,
            "{}",
            self
        );
    }
}

impl fmt::Display for GasReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} on {} takes {} gas", self.kind.label(), self.size, self.gas)
    }
}

// TESTS
// ================================================================================================
