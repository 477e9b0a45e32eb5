//! Conversion of measured time into gas.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_GAS_PER_SECOND, NANOS_PER_SECOND};

/// Calibration translating nanoseconds of execution into gas.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GasCalibration {
    gas_per_second: u64,
}

impl GasCalibration {
    /// Returns a calibration charging `gas_per_second` gas for one second of execution.
    pub const fn new(gas_per_second: u64) -> Self {
        Self { gas_per_second }
    }

    pub const fn gas_per_second(&self) -> u64 {
        self.gas_per_second
    }

    /// Returns the gas `ns_per_op` nanoseconds are worth, truncated toward zero.
    ///
    /// Saturates at `u64::MAX` instead of overflowing.
    pub fn estimate(&self, ns_per_op: u64) -> u64 {
        let gas = self.gas_per_second as u128 * ns_per_op as u128 / NANOS_PER_SECOND as u128;
        u64::try_from(gas).unwrap_or(u64::MAX)
    }
}

impl Default for GasCalibration {
    fn default() -> Self {
        Self::new(DEFAULT_GAS_PER_SECOND)
    }
}

// TESTS
// ================================================================================================

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn default_is_35_mgas_per_second() {
        let calibration = GasCalibration::default();
        assert_eq!(calibration.gas_per_second(), 35_000_000);
        assert_eq!(calibration.estimate(0), 0);
        assert_eq!(calibration.estimate(1_000_000_000), 35_000_000);
        // 35M * 28 / 1e9 = 0.98
        assert_eq!(calibration.estimate(28), 0);
        assert_eq!(calibration.estimate(29), 1);
        assert_eq!(calibration.estimate(2_500), 87);
    }

    #[test]
    fn alternate_calibration_is_honoured() {
        let calibration = GasCalibration::new(100_000_000);
        assert_eq!(calibration.estimate(10), 1);
        assert_eq!(calibration.estimate(2_500), 250);
    }

    #[test]
    fn estimate_saturates() {
        let calibration = GasCalibration::new(u64::MAX);
        assert_eq!(calibration.estimate(u64::MAX), u64::MAX);
    }

    proptest! {
        #[test]
        fn estimate_is_monotonic(a in 0u64..1 << 40, b in 0u64..1 << 40) {
            let calibration = GasCalibration::default();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(calibration.estimate(lo) <= calibration.estimate(hi));
        }

        #[test]
        fn doubling_time_doubles_gas_within_truncation(ns in 0u64..1 << 40) {
            let calibration = GasCalibration::default();
            let single = calibration.estimate(ns);
            let double = calibration.estimate(ns * 2);
            prop_assert!(double >= 2 * single);
            prop_assert!(double <= 2 * single + 1);
        }
    }
}
