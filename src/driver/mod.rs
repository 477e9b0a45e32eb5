//! Orchestration of the benchmark cases.
//!
//! A [`Driver`] owns a [`PrecompileSet`], a random generator and a [`DriverConfig`]. For every
//! configured primitive it walks the primitive's size sequence, generates an input, measures the
//! primitive on it and reports the resulting gas estimate. Cases run one after another on the
//! calling thread.

use rand_chacha::ChaCha20Rng;
use rand_core::SeedableRng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Bytes,
    gas::GasCalibration,
    input,
    precompile::{PrecompileError, PrecompileKind, PrecompileSet},
    report::{GasReport, InputSize},
    runner,
    timing::BenchTimer,
};

mod error;
pub use error::DriverError;


// CONFIGURATION
// ================================================================================================

/// What the driver does when a primitive returns an error.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FailurePolicy {
    /// Abort the whole run on the first failure. A failing primitive invalidates the
    /// measurement, so nothing measured so far is returned.
    #[default]
    Halt,
    /// Record the failure and carry on with the next size.
    Continue,
}

/// Parameters of a benchmark run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DriverConfig {
    /// Primitives to measure, in order.
    pub kinds: Vec<PrecompileKind>,
    pub timer: BenchTimer,
    pub calibration: GasCalibration,
    pub failure_policy: FailurePolicy,
    /// Seed of the input generator. Fresh OS entropy is used when unset.
    pub seed: Option<u64>,
}

impl DriverConfig {
    pub fn with_kinds(mut self, kinds: impl IntoIterator<Item = PrecompileKind>) -> Self {
        self.kinds = kinds.into_iter().collect();
        self
    }

    pub fn with_timer(mut self, timer: BenchTimer) -> Self {
        self.timer = timer;
        self
    }

    pub fn with_calibration(mut self, calibration: GasCalibration) -> Self {
        self.calibration = calibration;
        self
    }

    pub fn with_failure_policy(mut self, failure_policy: FailurePolicy) -> Self {
        self.failure_policy = failure_policy;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            kinds: PrecompileKind::ALL.to_vec(),
            timer: BenchTimer::default(),
            calibration: GasCalibration::default(),
            failure_policy: FailurePolicy::default(),
            seed: None,
        }
    }
}

// RUN OUTCOME
// ================================================================================================

/// A measurement which failed under [`FailurePolicy::Continue`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MeasurementFailure {
    pub kind: PrecompileKind,
    pub size: InputSize,
    pub error: PrecompileError,
}

/// Everything measured by a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RunOutcome {
    pub reports: Vec<GasReport>,
    pub failures: Vec<MeasurementFailure>,
}

impl RunOutcome {
    /// Returns true if no measurement failed.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Returns the reports measured for `kind`.
    pub fn reports_for(&self, kind: PrecompileKind) -> impl Iterator<Item = &GasReport> {
        self.reports.iter().filter(move |report| report.kind == kind)
    }
}

// DRIVER
// ================================================================================================

pub struct Driver<S> {
    precompiles: S,
    config: DriverConfig,
    rng: ChaCha20Rng,
}

impl<S: PrecompileSet> Driver<S> {
    pub fn new(precompiles: S, config: DriverConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha20Rng::seed_from_u64(seed),
            None => ChaCha20Rng::from_entropy(),
        };
        Self { precompiles, config, rng }
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    pub fn precompiles(&self) -> &S {
        &self.precompiles
    }

    /// Measures every configured primitive on its full size sequence.
    pub fn run(&mut self) -> Result<RunOutcome, DriverError> {
        let mut outcome = RunOutcome::default();
        for kind in self.config.kinds.clone() {
            self.run_case_into(kind, &mut outcome)?;
        }
        Ok(outcome)
    }

    /// Measures a single primitive on its full size sequence.
    pub fn run_case(&mut self, kind: PrecompileKind) -> Result<RunOutcome, DriverError> {
        let mut outcome = RunOutcome::default();
        self.run_case_into(kind, &mut outcome)?;
        Ok(outcome)
    }

    /// Measures `kind` on one freshly generated input of the given size and emits the report.
    pub fn measure(
        &mut self,
        kind: PrecompileKind,
        size: InputSize,
    ) -> Result<GasReport, DriverError> {
        let precompile = self.precompiles.get(kind).ok_or(DriverError::Unsupported(kind))?;
        let input = Bytes::from(input::generate(&mut self.rng, kind, size));

        // the untimed call also fetches the gas the current schedule charges
        let charged_gas = precompile.run(&input)?.charged_gas;
        let sample = self.config.timer.run(runner::bench_fn(precompile, &input))?;

        let report = GasReport::new(kind, size, &sample, &self.config.calibration, charged_gas);
        tracing::debug!(
            iterations = sample.iterations(),
            elapsed = ?sample.elapsed(),
            "measured {kind}"
        );
        report.emit();
        Ok(report)
    }

    fn run_case_into(
        &mut self,
        kind: PrecompileKind,
        outcome: &mut RunOutcome,
    ) -> Result<(), DriverError> {
        if !self.precompiles.contains(kind) {
            return Err(DriverError::Unsupported(kind));
        }

        let span = tracing::info_span!("case", kind = kind.name());
        let _enter = span.enter();

        for size in input::sizes(kind) {
            match self.measure(kind, size) {
                Ok(report) => outcome.reports.push(report),
                Err(DriverError::Precompile(error))
                    if self.config.failure_policy == FailurePolicy::Continue =>
                {
                    tracing::warn!(size = size.value(), %error, "measurement failed, continuing");
                    outcome.failures.push(MeasurementFailure { kind, size, error });
                },
                Err(error) => {
                    tracing::error!(
                        size = size.value(),
                        %error,
                        "measurement failed, aborting run"
                    );
                    return Err(error);
                },
            }
        }
        Ok(())
    }
}
