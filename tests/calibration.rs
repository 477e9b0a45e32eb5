//! End-to-end calibration runs against the real EVM precompiles.

use std::time::Duration;

use precompile_gas::{
    BenchTimer, Driver, DriverConfig, EvmPrecompiles, FailurePolicy, GasCalibration, InputSize,
    PrecompileKind, config::BLAKE2F_ROUNDS,
};

fn quick_config() -> DriverConfig {
    DriverConfig::default()
        .with_timer(BenchTimer::new(Duration::from_micros(200)).with_max_iterations(1_000))
        .with_seed(1)
}

#[test]
fn empty_inputs_are_measured_on_every_primitive() {
    let mut driver = Driver::new(EvmPrecompiles::istanbul(), quick_config());
    for kind in PrecompileKind::ALL {
        let size = if kind.is_round_based() {
            InputSize::Iterations(0)
        } else {
            InputSize::Bytes(0)
        };
        let report = driver.measure(kind, size).unwrap();
        assert_eq!(report.kind, kind);
        assert_eq!(report.size, size);
        assert!(report.to_string().starts_with(kind.label()));
        assert!(report.to_string().ends_with(" gas"));
    }
}

#[test]
fn full_sequence_runs_with_short_bench_time() {
    let mut driver = Driver::new(EvmPrecompiles::istanbul(), quick_config());
    let outcome = driver.run().unwrap();

    assert!(outcome.is_success());
    assert_eq!(outcome.reports_for(PrecompileKind::Sha256).count(), 128);
    assert_eq!(outcome.reports_for(PrecompileKind::Ripemd160).count(), 128);
    assert_eq!(outcome.reports_for(PrecompileKind::Keccak256).count(), 128);
    assert_eq!(
        outcome.reports_for(PrecompileKind::Blake2fCompress).count(),
        BLAKE2F_ROUNDS.len()
    );

    // BLAKE2f is charged one gas per round
    for report in outcome.reports_for(PrecompileKind::Blake2fCompress) {
        assert_eq!(report.charged_gas, report.size.value() as u64);
    }
}

#[test]
fn calibration_scales_estimates() {
    let config = quick_config().with_calibration(GasCalibration::new(1_000_000_000));
    let mut driver = Driver::new(EvmPrecompiles::istanbul(), config);
    let report = driver.measure(PrecompileKind::Sha256, InputSize::Bytes(512)).unwrap();
    // one gas per nanosecond
    assert_eq!(report.gas, report.ns_per_op);
}

#[test]
fn continue_policy_is_a_no_op_when_nothing_fails() {
    let config = quick_config()
        .with_kinds([PrecompileKind::Blake2fCompress])
        .with_failure_policy(FailurePolicy::Continue);
    let mut driver = Driver::new(EvmPrecompiles::istanbul(), config);
    let outcome = driver.run().unwrap();
    assert!(outcome.failures.is_empty());
    assert_eq!(outcome.reports.len(), BLAKE2F_ROUNDS.len());
}

/// The calibration run proper: one second per measured size, several minutes in total.
#[test]
#[ignore]
fn calibrate_istanbul_precompiles() {
    let mut driver = Driver::new(EvmPrecompiles::istanbul(), DriverConfig::default());
    let outcome = driver.run().unwrap();
    for report in &outcome.reports {
        println!("{report}");
    }
    assert!(outcome.is_success());
}
