use std::{io, process::ExitCode, time::Duration};

use clap::Parser;
use precompile_gas::{
    BenchTimer, Driver, DriverConfig, EvmPrecompiles, FailurePolicy, GasCalibration, GasReport,
    PrecompileKind, RunOutcome,
    config::{DEFAULT_BENCH_TIME, DEFAULT_GAS_PER_SECOND},
};
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

#[derive(Parser, Debug)]
#[command(
    name = "precompile-gas",
    about = "Measures EVM hashing precompiles and converts their running time into gas",
    version,
    rename_all = "kebab-case"
)]
pub struct BenchmarkCmd {
    /// Primitive to measure: sha256, ripemd160, blake2f or keccak256. Repeat to select several;
    /// all primitives are measured when omitted.
    #[arg(short = 'c', long = "case")]
    cases: Vec<PrecompileKind>,
    /// Target duration of each measurement in milliseconds
    #[arg(
        short = 't',
        long = "bench-time-ms",
        default_value_t = DEFAULT_BENCH_TIME.as_millis() as u64
    )]
    bench_time_ms: u64,
    /// Gas one second of execution is worth
    #[arg(short = 'g', long = "gas-per-second", default_value_t = DEFAULT_GAS_PER_SECOND)]
    gas_per_second: u64,
    /// Seed for the input generator, for reproducible inputs
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,
    /// Keep measuring after a precompile returns an error
    #[arg(long = "continue-on-error", default_value = "false")]
    continue_on_error: bool,
    /// Log calibration progress
    #[arg(short = 'v', long = "verbose", default_value = "false")]
    verbose: bool,
}

impl BenchmarkCmd {
    fn driver_config(&self) -> DriverConfig {
        let mut config = DriverConfig::default()
            .with_timer(BenchTimer::new(Duration::from_millis(self.bench_time_ms)))
            .with_calibration(GasCalibration::new(self.gas_per_second))
            .with_failure_policy(if self.continue_on_error {
                FailurePolicy::Continue
            } else {
                FailurePolicy::Halt
            });
        if !self.cases.is_empty() {
            config = config.with_kinds(self.cases.iter().copied());
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config
    }
}

fn main() -> ExitCode {
    let args = BenchmarkCmd::parse();
    init_logging(args.verbose);

    let mut driver = Driver::new(EvmPrecompiles::istanbul(), args.driver_config());
    match driver.run() {
        Ok(outcome) => {
            print_summary(&outcome);
            if outcome.is_success() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        },
        Err(err) => {
            tracing::error!("benchmark aborted: {err}");
            ExitCode::FAILURE
        },
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { LevelFilter::DEBUG } else { LevelFilter::INFO };
    let env_filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn print_summary(outcome: &RunOutcome) {
    println!(
        "{:<10} {:>6} {:<10} {:>10} {:>8} {:>8} {:>7}",
        "primitive", "size", "unit", "ns/op", "gas", "charged", "ratio"
    );
    for report in &outcome.reports {
        println!("{}", summary_row(report));
    }

    for failure in &outcome.failures {
        println!("{} on {} failed: {}", failure.kind, failure.size, failure.error);
    }
}

fn summary_row(report: &GasReport) -> String {
    let ratio = report
        .pricing_ratio()
        .map_or_else(|| "-".to_string(), |ratio| format!("{ratio:.2}"));
    format!(
        "{:<10} {:>6} {:<10} {:>10} {:>8} {:>8} {:>7}",
        report.kind.label(),
        report.size.value(),
        report.size.unit(),
        report.ns_per_op,
        report.gas,
        report.charged_gas,
        ratio,
    )
}
