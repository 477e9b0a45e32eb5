//! Shared configuration and macros for the criterion benchmarks.
//!
//! The criterion benches measure the same inputs as the calibration driver but report full
//! statistics instead of a single gas figure. Sizes are a sparser subset of the driver's
//! sequences so a complete bench run stays short.

#![allow(dead_code)] // benchmark use doesn't count as "usage" for linting

pub mod config;
pub mod macros;
