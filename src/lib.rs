//! CI guard over Criterion output.
//! Run `cargo bench` first so `target/criterion/**/estimates.json` exists, then
//! `bench_threshold` to fail the build when a benchmark mean is over budget.

pub mod config;
pub mod discovery;
pub mod errors;
pub mod estimates;
pub mod gate;
pub mod logging;

pub use crate::config::{CommandLineConfig, GateConfig};
pub use crate::errors::BenchGateError;
pub use crate::gate::{GateReport, ThresholdChecker};
