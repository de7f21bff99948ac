//! Run configuration for the threshold gate.
//!
//! The benchmark name and ceiling come from the environment so CI jobs can
//! tune them without touching the invocation; the Criterion output root can
//! be overridden on the command line.

use std::{env, path::PathBuf};

use crate::BenchGateError;

pub const BENCH_NAME_VAR: &str = "BENCH_NAME";
pub const BENCH_MAX_MEAN_VAR: &str = "BENCH_MAX_MEAN_NS";

pub const DEFAULT_BENCH_NAME: &str = "parse_and_store_64kb_file";
pub const DEFAULT_MAX_MEAN_NS: &str = "50000000";
pub const DEFAULT_CRITERION_ROOT: &str = "target/criterion";

/// Immutable settings for one gate run.
#[derive(Clone, Debug, PartialEq)]
pub struct GateConfig {
    pub bench_name: String,
    pub max_mean_ns: f64,
    pub criterion_root: PathBuf,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            bench_name: DEFAULT_BENCH_NAME.to_string(),
            max_mean_ns: 50_000_000.0,
            criterion_root: PathBuf::from(DEFAULT_CRITERION_ROOT),
        }
    }
}

impl GateConfig {
    pub fn from_env() -> Result<Self, BenchGateError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable lookup.
    ///
    /// A set-but-empty `BENCH_NAME` is kept verbatim; only an unset variable
    /// falls back to the default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, BenchGateError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bench_name = lookup(BENCH_NAME_VAR).unwrap_or_else(|| DEFAULT_BENCH_NAME.to_string());
        let raw_max =
            lookup(BENCH_MAX_MEAN_VAR).unwrap_or_else(|| DEFAULT_MAX_MEAN_NS.to_string());
        let max_mean_ns = parse_max_mean(&raw_max)?;
        Ok(Self {
            bench_name,
            max_mean_ns,
            criterion_root: PathBuf::from(DEFAULT_CRITERION_ROOT),
        })
    }

    pub fn with_root<P: Into<PathBuf>>(mut self, root: P) -> Self {
        self.criterion_root = root.into();
        self
    }
}

fn parse_max_mean(raw: &str) -> Result<f64, BenchGateError> {
    let value: f64 = raw.trim().parse().map_err(|_| {
        BenchGateError::config(format!("{BENCH_MAX_MEAN_VAR} must be a number, got '{raw}'"))
    })?;
    if !value.is_finite() {
        return Err(BenchGateError::config(format!(
            "{BENCH_MAX_MEAN_VAR} must be finite, got '{raw}'"
        )));
    }
    Ok(value)
}

/// Command-line overrides. Arguments the gate does not know are collected
/// in `ignored` rather than rejected, so extra CI arguments never stop the check.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommandLineConfig {
    pub criterion_root: Option<PathBuf>,
    pub show_help: bool,
    pub ignored: Vec<String>,
}

impl CommandLineConfig {
    pub fn from_args(args: &[&str]) -> Result<Self, BenchGateError> {
        let mut cfg = Self::default();
        let mut iter = args.iter().skip(1);
        while let Some(arg) = iter.next() {
            match *arg {
                "--help" | "-h" => cfg.show_help = true,
                "--root" => {
                    let value = iter
                        .next()
                        .ok_or_else(|| BenchGateError::config("--root requires a value"))?;
                    cfg.criterion_root = Some(PathBuf::from(value));
                }
                other => cfg.ignored.push(other.to_string()),
            }
        }
        Ok(cfg)
    }

    pub fn help() -> &'static str {
        "Usage: bench_threshold [--root PATH]\n\
         \n\
         Environment:\n  \
         BENCH_NAME         benchmark to check (default parse_and_store_64kb_file)\n  \
         BENCH_MAX_MEAN_NS  maximum mean in nanoseconds (default 50000000)\n  \
         BENCH_LOG          log filter for stderr diagnostics (default warn)\n"
    }
}
