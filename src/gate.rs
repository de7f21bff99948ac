use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, info};

use crate::{
    BenchGateError,
    config::GateConfig,
    discovery::{discover_estimates, select_estimate},
    estimates::parse_mean_ns,
};

/// Outcome of a fully parsed estimate compared against its ceiling.
#[derive(Clone, Debug, PartialEq)]
pub struct GateReport {
    pub bench_name: String,
    pub estimates_path: PathBuf,
    pub mean_ns: f64,
    pub max_mean_ns: f64,
}

impl GateReport {
    pub const PASSED_LINE: &'static str = "Benchmark threshold check passed";

    pub fn passed(&self) -> bool {
        self.mean_ns <= self.max_mean_ns
    }

    pub fn summary_lines(&self) -> [String; 3] {
        [
            format!("Benchmark: {}", self.bench_name),
            format!("Mean (ns): {:.0}", self.mean_ns),
            format!("Max  (ns): {:.0}", self.max_mean_ns),
        ]
    }
}

#[derive(Clone, Debug)]
pub struct ThresholdChecker {
    config: GateConfig,
}

impl ThresholdChecker {
    pub fn new(config: GateConfig) -> Self {
        Self { config }
    }

    /// Discovers, selects and parses the estimate. An exceeded threshold is
    /// still an `Ok` report here; see [`ThresholdChecker::run`].
    pub fn evaluate(&self) -> Result<GateReport, BenchGateError> {
        let root = &self.config.criterion_root;
        let candidates = discover_estimates(root);
        if candidates.is_empty() {
            return Err(BenchGateError::no_results(root));
        }
        let selected = select_estimate(&candidates, &self.config.bench_name)
            .ok_or_else(|| BenchGateError::not_found(&self.config.bench_name))?;
        debug!(path = %selected.display(), "selected estimates file");
        let mean_ns = read_mean(selected)?;
        info!(
            bench = %self.config.bench_name,
            mean_ns,
            max_mean_ns = self.config.max_mean_ns,
            "parsed benchmark mean"
        );
        Ok(GateReport {
            bench_name: self.config.bench_name.clone(),
            estimates_path: selected.to_path_buf(),
            mean_ns,
            max_mean_ns: self.config.max_mean_ns,
        })
    }

    /// Like [`ThresholdChecker::evaluate`], but a mean over the ceiling becomes
    /// [`BenchGateError::ThresholdExceeded`] carrying the report.
    pub fn run(&self) -> Result<GateReport, BenchGateError> {
        let report = self.evaluate()?;
        if !report.passed() {
            return Err(BenchGateError::ThresholdExceeded { report });
        }
        Ok(report)
    }
}

fn read_mean(path: &Path) -> Result<f64, BenchGateError> {
    let data = fs::read(path).map_err(|e| BenchGateError::invalid_format(path, e.to_string()))?;
    parse_mean_ns(&data).map_err(|reason| BenchGateError::invalid_format(path, reason))
}
