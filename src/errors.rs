use std::path::PathBuf;

use thiserror::Error;

use crate::gate::GateReport;

#[derive(Debug, Error)]
pub enum BenchGateError {
    #[error("No criterion estimates found under {}", root.display())]
    NoResults { root: PathBuf },
    #[error("Could not find estimates.json for benchmark '{name}'")]
    BenchmarkNotFound { name: String },
    #[error("Invalid criterion estimates format in {}: {reason}", path.display())]
    InvalidFormat { path: PathBuf, reason: String },
    #[error("Benchmark mean exceeded threshold")]
    ThresholdExceeded { report: GateReport },
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl BenchGateError {
    pub fn no_results<P: Into<PathBuf>>(root: P) -> Self {
        BenchGateError::NoResults { root: root.into() }
    }

    pub fn not_found<T: Into<String>>(name: T) -> Self {
        BenchGateError::BenchmarkNotFound { name: name.into() }
    }

    pub fn invalid_format<P: Into<PathBuf>, T: Into<String>>(path: P, reason: T) -> Self {
        BenchGateError::InvalidFormat {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        BenchGateError::Config(msg.into())
    }

    /// Every failure, tooling or regression, is reported to CI as status 1.
    pub fn exit_code(&self) -> i32 {
        1
    }
}
