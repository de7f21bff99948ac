use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

pub const ESTIMATES_FILE: &str = "estimates.json";

/// Collects every `estimates.json` below `root`, in walk order.
///
/// A missing root or unreadable subtree simply contributes nothing.
pub fn discover_estimates(root: &Path) -> Vec<PathBuf> {
    let found: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .flatten()
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| entry.file_name() == ESTIMATES_FILE)
        .map(|entry| entry.into_path())
        .collect();
    debug!(root = %root.display(), count = found.len(), "discovered criterion estimates");
    found
}

/// First candidate whose path mentions `bench_name`; no tie-break beyond walk order.
pub fn select_estimate<'a>(candidates: &'a [PathBuf], bench_name: &str) -> Option<&'a Path> {
    candidates
        .iter()
        .find(|path| path.to_string_lossy().contains(bench_name))
        .map(PathBuf::as_path)
}
