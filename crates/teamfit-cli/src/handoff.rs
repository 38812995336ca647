use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use teamfit_types::AnalysisRequest;

pub const PENDING_ANALYSIS_FILE: &str = "pending-analysis.json";

pub fn pending_path(data_dir: &Path) -> PathBuf {
    data_dir.join(PENDING_ANALYSIS_FILE)
}

/// Queues selected interviews for the next dashboard invocation.
pub fn write_pending(data_dir: &Path, requests: &[AnalysisRequest]) -> Result<PathBuf> {
    let path = pending_path(data_dir);
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("failed to create {}", data_dir.display()))?;
    let content = serde_json::to_string_pretty(requests)?;
    std::fs::write(&path, content)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(path)
}

/// Consumes the pending hand-off, if any.
///
/// The file is deleted whether or not it parses. A malformed payload is
/// reported as a warning and treated as absent, so a bad hand-off cannot
/// wedge every later dashboard run.
pub fn take_pending(data_dir: &Path) -> Option<Vec<AnalysisRequest>> {
    let path = pending_path(data_dir);
    let content = std::fs::read_to_string(&path).ok()?;
    let _ = std::fs::remove_file(&path);
    match parse_requests(&content) {
        Some(requests) => Some(requests),
        None => {
            eprintln!("Warning: ignoring malformed pending-analysis payload");
            None
        }
    }
}

/// Parses an inline `--analyze` payload with the same tolerance as the file
/// path: malformed input warns and yields nothing.
pub fn parse_inline(raw: &str) -> Option<Vec<AnalysisRequest>> {
    match parse_requests(raw) {
        Some(requests) => Some(requests),
        None => {
            eprintln!("Warning: ignoring malformed --analyze payload");
            None
        }
    }
}

fn parse_requests(raw: &str) -> Option<Vec<AnalysisRequest>> {
    let requests: Vec<AnalysisRequest> = serde_json::from_str(raw).ok()?;
    if requests.is_empty() {
        return None;
    }
    Some(requests)
}
