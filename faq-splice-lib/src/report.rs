//! Per-target results of a splice run.

use serde::Serialize;
use std::path::PathBuf;

/// Summary of one [`crate::FaqSplicer::run`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpliceReport {
    /// Resolved path of the payload file.
    pub payload: PathBuf,
    /// `false` when the run only previewed its changes.
    pub written: bool,
    pub targets: Vec<TargetOutcome>,
}

impl SpliceReport {
    /// Targets whose declaration was not found.
    pub fn unmatched(&self) -> impl Iterator<Item = &TargetOutcome> {
        self.targets.iter().filter(|target| target.replacements == 0)
    }

    pub fn all_matched(&self) -> bool {
        self.unmatched().next().is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetOutcome {
    pub path: PathBuf,
    /// Number of declarations replaced.
    pub replacements: usize,
    /// Whether the spliced text differs from what was read.
    pub changed: bool,
    #[serde(skip)]
    pub original: String,
    #[serde(skip)]
    pub content: String,
}
