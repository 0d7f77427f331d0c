// src/types.rs
//! Report data structures shared by the calculators, the reporting layer
//! and the JSON output path.

use serde::Serialize;
use std::path::PathBuf;

/// NPath score for one located function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionComplexity {
    pub name: String,
    pub complexity: u64,
}

/// A function whose NPath computation failed (malformed subtree). Kept
/// alongside the successes so one bad construct never hides the rest of
/// the file.
#[derive(Debug, Clone, Serialize)]
pub struct FunctionFailure {
    pub name: String,
    pub reason: String,
}

/// Per-function NPath results for one tree, in discovery order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NpathReport {
    pub functions: Vec<FunctionComplexity>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<FunctionFailure>,
}

impl NpathReport {
    /// True when every located function produced a score.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Largest score in the report, if any function produced one.
    #[must_use]
    pub fn max_complexity(&self) -> Option<u64> {
        self.functions.iter().map(|f| f.complexity).max()
    }
}

/// What one input file produced.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileOutcome {
    Cyclomatic { complexity: u64 },
    Npath(NpathReport),
    Tokens { tokens: Vec<String> },
    /// Both metrics at once, for checking against configured limits.
    Check { cyclomatic: u64, npath: NpathReport },
    Failed { reason: String },
}

/// Metrics for a single input file.
#[derive(Debug, Clone, Serialize)]
pub struct FileMetrics {
    pub path: PathBuf,
    /// Diagnostics the parser attached to a degraded (but usable) tree.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<String>,
    pub outcome: FileOutcome,
}

impl FileMetrics {
    #[must_use]
    pub fn failed(&self) -> bool {
        matches!(self.outcome, FileOutcome::Failed { .. })
    }
}

/// Aggregated results from one CLI run over any number of files.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunReport {
    pub files: Vec<FileMetrics>,
    pub duration_ms: u128,
}

impl RunReport {
    #[must_use]
    pub fn failed_file_count(&self) -> usize {
        self.files.iter().filter(|f| f.failed()).count()
    }

    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.failed_file_count() > 0
    }
}
