//! Finding and analysis result models

use serde::{Deserialize, Serialize};

/// Detection origin of a finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingOrigin {
    /// Produced by the in-process pattern scanner
    Local,
    /// Produced by the external generative analysis call, after normalization
    Remote,
}

/// One reported instance of detected sensitive information
///
/// Immutable once created. Local findings carry the 1-based line number of
/// the scanned text; remote findings have no location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Detection origin
    pub origin: FindingOrigin,
    /// Human-readable description of what was found
    pub description: String,
    /// 1-based line number in the scanned text (local findings only)
    pub line: Option<u32>,
}

impl Finding {
    /// Create a local finding with a line location
    pub fn local(description: impl Into<String>, line: u32) -> Self {
        Self {
            origin: FindingOrigin::Local,
            description: description.into(),
            line: Some(line),
        }
    }

    /// Create a remote finding
    pub fn remote(description: impl Into<String>) -> Self {
        Self {
            origin: FindingOrigin::Remote,
            description: description.into(),
            line: None,
        }
    }

    /// Check if this finding came from the local scanner
    pub fn is_local(&self) -> bool {
        self.origin == FindingOrigin::Local
    }

    /// Check if this finding came from the remote analyzer
    pub fn is_remote(&self) -> bool {
        self.origin == FindingOrigin::Remote
    }
}

/// Outcome of one pipeline invocation
///
/// Local findings precede remote findings; insertion order is preserved
/// within each group. An empty finding list is a valid terminal state,
/// distinct from an analysis error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Merged findings, local before remote
    pub findings: Vec<Finding>,
    /// `0` = normal path, `1` = visual fallback used (OCR yielded nothing);
    /// negative values are reserved for upstream failures and only passed
    /// through, never produced by the pipeline itself
    pub status_code: i32,
    /// Rendered markdown report
    pub report: String,
}

impl AnalysisResult {
    /// Create a new analysis result
    pub fn new(findings: Vec<Finding>, status_code: i32, report: String) -> Self {
        Self {
            findings,
            status_code,
            report,
        }
    }

    /// Check if any sensitive information was detected
    pub fn has_findings(&self) -> bool {
        !self.findings.is_empty()
    }

    /// Number of findings from the local scanner
    pub fn local_count(&self) -> usize {
        self.findings.iter().filter(|f| f.is_local()).count()
    }

    /// Number of findings from the remote analyzer
    pub fn remote_count(&self) -> usize {
        self.findings.iter().filter(|f| f.is_remote()).count()
    }
}
