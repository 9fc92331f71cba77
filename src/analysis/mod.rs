//! Content-analysis pipeline
//!
//! The pipeline combines four components:
//!
//! - [`scanner`] - local regex-based PII detection over raw text
//! - [`remote`] - the remote generative analyzer with its task instructions
//! - [`normalizer`] - tiered parsing of the loosely-structured model reply
//! - [`orchestrator`] - routing, fallback policy, merging, and rendering
//!
//! Data flows orchestrator -> (scanner, remote analyzer) -> normalizer ->
//! orchestrator -> rendered report. For images, OCR extraction runs first
//! and direct visual analysis is the fallback when no text is found.

pub mod normalizer;
pub mod orchestrator;
pub mod remote;
pub mod report;
pub mod scanner;

pub use normalizer::ResponseNormalizer;
pub use orchestrator::{AnalysisOrchestrator, STATUS_OK, STATUS_VISUAL_FALLBACK};
pub use remote::RemoteAnalyzer;
pub use report::{render_report, ContentLabel};
pub use scanner::PatternScanner;
