//! Domain models and types for piiscan.
//!
//! This module contains the core value types and error hierarchy shared by
//! the analysis pipeline and its adapters:
//!
//! - **Findings** ([`Finding`], [`FindingOrigin`], [`AnalysisResult`])
//! - **Inputs** ([`AnalysisInput`], [`ContentKind`])
//! - **Error types** ([`PiiScanError`], [`ModelError`], [`OcrError`], [`StorageError`])
//! - **Result type alias** ([`Result`])
//!
//! All fallible operations return [`Result<T>`]; collaborator errors are
//! wrapped in domain enums so third-party client types never cross module
//! boundaries.

pub mod errors;
pub mod finding;
pub mod input;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::{ModelError, OcrError, PiiScanError, StorageError};
pub use finding::{AnalysisResult, Finding, FindingOrigin};
pub use input::{AnalysisInput, ContentKind};
pub use result::Result;
