//! Command implementations

pub mod file;
pub mod text;
pub mod validate;

use crate::adapters::model::GeminiClient;
use crate::adapters::ocr::TesseractOcr;
use crate::analysis::{AnalysisOrchestrator, PatternScanner, RemoteAnalyzer};
use crate::config::PiiScanConfig;
use crate::domain::Result;
use std::sync::Arc;

/// Build the analysis pipeline from configuration
///
/// Constructs the model client once from the injected configuration and
/// wires it through the orchestrator by reference.
pub(crate) fn build_orchestrator(config: &PiiScanConfig) -> Result<AnalysisOrchestrator> {
    let client = Arc::new(GeminiClient::new(config.model.clone())?);
    let ocr = Arc::new(TesseractOcr::new(&config.ocr));
    let scanner = PatternScanner::new()?;

    Ok(AnalysisOrchestrator::new(
        scanner,
        RemoteAnalyzer::new(client),
        ocr,
        &config.analysis,
    ))
}

/// Map an analysis status code to a process exit code
///
/// Status 1 (visual fallback) is informational, not a failure; negative
/// upstream codes exit non-zero.
pub(crate) fn exit_code_for_status(status_code: i32) -> i32 {
    if status_code < 0 {
        1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_mapping() {
        assert_eq!(exit_code_for_status(0), 0);
        assert_eq!(exit_code_for_status(1), 0);
        assert_eq!(exit_code_for_status(-1), 1);
        assert_eq!(exit_code_for_status(-2), 1);
    }
}
