//! Analysis orchestrator
//!
//! Top-level policy of the pipeline: routes input by declared kind, invokes
//! the local scanner and the remote analyzer, falls back from OCR to direct
//! visual analysis for images without readable text, merges findings, and
//! renders the report.
//!
//! Failure policy: a remote analyzer failure never aborts the analysis.
//! The orchestrator substitutes a placeholder finding so the caller always
//! receives at least the local scanner's results. Whether such a failure
//! additionally surfaces through the status code is configurable
//! (`analysis.remote_failure_code`).

use crate::adapters::ocr::TextExtractor;
use crate::analysis::normalizer::ResponseNormalizer;
use crate::analysis::remote::RemoteAnalyzer;
use crate::analysis::report::{render_report, ContentLabel};
use crate::analysis::scanner::PatternScanner;
use crate::config::schema::AnalysisConfig;
use crate::domain::{
    AnalysisInput, AnalysisResult, ContentKind, Finding, PiiScanError, Result,
};
use std::sync::Arc;

/// Status code for the normal analysis path
pub const STATUS_OK: i32 = 0;
/// Status code signaling the visual fallback was used (OCR yielded nothing)
pub const STATUS_VISUAL_FALLBACK: i32 = 1;

/// Orchestrates one analysis invocation end to end
///
/// Stateless across requests; the scanner's detector set and the injected
/// collaborators are read-only after construction, so the orchestrator can
/// be shared behind an `Arc` by concurrent callers.
pub struct AnalysisOrchestrator {
    scanner: PatternScanner,
    analyzer: RemoteAnalyzer,
    ocr: Arc<dyn TextExtractor>,
    normalizer: ResponseNormalizer,
    remote_failure_code: Option<i32>,
}

impl AnalysisOrchestrator {
    /// Create an orchestrator over the given collaborators
    pub fn new(
        scanner: PatternScanner,
        analyzer: RemoteAnalyzer,
        ocr: Arc<dyn TextExtractor>,
        config: &AnalysisConfig,
    ) -> Self {
        Self {
            scanner,
            analyzer,
            ocr,
            normalizer: ResponseNormalizer::new(),
            remote_failure_code: config.remote_failure_code,
        }
    }

    /// Analyze one input, producing merged findings, a status code, and the
    /// rendered report
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for empty payloads or a MIME type that
    /// contradicts the declared kind, and propagates OCR/storage-level
    /// failures. Remote analyzer failures are absorbed per the placeholder
    /// policy and never surface as errors.
    pub async fn analyze(&self, input: AnalysisInput) -> Result<AnalysisResult> {
        if input.payload.is_empty() {
            return Err(PiiScanError::InvalidInput("empty content".to_string()));
        }

        match input.kind {
            ContentKind::Text => {
                let text = String::from_utf8_lossy(&input.payload);
                self.analyze_text_content(&text, ContentLabel::TextInput)
                    .await
            }
            ContentKind::TextFile => {
                if !input.mime_type.contains("text") {
                    return Err(PiiScanError::InvalidInput(format!(
                        "not a text file: {}",
                        input.mime_type
                    )));
                }
                let text = String::from_utf8_lossy(&input.payload);
                self.analyze_text_content(&text, ContentLabel::TextFile)
                    .await
            }
            ContentKind::Image => {
                if !input.mime_type.starts_with("image/") {
                    return Err(PiiScanError::InvalidInput(format!(
                        "not an image: {}",
                        input.mime_type
                    )));
                }
                self.analyze_image(&input).await
            }
        }
    }

    /// Text path: local scan plus remote text analysis, merged local-first
    async fn analyze_text_content(
        &self,
        text: &str,
        label: ContentLabel,
    ) -> Result<AnalysisResult> {
        let local = self.scanner.scan(text);
        tracing::debug!(
            label = %label,
            local_findings = local.len(),
            "Local scan complete"
        );

        let (remote, remote_failed) = match self.analyzer.analyze_text(text).await {
            Ok(reply) => (self.normalize_reply(&reply), false),
            Err(e) => (vec![self.placeholder_finding(&e)], true),
        };

        let mut findings = local;
        findings.extend(remote);

        let status_code = self.resolve_status(STATUS_OK, remote_failed);
        let report = render_report(&findings, label);

        tracing::info!(
            label = %label,
            findings = findings.len(),
            status_code,
            "Analysis complete"
        );

        Ok(AnalysisResult::new(findings, status_code, report))
    }

    /// Image path: OCR extraction first, direct visual analysis when the
    /// image holds no readable text
    async fn analyze_image(&self, input: &AnalysisInput) -> Result<AnalysisResult> {
        let extracted = self.ocr.extract_text(&input.payload).await?;

        if !extracted.trim().is_empty() {
            tracing::info!(
                extracted_chars = extracted.len(),
                "OCR extracted text, analyzing as text content"
            );
            return self
                .analyze_text_content(&extracted, ContentLabel::ImageText)
                .await;
        }

        tracing::info!("No readable text in image, falling back to direct visual analysis");

        let (findings, remote_failed) =
            match self.analyzer.analyze(&input.payload, &input.mime_type).await {
                Ok(reply) => (self.normalize_reply(&reply), false),
                Err(e) => (vec![self.placeholder_finding(&e)], true),
            };

        let status_code = self.resolve_status(STATUS_VISUAL_FALLBACK, remote_failed);
        let report = render_report(&findings, ContentLabel::Image);

        tracing::info!(
            findings = findings.len(),
            status_code,
            "Visual analysis complete"
        );

        Ok(AnalysisResult::new(findings, status_code, report))
    }

    /// Normalize a raw reply into remote findings
    fn normalize_reply(&self, reply: &str) -> Vec<Finding> {
        self.normalizer
            .normalize(reply)
            .into_iter()
            .map(Finding::remote)
            .collect()
    }

    /// Placeholder substituted when the remote analyzer fails
    fn placeholder_finding(&self, error: &crate::domain::ModelError) -> Finding {
        tracing::warn!(error = %error, "Remote analysis failed, substituting placeholder");
        Finding::remote(format!("AI analysis unavailable: {error}"))
    }

    /// Path status, optionally overridden on total remote failure
    fn resolve_status(&self, path_status: i32, remote_failed: bool) -> i32 {
        if remote_failed {
            self.remote_failure_code.unwrap_or(path_status)
        } else {
            path_status
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::model::ModelClient;
    use crate::domain::{ModelError, OcrError};
    use async_trait::async_trait;

    struct FixedClient {
        reply: std::result::Result<String, ()>,
    }

    #[async_trait]
    impl ModelClient for FixedClient {
        async fn send(
            &self,
            _content: &[u8],
            _mime_hint: &str,
            _instruction: &str,
        ) -> std::result::Result<String, ModelError> {
            match &self.reply {
                Ok(reply) => Ok(reply.clone()),
                Err(()) => Err(ModelError::ConnectionFailed("refused".to_string())),
            }
        }
    }

    struct FixedOcr {
        text: String,
    }

    #[async_trait]
    impl crate::adapters::ocr::TextExtractor for FixedOcr {
        async fn extract_text(&self, _image: &[u8]) -> std::result::Result<String, OcrError> {
            Ok(self.text.clone())
        }
    }

    fn orchestrator(reply: std::result::Result<String, ()>, ocr_text: &str) -> AnalysisOrchestrator {
        let client = Arc::new(FixedClient { reply });
        AnalysisOrchestrator::new(
            PatternScanner::new().unwrap(),
            RemoteAnalyzer::new(client),
            Arc::new(FixedOcr {
                text: ocr_text.to_string(),
            }),
            &AnalysisConfig::default(),
        )
    }

    #[tokio::test]
    async fn test_empty_payload_rejected() {
        let orch = orchestrator(Ok("[]".to_string()), "");
        let result = orch.analyze(AnalysisInput::text("")).await;
        assert!(matches!(result, Err(PiiScanError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_text_file_mime_mismatch_rejected() {
        let orch = orchestrator(Ok("[]".to_string()), "");
        let input = AnalysisInput::text_file(b"data".to_vec(), "application/pdf");
        let result = orch.analyze(input).await;
        assert!(matches!(result, Err(PiiScanError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_image_mime_mismatch_rejected() {
        let orch = orchestrator(Ok("[]".to_string()), "");
        let input = AnalysisInput::image(b"data".to_vec(), "text/plain");
        let result = orch.analyze(input).await;
        assert!(matches!(result, Err(PiiScanError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_local_findings_precede_remote() {
        let orch = orchestrator(Ok(r#"["remote finding"]"#.to_string()), "");
        let result = orch
            .analyze(AnalysisInput::text("mail: a@b.com"))
            .await
            .unwrap();

        assert_eq!(result.status_code, STATUS_OK);
        assert_eq!(result.findings.len(), 2);
        assert!(result.findings[0].is_local());
        assert!(result.findings[1].is_remote());
        assert_eq!(result.findings[1].description, "remote finding");
    }

    #[tokio::test]
    async fn test_remote_failure_substitutes_placeholder() {
        let orch = orchestrator(Err(()), "");
        let result = orch
            .analyze(AnalysisInput::text("mail: a@b.com"))
            .await
            .unwrap();

        // local result survives, status stays on the normal path
        assert_eq!(result.status_code, STATUS_OK);
        assert_eq!(result.local_count(), 1);
        assert_eq!(result.remote_count(), 1);
        assert!(result.findings[1]
            .description
            .starts_with("AI analysis unavailable:"));
    }

    #[tokio::test]
    async fn test_remote_failure_code_override() {
        let client = Arc::new(FixedClient { reply: Err(()) });
        let orch = AnalysisOrchestrator::new(
            PatternScanner::new().unwrap(),
            RemoteAnalyzer::new(client),
            Arc::new(FixedOcr {
                text: String::new(),
            }),
            &AnalysisConfig {
                remote_failure_code: Some(-2),
            },
        );

        let result = orch.analyze(AnalysisInput::text("hello")).await.unwrap();
        assert_eq!(result.status_code, -2);
    }

    #[tokio::test]
    async fn test_image_with_ocr_text_takes_text_path() {
        let orch = orchestrator(Ok("[]".to_string()), "call me: 555-123-4567");
        let input = AnalysisInput::image(vec![0xff, 0xd8, 0xff], "image/jpeg");
        let result = orch.analyze(input).await.unwrap();

        assert_eq!(result.status_code, STATUS_OK);
        assert_eq!(result.local_count(), 1);
        assert!(result.report.contains("image text"));
    }

    #[tokio::test]
    async fn test_image_without_text_uses_visual_fallback() {
        let orch = orchestrator(Ok(r#"["face visible"]"#.to_string()), "   ");
        let input = AnalysisInput::image(vec![0xff, 0xd8, 0xff], "image/jpeg");
        let result = orch.analyze(input).await.unwrap();

        assert_eq!(result.status_code, STATUS_VISUAL_FALLBACK);
        assert_eq!(result.local_count(), 0);
        assert_eq!(result.remote_count(), 1);
        assert!(result.report.contains("image"));
    }
}
