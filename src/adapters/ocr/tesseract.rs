//! Tesseract CLI text extractor

use super::TextExtractor;
use crate::config::schema::OcrConfig;
use crate::domain::OcrError;
use async_trait::async_trait;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// OCR engine backed by the `tesseract` command-line tool
///
/// Streams the image over stdin and reads the recognized text from stdout
/// (`tesseract stdin stdout -l <lang>`). Command and language come from
/// configuration.
pub struct TesseractOcr {
    command: String,
    language: String,
}

impl TesseractOcr {
    /// Create an extractor from configuration
    pub fn new(config: &OcrConfig) -> Self {
        Self {
            command: config.command.clone(),
            language: config.language.clone(),
        }
    }
}

#[async_trait]
impl TextExtractor for TesseractOcr {
    async fn extract_text(&self, image: &[u8]) -> Result<String, OcrError> {
        let mut child = Command::new(&self.command)
            .arg("stdin")
            .arg("stdout")
            .arg("-l")
            .arg(&self.language)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                OcrError::EngineFailed(format!("failed to spawn '{}': {e}", self.command))
            })?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| OcrError::Io("failed to open engine stdin".to_string()))?;
        stdin
            .write_all(image)
            .await
            .map_err(|e| OcrError::Io(e.to_string()))?;
        drop(stdin);

        let output = child
            .wait_with_output()
            .await
            .map_err(|e| OcrError::Io(e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(OcrError::EngineFailed(format!(
                "'{}' exited with {}: {}",
                self.command,
                output.status,
                stderr.trim()
            )));
        }

        let text = String::from_utf8_lossy(&output.stdout).trim().to_string();
        tracing::debug!(extracted_chars = text.len(), "OCR extraction finished");
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_from_config() {
        let ocr = TesseractOcr::new(&OcrConfig::default());
        assert_eq!(ocr.command, "tesseract");
        assert_eq!(ocr.language, "eng");
    }

    #[tokio::test]
    async fn test_missing_engine_is_engine_failed() {
        let ocr = TesseractOcr::new(&OcrConfig {
            command: "definitely-not-a-real-ocr-binary".to_string(),
            language: "eng".to_string(),
        });

        let result = ocr.extract_text(&[0u8; 4]).await;
        assert!(matches!(result, Err(OcrError::EngineFailed(_))));
    }
}
