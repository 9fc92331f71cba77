//! OCR text extraction
//!
//! The orchestrator consumes OCR through the [`TextExtractor`] trait; the
//! production implementation shells out to the tesseract CLI.

pub mod tesseract;

pub use tesseract::TesseractOcr;

use crate::domain::OcrError;
use async_trait::async_trait;

/// Extracts readable text from image bytes
#[async_trait]
pub trait TextExtractor: Send + Sync {
    /// Extract text from an image
    ///
    /// An empty (or whitespace-only) string means the engine found no
    /// readable text; that is a normal outcome, not an error.
    async fn extract_text(&self, image: &[u8]) -> Result<String, OcrError>;
}
