//! Domain error types
//!
//! All errors are domain-specific and don't expose third-party types.
//! Collaborator failures (model, OCR, storage) get their own sub-enums so
//! the orchestrator can apply a different policy per collaborator.

use thiserror::Error;

/// Main piiscan error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum PiiScanError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Input rejected before any detector runs (empty payload, unsupported
    /// content kind for the declared MIME type)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Remote generative-model errors
    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    /// OCR extraction errors
    #[error("OCR error: {0}")]
    Ocr(#[from] OcrError),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Errors calling the external generative analysis model
///
/// These errors don't expose the underlying HTTP client types; the cause
/// message is carried verbatim so it can surface in placeholder findings.
#[derive(Debug, Clone, Error)]
pub enum ModelError {
    /// Failed to reach the model endpoint
    #[error("Failed to connect to model endpoint: {0}")]
    ConnectionFailed(String),

    /// Credentials rejected (401/403)
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Client error (4xx)
    #[error("Client error: {status} - {message}")]
    ClientError { status: u16, message: String },

    /// Server error (5xx)
    #[error("Server error: {status} - {message}")]
    ServerError { status: u16, message: String },

    /// Reply could not be decoded or contained no usable text
    #[error("Invalid response from model: {0}")]
    InvalidResponse(String),

    /// Request timed out
    #[error("Request timeout: {0}")]
    Timeout(String),
}

/// Errors from the OCR text-extraction engine
#[derive(Debug, Error)]
pub enum OcrError {
    /// The OCR engine could not be started or exited with a failure
    #[error("OCR engine failed: {0}")]
    EngineFailed(String),

    /// I/O failure while feeding the engine
    #[error("OCR I/O error: {0}")]
    Io(String),
}

/// Errors from the file storage collaborator
#[derive(Debug, Error)]
pub enum StorageError {
    /// Named file does not exist
    #[error("File not found: {0}")]
    NotFound(String),

    /// Name rejected by sanitization (path separators, traversal)
    #[error("Invalid file name: {0}")]
    InvalidName(String),

    /// I/O failure reading the file
    #[error("Storage I/O error: {0}")]
    Io(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for PiiScanError {
    fn from(err: std::io::Error) -> Self {
        PiiScanError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for PiiScanError {
    fn from(err: serde_json::Error) -> Self {
        PiiScanError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for PiiScanError {
    fn from(err: toml::de::Error) -> Self {
        PiiScanError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piiscan_error_display() {
        let err = PiiScanError::InvalidInput("empty content".to_string());
        assert_eq!(err.to_string(), "Invalid input: empty content");
    }

    #[test]
    fn test_model_error_conversion() {
        let model_err = ModelError::ConnectionFailed("network unreachable".to_string());
        let err: PiiScanError = model_err.into();
        assert!(matches!(err, PiiScanError::Model(_)));
        assert!(err.to_string().contains("network unreachable"));
    }

    #[test]
    fn test_ocr_error_conversion() {
        let ocr_err = OcrError::EngineFailed("tesseract not found".to_string());
        let err: PiiScanError = ocr_err.into();
        assert!(matches!(err, PiiScanError::Ocr(_)));
    }

    #[test]
    fn test_storage_error_conversion() {
        let storage_err = StorageError::NotFound("upload.txt".to_string());
        let err: PiiScanError = storage_err.into();
        assert!(matches!(err, PiiScanError::Storage(_)));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: PiiScanError = io_err.into();
        assert!(matches!(err, PiiScanError::Io(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: PiiScanError = toml_err.into();
        assert!(matches!(err, PiiScanError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_errors_implement_std_error() {
        let err = ModelError::Timeout("30s".to_string());
        let _: &dyn std::error::Error = &err;
        let err = PiiScanError::Other("test".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
