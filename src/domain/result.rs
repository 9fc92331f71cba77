//! Result type alias for piiscan operations

use super::errors::PiiScanError;

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, PiiScanError>;
