//! Detector library for local PII scanning
//!
//! Detectors are declared in a TOML document as an array of tables so that
//! declaration order survives parsing; the scanner reports findings in
//! detector declaration order.

use crate::domain::{PiiScanError, Result};
use fancy_regex::Regex;
use serde::Deserialize;

/// Detector definition from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct DetectorDefinition {
    /// Category name, e.g. "Email Address"
    pub name: String,
    /// Regex pattern for this category
    pub pattern: String,
}

/// Detector library container
#[derive(Debug, Deserialize)]
struct DetectorLibrary {
    detectors: Vec<DetectorDefinition>,
}

/// Compiled detector with its category name
#[derive(Debug)]
pub struct CompiledDetector {
    /// Category name reported in finding descriptions
    pub name: String,
    /// Compiled regex (fancy-regex: the SSN pattern needs lookahead)
    pub regex: Regex,
}

/// Ordered registry of compiled detectors
pub struct DetectorRegistry {
    detectors: Vec<CompiledDetector>,
}

impl DetectorRegistry {
    /// Create a registry from TOML content
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the TOML is malformed or a pattern
    /// fails to compile. A malformed detector library is a programming
    /// error, not a runtime condition.
    pub fn from_toml(content: &str) -> Result<Self> {
        let library: DetectorLibrary = toml::from_str(content)
            .map_err(|e| PiiScanError::Configuration(format!("Failed to parse detector library: {e}")))?;

        let mut detectors = Vec::with_capacity(library.detectors.len());
        for def in library.detectors {
            let regex = Regex::new(&def.pattern).map_err(|e| {
                PiiScanError::Configuration(format!(
                    "Invalid regex in detector '{}': {e}",
                    def.name
                ))
            })?;
            detectors.push(CompiledDetector {
                name: def.name,
                regex,
            });
        }

        if detectors.is_empty() {
            return Err(PiiScanError::Configuration(
                "Detector library contains no detectors".to_string(),
            ));
        }

        Ok(Self { detectors })
    }

    /// Create the default registry from the embedded detector library
    pub fn default_detectors() -> Result<Self> {
        let default_toml = include_str!("../../../patterns/pii_patterns.toml");
        Self::from_toml(default_toml)
    }

    /// All detectors in declaration order
    pub fn all(&self) -> &[CompiledDetector] {
        &self.detectors
    }

    /// Number of detectors
    pub fn len(&self) -> usize {
        self.detectors.len()
    }

    /// Check whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.detectors.is_empty()
    }
}
