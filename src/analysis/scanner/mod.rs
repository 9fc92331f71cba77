//! Local pattern scanner
//!
//! Stateless regex-based PII detection over raw text. The scanner walks the
//! input line by line and evaluates every detector of the registry against
//! each line, emitting one [`Finding`] per match with the 1-based line
//! number as location hint.
//!
//! Ordering contract: findings on a line appear in detector declaration
//! order, then in match order within the line. Identical substrings matched
//! twice both appear; there is no deduplication.

pub mod patterns;

use crate::domain::{Finding, Result};
use patterns::DetectorRegistry;
use std::sync::Arc;

/// Regex-based local PII scanner
///
/// Pure and shareable: the detector set is read-only after construction, so
/// one scanner can serve concurrent invocations.
pub struct PatternScanner {
    registry: Arc<DetectorRegistry>,
}

impl PatternScanner {
    /// Create a scanner with the built-in detector library
    pub fn new() -> Result<Self> {
        let registry = DetectorRegistry::default_detectors()?;
        Ok(Self {
            registry: Arc::new(registry),
        })
    }

    /// Create a scanner with a custom detector registry
    pub fn with_registry(registry: DetectorRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    /// Scan text for sensitive information
    ///
    /// Never fails: malformed input produces no matches, and a regex
    /// evaluation error on a pathological line skips that detector for the
    /// line. Absence of matches yields an empty vector.
    pub fn scan(&self, text: &str) -> Vec<Finding> {
        let mut findings = Vec::new();

        for (index, line) in text.lines().enumerate() {
            let line_number = (index + 1) as u32;

            for detector in self.registry.all() {
                for matched in detector.regex.find_iter(line) {
                    let matched = match matched {
                        Ok(m) => m,
                        Err(e) => {
                            // fancy-regex backtracking limit hit; skip the match
                            tracing::debug!(
                                detector = %detector.name,
                                line = line_number,
                                error = %e,
                                "Skipping match after regex evaluation error"
                            );
                            continue;
                        }
                    };

                    findings.push(Finding::local(
                        format!("{} detected -> '{}'", detector.name, matched.as_str()),
                        line_number,
                    ));
                }
            }
        }

        findings
    }

    /// Number of detectors in the active registry
    pub fn detector_count(&self) -> usize {
        self.registry.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scanner() -> PatternScanner {
        PatternScanner::new().unwrap()
    }

    #[test]
    fn test_clean_text_yields_nothing() {
        let findings = scanner().scan("nothing sensitive here\njust plain prose");
        assert!(findings.is_empty());
    }

    #[test]
    fn test_email_and_ssn_on_one_line() {
        let findings = scanner().scan("Contact me at a@b.com or 123-45-6789");

        assert_eq!(findings.len(), 2);
        assert_eq!(
            findings[0].description,
            "Email Address detected -> 'a@b.com'"
        );
        assert_eq!(findings[0].line, Some(1));
        assert_eq!(
            findings[1].description,
            "Social Security Number detected -> '123-45-6789'"
        );
        assert_eq!(findings[1].line, Some(1));
    }

    #[test]
    fn test_line_numbers_are_one_based() {
        let findings = scanner().scan("clean\nmail me: x@y.org\n");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].line, Some(2));
    }

    #[test]
    fn test_detector_order_then_match_order() {
        // Two emails then an IP on the same line: emails first (detector
        // order), left to right within the detector.
        let findings = scanner().scan("b@c.de then a@b.com from 10.0.0.1");
        let descriptions: Vec<&str> =
            findings.iter().map(|f| f.description.as_str()).collect();
        assert_eq!(
            descriptions,
            vec![
                "Email Address detected -> 'b@c.de'",
                "Email Address detected -> 'a@b.com'",
                "IP Address (IPv4) detected -> '10.0.0.1'",
            ]
        );
    }

    #[test]
    fn test_no_deduplication() {
        let findings = scanner().scan("10.0.0.1 10.0.0.1");
        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].description, findings[1].description);
    }

    #[test]
    fn test_all_findings_are_local() {
        let findings = scanner().scan("call (555) 123-4567");
        assert!(!findings.is_empty());
        assert!(findings.iter().all(|f| f.is_local()));
    }

    #[test]
    fn test_does_not_panic_on_odd_input() {
        let s = scanner();
        assert!(s.scan("").is_empty());
        assert!(s.scan("\n\n\n").is_empty());
        let _ = s.scan("\u{0}\u{fffd} mixed \t bytes");
        let long_line = "a".repeat(100_000);
        let _ = s.scan(&long_line);
    }
}
