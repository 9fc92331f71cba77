//! Response normalizer
//!
//! Converts the raw model reply into a list of finding descriptions. The
//! model is asked for a JSON array of strings but is not guaranteed to
//! comply, so the normalizer layers fallback tiers:
//!
//! 1. Strip a surrounding code fence, strict-parse as a JSON array of
//!    strings. Success returns the array, even if empty.
//! 2. Line-oriented extraction of bulleted (`•`, `-`, `*`) or numbered
//!    (`N.`) list items.
//! 3. A non-blank reply that matched nothing becomes one finding.
//! 4. A blank reply yields no findings.
//!
//! Every tier is total; a parse failure is a transition to the next tier,
//! never an error.

use regex::Regex;

/// Tiered parser for raw model replies
pub struct ResponseNormalizer {
    bullet: Regex,
    numbered: Regex,
}

impl ResponseNormalizer {
    /// Create a normalizer with compiled list-marker patterns
    pub fn new() -> Self {
        Self {
            bullet: Regex::new(r"^[•\-*]\s+(.+)$").unwrap(),
            numbered: Regex::new(r"^\d+\.\s+(.+)$").unwrap(),
        }
    }

    /// Normalize a raw reply into finding descriptions
    pub fn normalize(&self, raw: &str) -> Vec<String> {
        if raw.trim().is_empty() {
            return Vec::new();
        }

        if let Some(items) = self.parse_json_array(raw) {
            return items;
        }

        let items = self.extract_list_items(raw);
        if !items.is_empty() {
            return items;
        }

        tracing::debug!("Reply matched no list structure, treating it as a single finding");
        vec![raw.trim().to_string()]
    }

    /// Tier 1: strict JSON array of strings, tolerating a code fence
    fn parse_json_array(&self, raw: &str) -> Option<Vec<String>> {
        let cleaned = strip_code_fence(raw);

        match serde_json::from_str::<Vec<String>>(cleaned) {
            Ok(items) => Some(items),
            Err(e) => {
                tracing::debug!(
                    error = %e,
                    "Reply is not a JSON array of strings, falling back to list extraction"
                );
                None
            }
        }
    }

    /// Tier 2: collect bulleted or numbered list lines, in original order
    fn extract_list_items(&self, raw: &str) -> Vec<String> {
        let mut items = Vec::new();

        for line in raw.lines() {
            let line = line.trim();
            let captured = self
                .bullet
                .captures(line)
                .or_else(|| self.numbered.captures(line));

            if let Some(caps) = captured {
                let item = caps[1].trim();
                if !item.is_empty() {
                    items.push(item.to_string());
                }
            }
        }

        items
    }
}

impl Default for ResponseNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Strip a leading "```"/"```json" marker line and a trailing "```" marker
fn strip_code_fence(raw: &str) -> &str {
    let mut content = raw.trim();

    if let Some(rest) = content.strip_prefix("```") {
        // drop the info string (e.g. "json") up to the end of the line
        content = match rest.find('\n') {
            Some(newline) => &rest[newline + 1..],
            None => rest,
        };
    }

    let trimmed = content.trim_end();
    if let Some(rest) = trimmed.strip_suffix("```") {
        content = rest;
    }

    content.trim()
}
