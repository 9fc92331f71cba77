//! Report rendering
//!
//! Pure string formatting of merged findings into the user-facing markdown
//! report. No I/O, no failure modes; rendering the same findings twice
//! produces identical output.

use crate::domain::Finding;

/// Label naming the content type being analyzed in the rendered report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentLabel {
    /// Raw text typed by the user
    TextInput,
    /// An uploaded text file
    TextFile,
    /// Text extracted from an image by OCR
    ImageText,
    /// An image analyzed visually
    Image,
}

impl ContentLabel {
    /// Human-readable label used in report headers
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TextInput => "text input",
            Self::TextFile => "text file",
            Self::ImageText => "image text",
            Self::Image => "image",
        }
    }
}

impl std::fmt::Display for ContentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render the analysis report for a merged finding list
pub fn render_report(findings: &[Finding], label: ContentLabel) -> String {
    if findings.is_empty() {
        return format!(
            "**No sensitive information detected**\n\n\
             Your {label} appears to be clear of personally identifiable information."
        );
    }

    let mut report = String::from("**SENSITIVE INFORMATION DETECTED**\n\n");
    report.push_str(&format!(
        "The following sensitive information was found in your {label}:\n\n"
    ));
    for finding in findings {
        report.push_str("- ");
        report.push_str(&finding.description);
        report.push('\n');
    }

    report
}
