//! Analysis input model

use serde::{Deserialize, Serialize};

/// Declared kind of the submitted content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    /// Raw text typed by the user
    Text,
    /// An uploaded textual file (*.txt, *.md)
    TextFile,
    /// An uploaded image file
    Image,
}

/// Content submitted for one pipeline invocation
///
/// Owned exclusively by that invocation and never persisted.
#[derive(Debug, Clone)]
pub struct AnalysisInput {
    /// Raw content bytes
    pub payload: Vec<u8>,
    /// Declared content kind, used to route the analysis
    pub kind: ContentKind,
    /// MIME type of the payload
    pub mime_type: String,
}

impl AnalysisInput {
    /// Create an input for raw user text
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            payload: text.into().into_bytes(),
            kind: ContentKind::Text,
            mime_type: "text/plain".to_string(),
        }
    }

    /// Create an input for an uploaded text file
    pub fn text_file(payload: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            payload,
            kind: ContentKind::TextFile,
            mime_type: mime_type.into(),
        }
    }

    /// Create an input for an uploaded image
    pub fn image(payload: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            payload,
            kind: ContentKind::Image,
            mime_type: mime_type.into(),
        }
    }
}
