//! Remote analyzer adapter
//!
//! Pairs the model transport with the fixed task instructions. The
//! instruction text is a de facto part of the contract: it requests a JSON
//! array of short finding strings, but the model is not guaranteed to
//! comply, which is why the [normalizer](super::normalizer) exists.

use crate::adapters::model::ModelClient;
use crate::domain::ModelError;
use std::sync::Arc;

/// Instruction sent alongside textual content
pub const TEXT_INSTRUCTION: &str = "Please analyze the following for any personally identifiable \
    information (PII) such as names, addresses, phone numbers, email addresses, social security \
    numbers, credit card numbers, IP addresses, and other potentially sensitive data. Provide \
    your response as a JSON array of findings. Each item in the array should be a brief \
    description of the sensitive information found. Format: [\"finding1\", \"finding2\", \
    \"finding3\"] If no sensitive information is found, return an empty array: [] ONLY return \
    the JSON array, no other text or explanation.";

/// Instruction sent alongside raw image content
pub const IMAGE_INSTRUCTION: &str = "Please examine this image for any personally identifiable \
    information (PII) such as names, addresses, phone numbers, email addresses, identification \
    documents, credit cards, license plates, and other potentially sensitive data. Provide your \
    response as a JSON array of findings. Each item in the array should be a brief description \
    of the sensitive information found. Format: [\"finding1\", \"finding2\", \"finding3\"] If no \
    sensitive information is found, return an empty array: [] ONLY return the JSON array, no \
    other text or explanation.";

/// MIME hint used for text submitted to the model
const TEXT_MIME_HINT: &str = "text/markdown";

/// Remote generative analyzer
///
/// Holds a shared transport handle; the handle is injected at construction
/// so tests can substitute a mock and no ambient global client exists.
pub struct RemoteAnalyzer {
    client: Arc<dyn ModelClient>,
}

impl RemoteAnalyzer {
    /// Create an analyzer over a model transport
    pub fn new(client: Arc<dyn ModelClient>) -> Self {
        Self { client }
    }

    /// Analyze a content blob with the image instruction
    ///
    /// Returns the raw model reply; failures surface as [`ModelError`] with
    /// the underlying cause message preserved.
    pub async fn analyze(&self, content: &[u8], mime_hint: &str) -> Result<String, ModelError> {
        self.client.send(content, mime_hint, IMAGE_INSTRUCTION).await
    }

    /// Analyze text content
    ///
    /// Convenience wrapper that submits the text as UTF-8 bytes with a
    /// markdown MIME hint and the text instruction.
    pub async fn analyze_text(&self, text: &str) -> Result<String, ModelError> {
        self.client
            .send(text.as_bytes(), TEXT_MIME_HINT, TEXT_INSTRUCTION)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Records the arguments of the last send call
    struct RecordingClient {
        last: Mutex<Option<(Vec<u8>, String, String)>>,
    }

    impl RecordingClient {
        fn new() -> Self {
            Self {
                last: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl ModelClient for RecordingClient {
        async fn send(
            &self,
            content: &[u8],
            mime_hint: &str,
            instruction: &str,
        ) -> Result<String, ModelError> {
            *self.last.lock().unwrap() = Some((
                content.to_vec(),
                mime_hint.to_string(),
                instruction.to_string(),
            ));
            Ok("[]".to_string())
        }
    }

    #[tokio::test]
    async fn test_analyze_text_uses_markdown_hint_and_text_instruction() {
        let client = Arc::new(RecordingClient::new());
        let analyzer = RemoteAnalyzer::new(client.clone());

        let reply = analyzer.analyze_text("hello world").await.unwrap();
        assert_eq!(reply, "[]");

        let (content, mime, instruction) = client.last.lock().unwrap().clone().unwrap();
        assert_eq!(content, b"hello world");
        assert_eq!(mime, "text/markdown");
        assert_eq!(instruction, TEXT_INSTRUCTION);
    }

    #[tokio::test]
    async fn test_analyze_uses_image_instruction() {
        let client = Arc::new(RecordingClient::new());
        let analyzer = RemoteAnalyzer::new(client.clone());

        analyzer.analyze(&[0xff, 0xd8], "image/jpeg").await.unwrap();

        let (_, mime, instruction) = client.last.lock().unwrap().clone().unwrap();
        assert_eq!(mime, "image/jpeg");
        assert_eq!(instruction, IMAGE_INSTRUCTION);
    }

    #[test]
    fn test_instructions_request_json_arrays() {
        assert!(TEXT_INSTRUCTION.contains("JSON array"));
        assert!(IMAGE_INSTRUCTION.contains("JSON array"));
        assert!(TEXT_INSTRUCTION.contains("empty array"));
    }
}
