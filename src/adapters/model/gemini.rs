//! Gemini transport implementation
//!
//! Calls the Gemini `generateContent` REST endpoint with two content
//! blocks: the submitted blob as an inline-data part and the task
//! instruction as a text part. The reply text is the concatenation of the
//! first candidate's text parts.
//!
//! The API key is injected from configuration and held in a [`Secret`];
//! there is no shared global client.

use super::ModelClient;
use crate::config::schema::ModelConfig;
use crate::domain::ModelError;
use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use reqwest::{Client, ClientBuilder, StatusCode};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Gemini REST API client
pub struct GeminiClient {
    base_url: String,
    model: String,
    config: ModelConfig,
    client: Client,
}

impl GeminiClient {
    /// Create a client from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: ModelConfig) -> Result<Self, ModelError> {
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ModelError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            config,
            client,
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

#[async_trait]
impl ModelClient for GeminiClient {
    async fn send(
        &self,
        content: &[u8],
        mime_hint: &str,
        instruction: &str,
    ) -> Result<String, ModelError> {
        let request = GenerateContentRequest {
            contents: vec![
                Content {
                    parts: vec![Part::inline(mime_hint, content)],
                },
                Content {
                    parts: vec![Part::text(instruction)],
                },
            ],
        };

        tracing::debug!(
            endpoint = %self.endpoint(),
            mime_hint = %mime_hint,
            content_bytes = content.len(),
            "Sending content to model"
        );

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", self.config.api_key.expose_secret().as_ref())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ModelError::Timeout(e.to_string())
                } else {
                    ModelError::ConnectionFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            let body = response.text().await.unwrap_or_default();
            return Err(ModelError::AuthenticationFailed(format!(
                "{status}: {body}"
            )));
        }
        if status.is_server_error() {
            let body = response.text().await.unwrap_or_default();
            return Err(ModelError::ServerError {
                status: status.as_u16(),
                message: body,
            });
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ModelError::ClientError {
                status: status.as_u16(),
                message: body,
            });
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ModelError::InvalidResponse(e.to_string()))?;

        reply_text(&parsed).ok_or_else(|| {
            ModelError::InvalidResponse("model reply contained no text parts".to_string())
        })
    }
}

/// Concatenate the text parts of the first candidate
fn reply_text(response: &GenerateContentResponse) -> Option<String> {
    let candidate = response.candidates.as_ref()?.first()?;
    let parts = candidate.content.as_ref()?.parts.as_ref()?;

    let text: String = parts
        .iter()
        .filter_map(|p| p.text.as_deref())
        .collect::<Vec<_>>()
        .join("");

    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

impl Part {
    fn text(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
            inline_data: None,
        }
    }

    fn inline(mime_type: &str, data: &[u8]) -> Self {
        Self {
            text: None,
            inline_data: Some(InlineData {
                mime_type: mime_type.to_string(),
                data: general_purpose::STANDARD.encode(data),
            }),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    parts: Option<Vec<CandidatePart>>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}
