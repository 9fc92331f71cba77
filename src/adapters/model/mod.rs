//! Generative model transport
//!
//! The pipeline talks to the model through the [`ModelClient`] trait so the
//! orchestrator can be exercised with a mock transport in tests.

pub mod gemini;

pub use gemini::GeminiClient;

use crate::domain::ModelError;
use async_trait::async_trait;

/// Transport to an external generative analysis model
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Send a content blob and a task instruction, returning the raw
    /// textual reply
    ///
    /// The call is synchronous from the pipeline's point of view: one
    /// request, one reply, no retries.
    async fn send(
        &self,
        content: &[u8],
        mime_hint: &str,
        instruction: &str,
    ) -> Result<String, ModelError>;
}
