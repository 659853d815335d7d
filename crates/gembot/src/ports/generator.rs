//! Text Generator Port
//!
//! Abstract interface for the hosted generative-model call. Implementations
//! live in infrastructure crates; the domain only sees text in, text out.

use async_trait::async_trait;

use crate::domain::errors::DomainError;

/// Hosted text-generation interface.
///
/// One synchronous attempt per call: no retry, no timeout policy beyond the
/// transport's own. Failures surface as [`DomainError::Generation`] with the
/// provider's message embedded.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate a completion for a single prompt.
    async fn generate(&self, prompt: &str) -> Result<String, DomainError>;

    /// The model ID requests are sent to (e.g. "gemini-1.5-flash").
    fn model_id(&self) -> &str;
}
