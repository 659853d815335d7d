//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Clone, Error)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Prompt index {index} not found (stored prompts: {count})")]
    NotFound { index: usize, count: usize },

    #[error("Generator not initialized")]
    Uninitialized,

    #[error("Generation failed: {0}")]
    Generation(String),
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(index: usize, count: usize) -> Self {
        Self::NotFound { index, count }
    }

    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation(message.into())
    }
}
