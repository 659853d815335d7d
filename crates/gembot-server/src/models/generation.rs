//! Generation DTOs
//!
//! Wire shapes for `/api/initialize`, response generation, and the response
//! archive listing.

use gembot::ResponseRecord;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Initialize request
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct InitializeRequest {
    /// Gemini model to use (defaults to the configured model)
    pub model: Option<String>,
}

/// Initialize response
#[derive(Debug, Serialize, ToSchema)]
pub struct InitializeResponse {
    pub status: String,
    pub message: String,
    /// Output of the connectivity probe generation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_response: Option<String>,
}

/// Generated response for a stored prompt
#[derive(Debug, Serialize, ToSchema)]
pub struct GenerationResponse {
    pub status: String,
    pub message: String,
    pub prompt_index: usize,
    pub prompt: String,
    pub response: String,
    pub response_id: usize,
}

/// Response archive listing
#[derive(Debug, Serialize, ToSchema)]
pub struct ResponseListResponse {
    pub status: String,
    pub responses: Vec<ResponseRecord>,
    pub count: usize,
}
