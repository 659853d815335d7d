//! Request/Response DTOs

pub mod generation;
pub mod prompt;

pub use generation::{
    GenerationResponse, InitializeRequest, InitializeResponse, ResponseListResponse,
};
pub use prompt::{
    CreatePromptRequest, DeletePromptResponse, PromptCreatedResponse, PromptDetailResponse,
    PromptListResponse, UpdatePromptRequest, UpdatePromptResponse,
};

use serde::Serialize;
use utoipa::ToSchema;

pub const STATUS_SUCCESS: &str = "success";

/// Uniform error payload returned by every failing route.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub status: String,
    pub message: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
        }
    }
}
