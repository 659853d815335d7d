//! Prompt DTOs
//!
//! Wire shapes for the prompt CRUD routes. Required body fields are `Option`
//! so a missing field surfaces as the uniform 400 payload from the handler
//! instead of a framework rejection.

use gembot::PromptRecord;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Create prompt request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePromptRequest {
    /// The prompt text
    pub prompt: Option<String>,
}

/// Update prompt request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdatePromptRequest {
    /// The new prompt text
    pub new_prompt: Option<String>,
}

/// Created prompt response
#[derive(Debug, Serialize, ToSchema)]
pub struct PromptCreatedResponse {
    pub status: String,
    pub message: String,
    pub prompt_index: usize,
    pub prompt: PromptRecord,
}

/// Prompt list response
#[derive(Debug, Serialize, ToSchema)]
pub struct PromptListResponse {
    pub status: String,
    pub prompts: Vec<PromptRecord>,
    pub count: usize,
}

/// Single prompt response
#[derive(Debug, Serialize, ToSchema)]
pub struct PromptDetailResponse {
    pub status: String,
    pub prompt: PromptRecord,
}

/// Updated prompt response
#[derive(Debug, Serialize, ToSchema)]
pub struct UpdatePromptResponse {
    pub status: String,
    pub message: String,
    pub prompt_index: usize,
    pub old_prompt: String,
    pub new_prompt: String,
}

/// Deleted prompt response
#[derive(Debug, Serialize, ToSchema)]
pub struct DeletePromptResponse {
    pub status: String,
    pub message: String,
    pub deleted_prompt: PromptRecord,
}
