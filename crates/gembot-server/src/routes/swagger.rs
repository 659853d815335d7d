//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use gembot::{PromptRecord, ResponseRecord};

use crate::models::{
    CreatePromptRequest,
    DeletePromptResponse,
    ErrorBody,
    GenerationResponse,
    InitializeRequest,
    InitializeResponse,
    PromptCreatedResponse,
    PromptDetailResponse,
    PromptListResponse,
    ResponseListResponse,
    UpdatePromptRequest,
    UpdatePromptResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::initialize::initialize,
        super::prompt::create_prompt,
        super::prompt::list_prompts,
        super::prompt::get_prompt,
        super::prompt::update_prompt,
        super::prompt::delete_prompt,
        super::response::generate_response,
        super::response::list_responses,
    ),
    components(schemas(
        PromptRecord,
        ResponseRecord,
        CreatePromptRequest,
        UpdatePromptRequest,
        InitializeRequest,
        InitializeResponse,
        PromptCreatedResponse,
        PromptListResponse,
        PromptDetailResponse,
        UpdatePromptResponse,
        DeletePromptResponse,
        GenerationResponse,
        ResponseListResponse,
        ErrorBody,
    )),
    tags(
        (name = "Initialize", description = "Gemini lifecycle"),
        (name = "Prompts", description = "Prompt CRUD operations"),
        (name = "Responses", description = "Response generation and archive")
    ),
    info(
        title = "Gembot API",
        description = "CRUD operations for managing Gemini prompt interactions"
    )
)]
pub struct ApiDoc;
