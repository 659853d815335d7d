//! Prompt Routes - CRUD over the in-memory store
//!
//! HTTP handlers that delegate to PromptStore and map its outcomes to
//! status codes. Prompt ids are positional: a delete renumbers every record
//! behind it, so the id returned here is only valid until the next delete.

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use axum::http::StatusCode;

use crate::error::ApiError;
use crate::models::{
    CreatePromptRequest, DeletePromptResponse, ErrorBody, PromptCreatedResponse,
    PromptDetailResponse, PromptListResponse, UpdatePromptRequest, UpdatePromptResponse,
    STATUS_SUCCESS,
};
use crate::AppState;

/// Create a new prompt
#[utoipa::path(
    post,
    path = "/api/prompts",
    request_body = CreatePromptRequest,
    responses(
        (status = 201, description = "Prompt created", body = PromptCreatedResponse),
        (status = 400, description = "Missing or empty prompt", body = ErrorBody)
    ),
    tag = "Prompts"
)]
pub async fn create_prompt(
    State(state): State<AppState>,
    payload: Option<Json<CreatePromptRequest>>,
) -> Result<(StatusCode, Json<PromptCreatedResponse>), ApiError> {
    let content = payload
        .and_then(|Json(body)| body.prompt)
        .ok_or_else(|| ApiError::bad_request("Prompt field is required"))?;

    let record = state.store.write().await.create_prompt(&content)?;
    tracing::info!("Created prompt {}", record.id);

    Ok((
        StatusCode::CREATED,
        Json(PromptCreatedResponse {
            status: STATUS_SUCCESS.to_string(),
            message: "Prompt created successfully".to_string(),
            prompt_index: record.id,
            prompt: record,
        }),
    ))
}

/// Get all stored prompts
#[utoipa::path(
    get,
    path = "/api/prompts",
    responses(
        (status = 200, description = "List of all prompts", body = PromptListResponse)
    ),
    tag = "Prompts"
)]
pub async fn list_prompts(State(state): State<AppState>) -> Json<PromptListResponse> {
    let store = state.store.read().await;
    let prompts = store.list_prompts().to_vec();

    Json(PromptListResponse {
        status: STATUS_SUCCESS.to_string(),
        count: prompts.len(),
        prompts,
    })
}

/// Get a specific prompt by index
#[utoipa::path(
    get,
    path = "/api/prompts/{index}",
    params(("index" = usize, Path, description = "Prompt index")),
    responses(
        (status = 200, description = "Prompt found", body = PromptDetailResponse),
        (status = 404, description = "Index out of range", body = ErrorBody)
    ),
    tag = "Prompts"
)]
pub async fn get_prompt(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<PromptDetailResponse>, ApiError> {
    let store = state.store.read().await;
    let record = store.get_prompt(index)?.clone();

    Ok(Json(PromptDetailResponse {
        status: STATUS_SUCCESS.to_string(),
        prompt: record,
    }))
}

/// Update a prompt at the given index
#[utoipa::path(
    put,
    path = "/api/prompts/{index}",
    params(("index" = usize, Path, description = "Prompt index")),
    request_body = UpdatePromptRequest,
    responses(
        (status = 200, description = "Prompt updated", body = UpdatePromptResponse),
        (status = 400, description = "Missing or empty new_prompt", body = ErrorBody),
        (status = 404, description = "Index out of range", body = ErrorBody)
    ),
    tag = "Prompts"
)]
pub async fn update_prompt(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    payload: Option<Json<UpdatePromptRequest>>,
) -> Result<Json<UpdatePromptResponse>, ApiError> {
    let new_content = payload
        .and_then(|Json(body)| body.new_prompt)
        .ok_or_else(|| ApiError::bad_request("new_prompt field is required"))?;

    let update = state.store.write().await.update_prompt(index, &new_content)?;
    tracing::info!("Updated prompt {}", index);

    Ok(Json(UpdatePromptResponse {
        status: STATUS_SUCCESS.to_string(),
        message: "Prompt updated successfully".to_string(),
        prompt_index: update.index,
        old_prompt: update.old_content,
        new_prompt: update.new_content,
    }))
}

/// Delete a prompt at the given index
#[utoipa::path(
    delete,
    path = "/api/prompts/{index}",
    params(("index" = usize, Path, description = "Prompt index")),
    responses(
        (status = 200, description = "Prompt deleted", body = DeletePromptResponse),
        (status = 404, description = "Index out of range", body = ErrorBody)
    ),
    tag = "Prompts"
)]
pub async fn delete_prompt(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<DeletePromptResponse>, ApiError> {
    let removed = state.store.write().await.delete_prompt(index)?;
    tracing::info!("Deleted prompt {} (remaining renumbered)", removed.id);

    Ok(Json(DeletePromptResponse {
        status: STATUS_SUCCESS.to_string(),
        message: "Prompt deleted successfully".to_string(),
        deleted_prompt: removed,
    }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/prompts", get(list_prompts).post(create_prompt))
        .route(
            "/api/prompts/:index",
            get(get_prompt).put(update_prompt).delete(delete_prompt),
        )
}
