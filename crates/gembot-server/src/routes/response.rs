//! Response Routes - Generation and the response archive
//!
//! Generation snapshots the prompt under a read guard, performs the Gemini
//! call with no lock held, then archives the outcome under a write guard.
//! The archived record keeps the prompt index and content as they were at
//! generation time.

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};

use crate::error::ApiError;
use crate::models::{ErrorBody, GenerationResponse, ResponseListResponse, STATUS_SUCCESS};
use crate::AppState;

/// Generate a Gemini response for the prompt at the given index
#[utoipa::path(
    post,
    path = "/api/prompts/{index}/response",
    params(("index" = usize, Path, description = "Prompt index")),
    responses(
        (status = 200, description = "Response generated", body = GenerationResponse),
        (status = 400, description = "Generation failed", body = ErrorBody),
        (status = 404, description = "Index out of range", body = ErrorBody),
        (status = 500, description = "Gemini not initialized", body = ErrorBody)
    ),
    tag = "Responses"
)]
pub async fn generate_response(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<GenerationResponse>, ApiError> {
    let generator = state.generator_handle().await?;

    // Snapshot the prompt before releasing the lock for the remote call
    let content = {
        let store = state.store.read().await;
        store.get_prompt(index)?.content.clone()
    };

    let generated = generator.generate(&content).await?;

    let record = state
        .store
        .write()
        .await
        .record_response(index, &content, &generated);
    tracing::info!(
        "Generated response {} for prompt {} via {}",
        record.id,
        index,
        generator.model_id()
    );

    Ok(Json(GenerationResponse {
        status: STATUS_SUCCESS.to_string(),
        message: "Response generated successfully".to_string(),
        prompt_index: index,
        prompt: record.prompt,
        response: record.response,
        response_id: record.id,
    }))
}

/// Get all archived responses
#[utoipa::path(
    get,
    path = "/api/responses",
    responses(
        (status = 200, description = "List of all responses", body = ResponseListResponse)
    ),
    tag = "Responses"
)]
pub async fn list_responses(State(state): State<AppState>) -> Json<ResponseListResponse> {
    let store = state.store.read().await;
    let responses = store.list_responses().to_vec();

    Json(ResponseListResponse {
        status: STATUS_SUCCESS.to_string(),
        count: responses.len(),
        responses,
    })
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/prompts/:index/response", post(generate_response))
        .route("/api/responses", get(list_responses))
}
