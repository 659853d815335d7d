//! Initialize Route - Gemini lifecycle
//!
//! Builds a fresh Gemini client for the requested model, probes it once, and
//! swaps the shared generator lifecycle to Ready. The prompt store is owned
//! by the process and is never touched by re-initialization.

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use gembot::TextGenerator;

use crate::error::ApiError;
use crate::models::{ErrorBody, InitializeRequest, InitializeResponse, STATUS_SUCCESS};
use crate::services::GeminiClient;
use crate::{AppState, GeneratorState};

const PROBE_PROMPT: &str = "Hello from Gemini!";

/// Initialize Gemini with custom settings
#[utoipa::path(
    post,
    path = "/api/initialize",
    request_body = InitializeRequest,
    responses(
        (status = 200, description = "Gemini initialized", body = InitializeResponse),
        (status = 400, description = "Probe generation failed", body = ErrorBody),
        (status = 500, description = "Credential not configured", body = ErrorBody)
    ),
    tag = "Initialize"
)]
pub async fn initialize(
    State(state): State<AppState>,
    payload: Option<Json<InitializeRequest>>,
) -> Result<Json<InitializeResponse>, ApiError> {
    let payload = payload.map(|Json(body)| body).unwrap_or_default();

    let api_key = state
        .config
        .gemini_api_key
        .clone()
        .ok_or_else(|| ApiError::internal("GEMINI_API_KEY is not configured"))?;

    let model = payload
        .model
        .unwrap_or_else(|| state.config.default_model.clone());
    let client = GeminiClient::new(api_key, model.clone());

    // Probe the API connection before exposing the handle
    let test_response = client.generate(PROBE_PROMPT).await?;

    *state.generator.write().await = GeneratorState::Ready(Arc::new(client));
    tracing::info!("Gemini initialized with model: {}", model);

    Ok(Json(InitializeResponse {
        status: STATUS_SUCCESS.to_string(),
        message: format!("Gemini initialized successfully with model: {model}"),
        test_response: Some(test_response),
    }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/initialize", post(initialize))
}
