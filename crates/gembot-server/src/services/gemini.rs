//! Gemini client - text generation via the Generative Language API
//!
//! Calls `models/{model}:generateContent` with a single user turn and
//! returns the candidate text. One attempt per call; failures carry the API's
//! `error.message` when the error body is parseable.

use async_trait::async_trait;
use gembot::{DomainError, TextGenerator};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Client for the Gemini generateContent endpoint.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    /// Creates a new client using the provided API key.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// Generate text for a single prompt.
    pub async fn generate_content(&self, prompt: &str) -> Result<String, GeminiError> {
        let url = format!(
            "{}/{model}:generateContent?key={api_key}",
            BASE_URL,
            model = self.model,
            api_key = self.api_key
        );

        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|err| GeminiError::RequestFailed(err.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(map_http_error(status, body));
        }

        let payload: GenerateContentResponse = response
            .json()
            .await
            .map_err(|err| GeminiError::ParseError(err.to_string()))?;

        extract_text(&payload).ok_or(GeminiError::EmptyResponse)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, DomainError> {
        self.generate_content(prompt)
            .await
            .map_err(|err| DomainError::generation(err.to_string()))
    }

    fn model_id(&self) -> &str {
        &self.model
    }
}

// ============================================
// Request/Response Types
// ============================================

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

/// Gemini call error types
#[derive(Debug, Clone, thiserror::Error)]
pub enum GeminiError {
    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Gemini API error ({status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("Gemini returned no candidate text")]
    EmptyResponse,
}

// ============================================
// Helper Functions
// ============================================

/// Join the non-empty candidate parts into one answer.
fn extract_text(payload: &GenerateContentResponse) -> Option<String> {
    let mut collected = Vec::new();
    for candidate in &payload.candidates {
        let Some(content) = &candidate.content else {
            continue;
        };
        for part in &content.parts {
            if let Some(text) = part.text.as_deref() {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    collected.push(trimmed.to_string());
                }
            }
        }
    }

    if collected.is_empty() {
        None
    } else {
        Some(collected.join("\n\n"))
    }
}

fn map_http_error(status: StatusCode, body: String) -> GeminiError {
    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|json| {
            json.get("error")
                .and_then(|err| err.get("message"))
                .and_then(|msg| msg.as_str())
                .map(|msg| msg.to_string())
        })
        .unwrap_or(body);

    GeminiError::ApiError {
        status: status.as_u16(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_text_joins_candidate_parts() {
        let payload: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{"text": "Hello"}, {"text": "  "}, {"text": "world"}]
                }
            }]
        }))
        .unwrap();

        assert_eq!(extract_text(&payload).as_deref(), Some("Hello\n\nworld"));
    }

    #[test]
    fn test_extract_text_handles_missing_candidates() {
        let payload: GenerateContentResponse = serde_json::from_value(json!({})).unwrap();
        assert!(extract_text(&payload).is_none());

        let payload: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{"finishReason": "SAFETY"}]
        }))
        .unwrap();
        assert!(extract_text(&payload).is_none());
    }

    #[test]
    fn test_map_http_error_extracts_api_message() {
        let body = json!({
            "error": {"code": 400, "message": "API key not valid", "status": "INVALID_ARGUMENT"}
        })
        .to_string();

        match map_http_error(StatusCode::BAD_REQUEST, body) {
            GeminiError::ApiError { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "API key not valid");
            }
            other => panic!("expected ApiError, got {other:?}"),
        }
    }

    #[test]
    fn test_map_http_error_falls_back_to_raw_body() {
        match map_http_error(StatusCode::SERVICE_UNAVAILABLE, "upstream down".to_string()) {
            GeminiError::ApiError { status, message } => {
                assert_eq!(status, 503);
                assert_eq!(message, "upstream down");
            }
            other => panic!("expected ApiError, got {other:?}"),
        }
    }
}
