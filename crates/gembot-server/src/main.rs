use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde::Serialize;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use gembot::{DomainError, PromptStore, TextGenerator};

mod config;
mod error;
mod models;
mod routes;
mod services;

use config::ServerConfig;
use error::ApiError;

/// Collaborator lifecycle: no generator exists until /api/initialize swaps
/// the state to Ready.
pub enum GeneratorState {
    Uninitialized,
    Ready(Arc<dyn TextGenerator>),
}

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<PromptStore>>,
    pub generator: Arc<RwLock<GeneratorState>>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            store: Arc::new(RwLock::new(PromptStore::new())),
            generator: Arc::new(RwLock::new(GeneratorState::Uninitialized)),
            config: Arc::new(config),
        }
    }

    /// The active generator, or the uninitialized error mapped to 500.
    pub async fn generator_handle(&self) -> Result<Arc<dyn TextGenerator>, ApiError> {
        match &*self.generator.read().await {
            GeneratorState::Ready(handle) => Ok(Arc::clone(handle)),
            GeneratorState::Uninitialized => Err(DomainError::Uninitialized.into()),
        }
    }
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Gembot API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

fn build_router(state: AppState) -> Router {
    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::initialize::router())
        .merge(routes::prompt::router())
        .merge(routes::response::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Gembot API initializing...");

    let config = ServerConfig::from_env()?;
    if config.gemini_api_key.is_none() {
        tracing::warn!(
            "No GEMINI_API_KEY set - the API structure is usable, but generation will fail until the key is configured"
        );
    }

    let addr = config.bind_addr();
    let state = AppState::new(config);
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Swagger UI: /swagger-ui");
    tracing::info!("Gembot API ready on {}", addr);

    axum::serve(listener, router).await?;
    Ok(())
}
