//! Server configuration
//!
//! Read from the environment (a local `.env` is loaded by `main` before
//! this runs). The Gemini credential is optional at startup: the service
//! stands up without it, but `/api/initialize` and generation will fail.

use anyhow::{Context, Result};
use std::env;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5500;
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Environment-derived server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub gemini_api_key: Option<String>,
    pub default_model: String,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        let host = env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = match env::var("PORT") {
            Ok(value) => value
                .parse()
                .with_context(|| format!("Invalid PORT value: {value}"))?,
            Err(_) => DEFAULT_PORT,
        };

        let gemini_api_key = env::var("GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());
        let default_model =
            env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        Ok(Self {
            host,
            port,
            gemini_api_key,
            default_model,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
