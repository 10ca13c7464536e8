use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    /// Google Gemini API key. Only required when `offline_mode` is false.
    pub gemini_api_key: String,
    /// When true, the canned analyst is used and the external model is never
    /// called. Intended for dev/offline environments.
    pub offline_mode: bool,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let offline_mode = std::env::var("OFFLINE_MODE")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let gemini_api_key = if offline_mode {
            std::env::var("GEMINI_API_KEY").unwrap_or_default()
        } else {
            require_env("GEMINI_API_KEY")?
        };

        Ok(Config {
            gemini_api_key,
            offline_mode,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
