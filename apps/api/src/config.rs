use anyhow::{Context, Result};

use crate::store::DEFAULT_FEED_LIMIT;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    /// Without a database URL, records live in process memory only.
    pub database_url: Option<String>,
    pub redis_url: String,
    pub anthropic_api_key: String,
    pub port: u16,
    pub rust_log: String,
    /// Prefix joined onto cover image file names, e.g. `/covers` or a CDN origin.
    pub cover_base_url: String,
    /// Default page size of the finalized interview feed.
    pub feed_limit: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: std::env::var("DATABASE_URL").ok().filter(|u| !u.is_empty()),
            redis_url: require_env("REDIS_URL")?,
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            cover_base_url: std::env::var("COVER_BASE_URL")
                .unwrap_or_else(|_| "/covers".to_string()),
            feed_limit: std::env::var("FEED_LIMIT")
                .unwrap_or_else(|_| DEFAULT_FEED_LIMIT.to_string())
                .parse::<u32>()
                .context("FEED_LIMIT must be a positive integer")?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
