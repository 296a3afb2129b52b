use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::llm_client::gemini::DEFAULT_MODEL;

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub port: u16,
    pub rust_log: String,
    pub cors_enabled: bool,
    /// Optional per-call deadline around the generator. `None` means no deadline.
    pub generation_timeout: Option<Duration>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Parses configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |key: &str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .with_context(|| format!("Required environment variable '{key}' is not set"))
        };

        let generation_timeout = match lookup("GENERATION_TIMEOUT_SECS") {
            Some(raw) => {
                let secs = raw
                    .parse::<u64>()
                    .context("GENERATION_TIMEOUT_SECS must be a whole number of seconds")?;
                if secs == 0 {
                    bail!("GENERATION_TIMEOUT_SECS must be greater than zero");
                }
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        Ok(Config {
            database_url: require("DATABASE_URL")?,
            gemini_api_key: require("GEMINI_API_KEY")?,
            gemini_model: lookup("GEMINI_MODEL")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            cors_enabled: match lookup("CORS_ENABLED") {
                Some(raw) => parse_bool(&raw).context("CORS_ENABLED must be true or false")?,
                None => true,
            },
            generation_timeout,
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
