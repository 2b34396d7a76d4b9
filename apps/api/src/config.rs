use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::llm_client::ANTHROPIC_API_URL;

/// Which `VariantStrategy` renders the variation text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationBackend {
    Template,
    Model { api_key: String },
}

impl GenerationBackend {
    pub fn name(&self) -> &'static str {
        match self {
            GenerationBackend::Template => "template",
            GenerationBackend::Model { .. } => "model",
        }
    }
}

/// Application configuration loaded from environment variables.
/// Fails at startup if a variable is present but malformed, or if the model
/// backend is selected without an API key.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub backend: GenerationBackend,
    pub anthropic_api_url: String,
    pub generation_timeout: Duration,
    pub max_variations: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let optional = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let backend = match optional("GENERATION_BACKEND", "template")
            .trim()
            .to_ascii_lowercase()
            .as_str()
        {
            "template" => GenerationBackend::Template,
            "model" => GenerationBackend::Model {
                api_key: lookup("ANTHROPIC_API_KEY").with_context(|| {
                    "Required environment variable 'ANTHROPIC_API_KEY' is not set".to_string()
                })?,
            },
            other => bail!("GENERATION_BACKEND must be 'template' or 'model', got '{other}'"),
        };

        let timeout_secs = optional("GENERATION_TIMEOUT_SECS", "30")
            .parse::<u64>()
            .context("GENERATION_TIMEOUT_SECS must be a whole number of seconds")?;

        let max_variations = optional("MAX_VARIATIONS", "10")
            .parse::<usize>()
            .context("MAX_VARIATIONS must be a positive integer")?;
        if max_variations == 0 {
            bail!("MAX_VARIATIONS must be at least 1");
        }

        Ok(Config {
            port: optional("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: optional("RUST_LOG", "info"),
            backend,
            anthropic_api_url: optional("ANTHROPIC_API_URL", ANTHROPIC_API_URL),
            generation_timeout: Duration::from_secs(timeout_secs),
            max_variations,
        })
    }
}
