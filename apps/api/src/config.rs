use std::num::NonZeroUsize;

use anyhow::{bail, Context, Result};

use crate::llm_client::cache::CachePolicy;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// How the skills/keywords reply is turned into the suggestion bundle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SuggestionSections {
    /// Substitute the text captured under each header, falling back when absent.
    #[default]
    Parsed,
    /// Always return the static fallback advice, ignoring the reply.
    Fallback,
}

impl SuggestionSections {
    fn parse(raw: &str) -> Result<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "parsed" => Ok(Self::Parsed),
            "fallback" => Ok(Self::Fallback),
            other => bail!("SUGGESTION_SECTIONS must be 'parsed' or 'fallback', got '{other}'"),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub port: u16,
    pub rust_log: String,
    pub cache_policy: CachePolicy,
    pub suggestion_sections: SuggestionSections,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            gemini_model: std::env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string()),
            gemini_base_url: std::env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_BASE_URL.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            cache_policy: match std::env::var("CACHE_CAPACITY") {
                Ok(raw) => parse_cache_policy(&raw)?,
                Err(_) => CachePolicy::Unbounded,
            },
            suggestion_sections: match std::env::var("SUGGESTION_SECTIONS") {
                Ok(raw) => SuggestionSections::parse(&raw)?,
                Err(_) => SuggestionSections::default(),
            },
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    let value = std::env::var(key)
        .with_context(|| format!("Required environment variable '{key}' is not set"))?;
    if value.trim().is_empty() {
        bail!("Required environment variable '{key}' is empty");
    }
    Ok(value)
}

/// `0` disables caching, any other number bounds it as an LRU.
fn parse_cache_policy(raw: &str) -> Result<CachePolicy> {
    let capacity = raw
        .trim()
        .parse::<usize>()
        .context("CACHE_CAPACITY must be a non-negative integer")?;
    Ok(match NonZeroUsize::new(capacity) {
        Some(capacity) => CachePolicy::Lru(capacity),
        None => CachePolicy::Disabled,
    })
}
