//! Engine configuration read from the environment.
//!
//! Supported variables:
//! - `LLM_PROVIDER`: `gemini` (default) or `ollama`
//! - `GEMINI_API_KEY`, `GEMINI_MODEL`
//! - `OLLAMA_BASE_URL` (alias `OLLAMA_URL`), `OLLAMA_MODEL`
//! - `LLM_MAX_RETRIES`, `LLM_TIMEOUT_SECS`
//! - `AZURE_SPEECH_KEY`, `AZURE_SPEECH_REGION`, `SPEECH_TIMEOUT_SECS`
//! - `IMAGE_SEARCH_TIMEOUT_SECS`, `IMAGE_CACHE_TTL_SECS`, `GALLERY_SIZE`
//! - `MAX_HISTORY_TURNS`

use std::str::FromStr;
use std::time::Duration;

use crate::infrastructure::gemini::DEFAULT_GEMINI_MODEL;
use crate::infrastructure::ollama::{DEFAULT_OLLAMA_BASE_URL, DEFAULT_OLLAMA_MODEL};

pub const DEFAULT_MAX_RETRIES: u32 = 2;
pub const DEFAULT_LLM_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_SPEECH_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_IMAGE_SEARCH_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_MAX_HISTORY_TURNS: usize = 20;
pub const DEFAULT_GALLERY_SIZE: usize = 4;
pub const DEFAULT_IMAGE_CACHE_TTL_SECS: u64 = 3600;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LlmProvider {
    Gemini,
    Ollama,
}

impl FromStr for LlmProvider {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gemini" | "google" => Ok(Self::Gemini),
            "ollama" | "openai" => Ok(Self::Ollama),
            other => Err(ConfigError::UnknownProvider(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AzureSpeechConfig {
    pub key: String,
    pub region: String,
}

#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub llm_provider: LlmProvider,
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub ollama_base_url: String,
    pub ollama_model: String,
    pub llm_max_retries: u32,
    pub llm_timeout: Duration,
    /// Speech is disabled when absent.
    pub azure_speech: Option<AzureSpeechConfig>,
    pub speech_timeout: Duration,
    pub image_search_timeout: Duration,
    pub image_cache_ttl: Duration,
    pub gallery_size: usize,
    pub max_history_turns: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            llm_provider: LlmProvider::Gemini,
            gemini_api_key: None,
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            ollama_base_url: DEFAULT_OLLAMA_BASE_URL.to_string(),
            ollama_model: DEFAULT_OLLAMA_MODEL.to_string(),
            llm_max_retries: DEFAULT_MAX_RETRIES,
            llm_timeout: Duration::from_secs(DEFAULT_LLM_TIMEOUT_SECS),
            azure_speech: None,
            speech_timeout: Duration::from_secs(DEFAULT_SPEECH_TIMEOUT_SECS),
            image_search_timeout: Duration::from_secs(DEFAULT_IMAGE_SEARCH_TIMEOUT_SECS),
            image_cache_ttl: Duration::from_secs(DEFAULT_IMAGE_CACHE_TTL_SECS),
            gallery_size: DEFAULT_GALLERY_SIZE,
            max_history_turns: DEFAULT_MAX_HISTORY_TURNS,
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable source. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let llm_provider = match var("LLM_PROVIDER") {
            Some(value) => value.parse()?,
            None => defaults.llm_provider,
        };

        let gemini_api_key = var("GEMINI_API_KEY").or_else(|| var("GOOGLE_API_KEY"));
        if llm_provider == LlmProvider::Gemini && gemini_api_key.is_none() {
            return Err(ConfigError::MissingVar("GEMINI_API_KEY"));
        }

        let azure_speech = match (var("AZURE_SPEECH_KEY"), var("AZURE_SPEECH_REGION")) {
            (Some(key), Some(region)) => Some(AzureSpeechConfig { key, region }),
            (Some(_), None) | (None, Some(_)) => {
                tracing::warn!(
                    "Only one of AZURE_SPEECH_KEY / AZURE_SPEECH_REGION is set, speech disabled"
                );
                None
            }
            (None, None) => None,
        };

        Ok(Self {
            llm_provider,
            gemini_api_key,
            gemini_model: var("GEMINI_MODEL").unwrap_or(defaults.gemini_model),
            ollama_base_url: var("OLLAMA_BASE_URL")
                .or_else(|| var("OLLAMA_URL"))
                .unwrap_or(defaults.ollama_base_url),
            ollama_model: var("OLLAMA_MODEL").unwrap_or(defaults.ollama_model),
            llm_max_retries: number(&var, "LLM_MAX_RETRIES", DEFAULT_MAX_RETRIES),
            llm_timeout: seconds(&var, "LLM_TIMEOUT_SECS", DEFAULT_LLM_TIMEOUT_SECS),
            azure_speech,
            speech_timeout: seconds(&var, "SPEECH_TIMEOUT_SECS", DEFAULT_SPEECH_TIMEOUT_SECS),
            image_search_timeout: seconds(
                &var,
                "IMAGE_SEARCH_TIMEOUT_SECS",
                DEFAULT_IMAGE_SEARCH_TIMEOUT_SECS,
            ),
            image_cache_ttl: seconds(&var, "IMAGE_CACHE_TTL_SECS", DEFAULT_IMAGE_CACHE_TTL_SECS),
            gallery_size: number(&var, "GALLERY_SIZE", DEFAULT_GALLERY_SIZE),
            max_history_turns: number(&var, "MAX_HISTORY_TURNS", DEFAULT_MAX_HISTORY_TURNS),
        })
    }
}

fn number<T>(var: &impl Fn(&str) -> Option<String>, name: &str, default: T) -> T
where
    T: FromStr + Copy + std::fmt::Display,
{
    let Some(raw) = var(name) else {
        return default;
    };
    match raw.trim().parse::<T>() {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!(
                var = name,
                value = %raw,
                default = %default,
                "Invalid number in environment, using default"
            );
            default
        }
    }
}

fn seconds(var: &impl Fn(&str) -> Option<String>, name: &str, default: u64) -> Duration {
    Duration::from_secs(number(var, name, default))
}

/// Errors that can occur while loading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable {0}")]
    MissingVar(&'static str),
    #[error("Unknown LLM provider '{0}' (expected gemini or ollama)")]
    UnknownProvider(String),
}
