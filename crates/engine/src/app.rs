//! Application state and composition.

use std::sync::Arc;

use crate::config::{ConfigError, EngineConfig, LlmProvider};
use crate::infrastructure::{
    azure_speech::AzureSpeechClient,
    clock::SystemClock,
    gemini::GeminiClient,
    ollama::OllamaClient,
    ports::{ClockPort, ImageSearchPort, LlmPort, SpeechPort},
    resilient_llm::{ResilientLlmClient, RetryConfig},
    wikipedia::WikipediaImageSearch,
};
use crate::use_cases;

/// Main application state.
///
/// Holds the shared ports and use cases. Conversation state is not here: each
/// caller owns its own [`use_cases::SessionContext`].
pub struct App {
    pub llm: Arc<dyn LlmPort>,
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub landmark: Arc<use_cases::LandmarkIdentifier>,
    pub persona: Arc<use_cases::PersonaResolver>,
    pub conversation: Arc<use_cases::ConversationEngine>,
    pub gallery: Arc<use_cases::GalleryService>,
    pub narrator: Arc<use_cases::Narrator>,
    pub journey: use_cases::Journey,
}

impl App {
    /// Build the real adapters described by `config` and wire them up.
    pub fn from_config(config: &EngineConfig) -> Result<Self, ConfigError> {
        let completion: Arc<dyn LlmPort> = match config.llm_provider {
            LlmProvider::Gemini => {
                let api_key = config
                    .gemini_api_key
                    .as_deref()
                    .ok_or(ConfigError::MissingVar("GEMINI_API_KEY"))?;
                tracing::info!(model = %config.gemini_model, "Using Gemini for completions");
                Arc::new(GeminiClient::new(
                    api_key,
                    &config.gemini_model,
                    config.llm_timeout,
                ))
            }
            LlmProvider::Ollama => {
                tracing::info!(
                    base_url = %config.ollama_base_url,
                    model = %config.ollama_model,
                    "Using Ollama for completions"
                );
                Arc::new(OllamaClient::new(
                    &config.ollama_base_url,
                    &config.ollama_model,
                    config.llm_timeout,
                ))
            }
        };

        let retry_config = RetryConfig::default().with_max_retries(config.llm_max_retries);
        tracing::info!(
            max_retries = retry_config.max_retries,
            base_delay_ms = retry_config.base_delay_ms,
            "LLM client configured with retry"
        );
        let llm: Arc<dyn LlmPort> = Arc::new(ResilientLlmClient::new(completion, retry_config));

        let speech: Option<Arc<dyn SpeechPort>> = match &config.azure_speech {
            Some(azure) => {
                tracing::info!(region = %azure.region, "Narration enabled");
                Some(Arc::new(AzureSpeechClient::new(
                    &azure.key,
                    &azure.region,
                    config.speech_timeout,
                )))
            }
            None => {
                tracing::info!("Narration disabled, no speech service configured");
                None
            }
        };

        let search: Arc<dyn ImageSearchPort> =
            Arc::new(WikipediaImageSearch::new(config.image_search_timeout));
        let clock: Arc<dyn ClockPort> = Arc::new(SystemClock::new());

        Ok(Self::new(llm, speech, search, clock, config))
    }

    /// Wire use cases around already-built ports.
    pub fn new(
        llm: Arc<dyn LlmPort>,
        speech: Option<Arc<dyn SpeechPort>>,
        search: Arc<dyn ImageSearchPort>,
        clock: Arc<dyn ClockPort>,
        config: &EngineConfig,
    ) -> Self {
        let landmark = Arc::new(use_cases::LandmarkIdentifier::new(llm.clone()));
        let persona = Arc::new(use_cases::PersonaResolver::new(llm.clone()));
        let conversation = Arc::new(use_cases::ConversationEngine::new(
            llm.clone(),
            clock,
            config.max_history_turns,
        ));
        let gallery = Arc::new(use_cases::GalleryService::new(
            search,
            config.image_cache_ttl,
            config.gallery_size,
        ));
        let narrator = Arc::new(use_cases::Narrator::new(speech));

        let journey = use_cases::Journey::new(
            landmark.clone(),
            persona.clone(),
            conversation.clone(),
            gallery.clone(),
            narrator.clone(),
        );

        Self {
            llm,
            use_cases: UseCases {
                landmark,
                persona,
                conversation,
                gallery,
                narrator,
                journey,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AzureSpeechConfig;

    #[test]
    fn gemini_without_key_is_rejected() {
        let config = EngineConfig::default();
        let err = App::from_config(&config).err().expect("missing key");
        assert!(matches!(err, ConfigError::MissingVar("GEMINI_API_KEY")));
    }

    #[test]
    fn ollama_builds_without_speech() {
        let config = EngineConfig {
            llm_provider: LlmProvider::Ollama,
            ..EngineConfig::default()
        };
        let app = App::from_config(&config).expect("ollama needs no key");
        assert!(!app.use_cases.narrator.is_enabled());
        assert_eq!(app.use_cases.gallery.gallery_size(), config.gallery_size);
    }

    #[test]
    fn speech_config_enables_narration() {
        let config = EngineConfig {
            gemini_api_key: Some("test-key".into()),
            azure_speech: Some(AzureSpeechConfig {
                key: "speech-key".into(),
                region: "eastus".into(),
            }),
            ..EngineConfig::default()
        };
        let app = App::from_config(&config).expect("complete config");
        assert!(app.use_cases.narrator.is_enabled());
    }
}
