//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Text and vision completion (could swap Gemini -> Ollama/OpenAI)
//! - Speech synthesis (could swap Azure -> other neural TTS)
//! - Image search (could swap Wikipedia -> other)
//! - Clock (for testing)

mod error;
mod external;
mod testing;

// =============================================================================
// External Service Ports
// =============================================================================
pub use external::{
    ChatMessage, FinishReason, ImageData, ImageSearchPort, LlmPort, LlmRequest, LlmResponse,
    MessageRole, SpeechPort, TokenUsage,
};

// =============================================================================
// Test-Only Mocks (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use external::{MockImageSearchPort, MockLlmPort, MockSpeechPort};

#[cfg(test)]
pub use testing::MockClockPort;

// =============================================================================
// Testing Ports
// =============================================================================
pub use testing::ClockPort;

// =============================================================================
// Error Types
// =============================================================================
pub use error::{ImageSearchError, LlmError, SpeechError};
