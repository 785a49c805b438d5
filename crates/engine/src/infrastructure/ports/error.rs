//! Error types for port operations.

/// Completion service failures.
#[derive(Debug, Clone, thiserror::Error)]
pub enum LlmError {
    /// Transport failure: connection refused, timeout, reset.
    #[error("LLM request failed: {0}")]
    RequestFailed(String),
    /// The service answered with a non-success status.
    #[error("LLM service returned {status}: {message}")]
    Api { status: u16, message: String },
    /// The body could not be read as the provider's response shape.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
    /// The provider refused to answer (safety block, empty candidates).
    #[error("Response blocked: {0}")]
    Blocked(String),
}

impl LlmError {
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Worth retrying: transport failures, rate limits and server errors.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::RequestFailed(_) => true,
            Self::Api { status, .. } => *status == 429 || *status >= 500,
            Self::InvalidResponse(_) | Self::Blocked(_) => false,
        }
    }
}

/// Speech synthesis failures.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SpeechError {
    #[error("Speech request failed: {0}")]
    RequestFailed(String),
    #[error("Speech service returned {status}: {message}")]
    Api { status: u16, message: String },
    /// Nothing left to say after cleaning the text.
    #[error("Nothing to synthesize")]
    EmptyText,
}

/// Image search failures.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ImageSearchError {
    #[error("Image search failed: {0}")]
    RequestFailed(String),
    #[error("Invalid image search response: {0}")]
    InvalidResponse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transient_errors() {
        assert!(LlmError::RequestFailed("timeout".into()).is_transient());
        assert!(LlmError::api(503, "overloaded").is_transient());
        assert!(LlmError::api(429, "slow down").is_transient());
        assert!(!LlmError::api(401, "bad key").is_transient());
        assert!(!LlmError::api(400, "bad request").is_transient());
        assert!(!LlmError::InvalidResponse("no candidates".into()).is_transient());
        assert!(!LlmError::Blocked("SAFETY".into()).is_transient());
    }
}
