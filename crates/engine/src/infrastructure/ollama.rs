//! Ollama LLM client (OpenAI-compatible API)
//!
//! Works against any `/v1/chat/completions` endpoint. Images are sent as
//! `data:` URL content parts on the last user message, which vision models
//! served by Ollama (llava, qwen-vl, gemma3) accept.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::infrastructure::ports::{
    FinishReason, ImageData, LlmError, LlmPort, LlmRequest, LlmResponse, MessageRole, TokenUsage,
};

/// Client for Ollama's OpenAI-compatible API
#[derive(Clone)]
pub struct OllamaClient {
    client: Client,
    base_url: String,
    model: String,
}

/// Default Ollama base URL.
pub const DEFAULT_OLLAMA_BASE_URL: &str = "http://localhost:11434";

/// Default vision-capable model for Ollama.
pub const DEFAULT_OLLAMA_MODEL: &str = "llava";

impl OllamaClient {
    pub fn new(base_url: &str, model: &str, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl LlmPort for OllamaClient {
    async fn generate(&self, request: LlmRequest) -> Result<LlmResponse, LlmError> {
        let api_request = OpenAIChatRequest {
            model: self.model.clone(),
            messages: build_messages(&request),
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        tracing::debug!(
            model = %self.model,
            messages = api_request.messages.len(),
            images = request.images.len(),
            "Sending chat completion request"
        );

        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .json(&api_request)
            .send()
            .await
            .map_err(|e| LlmError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .map_err(|e| LlmError::RequestFailed(e.to_string()))?;
            return Err(LlmError::api(status.as_u16(), error_text));
        }

        let api_response: OpenAIChatResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(e.to_string()))?;

        convert_response(api_response)
    }
}

fn build_messages(request: &LlmRequest) -> Vec<OpenAIMessage> {
    let mut messages = Vec::new();

    if let Some(system) = &request.system_prompt {
        messages.push(OpenAIMessage {
            role: "system",
            content: OpenAIContent::Text(system.clone()),
        });
    }

    // Images ride on the last user message
    let image_target = request
        .messages
        .iter()
        .rposition(|m| m.role == MessageRole::User);

    for (index, msg) in request.messages.iter().enumerate() {
        let role = match msg.role {
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
        };
        let content = if Some(index) == image_target && !request.images.is_empty() {
            OpenAIContent::Parts(content_parts(&msg.content, &request.images))
        } else {
            OpenAIContent::Text(msg.content.clone())
        };
        messages.push(OpenAIMessage { role, content });
    }

    messages
}

fn content_parts(text: &str, images: &[ImageData]) -> Vec<OpenAIContentPart> {
    let mut parts = vec![OpenAIContentPart::Text {
        text: text.to_string(),
    }];
    parts.extend(images.iter().map(|image| OpenAIContentPart::ImageUrl {
        image_url: OpenAIImageUrl {
            url: image.to_data_url(),
        },
    }));
    parts
}

fn convert_response(response: OpenAIChatResponse) -> Result<LlmResponse, LlmError> {
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| LlmError::InvalidResponse("No choices in LLM response".to_string()))?;

    let finish_reason = match choice.finish_reason.as_deref() {
        Some("stop") => FinishReason::Stop,
        Some("length") => FinishReason::Length,
        Some("content_filter") => FinishReason::ContentFilter,
        _ => FinishReason::Unknown,
    };

    Ok(LlmResponse {
        content: choice.message.content.unwrap_or_default(),
        finish_reason,
        usage: response.usage.map(|u| TokenUsage {
            prompt_tokens: u.prompt_tokens,
            completion_tokens: u.completion_tokens,
            total_tokens: u.total_tokens,
        }),
    })
}

// =============================================================================
// OpenAI API types
// =============================================================================

#[derive(Debug, Serialize)]
struct OpenAIChatRequest {
    model: String,
    messages: Vec<OpenAIMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Debug, Serialize)]
struct OpenAIMessage {
    role: &'static str,
    content: OpenAIContent,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum OpenAIContent {
    Text(String),
    Parts(Vec<OpenAIContentPart>),
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum OpenAIContentPart {
    Text { text: String },
    ImageUrl { image_url: OpenAIImageUrl },
}

#[derive(Debug, Serialize)]
struct OpenAIImageUrl {
    url: String,
}

#[derive(Debug, Deserialize)]
struct OpenAIChatResponse {
    choices: Vec<OpenAIChoice>,
    usage: Option<OpenAIUsage>,
}

#[derive(Debug, Deserialize)]
struct OpenAIChoice {
    message: OpenAIResponseMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAIResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAIUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::ChatMessage;

    #[test]
    fn images_attach_to_last_user_message() {
        let request = LlmRequest::new(vec![
            ChatMessage::user("first"),
            ChatMessage::assistant("reply"),
            ChatMessage::user("what is this?"),
        ])
        .with_system_prompt("be brief")
        .with_image(ImageData::from_bytes(b"png", "image/png"));

        let value = serde_json::to_value(build_messages(&request)).expect("serializable");

        assert_eq!(value[0]["role"], "system");
        assert_eq!(value[1]["content"], "first");
        assert_eq!(value[3]["content"][0]["type"], "text");
        assert_eq!(value[3]["content"][1]["type"], "image_url");
        assert_eq!(
            value[3]["content"][1]["image_url"]["url"],
            "data:image/png;base64,cG5n"
        );
    }

    #[test]
    fn response_without_choices_is_invalid() {
        let response: OpenAIChatResponse =
            serde_json::from_str(r#"{"choices": [], "usage": null}"#).expect("valid shape");
        assert!(matches!(
            convert_response(response),
            Err(LlmError::InvalidResponse(_))
        ));
    }

    #[test]
    fn response_content_is_extracted() {
        let response: OpenAIChatResponse = serde_json::from_str(
            r#"{"choices": [{"message": {"role": "assistant", "content": "Namaste"},
                "finish_reason": "stop"}],
                "usage": {"prompt_tokens": 3, "completion_tokens": 1, "total_tokens": 4}}"#,
        )
        .expect("valid shape");
        let converted = convert_response(response).expect("has choice");
        assert_eq!(converted.content, "Namaste");
        assert_eq!(converted.finish_reason, FinishReason::Stop);
        assert_eq!(converted.usage.map(|u| u.total_tokens), Some(4));
    }
}
