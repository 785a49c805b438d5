//! Gemini LLM client (REST `generateContent`).
//!
//! Images go inline as base64 parts on the last user turn; the system prompt
//! travels as `systemInstruction`. Assistant turns use Gemini's `model` role.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::infrastructure::ports::{
    FinishReason, ImageData, LlmError, LlmPort, LlmRequest, LlmResponse, MessageRole, TokenUsage,
};

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Default multimodal model.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: &str, model: &str, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            api_key: api_key.to_string(),
            model: model.to_string(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl LlmPort for GeminiClient {
    async fn generate(&self, request: LlmRequest) -> Result<LlmResponse, LlmError> {
        let body = build_request(&request);

        tracing::debug!(
            model = %self.model,
            turns = body.contents.len(),
            images = request.images.len(),
            "Sending generateContent request"
        );

        let url = format!(
            "{BASE_URL}/{model}:generateContent?key={key}",
            model = self.model,
            key = self.api_key
        );

        let response = self
            .client
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read Gemini error body".to_string());
            return Err(LlmError::api(status.as_u16(), error_message(&body_text)));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(e.to_string()))?;

        convert_response(parsed)
    }
}

fn build_request(request: &LlmRequest) -> GenerateContentRequest {
    let image_target = request
        .messages
        .iter()
        .rposition(|m| m.role == MessageRole::User);

    let contents = request
        .messages
        .iter()
        .enumerate()
        .map(|(index, msg)| {
            let role = match msg.role {
                MessageRole::User => "user",
                MessageRole::Assistant => "model",
            };
            let mut parts = vec![Part::Text {
                text: msg.content.clone(),
            }];
            if Some(index) == image_target {
                parts.extend(request.images.iter().map(inline_part));
            }
            Content { role, parts }
        })
        .collect();

    let system_instruction = request.system_prompt.as_ref().map(|text| SystemInstruction {
        parts: vec![Part::Text { text: text.clone() }],
    });

    let generation_config = if request.temperature.is_some() || request.max_tokens.is_some() {
        Some(GenerationConfig {
            temperature: request.temperature,
            max_output_tokens: request.max_tokens,
        })
    } else {
        None
    };

    GenerateContentRequest {
        contents,
        system_instruction,
        generation_config,
    }
}

fn inline_part(image: &ImageData) -> Part {
    Part::InlineData {
        inline_data: InlineData {
            mime_type: image.media_type.clone(),
            data: image.data.clone(),
        },
    }
}

fn convert_response(response: GenerateContentResponse) -> Result<LlmResponse, LlmError> {
    if let Some(reason) = response.prompt_feedback.and_then(|f| f.block_reason) {
        return Err(LlmError::Blocked(reason));
    }

    let candidate = response
        .candidates
        .and_then(|candidates| candidates.into_iter().next())
        .ok_or_else(|| LlmError::InvalidResponse("Gemini returned no candidates".to_string()))?;

    let finish_reason = match candidate.finish_reason.as_deref() {
        Some("STOP") => FinishReason::Stop,
        Some("MAX_TOKENS") => FinishReason::Length,
        Some("SAFETY") | Some("BLOCKLIST") | Some("PROHIBITED_CONTENT") => {
            FinishReason::ContentFilter
        }
        _ => FinishReason::Unknown,
    };

    let text: String = candidate
        .content
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect()
        })
        .unwrap_or_default();

    if text.is_empty() && finish_reason == FinishReason::ContentFilter {
        return Err(LlmError::Blocked("SAFETY".to_string()));
    }

    Ok(LlmResponse {
        content: text,
        finish_reason,
        usage: response.usage_metadata.map(|u| TokenUsage {
            prompt_tokens: u.prompt_token_count,
            completion_tokens: u.candidates_token_count,
            total_tokens: u.total_token_count,
        }),
    })
}

/// Pull `status: message` out of Gemini's error envelope, or return the raw body.
fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorWrapper>(body)
        .ok()
        .and_then(|wrapper| {
            let message = wrapper.error.message?;
            Some(match wrapper.error.status {
                Some(status) if !status.is_empty() => format!("{status}: {message}"),
                _ => message,
            })
        })
        .unwrap_or_else(|| body.to_string())
}

// =============================================================================
// Gemini API types
// =============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<SystemInstruction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content {
    role: &'static str,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct SystemInstruction {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
    prompt_feedback: Option<PromptFeedback>,
    usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<ContentResponse>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    #[serde(default)]
    prompt_token_count: u32,
    #[serde(default)]
    candidates_token_count: u32,
    #[serde(default)]
    total_token_count: u32,
}

#[derive(Debug, Deserialize)]
struct ErrorWrapper {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    status: Option<String>,
}
