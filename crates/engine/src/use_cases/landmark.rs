//! Landmark identification use case.
//!
//! One best-effort vision call per image. Never fails: service errors and
//! unparseable answers both come back as an unidentified result.

use std::sync::Arc;
use timetraveler_domain::LandmarkIdentification;

use crate::infrastructure::ports::{ChatMessage, ImageData, LlmPort, LlmRequest};
use crate::prompt_templates;
use crate::use_cases::response_parser;

const IDENTIFY_TEMPERATURE: f32 = 0.2;

pub struct LandmarkIdentifier {
    llm: Arc<dyn LlmPort>,
}

impl LandmarkIdentifier {
    pub fn new(llm: Arc<dyn LlmPort>) -> Self {
        Self { llm }
    }

    pub async fn identify(&self, image: &ImageData) -> LandmarkIdentification {
        let request = LlmRequest::new(vec![ChatMessage::user(
            prompt_templates::identification_prompt(),
        )])
        .with_temperature(IDENTIFY_TEMPERATURE)
        .with_image(image.clone());

        let raw = match self.llm.generate(request).await {
            Ok(response) => response.content,
            Err(e) => {
                tracing::warn!(error = %e, "Landmark identification request failed");
                return LandmarkIdentification::unidentified(format!("Error: {e}"));
            }
        };

        match response_parser::extract_json_as::<LandmarkIdentification>(&raw) {
            Ok(identification) => {
                tracing::info!(
                    landmark = %identification.name,
                    confidence = %identification.confidence,
                    identified = identification.identified,
                    "Landmark identified"
                );
                identification
            }
            Err(e) => {
                tracing::warn!(error = %e, "Could not parse landmark identification");
                LandmarkIdentification::unidentified(raw)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{LlmError, LlmResponse, MockLlmPort};
    use timetraveler_domain::Confidence;

    fn photo() -> ImageData {
        ImageData::from_bytes(b"\xff\xd8\xff", "image/jpeg")
    }

    #[tokio::test]
    async fn fenced_answer_is_parsed() {
        let mut llm = MockLlmPort::new();
        llm.expect_generate()
            .withf(|request| request.images.len() == 1 && request.messages.len() == 1)
            .times(1)
            .returning(|_| {
                Ok(LlmResponse::text(
                    "Here you go:\n```json\n{\"identified\": true, \"landmark_name\": \"Taj Mahal\", \
                     \"location\": \"Agra, India\", \"confidence\": \"High\"}\n```",
                ))
            });

        let result = LandmarkIdentifier::new(Arc::new(llm)).identify(&photo()).await;

        assert!(result.identified);
        assert_eq!(result.name, "Taj Mahal");
        assert_eq!(result.confidence, Confidence::High);
        assert_eq!(result.era, "Unknown");
    }

    #[tokio::test]
    async fn unparseable_answer_keeps_raw_text() {
        let mut llm = MockLlmPort::new();
        llm.expect_generate()
            .returning(|_| Ok(LlmResponse::text("I think it's a temple?")));

        let result = LandmarkIdentifier::new(Arc::new(llm)).identify(&photo()).await;

        assert!(!result.identified);
        assert_eq!(result.confidence, Confidence::None);
        assert_eq!(result.visual_elements, "I think it's a temple?");
    }

    #[tokio::test]
    async fn service_failure_is_reported_not_raised() {
        let mut llm = MockLlmPort::new();
        llm.expect_generate()
            .times(1)
            .returning(|_| Err(LlmError::RequestFailed("connection refused".into())));

        let result = LandmarkIdentifier::new(Arc::new(llm)).identify(&photo()).await;

        assert!(!result.identified);
        assert!(result.visual_elements.starts_with("Error: "));
        assert!(result.visual_elements.contains("connection refused"));
    }
}
