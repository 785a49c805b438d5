//! Persona resolution use cases.
//!
//! Three operations, each with a deterministic fallback that needs no parsing:
//! - [`PersonaResolver::resolve_primary`]: the builder or commissioner, in full
//! - [`PersonaResolver::resolve_alternatives`]: other figures, in brief
//! - [`PersonaResolver::expand`]: a brief candidate made conversational

use std::collections::HashSet;
use std::sync::Arc;

use serde_json::Value;
use timetraveler_domain::{
    common::is_blank, LandmarkFacts, LandmarkIdentification, Persona, PersonaCandidate,
};

use crate::infrastructure::ports::{ChatMessage, LlmPort, LlmRequest};
use crate::prompt_templates;
use crate::use_cases::response_parser::{self, ResponseParser};

/// Most alternatives ever offered.
pub const MAX_ALTERNATIVES: usize = 5;

const PERSONA_TEMPERATURE: f32 = 0.7;

pub struct PersonaResolver {
    llm: Arc<dyn LlmPort>,
    list_parser: ResponseParser,
}

impl PersonaResolver {
    pub fn new(llm: Arc<dyn LlmPort>) -> Self {
        Self {
            llm,
            list_parser: ResponseParser::for_lists(),
        }
    }

    /// The person most directly responsible for the landmark's creation.
    ///
    /// Falls back to [`Persona::fallback_historian`] when the landmark is not
    /// identified, the call fails, or the answer lacks required fields.
    pub async fn resolve_primary(&self, identification: &LandmarkIdentification) -> Persona {
        let fallback = || Persona::fallback_historian(&identification.name);

        if !identification.is_usable() {
            tracing::debug!("Landmark not identified, using the historian");
            return fallback();
        }

        let Some(raw) = self
            .complete(prompt_templates::primary_persona_prompt(identification))
            .await
        else {
            return fallback();
        };

        match response_parser::extract_json_as::<Persona>(&raw) {
            Ok(mut persona) if persona.has_required_fields() => {
                persona.fill_defaults();
                tracing::info!(
                    persona = %persona.name,
                    landmark = %identification.name,
                    "Resolved primary persona"
                );
                persona
            }
            Ok(persona) => {
                tracing::warn!(
                    name = %persona.name,
                    "Primary persona is missing required fields, using the historian"
                );
                fallback()
            }
            Err(e) => {
                tracing::warn!(error = %e, "Could not parse primary persona, using the historian");
                fallback()
            }
        }
    }

    /// Up to five other figures connected to the landmark. Empty on any failure.
    pub async fn resolve_alternatives(
        &self,
        identification: &LandmarkIdentification,
    ) -> Vec<PersonaCandidate> {
        if !identification.is_usable() {
            return Vec::new();
        }

        let Some(raw) = self
            .complete(prompt_templates::alternatives_prompt(identification))
            .await
        else {
            return Vec::new();
        };

        let Some(value) = self.list_parser.extract_json(&raw) else {
            tracing::warn!("Could not parse alternative personas");
            return Vec::new();
        };

        let candidates = candidates_from(value);
        tracing::info!(
            landmark = %identification.name,
            count = candidates.len(),
            "Resolved alternative personas"
        );
        candidates
    }

    /// Turn a brief candidate into a full persona.
    ///
    /// `name`, `title`, `era` and `avatar_glyph` always come from the
    /// candidate, whatever the model answered.
    pub async fn expand(&self, candidate: &PersonaCandidate, landmark: &LandmarkFacts) -> Persona {
        let fallback = || Persona::from_candidate(candidate, &landmark.name);

        let Some(raw) = self
            .complete(prompt_templates::expansion_prompt(candidate, landmark))
            .await
        else {
            return fallback();
        };

        match response_parser::extract_json_as::<Persona>(&raw) {
            Ok(mut persona) => {
                persona.name = candidate.name.clone();
                persona.title = candidate.title.clone();
                persona.era = candidate.era.clone();
                persona.avatar_glyph = candidate.avatar_glyph.clone();
                persona.fill_defaults();
                tracing::info!(persona = %persona.name, "Expanded persona candidate");
                persona
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    candidate = %candidate.name,
                    "Could not parse expanded persona, synthesizing from candidate"
                );
                fallback()
            }
        }
    }

    async fn complete(&self, prompt: String) -> Option<String> {
        let request =
            LlmRequest::new(vec![ChatMessage::user(prompt)]).with_temperature(PERSONA_TEMPERATURE);

        match self.llm.generate(request).await {
            Ok(response) => Some(response.content),
            Err(e) => {
                tracing::warn!(error = %e, "Persona request failed");
                None
            }
        }
    }
}

/// Accept a bare array, an object wrapping one, or a single object.
fn candidates_from(value: Value) -> Vec<PersonaCandidate> {
    let items = match value {
        Value::Array(items) => items,
        Value::Object(map) => {
            let nested = map.values().find(|v| v.is_array()).cloned();
            match nested {
                Some(Value::Array(items)) => items,
                _ => vec![Value::Object(map)],
            }
        }
        _ => Vec::new(),
    };

    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter_map(|item| serde_json::from_value::<PersonaCandidate>(item).ok())
        .filter(|candidate| !is_blank(&candidate.name))
        .filter(|candidate| seen.insert(candidate.name.trim().to_lowercase()))
        .map(|mut candidate| {
            candidate.fill_defaults();
            candidate
        })
        .take(MAX_ALTERNATIVES)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{LlmError, LlmResponse, MockLlmPort};
    use timetraveler_domain::{Confidence, VoiceGender, KNOWLEDGE_CUTOFF_MARKER};

    fn taj_mahal() -> LandmarkIdentification {
        LandmarkIdentification {
            identified: true,
            name: "Taj Mahal".to_string(),
            location: "Agra, India".to_string(),
            confidence: Confidence::High,
            visual_elements: "white marble dome, minarets".to_string(),
            architectural_style: "Mughal".to_string(),
            era: "17th Century".to_string(),
        }
    }

    fn replying(text: &'static str) -> Arc<MockLlmPort> {
        let mut llm = MockLlmPort::new();
        llm.expect_generate()
            .times(1)
            .returning(move |_| Ok(LlmResponse::text(text)));
        Arc::new(llm)
    }

    fn failing() -> Arc<MockLlmPort> {
        let mut llm = MockLlmPort::new();
        llm.expect_generate()
            .returning(|_| Err(LlmError::api(503, "unavailable")));
        Arc::new(llm)
    }

    /// No expectations: any call panics the test.
    fn silent() -> Arc<MockLlmPort> {
        Arc::new(MockLlmPort::new())
    }

    #[tokio::test]
    async fn taj_mahal_resolves_to_shah_jahan() {
        let llm = replying(
            r#"```json
{"name": "Shah Jahan", "title": "Mughal Emperor", "era": "17th Century",
 "region": "Agra, Mughal India", "avatar": "🕌",
 "relationship": "Commissioned the Taj Mahal in memory of Mumtaz Mahal",
 "personality_traits": ["devoted", "grand"], "voice_gender": "male", "voice_age": "old"}
```"#,
        );

        let persona = PersonaResolver::new(llm).resolve_primary(&taj_mahal()).await;

        assert_eq!(persona.name, "Shah Jahan");
        assert_eq!(persona.title, "Mughal Emperor");
        assert_eq!(persona.avatar_glyph, "🕌");
        assert!(persona.system_instruction.contains("You are Shah Jahan"));
        assert!(persona.system_instruction.contains(KNOWLEDGE_CUTOFF_MARKER));
        assert_eq!(persona.speaking_style, "thoughtful and measured");
    }

    #[tokio::test]
    async fn unidentified_landmark_gets_the_historian_without_a_call() {
        let resolver = PersonaResolver::new(silent());
        let unidentified = LandmarkIdentification::unidentified("blurry");

        let persona = resolver.resolve_primary(&unidentified).await;
        assert_eq!(persona.name, "The Historian");
        assert!(persona.has_required_fields());
        assert!(persona.system_instruction.contains(KNOWLEDGE_CUTOFF_MARKER));

        assert!(resolver.resolve_alternatives(&unidentified).await.is_empty());
    }

    #[tokio::test]
    async fn missing_required_fields_fall_back() {
        let llm = replying(r#"{"name": "Shah Jahan", "title": "Emperor"}"#);
        let persona = PersonaResolver::new(llm).resolve_primary(&taj_mahal()).await;
        assert_eq!(persona.name, "The Historian");
        assert_eq!(persona.title, "Chronicler of Taj Mahal");
    }

    #[tokio::test]
    async fn service_failure_falls_back() {
        let persona = PersonaResolver::new(failing())
            .resolve_primary(&taj_mahal())
            .await;
        assert_eq!(persona.name, "The Historian");
    }

    #[tokio::test]
    async fn alternatives_are_deduplicated_and_capped() {
        let llm = replying(
            r#"Here are the figures:
[
  {"name": "Mumtaz Mahal", "title": "Empress", "era": "17th Century", "avatar": "👑",
   "connection": "The Taj Mahal is her tomb", "voice_gender": "female"},
  {"name": "mumtaz mahal", "title": "Duplicate"},
  {"name": "", "title": "Nameless"},
  {"name": "Ustad Ahmad Lahauri", "title": "Architect", "era": "17th Century", "avatar": "📐"},
  {"name": "Aurangzeb", "era": "17th Century"},
  {"name": "Lord Curzon", "title": "Viceroy", "era": "20th Century", "avatar": "🎩"},
  {"name": "Rabindranath Tagore", "title": "Poet", "era": "20th Century", "avatar": "✒️"},
  {"name": "Jean-Baptiste Tavernier", "title": "Traveler", "era": "17th Century", "avatar": "🧭"}
]"#,
        );

        let alternatives = PersonaResolver::new(llm)
            .resolve_alternatives(&taj_mahal())
            .await;

        assert_eq!(alternatives.len(), MAX_ALTERNATIVES);
        assert_eq!(alternatives[0].name, "Mumtaz Mahal");
        assert_eq!(alternatives[0].voice_gender, VoiceGender::Female);
        assert_eq!(alternatives[0].connection_summary, "The Taj Mahal is her tomb");
        assert_eq!(alternatives[1].name, "Ustad Ahmad Lahauri");
        // blank title filled with its default
        assert_eq!(alternatives[2].title, "Keeper of History");
        assert!(alternatives.iter().all(|c| c.name != "Jean-Baptiste Tavernier"));
    }

    #[tokio::test]
    async fn alternatives_wrapped_in_an_object_are_accepted() {
        let llm = replying(r#"{"figures": [{"name": "Mumtaz Mahal"}]}"#);
        let alternatives = PersonaResolver::new(llm)
            .resolve_alternatives(&taj_mahal())
            .await;
        assert_eq!(alternatives.len(), 1);
    }

    #[tokio::test]
    async fn alternatives_are_empty_on_failure() {
        let resolver = PersonaResolver::new(failing());
        assert!(resolver.resolve_alternatives(&taj_mahal()).await.is_empty());

        let resolver = PersonaResolver::new(replying("I cannot list anyone."));
        assert!(resolver.resolve_alternatives(&taj_mahal()).await.is_empty());
    }

    #[tokio::test]
    async fn expand_pins_identity_fields() {
        let original = Persona::fallback_historian("Taj Mahal");
        let candidate = original.candidate();
        let facts = LandmarkFacts::from_identification(&taj_mahal());

        let llm = replying(
            r#"{"name": "Someone Else", "title": "Impostor", "era": "21st Century",
                "avatar": "🤖", "region": "Agra", "speaking_style": "poetic"}"#,
        );
        let expanded = PersonaResolver::new(llm).expand(&candidate, &facts).await;

        assert_eq!(expanded.name, original.name);
        assert_eq!(expanded.title, original.title);
        assert_eq!(expanded.era, original.era);
        assert_eq!(expanded.avatar_glyph, original.avatar_glyph);
        assert_eq!(expanded.speaking_style, "poetic");
        assert!(expanded.system_instruction.contains("You are The Historian"));
    }

    #[tokio::test]
    async fn expand_failure_synthesizes_from_candidate() {
        let candidate = PersonaCandidate {
            name: "Mumtaz Mahal".to_string(),
            title: "Empress".to_string(),
            era: "17th Century".to_string(),
            avatar_glyph: "👑".to_string(),
            connection_summary: "The Taj Mahal is her tomb".to_string(),
            voice_gender: VoiceGender::Female,
        };
        let facts = LandmarkFacts::from_identification(&taj_mahal());

        for llm in [failing(), replying("no idea")] {
            let expanded = PersonaResolver::new(llm).expand(&candidate, &facts).await;
            assert_eq!(expanded.candidate(), candidate);
            assert!(expanded.system_instruction.contains(KNOWLEDGE_CUTOFF_MARKER));
        }
    }
}
