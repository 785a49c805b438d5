//! Best-effort narration of persona replies.

use std::sync::Arc;
use timetraveler_domain::{AudioClip, Persona, VoiceDescriptor};

use crate::infrastructure::ports::SpeechPort;

pub struct Narrator {
    speech: Option<Arc<dyn SpeechPort>>,
}

impl Narrator {
    pub fn new(speech: Option<Arc<dyn SpeechPort>>) -> Self {
        Self { speech }
    }

    /// A narrator that never speaks.
    pub fn disabled() -> Self {
        Self::new(None)
    }

    pub fn is_enabled(&self) -> bool {
        self.speech.is_some()
    }

    /// Speak `text` in the persona's voice. `None` when speech is disabled
    /// or synthesis fails.
    pub async fn speak(&self, persona: &Persona, text: &str) -> Option<AudioClip> {
        let speech = self.speech.as_ref()?;
        let voice = VoiceDescriptor::for_persona(persona);

        match speech.synthesize(text, &voice).await {
            Ok(clip) if !clip.is_empty() => Some(clip),
            Ok(_) => {
                tracing::warn!(voice = %voice, "Speech service returned no audio");
                None
            }
            Err(e) => {
                tracing::warn!(error = %e, voice = %voice, "Speech synthesis failed");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{MockSpeechPort, SpeechError};
    use timetraveler_domain::catalog;

    #[tokio::test]
    async fn speaks_in_the_persona_voice() {
        let mut speech = MockSpeechPort::new();
        speech
            .expect_synthesize()
            .withf(|text, voice| text == "Welcome" && voice.voice_id == "en-IN-PrabhatNeural")
            .times(1)
            .returning(|_, _| Ok(AudioClip::new(vec![0xff, 0xfb], "audio/mpeg")));

        let narrator = Narrator::new(Some(Arc::new(speech)));
        let persona = catalog::persona("shah_jahan").expect("in catalog");

        let clip = narrator.speak(&persona, "Welcome").await;
        assert_eq!(clip.map(|c| c.mime_type), Some("audio/mpeg".to_string()));
    }

    #[tokio::test]
    async fn failures_are_silent() {
        let mut speech = MockSpeechPort::new();
        speech
            .expect_synthesize()
            .returning(|_, _| Err(SpeechError::Api {
                status: 401,
                message: "bad key".into(),
            }));

        let narrator = Narrator::new(Some(Arc::new(speech)));
        let persona = Persona::fallback_historian("Colosseum");
        assert!(narrator.speak(&persona, "Ave").await.is_none());
    }

    #[tokio::test]
    async fn disabled_narrator_returns_none() {
        let narrator = Narrator::disabled();
        assert!(!narrator.is_enabled());
        assert!(narrator
            .speak(&Persona::fallback_historian("Sanchi"), "Hello")
            .await
            .is_none());
    }
}
