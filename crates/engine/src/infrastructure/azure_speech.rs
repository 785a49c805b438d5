//! Azure neural text-to-speech over the Cognitive Services REST endpoint.
//!
//! Text is wrapped in SSML with a `<prosody>` element carrying the persona's
//! rate and pitch. Returns MP3 bytes.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use timetraveler_domain::{common::truncate_chars, AudioClip, VoiceDescriptor};

use crate::infrastructure::ports::{SpeechError, SpeechPort};

/// Longest text sent to the synthesizer, in characters.
pub const MAX_SPEECH_CHARS: usize = 3000;

const OUTPUT_FORMAT: &str = "audio-24khz-48kbitrate-mono-mp3";

pub struct AzureSpeechClient {
    client: Client,
    key: String,
    endpoint: String,
}

impl AzureSpeechClient {
    pub fn new(key: &str, region: &str, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            key: key.to_string(),
            endpoint: format!("https://{region}.tts.speech.microsoft.com/cognitiveservices/v1"),
        }
    }
}

#[async_trait]
impl SpeechPort for AzureSpeechClient {
    async fn synthesize(
        &self,
        text: &str,
        voice: &VoiceDescriptor,
    ) -> Result<AudioClip, SpeechError> {
        let cleaned = clean_for_speech(text);
        if cleaned.trim().is_empty() {
            return Err(SpeechError::EmptyText);
        }

        tracing::debug!(voice = %voice.voice_id, chars = cleaned.chars().count(), "Synthesizing speech");

        let response = self
            .client
            .post(&self.endpoint)
            .header("Ocp-Apim-Subscription-Key", &self.key)
            .header("Content-Type", "application/ssml+xml")
            .header("X-Microsoft-OutputFormat", OUTPUT_FORMAT)
            .header("User-Agent", "timetraveler")
            .body(build_ssml(&cleaned, voice))
            .send()
            .await
            .map_err(|e| SpeechError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SpeechError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| SpeechError::RequestFailed(e.to_string()))?;

        Ok(AudioClip::new(bytes.to_vec(), "audio/mpeg"))
    }
}

/// Drop markdown emphasis markers and cap the length.
pub fn clean_for_speech(text: &str) -> String {
    let stripped: String = text
        .chars()
        .filter(|c| !matches!(c, '*' | '_' | '#'))
        .collect();
    let trimmed = stripped.trim();
    if trimmed.chars().count() > MAX_SPEECH_CHARS {
        format!("{}...", truncate_chars(trimmed, MAX_SPEECH_CHARS))
    } else {
        trimmed.to_string()
    }
}

fn build_ssml(text: &str, voice: &VoiceDescriptor) -> String {
    let lang = voice.voice_id.get(..5).unwrap_or("en-US");
    format!(
        "<speak version='1.0' xmlns='http://www.w3.org/2001/10/synthesis' xml:lang='{lang}'>\
         <voice name='{name}'><prosody rate='{rate}' pitch='{pitch}'>{body}</prosody></voice>\
         </speak>",
        name = xml_escape(&voice.voice_id),
        rate = xml_escape(&voice.rate),
        pitch = xml_escape(&voice.pitch),
        body = xml_escape(text),
    )
}

fn xml_escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markdown_is_removed() {
        assert_eq!(
            clean_for_speech("*bows deeply* Welcome to __Agra__ # traveler"),
            "bows deeply Welcome to Agra  traveler"
        );
    }

    #[test]
    fn long_text_is_truncated() {
        let long = "a".repeat(MAX_SPEECH_CHARS + 50);
        let cleaned = clean_for_speech(&long);
        assert_eq!(cleaned.chars().count(), MAX_SPEECH_CHARS + 3);
        assert!(cleaned.ends_with("..."));
    }

    #[test]
    fn ssml_carries_prosody_and_escapes_text() {
        let voice = VoiceDescriptor::new("en-IN-PrabhatNeural", -10, -5);
        let ssml = build_ssml("Salt & stone <here>", &voice);

        assert!(ssml.contains("xml:lang='en-IN'"));
        assert!(ssml.contains("<voice name='en-IN-PrabhatNeural'>"));
        assert!(ssml.contains("<prosody rate='-10%' pitch='-5Hz'>"));
        assert!(ssml.contains("Salt &amp; stone &lt;here&gt;"));
    }
}
