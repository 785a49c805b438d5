//! Voice selection for narrated persona replies
//!
//! The voice rule table is a pure function of the persona's structured
//! fields: accent from the region, voice from the gender, a presentation
//! preset from the title, then an age adjustment.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::common::lenient;
use crate::entities::Persona;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VoiceGender {
    #[default]
    Male,
    Female,
}

impl VoiceGender {
    /// Anything that is not recognisably female is `Male`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "female" | "f" | "woman" | "feminine" => Self::Female,
            _ => Self::Male,
        }
    }
}

impl<'de> Deserialize<'de> for VoiceGender {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        lenient::string(deserializer).map(|value| Self::parse(&value))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VoiceAge {
    Young,
    #[default]
    Middle,
    Old,
}

impl VoiceAge {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "young" | "youthful" => Self::Young,
            "old" | "elderly" | "aged" | "senior" => Self::Old,
            _ => Self::Middle,
        }
    }
}

impl<'de> Deserialize<'de> for VoiceAge {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        lenient::string(deserializer).map(|value| Self::parse(&value))
    }
}

/// Which neural voice to use and how to shape it.
///
/// `rate` is a signed percentage (`"-10%"`), `pitch` a signed offset in
/// hertz (`"+2Hz"`), both in the form speech services accept for prosody.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceDescriptor {
    pub voice_id: String,
    pub rate: String,
    pub pitch: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Accent {
    Indian,
    British,
    American,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Preset {
    Royal,
    Spiritual,
    Martial,
    Scholarly,
}

const INDIAN_REGIONS: &[&str] = &[
    "india", "tamil", "kerala", "karnataka", "bengal", "madhya", "hindustan", "maurya", "mughal",
    "agra", "delhi",
];
const BRITISH_REGIONS: &[&str] = &[
    "britain", "british", "england", "english", "scotland", "ireland", "egypt", "rome", "roman",
    "greece", "greek", "france", "italy", "poland", "europe",
];

const ROYAL_TITLES: &[&str] = &[
    "king", "queen", "emperor", "empress", "pharaoh", "sultan", "shah", "rani", "maharaja",
    "samrat",
];
const SPIRITUAL_TITLES: &[&str] = &["priest", "monk", "sage", "saint", "acharya", "guru"];
const MARTIAL_TITLES: &[&str] = &["warrior", "general", "fighter", "commander", "soldier", "chief"];

impl VoiceDescriptor {
    pub fn new(voice_id: impl Into<String>, rate_percent: i32, pitch_hz: i32) -> Self {
        Self {
            voice_id: voice_id.into(),
            rate: format!("{rate_percent:+}%"),
            pitch: format!("{pitch_hz:+}Hz"),
        }
    }

    /// Pick a voice for a persona from its region, gender, title and age.
    pub fn for_persona(persona: &Persona) -> Self {
        let accent = accent_for(&persona.region);
        let voice_id = match (accent, persona.voice_gender) {
            (Accent::Indian, VoiceGender::Male) => "en-IN-PrabhatNeural",
            (Accent::Indian, VoiceGender::Female) => "en-IN-NeerjaNeural",
            (Accent::British, VoiceGender::Male) => "en-GB-RyanNeural",
            (Accent::British, VoiceGender::Female) => "en-GB-SoniaNeural",
            (Accent::American, VoiceGender::Male) => "en-US-GuyNeural",
            (Accent::American, VoiceGender::Female) => "en-US-AriaNeural",
        };

        let (mut rate, mut pitch) = match preset_for(&persona.title) {
            Preset::Royal => (-10, -5),
            Preset::Spiritual => (-15, 2),
            Preset::Martial => (5, -3),
            Preset::Scholarly => (-5, 0),
        };
        if persona.voice_gender == VoiceGender::Female {
            pitch += 8;
        }

        match persona.voice_age {
            VoiceAge::Young => {
                rate += 5;
                pitch += 3;
            }
            VoiceAge::Middle => {}
            VoiceAge::Old => {
                rate -= 5;
                pitch -= 3;
            }
        }

        Self::new(voice_id, rate, pitch)
    }
}

impl fmt::Display for VoiceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.voice_id, self.rate, self.pitch)
    }
}

fn accent_for(region: &str) -> Accent {
    let region = region.to_lowercase();
    if INDIAN_REGIONS.iter().any(|k| region.contains(k)) {
        Accent::Indian
    } else if BRITISH_REGIONS.iter().any(|k| region.contains(k)) {
        Accent::British
    } else {
        Accent::American
    }
}

fn preset_for(title: &str) -> Preset {
    let title = title.to_lowercase();
    let words: Vec<&str> = title
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();
    let has = |keywords: &[&str]| {
        words
            .iter()
            .any(|word| keywords.iter().any(|k| word.starts_with(k)))
    };

    if has(ROYAL_TITLES) {
        Preset::Royal
    } else if has(SPIRITUAL_TITLES) {
        Preset::Spiritual
    } else if has(MARTIAL_TITLES) {
        Preset::Martial
    } else {
        Preset::Scholarly
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn persona(title: &str, region: &str, gender: VoiceGender, age: VoiceAge) -> Persona {
        let mut p = Persona::fallback_historian("Somewhere");
        p.title = title.into();
        p.region = region.into();
        p.voice_gender = gender;
        p.voice_age = age;
        p
    }

    #[test]
    fn tamil_king_gets_deep_indian_voice() {
        let voice = VoiceDescriptor::for_persona(&persona(
            "The Great Pandyan King",
            "Tamil Nadu",
            VoiceGender::Male,
            VoiceAge::Middle,
        ));
        assert_eq!(voice.voice_id, "en-IN-PrabhatNeural");
        assert_eq!(voice.rate, "-10%");
        assert_eq!(voice.pitch, "-5Hz");
    }

    #[test]
    fn old_temple_priest_is_slow() {
        let voice = VoiceDescriptor::for_persona(&persona(
            "Head Priest of the Temple",
            "India",
            VoiceGender::Male,
            VoiceAge::Old,
        ));
        assert_eq!(voice.rate, "-20%");
        assert_eq!(voice.pitch, "-1Hz");
    }

    #[test]
    fn european_woman_scholar_gets_british_female_voice() {
        let voice = VoiceDescriptor::for_persona(&persona(
            "Pioneer of Radioactivity",
            "Poland/France",
            VoiceGender::Female,
            VoiceAge::Middle,
        ));
        assert_eq!(voice.voice_id, "en-GB-SoniaNeural");
        assert_eq!(voice.rate, "-5%");
        assert_eq!(voice.pitch, "+8Hz");
    }

    #[test]
    fn unknown_region_falls_back_to_american() {
        let voice = VoiceDescriptor::for_persona(&persona(
            "Chief Engineer",
            "Unknown Region",
            VoiceGender::Male,
            VoiceAge::Young,
        ));
        assert_eq!(voice.voice_id, "en-US-GuyNeural");
        assert_eq!(voice.rate, "+10%");
    }

    #[test]
    fn gender_and_age_parse_leniently() {
        assert_eq!(VoiceGender::parse(" Female "), VoiceGender::Female);
        assert_eq!(VoiceGender::parse("unknown"), VoiceGender::Male);
        assert_eq!(VoiceAge::parse("Elderly"), VoiceAge::Old);
        assert_eq!(VoiceAge::parse(""), VoiceAge::Middle);
    }
}
