//! Persona entity - a historical figure the traveler converses with
//!
//! Personas come from the static catalog or are nominated by the completion
//! service. Model-authored JSON is accepted leniently; after parsing,
//! [`Persona::fill_defaults`] is the only mutation a persona sees before it is
//! used for conversation.

use serde::{Deserialize, Serialize};

use crate::common::{is_blank, lenient};
use crate::value_objects::{
    roleplay_instruction, knowledge_cutoff_clause, VoiceAge, VoiceGender,
    KNOWLEDGE_CUTOFF_MARKER,
};

pub const DEFAULT_TITLE: &str = "Keeper of History";
pub const DEFAULT_ERA: &str = "Unknown Era";
pub const DEFAULT_REGION: &str = "Unknown Region";
pub const DEFAULT_AVATAR: &str = "👤";
pub const DEFAULT_SPEAKING_STYLE: &str = "thoughtful and measured";
pub const DEFAULT_RELATIONSHIP: &str = "Witness to the history of this place";

/// A fully detailed historical figure ready for conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Persona {
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub era: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub region: String,
    /// A single emoji shown next to the name
    #[serde(rename = "avatar", default, deserialize_with = "lenient::string")]
    pub avatar_glyph: String,
    #[serde(
        default,
        alias = "relationship",
        alias = "connection",
        deserialize_with = "lenient::string"
    )]
    pub relationship_to_landmark: String,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub personality_traits: Vec<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub speaking_style: String,
    #[serde(default)]
    pub voice_gender: VoiceGender,
    #[serde(default)]
    pub voice_age: VoiceAge,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub historical_facts: Vec<String>,
    /// Roleplay instruction sent as the system prompt on every turn
    #[serde(default, alias = "system_prompt", deserialize_with = "lenient::string")]
    pub system_instruction: String,
}

impl Persona {
    /// The generic narrator used whenever no specific figure can be resolved.
    pub fn fallback_historian(landmark_name: &str) -> Self {
        let place = if is_blank(landmark_name) || landmark_name == lenient::UNKNOWN {
            "this place"
        } else {
            landmark_name.trim()
        };

        let mut persona = Self {
            name: "The Historian".to_string(),
            title: format!("Chronicler of {place}"),
            era: "Timeless".to_string(),
            region: DEFAULT_REGION.to_string(),
            avatar_glyph: "📜".to_string(),
            relationship_to_landmark: format!(
                "Has studied the stones and stories of {place} across the ages"
            ),
            personality_traits: vec![
                "knowledgeable".to_string(),
                "patient".to_string(),
                "fond of a good story".to_string(),
            ],
            speaking_style: "warm, vivid and scholarly".to_string(),
            voice_gender: VoiceGender::Male,
            voice_age: VoiceAge::Old,
            historical_facts: Vec::new(),
            system_instruction: String::new(),
        };
        persona.system_instruction = roleplay_instruction(&persona);
        persona
    }

    /// Synthesize a persona from a brief candidate without asking anyone.
    ///
    /// Lossy: traits and facts are unknown, so the instruction is generic.
    pub fn from_candidate(candidate: &PersonaCandidate, landmark_name: &str) -> Self {
        let relationship = if is_blank(&candidate.connection_summary) {
            format!("Connected to the history of {landmark_name}")
        } else {
            candidate.connection_summary.clone()
        };

        let mut persona = Self {
            name: candidate.name.clone(),
            title: candidate.title.clone(),
            era: candidate.era.clone(),
            region: String::new(),
            avatar_glyph: candidate.avatar_glyph.clone(),
            relationship_to_landmark: relationship,
            personality_traits: Vec::new(),
            speaking_style: String::new(),
            voice_gender: candidate.voice_gender,
            voice_age: VoiceAge::Middle,
            historical_facts: Vec::new(),
            system_instruction: String::new(),
        };
        persona.fill_defaults();
        persona
    }

    /// `name`, `title`, `era` and `avatar` are all present.
    pub fn has_required_fields(&self) -> bool {
        !is_blank(&self.name)
            && !is_blank(&self.title)
            && !is_blank(&self.era)
            && !is_blank(&self.avatar_glyph)
    }

    /// Fill empty optional fields with named defaults and make sure the
    /// system instruction exists and carries a knowledge cutoff.
    pub fn fill_defaults(&mut self) {
        fill(&mut self.title, DEFAULT_TITLE);
        fill(&mut self.era, DEFAULT_ERA);
        fill(&mut self.region, DEFAULT_REGION);
        fill(&mut self.avatar_glyph, DEFAULT_AVATAR);
        fill(&mut self.speaking_style, DEFAULT_SPEAKING_STYLE);
        fill(&mut self.relationship_to_landmark, DEFAULT_RELATIONSHIP);

        if is_blank(&self.system_instruction) {
            self.system_instruction = roleplay_instruction(self);
        } else if !self.system_instruction.contains(KNOWLEDGE_CUTOFF_MARKER) {
            self.system_instruction = format!(
                "{}\n\n{}",
                self.system_instruction.trim_end(),
                knowledge_cutoff_clause(&self.era)
            );
        }
    }

    /// Brief projection used for the "other narrators" list.
    pub fn candidate(&self) -> PersonaCandidate {
        PersonaCandidate {
            name: self.name.clone(),
            title: self.title.clone(),
            era: self.era.clone(),
            avatar_glyph: self.avatar_glyph.clone(),
            connection_summary: self.relationship_to_landmark.clone(),
            voice_gender: self.voice_gender,
        }
    }

    /// Display label, e.g. "👑 King Rama Pandya"
    pub fn label(&self) -> String {
        format!("{} {}", self.avatar_glyph, self.name)
    }
}

fn fill(field: &mut String, default: &str) {
    if is_blank(field) {
        *field = default.to_string();
    }
}

/// A brief nomination that can later be expanded into a full [`Persona`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonaCandidate {
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub era: String,
    #[serde(rename = "avatar", default, deserialize_with = "lenient::string")]
    pub avatar_glyph: String,
    /// One line on how this figure relates to the landmark
    #[serde(
        rename = "connection",
        alias = "relationship",
        default,
        deserialize_with = "lenient::string"
    )]
    pub connection_summary: String,
    #[serde(default)]
    pub voice_gender: VoiceGender,
}

impl PersonaCandidate {
    /// Fill blank display fields so the candidate can be listed and expanded.
    pub fn fill_defaults(&mut self) {
        fill(&mut self.title, DEFAULT_TITLE);
        fill(&mut self.era, DEFAULT_ERA);
        fill(&mut self.avatar_glyph, DEFAULT_AVATAR);
    }

    pub fn label(&self) -> String {
        format!("{} {}", self.avatar_glyph, self.name)
    }
}
