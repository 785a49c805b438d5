//! Static catalog of well-known landmarks and predefined personas
//!
//! The catalog is compiled in. It gives identified landmarks a richer
//! historical context and a curated default narrator, and offers suggested
//! questions for the predefined personas.

mod landmarks;
mod personas;
mod questions;

use crate::entities::{GalleryImage, LandmarkFacts, LandmarkIdentification, Persona};
use crate::value_objects::{roleplay_instruction, VoiceAge, VoiceGender};

/// Minimum score for [`match_landmark`] to accept a landmark.
pub const MATCH_THRESHOLD: u32 = 10;

const KEYWORD_SCORE: u32 = 10;
const IMAGE_HINT_SCORE: u32 = 5;
const NAME_SCORE: u32 = 20;
const LOCATION_SCORE: u32 = 5;

/// A predefined landmark
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogLandmark {
    pub key: &'static str,
    pub name: &'static str,
    pub kind: &'static str,
    pub location: &'static str,
    /// Names the landmark goes by, lowercase. Unlike keywords these never
    /// describe some other place.
    pub aliases: &'static [&'static str],
    /// Distinctive terms, matched case-insensitively against free text
    pub keywords: &'static [&'static str],
    /// Weaker visual cues a vision service tends to mention
    pub image_hints: &'static [&'static str],
    /// Query used for image search
    pub search_term: &'static str,
    pub default_persona: &'static str,
    pub related_personas: &'static [&'static str],
    /// Curated (url, caption) pairs
    pub gallery: &'static [(&'static str, &'static str)],
    pub historical_context: &'static str,
}

impl CatalogLandmark {
    pub fn facts(&self) -> LandmarkFacts {
        LandmarkFacts::new(self.name, self.location, self.kind, self.historical_context)
            .with_gallery(self.gallery_images())
    }

    pub fn gallery_images(&self) -> Vec<GalleryImage> {
        self.gallery
            .iter()
            .map(|(url, caption)| GalleryImage::new(*url, *caption))
            .collect()
    }

    /// Whether `name` refers to this landmark.
    pub fn is_named_by(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        name.contains(&self.name.to_lowercase())
            || self.aliases.iter().any(|alias| name.contains(alias))
    }

    /// How strongly `text` points at this landmark.
    pub fn match_score(&self, text: &str) -> u32 {
        let text = text.to_lowercase();
        let hits = |terms: &[&str]| {
            terms
                .iter()
                .filter(|term| text.contains(&term.to_lowercase()))
                .count() as u32
        };

        let mut score = hits(self.keywords) * KEYWORD_SCORE + hits(self.image_hints) * IMAGE_HINT_SCORE;
        if text.contains(&self.name.to_lowercase()) {
            score += NAME_SCORE;
        }
        if text.contains(&self.location.to_lowercase()) {
            score += LOCATION_SCORE;
        }
        score
    }
}

/// A predefined persona, stored as structured fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogPersona {
    pub key: &'static str,
    pub name: &'static str,
    pub title: &'static str,
    pub era: &'static str,
    pub region: &'static str,
    pub avatar: &'static str,
    pub voice_gender: VoiceGender,
    pub voice_age: VoiceAge,
    pub relationship: &'static str,
    pub traits: &'static [&'static str],
    pub speaking_style: &'static str,
    pub facts: &'static [&'static str],
}

impl CatalogPersona {
    pub fn to_persona(&self) -> Persona {
        let mut persona = Persona {
            name: self.name.to_string(),
            title: self.title.to_string(),
            era: self.era.to_string(),
            region: self.region.to_string(),
            avatar_glyph: self.avatar.to_string(),
            relationship_to_landmark: self.relationship.to_string(),
            personality_traits: self.traits.iter().map(|s| s.to_string()).collect(),
            speaking_style: self.speaking_style.to_string(),
            voice_gender: self.voice_gender,
            voice_age: self.voice_age,
            historical_facts: self.facts.iter().map(|s| s.to_string()).collect(),
            system_instruction: String::new(),
        };
        persona.system_instruction = roleplay_instruction(&persona);
        persona
    }
}

pub fn landmark(key: &str) -> Option<&'static CatalogLandmark> {
    landmarks::LANDMARKS.iter().find(|l| l.key == key)
}

pub fn landmarks() -> &'static [CatalogLandmark] {
    landmarks::LANDMARKS
}

/// A fully built persona for a catalog key.
pub fn persona(key: &str) -> Option<Persona> {
    catalog_persona(key).map(CatalogPersona::to_persona)
}

pub fn catalog_persona(key: &str) -> Option<&'static CatalogPersona> {
    personas::PERSONAS.iter().find(|p| p.key == key)
}

pub fn personas() -> &'static [CatalogPersona] {
    personas::PERSONAS
}

/// Best-scoring catalog landmark mentioned in `text`, if any scores at least
/// [`MATCH_THRESHOLD`]. Ties go to the earlier catalog entry.
pub fn match_landmark(text: &str) -> Option<&'static CatalogLandmark> {
    if text.trim().is_empty() {
        return None;
    }

    let mut best: Option<(&'static CatalogLandmark, u32)> = None;
    for candidate in landmarks::LANDMARKS {
        let score = candidate.match_score(text);
        if best.map_or(true, |(_, top)| score > top) {
            best = Some((candidate, score));
        }
    }

    best.filter(|(_, score)| *score >= MATCH_THRESHOLD)
        .map(|(landmark, _)| landmark)
}

/// Catalog landmark that `name` refers to, if any.
pub fn landmark_named(name: &str) -> Option<&'static CatalogLandmark> {
    landmarks::LANDMARKS
        .iter()
        .find(|landmark| landmark.is_named_by(name))
}

/// Catalog entry for a vision result.
///
/// Only usable identifications are matched, and only against entries the
/// identified name refers to. The full description then picks between
/// those entries.
pub fn match_identification(
    identification: &LandmarkIdentification,
) -> Option<&'static CatalogLandmark> {
    if !identification.is_usable() {
        return None;
    }

    let description = identification.description_text();
    let mut best: Option<(&'static CatalogLandmark, u32)> = None;
    for candidate in landmarks::LANDMARKS
        .iter()
        .filter(|landmark| landmark.is_named_by(&identification.name))
    {
        let score = candidate.match_score(&description);
        if best.map_or(true, |(_, top)| score > top) {
            best = Some((candidate, score));
        }
    }
    best.map(|(landmark, _)| landmark)
}

/// Conversation starters for a persona, preferring landmark-specific ones.
pub fn suggested_questions(persona_key: &str, landmark_key: Option<&str>) -> Vec<&'static str> {
    let lookup = |landmark: Option<&str>| {
        questions::SUGGESTIONS
            .iter()
            .find(|(p, l, _)| *p == persona_key && *l == landmark)
            .map(|(_, _, qs)| qs.to_vec())
    };

    landmark_key
        .and_then(|key| lookup(Some(key)))
        .or_else(|| lookup(None))
        .unwrap_or_else(|| questions::GENERAL.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_landmark_default_persona_exists() {
        for landmark in landmarks() {
            assert!(
                persona(landmark.default_persona).is_some(),
                "{} points at missing persona {}",
                landmark.key,
                landmark.default_persona
            );
            for related in landmark.related_personas {
                assert!(catalog_persona(related).is_some(), "missing {related}");
            }
        }
    }

    #[test]
    fn catalog_personas_are_complete() {
        for entry in personas() {
            let persona = entry.to_persona();
            assert!(persona.has_required_fields(), "{} incomplete", entry.key);
            assert!(persona.system_instruction.contains(&persona.era));
        }
    }

    #[test]
    fn match_landmark_finds_taj_mahal_in_description() {
        let found = match_landmark("A white marble dome with four minarets, the Taj Mahal in Agra")
            .expect("should match");
        assert_eq!(found.key, "taj_mahal");
    }

    #[test]
    fn match_landmark_reads_tamil_keywords() {
        let found = match_landmark("நெல்லையப்பர் கோவில்").expect("should match");
        assert_eq!(found.key, "nellaiappar_temple");
    }

    #[test]
    fn weak_hints_alone_do_not_match() {
        // a single image hint scores 5, under the threshold
        assert!(match_landmark("a reflection on water").is_none());
        assert!(match_landmark("   ").is_none());
    }

    fn identified(name: &str, location: &str, visual: &str) -> LandmarkIdentification {
        LandmarkIdentification {
            identified: true,
            name: name.to_string(),
            location: location.to_string(),
            visual_elements: visual.to_string(),
            ..LandmarkIdentification::unidentified("")
        }
    }

    #[test]
    fn identification_matches_only_the_named_landmark() {
        let eiffel = identified("Eiffel Tower", "Paris, France", "wrought-iron lattice tower");
        assert!(match_identification(&eiffel).is_none());

        let palace = identified("Mysore Palace", "Mysuru, India", "palace with domes");
        assert!(match_identification(&palace).is_none());

        let tanjore = identified("The Big Temple", "Thanjavur", "granite vimana");
        assert_eq!(
            match_identification(&tanjore).map(|l| l.key),
            Some("brihadisvara_temple")
        );
    }

    #[test]
    fn unidentified_results_never_match() {
        let raw = LandmarkIdentification::unidentified(
            "a temple with a tall gopuram tower, maybe Nellaiappar",
        );
        assert!(match_identification(&raw).is_none());
    }

    #[test]
    fn landmark_named_uses_aliases() {
        assert_eq!(landmark_named("The Roman Coliseum").map(|l| l.key), Some("colosseum"));
        assert_eq!(landmark_named("Great Pyramid of Khufu").map(|l| l.key), Some("pyramids_giza"));
        assert!(landmark_named("Eiffel Tower").is_none());
    }

    #[test]
    fn facts_carry_curated_gallery() {
        let facts = landmark("pyramids_giza").expect("in catalog").facts();
        assert_eq!(facts.kind, "Ancient Monument");
        assert_eq!(facts.gallery_images.len(), 2);
    }

    #[test]
    fn suggested_questions_prefer_landmark_specific() {
        let specific = suggested_questions("temple_priest", Some("nellaiappar_temple"));
        assert_eq!(specific[0], "How do the musical pillars work?");

        let general = suggested_questions("temple_priest", Some("colosseum"));
        assert_eq!(general[0], "What is the most sacred part of this temple?");

        let fallback = suggested_questions("someone_new", None);
        assert_eq!(fallback, questions::GENERAL.to_vec());
    }
}
