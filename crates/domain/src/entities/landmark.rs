//! Landmark entities - what the vision service saw and what we know about it
//!
//! `LandmarkIdentification` is the structured result of asking the vision
//! service about a photo. It deserializes from loosely-shaped model JSON:
//! every string field falls back to a sentinel so consumers never branch on
//! missing keys.
//!
//! `LandmarkFacts` is the conversation-facing description of a place, built
//! either from the static catalog or from an identification.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::common::lenient::{self, UNKNOWN};

/// How sure the vision service claims to be about an identification
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
    #[default]
    None,
}

impl Confidence {
    /// Case-insensitive parse; anything unrecognised is `None`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "high" => Self::High,
            "medium" | "moderate" => Self::Medium,
            "low" => Self::Low,
            _ => Self::None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::None => "none",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Confidence {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        lenient::string(deserializer).map(|value| Self::parse(&value))
    }
}

/// Result of identifying a landmark in a photo.
///
/// Immutable once created. `identified == false` results carry diagnostic
/// text (raw model output or an error) in `visual_elements`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandmarkIdentification {
    #[serde(default, deserialize_with = "lenient::flag")]
    pub identified: bool,
    #[serde(
        rename = "landmark_name",
        alias = "name",
        default = "lenient::unknown",
        deserialize_with = "lenient::string_or_unknown"
    )]
    pub name: String,
    #[serde(default = "lenient::unknown", deserialize_with = "lenient::string_or_unknown")]
    pub location: String,
    #[serde(default)]
    pub confidence: Confidence,
    #[serde(default, deserialize_with = "lenient::string")]
    pub visual_elements: String,
    #[serde(default = "lenient::unknown", deserialize_with = "lenient::string_or_unknown")]
    pub architectural_style: String,
    #[serde(default = "lenient::unknown", deserialize_with = "lenient::string_or_unknown")]
    pub era: String,
}

impl LandmarkIdentification {
    /// An `identified == false` result carrying `diagnostic` in `visual_elements`
    pub fn unidentified(diagnostic: impl Into<String>) -> Self {
        Self {
            identified: false,
            name: UNKNOWN.to_string(),
            location: UNKNOWN.to_string(),
            confidence: Confidence::None,
            visual_elements: diagnostic.into(),
            architectural_style: UNKNOWN.to_string(),
            era: UNKNOWN.to_string(),
        }
    }

    /// Identified and actually named.
    pub fn is_usable(&self) -> bool {
        self.identified && self.name != UNKNOWN && !self.name.trim().is_empty()
    }

    /// Everything the vision service said, as one searchable string.
    pub fn description_text(&self) -> String {
        [
            self.name.as_str(),
            self.location.as_str(),
            self.visual_elements.as_str(),
            self.architectural_style.as_str(),
        ]
        .iter()
        .filter(|part| !part.is_empty() && **part != UNKNOWN)
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
    }
}

/// An image of a landmark shown alongside the conversation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GalleryImage {
    pub url: String,
    pub caption: String,
}

impl GalleryImage {
    pub fn new(url: impl Into<String>, caption: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            caption: caption.into(),
        }
    }
}

/// What the conversation knows about the current place. Immutable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandmarkFacts {
    pub name: String,
    pub location: String,
    /// Kind of site, e.g. "Hindu Temple" or "Mausoleum"
    #[serde(rename = "type")]
    pub kind: String,
    pub historical_context: String,
    #[serde(default)]
    pub gallery_images: Vec<GalleryImage>,
}

impl LandmarkFacts {
    pub fn new(
        name: impl Into<String>,
        location: impl Into<String>,
        kind: impl Into<String>,
        historical_context: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            kind: kind.into(),
            historical_context: historical_context.into(),
            gallery_images: Vec::new(),
        }
    }

    /// Facts for a place that is not in the catalog, assembled from what the
    /// vision service reported.
    pub fn from_identification(identification: &LandmarkIdentification) -> Self {
        let mut context = Vec::new();
        if identification.era != UNKNOWN {
            context.push(format!("Era: {}", identification.era));
        }
        if identification.architectural_style != UNKNOWN {
            context.push(format!(
                "Architectural style: {}",
                identification.architectural_style
            ));
        }
        if identification.identified && !identification.visual_elements.is_empty() {
            context.push(format!(
                "Notable features: {}",
                identification.visual_elements
            ));
        }

        Self::new(
            identification.name.clone(),
            identification.location.clone(),
            identification.architectural_style.clone(),
            context.join("\n"),
        )
    }

    #[must_use]
    pub fn with_gallery(mut self, images: Vec<GalleryImage>) -> Self {
        self.gallery_images = images;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identification_parses_full_document() {
        let json = r#"{
            "identified": true,
            "landmark_name": "Taj Mahal",
            "confidence": "HIGH",
            "visual_elements": "white marble dome, minarets",
            "location": "Agra, India",
            "architectural_style": "Mughal",
            "era": "17th century"
        }"#;

        let id: LandmarkIdentification = serde_json::from_str(json).expect("valid document");
        assert!(id.is_usable());
        assert_eq!(id.name, "Taj Mahal");
        assert_eq!(id.confidence, Confidence::High);
        assert_eq!(id.era, "17th century");
    }

    #[test]
    fn identification_fills_missing_keys_with_sentinels() {
        let id: LandmarkIdentification =
            serde_json::from_str(r#"{"identified": true, "name": "Colosseum"}"#)
                .expect("sparse document");
        assert_eq!(id.name, "Colosseum");
        assert_eq!(id.location, "Unknown");
        assert_eq!(id.architectural_style, "Unknown");
        assert_eq!(id.visual_elements, "");
        assert_eq!(id.confidence, Confidence::None);
    }

    #[test]
    fn unknown_confidence_maps_to_none() {
        let id: LandmarkIdentification =
            serde_json::from_str(r#"{"identified": "yes", "confidence": "pretty sure"}"#)
                .expect("loose document");
        assert!(id.identified);
        assert_eq!(id.confidence, Confidence::None);
        assert!(!id.is_usable());
    }

    #[test]
    fn unidentified_carries_diagnostic() {
        let id = LandmarkIdentification::unidentified("Error: timeout");
        assert!(!id.identified);
        assert_eq!(id.visual_elements, "Error: timeout");
        assert_eq!(id.name, "Unknown");
    }

    #[test]
    fn facts_from_identification_skip_unknowns() {
        let mut id = LandmarkIdentification::unidentified("");
        id.identified = true;
        id.name = "Old Fort".into();
        id.era = "16th century".into();

        let facts = LandmarkFacts::from_identification(&id);
        assert_eq!(facts.name, "Old Fort");
        assert_eq!(facts.historical_context, "Era: 16th century");
        assert!(facts.gallery_images.is_empty());
    }

    #[test]
    fn facts_serialize_kind_as_type() {
        let facts = LandmarkFacts::new("Taj Mahal", "Agra, India", "Mausoleum", "");
        let value = serde_json::to_value(&facts).expect("serializable");
        assert_eq!(value["type"], "Mausoleum");
    }
}
