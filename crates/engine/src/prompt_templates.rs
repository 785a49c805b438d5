//! LLM prompt templates used by the engine.
//!
//! Every template can be overridden with an environment variable derived from
//! its key (see [`key_to_env_var`]). Templates use `{placeholder}` slots that
//! are filled by [`render`].

use timetraveler_domain::{LandmarkFacts, LandmarkIdentification, PersonaCandidate};

pub use timetraveler_domain::roleplay_instruction;

/// Template keys.
pub mod keys {
    // === Landmark identification ===
    /// Vision instruction demanding a single JSON object.
    pub const IDENTIFY_LANDMARK: &str = "identify.landmark";

    // === Persona resolution ===
    /// Nominate the figure most responsible for building the landmark.
    pub const PERSONA_PRIMARY: &str = "persona.primary";
    /// Enumerate alternative figures with different relationships.
    pub const PERSONA_ALTERNATIVES: &str = "persona.alternatives";
    /// Flesh out a brief candidate into a full persona.
    pub const PERSONA_EXPAND: &str = "persona.expand";

    // === Conversation ===
    /// Location facts appended to the persona's system instruction.
    pub const CONVERSATION_PREAMBLE: &str = "conversation.preamble";
    /// User-side instruction that produces the opening greeting.
    pub const CONVERSATION_GREETING: &str = "conversation.greeting";
}

/// Default template values.
pub mod defaults {
    pub const IDENTIFY_LANDMARK: &str = r#"Look at this image carefully and identify the historical landmark or monument it shows.

Respond with ONLY this JSON object (no other text):
{
    "identified": true or false,
    "landmark_name": "name of the landmark, or Unknown",
    "location": "city and country, or Unknown",
    "confidence": "high", "medium" or "low",
    "visual_elements": "brief description of what you see",
    "architectural_style": "style, or Unknown",
    "era": "period of construction, or Unknown"
}"#;

    pub const PERSONA_PRIMARY: &str = r#"A traveler is standing at {landmark_name} in {location} ({era}, {architectural_style}).

Name the ONE historical person most directly responsible for creating this place: the ruler who commissioned it, the architect who designed it, or the engineer who built it. Prefer the builder over later visitors.

Examples:
- A Chola temple -> the king who commissioned it
- An iron lattice tower -> the engineer whose company built it
- The Taj Mahal -> Shah Jahan, the emperor who commissioned it

Respond with ONLY this JSON object:
{
    "name": "full name",
    "title": "short title, e.g. Mughal Emperor",
    "era": "when they lived, e.g. 17th Century",
    "region": "where they lived",
    "avatar": "one emoji",
    "relationship": "how they are connected to this place",
    "personality_traits": ["trait", "trait", "trait"],
    "speaking_style": "how they talk",
    "voice_gender": "male" or "female",
    "voice_age": "young", "middle" or "old",
    "historical_facts": ["fact they would know", "fact", "fact"]
}"#;

    pub const PERSONA_ALTERNATIVES: &str = r#"A traveler is standing at {landmark_name} in {location} ({era}).

List 3 to 5 DIFFERENT historical figures connected to this place, each with a different relationship to it: builders, rulers, priests or worshippers, artists, soldiers, famous visitors, restorers.

Respond with ONLY a JSON array:
[
    {
        "name": "full name",
        "title": "short title",
        "era": "when they lived",
        "avatar": "one emoji",
        "connection": "one sentence on their link to this place",
        "voice_gender": "male" or "female"
    }
]"#;

    pub const PERSONA_EXPAND: &str = r#"Create a detailed roleplay profile for {name}, {title}, who lived in the {era}.
Their connection to {landmark_name} ({location}): {connection}

Keep the name, title, era and avatar exactly as given.

Respond with ONLY this JSON object:
{
    "name": "{name}",
    "title": "{title}",
    "era": "{era}",
    "region": "where they lived",
    "avatar": "{avatar}",
    "relationship": "how they are connected to this place",
    "personality_traits": ["trait", "trait", "trait"],
    "speaking_style": "how they talk",
    "voice_gender": "male" or "female",
    "voice_age": "young", "middle" or "old",
    "historical_facts": ["fact they would know", "fact", "fact"]
}"#;

    pub const CONVERSATION_PREAMBLE: &str = r#"CURRENT LOCATION: {landmark_name} ({location})
You are at this place with the traveler. Use this information:
{historical_context}"#;

    pub const CONVERSATION_GREETING: &str = r#"A new traveler has arrived. Give a warm greeting in character.
Introduce yourself briefly (name and who you are).
Welcome them and make one interesting comment about this place.
Keep it to 2-3 sentences."#;
}

/// Convert a template key to its environment variable name.
///
/// `persona.primary` becomes `TIMETRAVELER_PROMPT_PERSONA_PRIMARY`.
pub fn key_to_env_var(key: &str) -> String {
    format!("TIMETRAVELER_PROMPT_{}", key.to_uppercase().replace('.', "_"))
}

/// Get the default value for a template key.
pub fn get_default(key: &str) -> Option<&'static str> {
    match key {
        keys::IDENTIFY_LANDMARK => Some(defaults::IDENTIFY_LANDMARK),
        keys::PERSONA_PRIMARY => Some(defaults::PERSONA_PRIMARY),
        keys::PERSONA_ALTERNATIVES => Some(defaults::PERSONA_ALTERNATIVES),
        keys::PERSONA_EXPAND => Some(defaults::PERSONA_EXPAND),
        keys::CONVERSATION_PREAMBLE => Some(defaults::CONVERSATION_PREAMBLE),
        keys::CONVERSATION_GREETING => Some(defaults::CONVERSATION_GREETING),
        _ => None,
    }
}

/// Template text for a key: environment override first, then the default.
pub fn resolve(key: &str) -> String {
    if let Ok(value) = std::env::var(key_to_env_var(key)) {
        if !value.trim().is_empty() {
            return value;
        }
    }
    get_default(key).unwrap_or_default().to_string()
}

/// Fill `{name}` slots. Unknown slots are left as they are.
pub fn render(template: &str, values: &[(&str, &str)]) -> String {
    values.iter().fold(template.to_string(), |text, (name, value)| {
        text.replace(&format!("{{{name}}}"), value)
    })
}

pub fn identification_prompt() -> String {
    resolve(keys::IDENTIFY_LANDMARK)
}

pub fn primary_persona_prompt(identification: &LandmarkIdentification) -> String {
    render(
        &resolve(keys::PERSONA_PRIMARY),
        &[
            ("landmark_name", &identification.name),
            ("location", &identification.location),
            ("era", &identification.era),
            ("architectural_style", &identification.architectural_style),
        ],
    )
}

pub fn alternatives_prompt(identification: &LandmarkIdentification) -> String {
    render(
        &resolve(keys::PERSONA_ALTERNATIVES),
        &[
            ("landmark_name", &identification.name),
            ("location", &identification.location),
            ("era", &identification.era),
        ],
    )
}

pub fn expansion_prompt(candidate: &PersonaCandidate, landmark: &LandmarkFacts) -> String {
    render(
        &resolve(keys::PERSONA_EXPAND),
        &[
            ("name", &candidate.name),
            ("title", &candidate.title),
            ("era", &candidate.era),
            ("avatar", &candidate.avatar_glyph),
            ("connection", &candidate.connection_summary),
            ("landmark_name", &landmark.name),
            ("location", &landmark.location),
        ],
    )
}

pub fn landmark_preamble(landmark: &LandmarkFacts) -> String {
    render(
        &resolve(keys::CONVERSATION_PREAMBLE),
        &[
            ("landmark_name", &landmark.name),
            ("location", &landmark.location),
            ("historical_context", &landmark.historical_context),
        ],
    )
}

pub fn greeting_instruction() -> String {
    resolve(keys::CONVERSATION_GREETING)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_KEYS: &[&str] = &[
        keys::IDENTIFY_LANDMARK,
        keys::PERSONA_PRIMARY,
        keys::PERSONA_ALTERNATIVES,
        keys::PERSONA_EXPAND,
        keys::CONVERSATION_PREAMBLE,
        keys::CONVERSATION_GREETING,
    ];

    #[test]
    fn every_key_has_a_default() {
        for key in ALL_KEYS {
            assert!(get_default(key).is_some(), "missing default for {key}");
        }
        assert!(get_default("nope.missing").is_none());
    }

    #[test]
    fn env_var_names_are_derived_from_keys() {
        assert_eq!(
            key_to_env_var(keys::PERSONA_PRIMARY),
            "TIMETRAVELER_PROMPT_PERSONA_PRIMARY"
        );
    }

    #[test]
    fn render_fills_known_slots_only() {
        assert_eq!(
            render("{a} and {b} and {c}", &[("a", "x"), ("b", "y")]),
            "x and y and {c}"
        );
    }

    #[test]
    fn preamble_names_the_location() {
        let facts = LandmarkFacts::new("Taj Mahal", "Agra, India", "mausoleum", "Built 1632-1653.");
        let preamble = landmark_preamble(&facts);
        assert!(preamble.starts_with("CURRENT LOCATION: Taj Mahal (Agra, India)"));
        assert!(preamble.contains("Built 1632-1653."));
    }

    #[test]
    fn primary_prompt_carries_worked_examples() {
        let mut identification = LandmarkIdentification::unidentified("");
        identification.identified = true;
        identification.name = "Taj Mahal".to_string();
        let prompt = primary_persona_prompt(&identification);
        assert!(prompt.contains("standing at Taj Mahal"));
        assert!(prompt.contains("Shah Jahan"));
    }
}
