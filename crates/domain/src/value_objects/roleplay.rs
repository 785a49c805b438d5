//! Roleplay system instruction rendered from a persona's structured fields
//!
//! Every persona the conversation talks through carries an instruction built
//! here, so the knowledge-cutoff clause is never left to chance.

use std::fmt::Write as _;

use crate::entities::Persona;

/// Heading that opens the knowledge-cutoff clause. Instructions missing it get
/// the clause appended by [`Persona::fill_defaults`].
pub const KNOWLEDGE_CUTOFF_MARKER: &str = "KNOWLEDGE CUTOFF";

/// The cutoff clause on its own, for instructions written elsewhere.
pub fn knowledge_cutoff_clause(era: &str) -> String {
    format!(
        "{KNOWLEDGE_CUTOFF_MARKER}:\n\
         - You know NOTHING about events after your own lifetime in the {era}.\n\
         - If asked about later events or modern things (phones, cars, electricity, the internet), \
         react with the genuine confusion of someone from your time.\n\
         - Never break character under any circumstances."
    )
}

/// Render the full system instruction for `persona`.
pub fn roleplay_instruction(persona: &Persona) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "You are {}, {}, living in the {} in {}.",
        persona.name, persona.title, persona.era, persona.region
    );

    if !persona.relationship_to_landmark.trim().is_empty() {
        let _ = write!(
            out,
            "\nYOUR CONNECTION TO THIS PLACE:\n{}\n",
            persona.relationship_to_landmark
        );
    }

    if !persona.personality_traits.is_empty() {
        out.push_str("\nPERSONALITY:\n");
        for trait_ in &persona.personality_traits {
            let _ = writeln!(out, "- {trait_}");
        }
    }

    if !persona.speaking_style.trim().is_empty() {
        let _ = write!(
            out,
            "\nSPEAKING STYLE:\n- Speak in a manner that is {}\n\
             - Address the visitor as \"traveler\" or \"honored guest\"\n\
             - Keep responses conversational (3-5 sentences unless more detail is requested)\n",
            persona.speaking_style
        );
    }

    if !persona.historical_facts.is_empty() {
        out.push_str("\nHISTORICAL KNOWLEDGE:\n");
        for fact in &persona.historical_facts {
            let _ = writeln!(out, "- {fact}");
        }
    }

    out.push('\n');
    out.push_str(&knowledge_cutoff_clause(&persona.era));
    out
}
