//! TimeTraveler domain: landmarks, personas and conversations with the past.
//!
//! Pure data and invariants. No I/O lives in this crate; the engine wires
//! completion, speech and image-search services around these types.

pub mod catalog;
pub mod common;
pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use entities::{
    Confidence, GalleryImage, LandmarkFacts, LandmarkIdentification, Persona, PersonaCandidate,
};

pub use error::DomainError;

pub use ids::SessionId;

pub use value_objects::{
    knowledge_cutoff_clause, roleplay_instruction, AudioClip, ConversationHistory,
    ConversationTurn, TurnRole, VoiceAge, VoiceDescriptor, VoiceGender, KNOWLEDGE_CUTOFF_MARKER,
};
