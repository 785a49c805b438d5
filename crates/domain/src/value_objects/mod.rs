//! Value objects - Immutable objects defined by their attributes

mod audio;
mod conversation;
mod roleplay;
mod voice;

pub use audio::AudioClip;
pub use conversation::{ConversationHistory, ConversationTurn, TurnRole};

// Roleplay instruction rendering (knowledge cutoff lives here)
pub use roleplay::{knowledge_cutoff_clause, roleplay_instruction, KNOWLEDGE_CUTOFF_MARKER};

pub use voice::{VoiceAge, VoiceDescriptor, VoiceGender};
