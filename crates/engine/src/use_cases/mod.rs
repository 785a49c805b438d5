//! Use cases - User story orchestration.
//!
//! Each module covers one step of a journey. [`Journey`] strings them
//! together; the others are usable on their own.

pub mod conversation;
pub mod gallery;
pub mod journey;
pub mod landmark;
pub mod narration;
pub mod persona;
pub mod response_parser;

pub use conversation::{ConversationEngine, ConversationPhase, SessionContext};
pub use gallery::{GalleryService, PlaceholderCategory};
pub use journey::{Discovery, Journey, Reply};
pub use landmark::LandmarkIdentifier;
pub use narration::Narrator;
pub use persona::PersonaResolver;
pub use response_parser::{ParseError, ParseStrategy, ResponseParser};
