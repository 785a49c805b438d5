//! Domain entities - Core objects of the persona pipeline

mod landmark;
mod persona;

pub use landmark::{Confidence, GalleryImage, LandmarkFacts, LandmarkIdentification};
pub use persona::{
    Persona, PersonaCandidate, DEFAULT_AVATAR, DEFAULT_ERA, DEFAULT_REGION, DEFAULT_RELATIONSHIP,
    DEFAULT_SPEAKING_STYLE, DEFAULT_TITLE,
};
