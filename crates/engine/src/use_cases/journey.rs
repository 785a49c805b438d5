//! Journey orchestration: from a photo to a conversation.
//!
//! `discover` runs the whole pipeline for one image: identify the landmark,
//! map it onto the catalog when possible, resolve the primary persona and
//! the alternatives, assemble the gallery, then activate the conversation.
//! Nothing here fails on a flaky service; every step has a fallback.

use std::sync::Arc;

use timetraveler_domain::{
    catalog, AudioClip, DomainError, GalleryImage, LandmarkFacts, LandmarkIdentification, Persona,
};

use super::conversation::{ConversationEngine, ConversationPhase, SessionContext};
use super::gallery::GalleryService;
use super::landmark::LandmarkIdentifier;
use super::narration::Narrator;
use super::persona::PersonaResolver;
use crate::infrastructure::ports::ImageData;

/// What a persona said, with narration when speech is available.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub text: String,
    pub audio: Option<AudioClip>,
}

/// Outcome of [`Journey::discover`].
#[derive(Debug, Clone)]
pub struct Discovery {
    pub identification: LandmarkIdentification,
    /// Catalog key when the landmark matched a catalog entry
    pub catalog_key: Option<&'static str>,
}

impl Discovery {
    pub fn identified(&self) -> bool {
        self.identification.identified
    }
}

pub struct Journey {
    identifier: Arc<LandmarkIdentifier>,
    personas: Arc<PersonaResolver>,
    conversation: Arc<ConversationEngine>,
    gallery: Arc<GalleryService>,
    narrator: Arc<Narrator>,
}

impl Journey {
    pub fn new(
        identifier: Arc<LandmarkIdentifier>,
        personas: Arc<PersonaResolver>,
        conversation: Arc<ConversationEngine>,
        gallery: Arc<GalleryService>,
        narrator: Arc<Narrator>,
    ) -> Self {
        Self {
            identifier,
            personas,
            conversation,
            gallery,
            narrator,
        }
    }

    /// Identify the landmark in `image` and summon someone to talk about it.
    ///
    /// Leaves the session in the greeting phase with a fresh history.
    pub async fn discover(&self, ctx: &mut SessionContext, image: &ImageData) -> Discovery {
        let identification = self.identifier.identify(image).await;

        let catalog_entry = catalog::match_identification(&identification);
        let landmark = match catalog_entry {
            Some(entry) => {
                tracing::info!(catalog_key = entry.key, "Matched landmark to the catalog");
                entry.facts()
            }
            None => LandmarkFacts::from_identification(&identification),
        };

        let mut persona = self.personas.resolve_primary(&identification).await;
        if persona == Persona::fallback_historian(&identification.name) {
            if let Some(curated) = catalog_entry.and_then(|entry| catalog::persona(entry.default_persona)) {
                tracing::debug!(persona = %curated.name, "Using the catalog narrator");
                persona = curated;
            }
        }

        let mut alternatives = self.personas.resolve_alternatives(&identification).await;
        let primary_name = persona.name.to_lowercase();
        alternatives.retain(|candidate| candidate.name.to_lowercase() != primary_name);

        let gallery = match catalog_entry {
            Some(entry) => {
                self.assemble_gallery(
                    landmark.gallery_images.clone(),
                    entry.search_term,
                    &landmark.location,
                    &landmark.kind,
                )
                .await
            }
            None if identification.is_usable() => {
                self.gallery
                    .gallery_for(&landmark.name, &landmark.location, &landmark.kind)
                    .await
            }
            None => self.gallery.placeholder_gallery(&landmark.name, &landmark.kind),
        };

        ctx.reset();
        ctx.identification = Some(identification.clone());
        ctx.alternatives = alternatives;
        ctx.gallery = gallery;
        ctx.activate(persona, landmark);

        Discovery {
            identification,
            catalog_key: catalog_entry.map(|entry| entry.key),
        }
    }

    /// Curated images first, then search results, never more than the
    /// configured gallery size.
    async fn assemble_gallery(
        &self,
        mut images: Vec<GalleryImage>,
        name: &str,
        location: &str,
        kind: &str,
    ) -> Vec<GalleryImage> {
        let size = self.gallery.gallery_size();
        if images.len() < size {
            for image in self.gallery.gallery_for(name, location, kind).await {
                if !images.iter().any(|existing| existing.url == image.url) {
                    images.push(image);
                }
            }
        }
        images.truncate(size);
        images
    }

    /// The opening line of the active persona, narrated.
    pub async fn greet(&self, ctx: &mut SessionContext) -> Reply {
        let text = self.conversation.greet(ctx).await;
        self.narrate(ctx, text).await
    }

    /// Hand the conversation to alternative `index`.
    ///
    /// The previous persona takes the chosen candidate's place in the list so
    /// the traveler can switch back.
    pub async fn switch_narrator(
        &self,
        ctx: &mut SessionContext,
        index: usize,
    ) -> Result<(), DomainError> {
        let landmark = ctx
            .landmark
            .clone()
            .ok_or_else(|| DomainError::invalid_transition("No landmark to talk about yet"))?;
        let candidate = ctx.alternatives.get(index).cloned().ok_or_else(|| {
            DomainError::validation(format!(
                "No narrator number {} ({} available)",
                index + 1,
                ctx.alternatives.len()
            ))
        })?;

        let persona = self.personas.expand(&candidate, &landmark).await;
        if let Some(previous) = ctx.persona.as_ref() {
            ctx.alternatives[index] = previous.candidate();
        }
        tracing::info!(persona = %persona.name, "Switched narrator");
        ctx.switch_persona(persona);
        Ok(())
    }

    /// Activate a predefined persona at the current landmark.
    pub fn choose_catalog_persona(
        &self,
        ctx: &mut SessionContext,
        key: &str,
    ) -> Result<(), DomainError> {
        let persona = catalog::persona(key).ok_or_else(|| DomainError::not_found("Persona", key))?;
        if ctx.landmark.is_none() {
            return Err(DomainError::invalid_transition(
                "No landmark to talk about yet",
            ));
        }
        ctx.switch_persona(persona);
        Ok(())
    }

    /// One exchange with the active persona. A pending greeting is produced
    /// and narrated first.
    pub async fn converse(&self, ctx: &mut SessionContext, text: &str) -> Reply {
        if ctx.phase() == ConversationPhase::Greeting {
            self.greet(ctx).await;
        }
        let reply = self.conversation.respond(ctx, text).await;
        self.narrate(ctx, reply).await
    }

    /// Forget the landmark, the persona and the conversation.
    pub fn new_journey(&self, ctx: &mut SessionContext) {
        ctx.reset();
    }

    /// Conversation starters for the active persona.
    pub fn suggested_questions(&self, ctx: &SessionContext) -> Vec<&'static str> {
        let persona_key = ctx.persona.as_ref().and_then(|persona| {
            catalog::personas()
                .iter()
                .find(|entry| entry.name == persona.name)
                .map(|entry| entry.key)
        });
        let landmark_key = ctx
            .landmark
            .as_ref()
            .and_then(|landmark| catalog::landmark_named(&landmark.name))
            .map(|entry| entry.key);

        catalog::suggested_questions(persona_key.unwrap_or_default(), landmark_key)
    }

    /// Speak `text` if it is the reply just recorded. Notices and apologies
    /// are not narrated.
    async fn narrate(&self, ctx: &mut SessionContext, text: String) -> Reply {
        let recorded = ctx
            .history()
            .last()
            .is_some_and(|turn| !turn.is_user() && turn.content == text);

        let audio = match ctx.persona.as_ref() {
            Some(persona) if recorded && self.narrator.is_enabled() => {
                self.narrator.speak(persona, &text).await
            }
            _ => None,
        };
        if let Some(clip) = &audio {
            ctx.attach_audio(clip.clone());
        }

        Reply { text, audio }
    }
}
