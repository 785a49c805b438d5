//! Conversation with the active persona.
//!
//! Per-session state lives in [`SessionContext`], owned by the caller and
//! passed in by `&mut`, so one session never sees two turns at once. The
//! [`ConversationEngine`] itself is stateless and shared.
//!
//! Every completion call carries the persona's system instruction with the
//! landmark facts appended, then the replayed history window, then the new
//! user message.

use std::sync::Arc;

use timetraveler_domain::{
    AudioClip, ConversationHistory, ConversationTurn, GalleryImage, LandmarkFacts,
    LandmarkIdentification, Persona, PersonaCandidate, SessionId, TurnRole,
};

use crate::infrastructure::ports::{ChatMessage, ClockPort, LlmError, LlmPort, LlmRequest};
use crate::prompt_templates;

/// Shown when a persona cannot answer.
pub const APOLOGY: &str =
    "*The spirit's voice fades...* Forgive me, traveler, the mists of time grow thick. Ask me again.";

/// Shown when there is nobody to talk to yet.
pub const IDLE_NOTICE: &str =
    "No one from the past is here yet. Share a photo of a landmark to begin your journey.";

/// Shown for a blank message.
pub const SILENCE_NOTICE: &str = "*waits patiently for your question*";

const CONVERSATION_TEMPERATURE: f32 = 0.8;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConversationPhase {
    /// No persona and landmark pair is active.
    #[default]
    Idle,
    /// A pair is active and the greeting has not been produced.
    Greeting,
    /// The greeting is done; turns are being exchanged.
    Active,
}

/// Everything one user's journey knows. Owned by the caller.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    pub id: SessionId,
    pub landmark: Option<LandmarkFacts>,
    pub identification: Option<LandmarkIdentification>,
    pub persona: Option<Persona>,
    pub alternatives: Vec<PersonaCandidate>,
    pub gallery: Vec<GalleryImage>,
    history: ConversationHistory,
    phase: ConversationPhase,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> &ConversationHistory {
        &self.history
    }

    pub fn phase(&self) -> ConversationPhase {
        self.phase
    }

    /// Start a fresh conversation between `persona` and `landmark`.
    pub fn activate(&mut self, persona: Persona, landmark: LandmarkFacts) {
        self.persona = Some(persona);
        self.landmark = Some(landmark);
        self.restart();
    }

    /// Keep the landmark, talk to someone else.
    pub fn switch_persona(&mut self, persona: Persona) {
        self.persona = Some(persona);
        self.restart();
    }

    /// Keep the persona, move to another place.
    pub fn switch_landmark(&mut self, landmark: LandmarkFacts) {
        self.landmark = Some(landmark);
        self.restart();
    }

    /// Forget everything except the session id.
    pub fn reset(&mut self) {
        *self = Self {
            id: self.id,
            ..Self::default()
        };
    }

    /// Attach narration to the most recent assistant turn.
    pub fn attach_audio(&mut self, audio: AudioClip) {
        if let Some(turn) = self
            .history
            .last_mut()
            .filter(|turn| turn.role == TurnRole::Assistant)
        {
            turn.audio = Some(audio);
        }
    }

    fn restart(&mut self) {
        self.history.clear();
        self.phase = ConversationPhase::Idle;
        if self.persona.is_some() && self.landmark.is_some() {
            self.phase = ConversationPhase::Greeting;
        }
    }
}

pub struct ConversationEngine {
    llm: Arc<dyn LlmPort>,
    clock: Arc<dyn ClockPort>,
    max_history_turns: usize,
}

impl ConversationEngine {
    pub fn new(llm: Arc<dyn LlmPort>, clock: Arc<dyn ClockPort>, max_history_turns: usize) -> Self {
        Self {
            llm,
            clock,
            max_history_turns,
        }
    }

    /// Produce the persona's opening line, once per activation.
    ///
    /// In `Active` the existing greeting is returned without a call; in
    /// `Idle` a neutral notice. A failed greeting leaves the phase alone so
    /// it can be retried.
    pub async fn greet(&self, ctx: &mut SessionContext) -> String {
        match ctx.phase {
            ConversationPhase::Idle => return IDLE_NOTICE.to_string(),
            ConversationPhase::Active => {
                return ctx
                    .history
                    .greeting()
                    .map(|turn| turn.content.clone())
                    .unwrap_or_else(|| APOLOGY.to_string());
            }
            ConversationPhase::Greeting => {}
        }

        let (Some(persona), Some(landmark)) = (&ctx.persona, &ctx.landmark) else {
            return IDLE_NOTICE.to_string();
        };

        match self.complete(persona, landmark, &[], &prompt_templates::greeting_instruction()).await {
            Ok(greeting) => {
                tracing::info!(session = %ctx.id, persona = %persona.name, "Persona greeted traveler");
                ctx.history
                    .push(ConversationTurn::assistant(greeting.clone(), self.clock.now()));
                ctx.phase = ConversationPhase::Active;
                greeting
            }
            Err(e) => {
                tracing::warn!(session = %ctx.id, error = %e, "Greeting failed");
                APOLOGY.to_string()
            }
        }
    }

    /// Answer the traveler in character and record both turns.
    ///
    /// A pending greeting is produced first. On failure the apology is
    /// returned and the history is left untouched.
    pub async fn respond(&self, ctx: &mut SessionContext, user_message: &str) -> String {
        if ctx.phase == ConversationPhase::Idle {
            return IDLE_NOTICE.to_string();
        }
        let message = user_message.trim();
        if message.is_empty() {
            return SILENCE_NOTICE.to_string();
        }

        if ctx.phase == ConversationPhase::Greeting {
            self.greet(ctx).await;
            // One attempt per activation; the conversation goes on without it.
            ctx.phase = ConversationPhase::Active;
        }

        let (Some(persona), Some(landmark)) = (&ctx.persona, &ctx.landmark) else {
            return IDLE_NOTICE.to_string();
        };

        let window = ctx.history.window(self.max_history_turns);
        match self.complete(persona, landmark, &window, message).await {
            Ok(reply) => {
                tracing::debug!(
                    session = %ctx.id,
                    persona = %persona.name,
                    replayed = window.len(),
                    "Persona replied"
                );
                let now = self.clock.now();
                ctx.history.push(ConversationTurn::user(message, now));
                ctx.history.push(ConversationTurn::assistant(reply.clone(), now));
                reply
            }
            Err(e) => {
                tracing::warn!(session = %ctx.id, error = %e, "Persona reply failed");
                apology_for(message)
            }
        }
    }

    /// Greeting for callers that keep their own history.
    pub async fn greeting_for(&self, persona: &Persona, landmark: &LandmarkFacts) -> String {
        self.complete(persona, landmark, &[], &prompt_templates::greeting_instruction())
            .await
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Greeting failed");
                APOLOGY.to_string()
            })
    }

    /// Reply for callers that keep their own history. `history` is replayed
    /// through the same window as [`ConversationEngine::respond`].
    pub async fn reply_for(
        &self,
        persona: &Persona,
        landmark: &LandmarkFacts,
        history: &[ConversationTurn],
        user_message: &str,
    ) -> String {
        let mut owned = ConversationHistory::new();
        for turn in history {
            owned.push(turn.clone());
        }
        let window = owned.window(self.max_history_turns);

        self.complete(persona, landmark, &window, user_message)
            .await
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Persona reply failed");
                apology_for(user_message)
            })
    }

    async fn complete(
        &self,
        persona: &Persona,
        landmark: &LandmarkFacts,
        window: &[&ConversationTurn],
        user_message: &str,
    ) -> Result<String, LlmError> {
        let request = LlmRequest::new(build_messages(window, user_message))
            .with_system_prompt(system_prompt(persona, landmark))
            .with_temperature(CONVERSATION_TEMPERATURE);

        let response = self.llm.generate(request).await?;
        let text = response.content.trim();
        if text.is_empty() {
            return Err(LlmError::InvalidResponse("empty reply".to_string()));
        }
        Ok(text.to_string())
    }
}

/// Persona instruction with the landmark facts pinned after it.
pub fn system_prompt(persona: &Persona, landmark: &LandmarkFacts) -> String {
    format!(
        "{}\n\n{}",
        persona.system_instruction.trim_end(),
        prompt_templates::landmark_preamble(landmark)
    )
}

/// Replayed turns followed by the new message. A replay that opens with the
/// persona's greeting is preceded by the instruction that produced it, so
/// the sequence always starts with a user turn.
fn build_messages(window: &[&ConversationTurn], user_message: &str) -> Vec<ChatMessage> {
    let mut messages = Vec::with_capacity(window.len() + 2);
    if window.first().is_some_and(|turn| !turn.is_user()) {
        messages.push(ChatMessage::user(prompt_templates::greeting_instruction()));
    }
    messages.extend(window.iter().map(|turn| match turn.role {
        TurnRole::User => ChatMessage::user(turn.content.clone()),
        TurnRole::Assistant => ChatMessage::assistant(turn.content.clone()),
    }));
    messages.push(ChatMessage::user(user_message));
    messages
}

fn apology_for(user_message: &str) -> String {
    if user_message.trim() == APOLOGY {
        format!("{APOLOGY} ...")
    } else {
        APOLOGY.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::FixedClock;
    use crate::infrastructure::ports::{LlmResponse, MessageRole, MockClockPort, MockLlmPort};
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use std::sync::Mutex;
    use timetraveler_domain::catalog;

    /// Answers with a numbered reply and keeps every request.
    struct RecordingLlm {
        requests: Mutex<Vec<LlmRequest>>,
    }

    impl RecordingLlm {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                requests: Mutex::new(Vec::new()),
            })
        }

        fn requests(&self) -> Vec<LlmRequest> {
            self.requests.lock().expect("not poisoned").clone()
        }
    }

    #[async_trait]
    impl LlmPort for RecordingLlm {
        async fn generate(&self, request: LlmRequest) -> Result<LlmResponse, LlmError> {
            let mut requests = self.requests.lock().expect("not poisoned");
            requests.push(request);
            Ok(LlmResponse::text(format!("reply {}", requests.len())))
        }
    }

    fn clock() -> Arc<FixedClock> {
        Arc::new(FixedClock(
            Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0)
                .single()
                .expect("valid timestamp"),
        ))
    }

    fn taj_session() -> SessionContext {
        let landmark = catalog::landmark("taj_mahal").expect("in catalog");
        let persona = catalog::persona("shah_jahan").expect("in catalog");
        let mut ctx = SessionContext::new();
        ctx.activate(persona, landmark.facts());
        ctx
    }

    fn always_failing() -> Arc<MockLlmPort> {
        let mut llm = MockLlmPort::new();
        llm.expect_generate()
            .returning(|_| Err(LlmError::RequestFailed("connection reset".into())));
        Arc::new(llm)
    }

    #[test]
    fn activation_moves_to_greeting() {
        let mut ctx = SessionContext::new();
        assert_eq!(ctx.phase(), ConversationPhase::Idle);

        ctx.activate(
            Persona::fallback_historian("Colosseum"),
            LandmarkFacts::new("Colosseum", "Rome", "Amphitheatre", ""),
        );
        assert_eq!(ctx.phase(), ConversationPhase::Greeting);
    }

    #[tokio::test]
    async fn greeting_is_produced_once() {
        let llm = RecordingLlm::new();
        let engine = ConversationEngine::new(llm.clone(), clock(), 20);
        let mut ctx = taj_session();

        let first = engine.greet(&mut ctx).await;
        let second = engine.greet(&mut ctx).await;

        assert_eq!(first, "reply 1");
        assert_eq!(second, first);
        assert_eq!(llm.requests().len(), 1);
        assert_eq!(ctx.phase(), ConversationPhase::Active);
        assert_eq!(ctx.history().len(), 1);

        let request = &llm.requests()[0];
        assert_eq!(request.messages.len(), 1);
        let system = request.system_prompt.as_deref().unwrap_or_default();
        assert!(system.starts_with("You are Shah Jahan"));
        assert!(system.contains("CURRENT LOCATION: Taj Mahal"));
    }

    #[tokio::test]
    async fn idle_session_gets_a_notice_without_a_call() {
        let engine = ConversationEngine::new(Arc::new(MockLlmPort::new()), clock(), 20);
        let mut ctx = SessionContext::new();

        assert_eq!(engine.greet(&mut ctx).await, IDLE_NOTICE);
        assert_eq!(engine.respond(&mut ctx, "hello?").await, IDLE_NOTICE);
        assert!(ctx.history().is_empty());
    }

    #[tokio::test]
    async fn second_reply_replays_all_prior_turns_in_order() {
        let llm = RecordingLlm::new();
        let engine = ConversationEngine::new(llm.clone(), clock(), 20);
        let mut ctx = taj_session();

        engine.respond(&mut ctx, "Who built this?").await;
        engine.respond(&mut ctx, "Why white marble?").await;

        let requests = llm.requests();
        // greeting, first reply, second reply
        assert_eq!(requests.len(), 3);

        let replay: Vec<(MessageRole, &str)> = requests[2]
            .messages
            .iter()
            .map(|m| (m.role, m.content.as_str()))
            .collect();
        let greeting_instruction = prompt_templates::greeting_instruction();
        assert_eq!(
            replay,
            vec![
                (MessageRole::User, greeting_instruction.as_str()),
                (MessageRole::Assistant, "reply 1"),
                (MessageRole::User, "Who built this?"),
                (MessageRole::Assistant, "reply 2"),
                (MessageRole::User, "Why white marble?"),
            ]
        );
        assert_eq!(ctx.history().len(), 5);
        assert!(requests.iter().all(|r| r.system_prompt == requests[0].system_prompt));
    }

    #[tokio::test]
    async fn replay_window_keeps_the_greeting() {
        let llm = RecordingLlm::new();
        let engine = ConversationEngine::new(llm.clone(), clock(), 3);
        let mut ctx = taj_session();

        for question in ["one", "two", "three"] {
            engine.respond(&mut ctx, question).await;
        }

        let last = llm.requests().pop().expect("requests made");
        let contents: Vec<&str> = last.messages.iter().map(|m| m.content.as_str()).collect();
        // lead-in + greeting + last two turns + new message
        assert_eq!(contents.len(), 5);
        assert_eq!(contents[1], "reply 1");
        assert_eq!(&contents[2..], &["two", "reply 3", "three"]);
    }

    #[tokio::test]
    async fn always_failing_service_apologizes() {
        let engine = ConversationEngine::new(always_failing(), clock(), 20);
        let mut ctx = taj_session();

        for input in ["Hello?", APOLOGY] {
            let reply = engine.respond(&mut ctx, input).await;
            assert!(!reply.is_empty());
            assert_ne!(reply, input);
        }
        assert!(ctx.history().is_empty());
        assert_eq!(ctx.phase(), ConversationPhase::Active);
    }

    #[tokio::test]
    async fn failed_greeting_can_be_retried() {
        let engine = ConversationEngine::new(always_failing(), clock(), 20);
        let mut ctx = taj_session();

        assert_eq!(engine.greet(&mut ctx).await, APOLOGY);
        assert_eq!(ctx.phase(), ConversationPhase::Greeting);
    }

    #[tokio::test]
    async fn switching_resets_history_and_phase() {
        let llm = RecordingLlm::new();
        let engine = ConversationEngine::new(llm, clock(), 20);
        let mut ctx = taj_session();
        engine.respond(&mut ctx, "Hello").await;
        assert!(!ctx.history().is_empty());

        ctx.switch_persona(catalog::persona("emperor_ashoka").expect("in catalog"));
        assert!(ctx.history().is_empty());
        assert_eq!(ctx.phase(), ConversationPhase::Greeting);

        engine.respond(&mut ctx, "Hello again").await;
        let colosseum = catalog::landmark("colosseum").expect("in catalog");
        ctx.switch_landmark(colosseum.facts());
        assert!(ctx.history().is_empty());
        assert_eq!(ctx.phase(), ConversationPhase::Greeting);

        let id = ctx.id;
        ctx.reset();
        assert_eq!(ctx.phase(), ConversationPhase::Idle);
        assert!(ctx.persona.is_none() && ctx.landmark.is_none());
        assert_eq!(ctx.id, id);
    }

    #[tokio::test]
    async fn turns_are_stamped_by_the_clock() {
        let stamp = Utc.with_ymd_and_hms(1653, 1, 1, 0, 0, 0).single().expect("valid");
        let mut clock = MockClockPort::new();
        clock.expect_now().returning(move || stamp);

        let engine = ConversationEngine::new(RecordingLlm::new(), Arc::new(clock), 20);
        let mut ctx = taj_session();
        engine.respond(&mut ctx, "When?").await;

        assert!(ctx.history().turns().iter().all(|t| t.timestamp == stamp));
    }

    #[tokio::test]
    async fn audio_attaches_to_the_latest_reply() {
        let engine = ConversationEngine::new(RecordingLlm::new(), clock(), 20);
        let mut ctx = taj_session();
        engine.respond(&mut ctx, "Speak!").await;

        ctx.attach_audio(AudioClip::new(vec![1, 2, 3], "audio/mpeg"));

        let last = ctx.history().last().expect("reply recorded");
        assert!(last.audio.is_some());
        assert!(ctx.history().turns()[0].audio.is_none());
    }

    #[tokio::test]
    async fn stateless_variants_share_the_pipeline() {
        let llm = RecordingLlm::new();
        let engine = ConversationEngine::new(llm.clone(), clock(), 20);
        let persona = catalog::persona("cleopatra").expect("in catalog");
        let landmark = catalog::landmark("pyramids_giza").expect("in catalog").facts();

        let greeting = engine.greeting_for(&persona, &landmark).await;
        let history = vec![
            ConversationTurn::assistant(greeting, Utc::now()),
            ConversationTurn::user("Did you see them built?", Utc::now()),
            ConversationTurn::assistant("They were ancient even to me.", Utc::now()),
        ];
        let reply = engine
            .reply_for(&persona, &landmark, &history, "How ancient?")
            .await;

        assert_eq!(reply, "reply 2");
        let requests = llm.requests();
        assert_eq!(requests[1].messages.len(), 5);
        assert_eq!(
            requests[1].messages.last().map(|m| m.content.as_str()),
            Some("How ancient?")
        );
    }

    #[tokio::test]
    async fn stateless_failure_apologizes() {
        let engine = ConversationEngine::new(always_failing(), clock(), 20);
        let persona = Persona::fallback_historian("Sanchi");
        let landmark = LandmarkFacts::new("Sanchi", "India", "Stupa", "");

        assert_eq!(engine.greeting_for(&persona, &landmark).await, APOLOGY);
        assert_eq!(engine.reply_for(&persona, &landmark, &[], "hi").await, APOLOGY);
    }
}
