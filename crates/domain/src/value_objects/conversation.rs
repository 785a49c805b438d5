//! Conversation turns and the ordered history of one persona at one landmark

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::AudioClip;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    User,
    Assistant,
}

/// One message in a conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: TurnRole,
    pub content: String,
    /// Narration for assistant turns, when speech is enabled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<AudioClip>,
    pub timestamp: DateTime<Utc>,
}

impl ConversationTurn {
    pub fn user(content: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            role: TurnRole::User,
            content: content.into(),
            audio: None,
            timestamp,
        }
    }

    pub fn assistant(content: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            role: TurnRole::Assistant,
            content: content.into(),
            audio: None,
            timestamp,
        }
    }

    #[must_use]
    pub fn with_audio(mut self, audio: Option<AudioClip>) -> Self {
        self.audio = audio;
        self
    }

    pub fn is_user(&self) -> bool {
        self.role == TurnRole::User
    }
}

/// Turn-ordered history scoped to one (persona, landmark) pair.
///
/// The owner clears it whenever either side of the pair changes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConversationHistory {
    turns: Vec<ConversationTurn>,
}

impl ConversationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, turn: ConversationTurn) {
        self.turns.push(turn);
    }

    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn clear(&mut self) {
        self.turns.clear();
    }

    /// The opening assistant turn, if the conversation started with one.
    pub fn greeting(&self) -> Option<&ConversationTurn> {
        self.turns.first().filter(|turn| !turn.is_user())
    }

    pub fn last(&self) -> Option<&ConversationTurn> {
        self.turns.last()
    }

    /// Only used to attach narration audio after the fact.
    pub fn last_mut(&mut self) -> Option<&mut ConversationTurn> {
        self.turns.last_mut()
    }

    /// The most recent `max_turns` turns in original order.
    ///
    /// When the greeting has scrolled out of the window it is kept at the
    /// head in place of the oldest windowed turn.
    pub fn window(&self, max_turns: usize) -> Vec<&ConversationTurn> {
        if max_turns == 0 {
            return Vec::new();
        }
        if self.turns.len() <= max_turns {
            return self.turns.iter().collect();
        }

        match self.greeting() {
            Some(greeting) => {
                let tail_start = self.turns.len() - (max_turns - 1);
                std::iter::once(greeting)
                    .chain(self.turns[tail_start..].iter())
                    .collect()
            }
            None => self.turns[self.turns.len() - max_turns..].iter().collect(),
        }
    }
}
