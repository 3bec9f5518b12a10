use std::time::{Duration, Instant};

use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CoreError;
use crate::models::reveal::Reveal;
use crate::responder::Responder;
use crate::settings::GameSettings;

/// Opening line posted by the system when a session starts.
pub const GREETING: &str = "Hi! Shall we chat? Ask me anything!";

/// One user's single-conversation game instance.
///
/// The responder is chosen at construction and has no setter, so it stays
/// fixed for the lifetime of the session. `message_count` only tracks
/// user-authored messages.
#[derive(Debug, Clone)]
pub struct TuringSession {
    id: Uuid,
    responder: Responder,
    messages: Vec<Message>,
    created_at: jiff::Timestamp,
    started: Instant,
    message_count: u32,
}

/// A single message in the conversation transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub sender: Sender,
    pub text: String,
    pub timestamp: jiff::Timestamp,
}

/// Author of a transcript message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    System,
    User,
    Agent,
}

impl TuringSession {
    /// Create a session with a fixed responder and post the greeting.
    pub fn new(responder: Responder) -> Self {
        let mut session = Self {
            id: Uuid::new_v4(),
            responder,
            messages: Vec::new(),
            created_at: jiff::Timestamp::now(),
            started: Instant::now(),
            message_count: 0,
        };
        session.add_message(Sender::System, GREETING);
        session
    }

    /// Create a session whose responder is drawn according to `settings`.
    pub fn start<R: Rng + ?Sized>(rng: &mut R, settings: &GameSettings) -> Self {
        Self::new(Responder::draw(rng, settings.human_probability))
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn responder(&self) -> Responder {
        self.responder
    }

    pub fn is_human(&self) -> bool {
        self.responder == Responder::Human
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn message_count(&self) -> u32 {
        self.message_count
    }

    pub fn created_at(&self) -> jiff::Timestamp {
        self.created_at
    }

    /// Append a message stamped with the current time.
    pub fn add_message(&mut self, sender: Sender, text: impl Into<String>) {
        self.messages.push(Message {
            sender,
            text: text.into(),
            timestamp: jiff::Timestamp::now(),
        });
        if sender == Sender::User {
            self.message_count += 1;
        }
    }

    /// Record a user message. Surrounding whitespace is dropped and blank
    /// input is rejected without touching the transcript.
    pub fn record_user_message(&mut self, text: &str) -> Result<&Message, CoreError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(CoreError::EmptyMessage);
        }
        self.add_message(Sender::User, text);
        Ok(&self.messages[self.messages.len() - 1])
    }

    /// Time since the session started, measured on the monotonic clock.
    pub fn elapsed(&self) -> Duration {
        self.elapsed_since(Instant::now())
    }

    /// Time between the session start and `now`. Saturates at zero for
    /// instants that precede the start.
    pub fn elapsed_since(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started)
    }

    /// Disclose the responder along with the transcript and elapsed time.
    pub fn reveal(&self) -> Reveal {
        Reveal::new(self, self.elapsed())
    }
}
