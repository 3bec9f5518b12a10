use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::models::session::{Message, TuringSession};
use crate::responder::Responder;

/// End-of-game disclosure returned to the player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reveal {
    pub identity: Responder,
    pub message_count: u32,
    /// Elapsed time as `MM:SS`. Minutes are not capped at 59.
    pub duration: String,
    pub duration_secs: u64,
    pub conversation: Vec<Message>,
}

impl Reveal {
    pub fn new(session: &TuringSession, elapsed: Duration) -> Self {
        let secs = elapsed.as_secs();
        Self {
            identity: session.responder(),
            message_count: session.message_count(),
            duration: format_duration(secs),
            duration_secs: secs,
            conversation: session.messages().to_vec(),
        }
    }
}

/// Format whole seconds as zero-padded `MM:SS`.
pub fn format_duration(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
