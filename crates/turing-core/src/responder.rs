//! Response selection: who answers a session, and how the answer is made.

use async_trait::async_trait;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::canned;
use crate::error::CoreError;
use crate::sanitize;

/// Who answers the user's messages for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Responder {
    Human,
    Ai,
}

impl Responder {
    /// Draw a responder, picking `Human` with probability `human_probability`.
    ///
    /// The probability is clamped to `[0, 1]`.
    pub fn draw<R: Rng + ?Sized>(rng: &mut R, human_probability: f64) -> Self {
        let p = if human_probability.is_nan() {
            0.5
        } else {
            human_probability.clamp(0.0, 1.0)
        };
        if rng.gen_bool(p) {
            Responder::Human
        } else {
            Responder::Ai
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Responder::Human => "human",
            Responder::Ai => "ai",
        }
    }
}

/// A text-generation backend the AI responder forwards user text to.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Identifier of the underlying model, for logging.
    fn model_id(&self) -> &str;

    /// Generate a continuation for `prompt`. The output is raw and may echo
    /// the prompt; callers sanitize it.
    async fn generate(&self, prompt: &str) -> Result<String, CoreError>;
}

/// Where a reply's text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplySource {
    /// Drawn from the canned phrase table.
    Canned,
    /// Produced by the language model.
    Model,
    /// A static phrase substituted for missing, failed, or degenerate output.
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub source: ReplySource,
}

impl Reply {
    fn fallback(text: &str) -> Self {
        Self {
            text: text.to_string(),
            source: ReplySource::Fallback,
        }
    }
}

/// Produce the reply for `user_text` according to `responder`.
pub async fn respond<R: Rng + Send + ?Sized>(
    responder: Responder,
    user_text: &str,
    generator: Option<&dyn TextGenerator>,
    rng: &mut R,
) -> Reply {
    match responder {
        Responder::Human => Reply {
            text: canned::pick(rng).to_string(),
            source: ReplySource::Canned,
        },
        Responder::Ai => model_reply(generator, user_text).await,
    }
}

/// Ask the model for a reply, substituting a fallback phrase whenever it is
/// unavailable, fails, or returns something unusable. Never errors.
pub async fn model_reply(generator: Option<&dyn TextGenerator>, user_text: &str) -> Reply {
    let Some(generator) = generator else {
        return Reply::fallback(sanitize::MODEL_UNAVAILABLE_REPLY);
    };

    let prompt = sanitize::truncate_prompt(user_text);

    match generator.generate(prompt).await {
        Ok(output) => match sanitize::clean_generated(&output, prompt) {
            Some(text) => Reply {
                text,
                source: ReplySource::Model,
            },
            None => {
                warn!(
                    model_id = generator.model_id(),
                    output_len = output.len(),
                    "degenerate model output, using fallback"
                );
                Reply::fallback(sanitize::DEGENERATE_REPLY)
            }
        },
        Err(e) => {
            warn!(model_id = generator.model_id(), error = %e, "generation failed, using fallback");
            Reply::fallback(sanitize::GENERATION_FAILED_REPLY)
        }
    }
}
