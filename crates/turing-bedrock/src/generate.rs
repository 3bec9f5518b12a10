//! Single-turn reply generation via the Bedrock Converse API.
//!
//! The game forwards only the latest user message, never the history, and
//! samples with fixed parameters. Output is returned raw; echo stripping
//! and fallbacks are applied by `turing_core::responder`.

use async_trait::async_trait;
use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::types::{
    ContentBlock, ConversationRole, InferenceConfiguration, Message, SystemContentBlock,
};
use tracing::{debug, info};

use turing_core::error::CoreError;
use turing_core::responder::TextGenerator;

use crate::error::BedrockError;

pub const DEFAULT_MODEL_ID: &str = "us.anthropic.claude-haiku-4-5-20251001-v1:0";

pub const DEFAULT_SYSTEM_PROMPT: &str = "\
You are chatting with a stranger in a casual online chat. \
Reply the way an ordinary person would: informal, friendly, one or two short sentences. \
Never mention being an AI, a model, or an assistant. \
Do not repeat the other person's message.";

/// Sampling parameters applied to every generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    pub max_tokens: i32,
    pub temperature: f32,
    pub top_p: Option<f32>,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_tokens: 150,
            temperature: 0.8,
            top_p: None,
        }
    }
}

impl GenerationParams {
    fn inference_config(&self) -> InferenceConfiguration {
        InferenceConfiguration::builder()
            .max_tokens(self.max_tokens)
            .temperature(self.temperature)
            .set_top_p(self.top_p)
            .build()
    }
}

/// Send `prompt` as a single user turn and return the model's text.
pub async fn generate_reply(
    client: &Client,
    model_id: &str,
    system_prompt: &str,
    params: &GenerationParams,
    prompt: &str,
) -> Result<String, BedrockError> {
    let message = Message::builder()
        .role(ConversationRole::User)
        .content(ContentBlock::Text(prompt.to_string()))
        .build()
        .map_err(|e| BedrockError::Invocation(e.to_string()))?;

    debug!(model_id, prompt_len = prompt.len(), "invoking converse");

    let response = client
        .converse()
        .model_id(model_id)
        .system(SystemContentBlock::Text(system_prompt.to_string()))
        .messages(message)
        .inference_config(params.inference_config())
        .send()
        .await
        .map_err(|e| BedrockError::Invocation(e.into_service_error().to_string()))?;

    let output_message = response
        .output()
        .and_then(|o| o.as_message().ok())
        .ok_or_else(|| BedrockError::ResponseParse("no message in response".to_string()))?;

    let text = output_message
        .content()
        .iter()
        .filter_map(|block| {
            if let ContentBlock::Text(text) = block {
                Some(text.as_str())
            } else {
                None
            }
        })
        .collect::<Vec<_>>()
        .join("");

    info!(
        model_id,
        stop_reason = ?response.stop_reason(),
        text_len = text.len(),
        "generation complete"
    );

    Ok(text)
}

/// [`TextGenerator`] backed by a Bedrock model.
#[derive(Debug, Clone)]
pub struct BedrockGenerator {
    client: Client,
    model_id: String,
    system_prompt: String,
    params: GenerationParams,
}

impl BedrockGenerator {
    pub fn new(client: Client, model_id: impl Into<String>) -> Self {
        Self {
            client,
            model_id: model_id.into(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            params: GenerationParams::default(),
        }
    }

    pub fn with_system_prompt(mut self, system_prompt: impl Into<String>) -> Self {
        self.system_prompt = system_prompt.into();
        self
    }

    pub fn with_params(mut self, params: GenerationParams) -> Self {
        self.params = params;
        self
    }

    pub fn params(&self) -> &GenerationParams {
        &self.params
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }
}

#[async_trait]
impl TextGenerator for BedrockGenerator {
    fn model_id(&self) -> &str {
        &self.model_id
    }

    async fn generate(&self, prompt: &str) -> Result<String, CoreError> {
        let text = generate_reply(
            &self.client,
            &self.model_id,
            &self.system_prompt,
            &self.params,
            prompt,
        )
        .await?;
        Ok(text)
    }
}
