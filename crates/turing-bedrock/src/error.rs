use thiserror::Error;

#[derive(Debug, Error)]
pub enum BedrockError {
    #[error("model invocation failed: {0}")]
    Invocation(String),

    #[error("response parsing failed: {0}")]
    ResponseParse(String),

    #[error("AWS config error: {0}")]
    Config(String),
}

impl From<BedrockError> for turing_core::error::CoreError {
    fn from(e: BedrockError) -> Self {
        turing_core::error::CoreError::Generation(e.to_string())
    }
}
