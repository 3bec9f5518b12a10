use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("empty message")]
    EmptyMessage,

    #[error("invalid setting: {0}")]
    InvalidSetting(String),

    #[error("text generation failed: {0}")]
    Generation(String),
}
