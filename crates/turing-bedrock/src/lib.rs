//! turing-bedrock
//!
//! Bedrock-backed text generation for the AI side of the game.

pub mod client;
pub mod error;
pub mod generate;
