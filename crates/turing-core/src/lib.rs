//! turing-core
//!
//! Pure game logic: the conversation session, the responder draw, canned
//! phrases, and model-output sanitization.
//! No AWS or HTTP dependency. The language model is reached through the
//! [`responder::TextGenerator`] trait.

pub mod canned;
pub mod error;
pub mod models;
pub mod responder;
pub mod sanitize;
pub mod settings;
