//! Normalization of language-model input and output.

/// Longest prompt, in characters, forwarded to the model.
pub const MAX_PROMPT_CHARS: usize = 500;

/// Outputs shorter than this (in characters) are treated as degenerate.
pub const MIN_REPLY_CHARS: usize = 2;

/// Reply when no model is configured.
pub const MODEL_UNAVAILABLE_REPLY: &str =
    "I'm having some technical problems. Can we pick this up later?";

/// Reply when the model produced nothing usable.
pub const DEGENERATE_REPLY: &str = "Interesting! Can you tell me more about that?";

/// Reply when the model invocation failed.
pub const GENERATION_FAILED_REPLY: &str =
    "Hmm, I'm not sure what to say about that. What else would you like to talk about?";

/// Keep at most [`MAX_PROMPT_CHARS`] characters of `text`.
pub fn truncate_prompt(text: &str) -> &str {
    match text.char_indices().nth(MAX_PROMPT_CHARS) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Clean raw model output.
///
/// Strips surrounding whitespace and any echo of the prompt. Returns `None`
/// when what remains is too short to be a reply.
pub fn clean_generated(output: &str, prompt: &str) -> Option<String> {
    let mut reply = output.trim().to_string();

    let prompt = prompt.trim();
    if !prompt.is_empty() && reply.contains(prompt) {
        reply = reply.replace(prompt, "").trim().to_string();
    }

    if reply.chars().count() < MIN_REPLY_CHARS {
        return None;
    }
    Some(reply)
}
