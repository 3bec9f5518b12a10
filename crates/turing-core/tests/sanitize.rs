use turing_core::sanitize::{MAX_PROMPT_CHARS, clean_generated, truncate_prompt};

#[test]
fn short_prompt_is_untouched() {
    assert_eq!(truncate_prompt("hello"), "hello");
}

#[test]
fn long_prompt_is_cut_at_char_limit() {
    let long = "a".repeat(MAX_PROMPT_CHARS + 50);
    assert_eq!(truncate_prompt(&long).len(), MAX_PROMPT_CHARS);
}

#[test]
fn truncation_respects_char_boundaries() {
    let long = "é".repeat(MAX_PROMPT_CHARS + 1);
    let cut = truncate_prompt(&long);
    assert_eq!(cut.chars().count(), MAX_PROMPT_CHARS);
    assert_eq!(cut.len(), MAX_PROMPT_CHARS * 2);
}

#[test]
fn output_is_trimmed() {
    assert_eq!(
        clean_generated("  Sounds fun!  \n", "let's go hiking"),
        Some("Sounds fun!".to_string())
    );
}

#[test]
fn echoed_prompt_is_removed() {
    assert_eq!(
        clean_generated("how are you? I'm good, thanks.", "how are you?"),
        Some("I'm good, thanks.".to_string())
    );
}

#[test]
fn pure_echo_is_degenerate() {
    assert_eq!(clean_generated("how are you?", "how are you?"), None);
}

#[test]
fn too_short_output_is_degenerate() {
    assert_eq!(clean_generated("", "hi"), None);
    assert_eq!(clean_generated("   ", "hi"), None);
    assert_eq!(clean_generated("k", "hi"), None);
    assert_eq!(clean_generated("ok", "hi"), Some("ok".to_string()));
}
