//! Replies used when the session's responder is the human side.

use rand::seq::SliceRandom;
use rand::Rng;

const PHRASES: &[&str] = &[
    "Interesting! Tell me more about that...",
    "I'd never looked at it from that angle! What made you think of it?",
    "That reminds me of something that happened to me recently!",
    "Hmm, I'm not so sure about that. What's your take?",
    "Nice! I'm into that topic too!",
    "Sometimes I catch myself thinking about that as well... it's complicated!",
    "Have you had any experience with that yourself?",
    "Wow, we could talk about that for hours!",
    "I don't know much about it, but it sounds fascinating!",
    "How do you feel about it?",
    "That's really something to think about...",
    "I've been through something similar! It was pretty challenging!",
    "I don't have a strong opinion, but I find it intriguing!",
    "What an interesting conversation we're having!",
    "That gets me thinking about a lot of things...",
    "Life surprises us sometimes, doesn't it?",
    "Do you think that's common for most people?",
    "Go on, I'm curious!",
    "Wow, I never saw it from that perspective!",
    "That's something I've always wondered about too!",
];

/// The full phrase table.
pub fn all() -> &'static [&'static str] {
    PHRASES
}

/// Pick a phrase uniformly at random.
pub fn pick<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    // PHRASES is a non-empty constant.
    PHRASES.choose(rng).copied().unwrap_or(PHRASES[0])
}
