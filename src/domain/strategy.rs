//! Pluggable scoring and chat-reply behavior.
//!
//! The results screen and chat widget never generate numbers or replies
//! themselves; they ask a strategy. The defaults are random, and tests swap in
//! deterministic implementations.

use super::candidate::Candidate;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::ops::RangeInclusive;

/// Assigns a match percentage to a candidate.
pub trait ScoringStrategy: fmt::Debug {
    fn score(&mut self, candidate: &Candidate) -> u8;
}

/// Produces the chat bot's reply to a user message.
pub trait ResponseStrategy: fmt::Debug {
    fn reply(&mut self, message: &str) -> String;
}

/// Uniform random score in `70..=97`.
#[derive(Debug)]
pub struct RandomScoring {
    rng: StdRng,
    range: RangeInclusive<u8>,
}

impl RandomScoring {
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Seeded variant for reproducible sessions.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self { rng, range: 70..=97 }
    }
}

impl Default for RandomScoring {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoringStrategy for RandomScoring {
    fn score(&mut self, _candidate: &Candidate) -> u8 {
        self.rng.gen_range(self.range.clone())
    }
}

/// The assistant's opening line.
pub const CHAT_GREETING: &str =
    "Hi there! I'm your recruitment assistant. How can I help you find the right candidate today?";

const CANNED_REPLIES: [&str; 5] = [
    "I recommend using more specific skills in your search query like 'React Native' or 'AWS Lambda' instead of general terms.",
    "You might want to consider candidates with startup experience for this role. Try adding 'startup' to your search criteria.",
    "Have you considered expanding your location search to include remote workers? This could increase your talent pool significantly.",
    "Based on your requirements, you might want to prioritize candidates with experience in financial services.",
    "For technical roles like this, I suggest filtering by candidates who have contributed to open source projects.",
];

/// Picks one of the canned replies at random, ignoring the message.
#[derive(Debug)]
pub struct CannedResponses {
    rng: StdRng,
}

impl CannedResponses {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for CannedResponses {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseStrategy for CannedResponses {
    fn reply(&mut self, _message: &str) -> String {
        CANNED_REPLIES
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(CHAT_GREETING)
            .to_string()
    }
}
