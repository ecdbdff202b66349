use serde::Serialize;
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    pub word: String,
    pub score: f64,
    /// Set once the score averages contributions from both tries.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub merged: bool,
}

impl Suggestion {
    pub fn new(word: String, score: f64) -> Self {
        Suggestion {
            word,
            score,
            merged: false,
        }
    }

    /// Averages `score` into this suggestion. Only the first merge counts.
    pub fn merge(&mut self, score: f64) {
        if !self.merged {
            self.score = (self.score + score) / 2.0;
            self.merged = true;
        }
    }
}

/// Stable sort by score, highest first; equal scores keep discovery order.
pub(crate) fn rank(suggestions: &mut [Suggestion]) {
    suggestions.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
}
