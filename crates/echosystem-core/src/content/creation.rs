//! Creative works and reading progress (Stellaread).

use serde::{Deserialize, Serialize};

use super::make_id;

/// A creative work being read, with fractional progress in 0..=1.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreativeWork {
    pub id: String,
    pub title: String,
    pub author: String,
    pub excerpt: String,
    pub progress: f64,
    pub resonance_delta: f64,
}

impl CreativeWork {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        excerpt: impl Into<String>,
        resonance_delta: f64,
    ) -> Self {
        Self {
            id: make_id(),
            title: title.into(),
            author: author.into(),
            excerpt: excerpt.into(),
            progress: 0.0,
            resonance_delta,
        }
    }

    /// Advance reading progress, clamped so it never exceeds 1.0.
    /// Returns the increment actually requested (used to scale resonance).
    pub fn advance(&mut self, increment: f64) {
        self.progress = (self.progress + increment).min(1.0);
    }
}
