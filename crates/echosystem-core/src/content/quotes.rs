//! Curated quotes (Vershine).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::journal::JournalEntry;
use super::make_id;
use crate::content::faith::FaithPractice;

/// Journal bodies longer than this are truncated when promoted to quotes.
const EXCERPT_LIMIT: usize = 140;

/// Floor on the resonance delta of a synthesized quote.
const SYNTHESIZED_DELTA_MIN: f64 = 0.02;

/// A quote in the curation collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    pub id: String,
    pub text: String,
    pub author: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub resonance_delta: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_resonated_at: Option<DateTime<Utc>>,
}

impl Quote {
    pub fn new(
        text: impl Into<String>,
        author: impl Into<String>,
        tags: Vec<String>,
        resonance_delta: f64,
    ) -> Self {
        Self {
            id: make_id(),
            text: text.into(),
            author: author.into(),
            tags,
            resonance_delta,
            last_resonated_at: None,
        }
    }

    /// Promote a journal entry into a quote: the body is excerpted at 140
    /// characters (char boundary, with an ellipsis) and the synthesized
    /// delta is half the entry's, floored at 0.02.
    pub fn from_journal_entry(entry: &JournalEntry, now: DateTime<Utc>) -> Self {
        let text = if entry.body.chars().count() > EXCERPT_LIMIT {
            let excerpt: String = entry.body.chars().take(EXCERPT_LIMIT).collect();
            format!("{excerpt}…")
        } else {
            entry.body.clone()
        };
        let author = if entry.title.is_empty() {
            "Luminote".to_string()
        } else {
            entry.title.clone()
        };
        Self {
            id: make_id(),
            text,
            author,
            tags: vec!["luminote".to_string(), entry.mood.as_str().to_string()],
            resonance_delta: (entry.resonance_delta / 2.0).max(SYNTHESIZED_DELTA_MIN),
            last_resonated_at: Some(now),
        }
    }

    /// Promote an acknowledged faith practice into a quote.
    pub fn from_faith_practice(practice: &FaithPractice, now: DateTime<Utc>) -> Self {
        Self {
            id: make_id(),
            text: practice.description.clone(),
            author: practice.title.clone(),
            tags: vec!["ekklesion".to_string(), "prayer".to_string()],
            resonance_delta: (practice.resonance_delta / 2.0).max(SYNTHESIZED_DELTA_MIN),
            last_resonated_at: Some(now),
        }
    }
}
