//! Journal entries (Luminote).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::make_id;
use crate::resonance::Module;

/// Resonance contribution of an entry when none is supplied.
pub const DEFAULT_ENTRY_DELTA: f64 = 0.03;

/// Mood tag on a journal entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JournalMood {
    Clear,
    Charged,
    Drifting,
}

impl JournalMood {
    pub fn as_str(&self) -> &'static str {
        match self {
            JournalMood::Clear => "clear",
            JournalMood::Charged => "charged",
            JournalMood::Drifting => "drifting",
        }
    }
}

impl std::str::FromStr for JournalMood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "clear" => Ok(JournalMood::Clear),
            "charged" => Ok(JournalMood::Charged),
            "drifting" => Ok(JournalMood::Drifting),
            other => Err(format!("unknown mood: {other}")),
        }
    }
}

/// A journal entry. Links to other modules are soft references by module
/// name, not foreign keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: String,
    pub title: String,
    pub mood: JournalMood,
    pub body: String,
    pub resonance_delta: f64,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub linked_modules: Vec<Module>,
}

/// Payload for creating a new entry; id and timestamp are assigned by the
/// store.
#[derive(Debug, Clone)]
pub struct NewJournalEntry {
    pub title: String,
    pub mood: JournalMood,
    pub body: String,
    pub linked_modules: Vec<Module>,
    /// Defaults to [`DEFAULT_ENTRY_DELTA`] when absent.
    pub resonance_delta: Option<f64>,
}

impl JournalEntry {
    pub fn create(payload: NewJournalEntry, now: DateTime<Utc>) -> Self {
        Self {
            id: make_id(),
            title: payload.title,
            mood: payload.mood,
            body: payload.body,
            resonance_delta: payload.resonance_delta.unwrap_or(DEFAULT_ENTRY_DELTA),
            created_at: now,
            linked_modules: payload.linked_modules,
        }
    }
}
