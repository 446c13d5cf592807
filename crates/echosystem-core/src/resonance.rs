//! Resonance audit records.
//!
//! Every resonance-affecting event produces an immutable [`ResonanceLogEntry`]
//! naming the originating module, the signed delta applied, and a
//! human-readable note. Entries are prepended to the ecosystem store's log
//! (newest first) and never mutated afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Originating domain of a resonance event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Module {
    /// Auth and entitlement transitions
    Account,
    /// Journaling (Luminote)
    Journal,
    /// Quote curation (Vershine)
    Quotes,
    /// Tasks (Nextra)
    Tasks,
    /// Habits (Resonary)
    Habits,
    /// Faith practices (Ekklesion)
    Faith,
    /// Creative reading (Stellaread)
    Creation,
}

impl Module {
    pub fn as_str(&self) -> &'static str {
        match self {
            Module::Account => "account",
            Module::Journal => "journal",
            Module::Quotes => "quotes",
            Module::Tasks => "tasks",
            Module::Habits => "habits",
            Module::Faith => "faith",
            Module::Creation => "creation",
        }
    }
}

impl std::fmt::Display for Module {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Module {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "account" => Ok(Module::Account),
            "journal" => Ok(Module::Journal),
            "quotes" => Ok(Module::Quotes),
            "tasks" => Ok(Module::Tasks),
            "habits" => Ok(Module::Habits),
            "faith" => Ok(Module::Faith),
            "creation" => Ok(Module::Creation),
            other => Err(format!("unknown module: {other}")),
        }
    }
}

/// Immutable audit record of one resonance-affecting event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResonanceLogEntry {
    /// Unique identifier
    pub id: String,
    /// Signed delta applied to the resonance scalar
    pub delta: f64,
    /// Originating module
    pub module: Module,
    /// Human-readable note describing the event
    pub note: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl ResonanceLogEntry {
    /// Construct a new log entry stamped at `now`.
    pub fn new(delta: f64, module: Module, note: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            delta,
            module,
            note: note.into(),
            created_at: now,
        }
    }
}
