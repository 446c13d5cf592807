//! Faith practices (Ekklesion).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::make_id;

/// A devotional practice that can be acknowledged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaithPractice {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_completed_on: Option<DateTime<Utc>>,
    pub resonance_delta: f64,
}

impl FaithPractice {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        resonance_delta: f64,
    ) -> Self {
        Self {
            id: make_id(),
            title: title.into(),
            description: description.into(),
            last_completed_on: None,
            resonance_delta,
        }
    }
}
