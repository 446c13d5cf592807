//! Tasks (Nextra).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::make_id;

/// Resonance contribution of a freshly planned task.
pub const DEFAULT_TASK_DELTA: f64 = 0.025;

/// A task with optional scheduling and a soft link to a habit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub resonance_delta: f64,
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_for: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_habit_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Create a new open task with the default delta.
    pub fn new(title: impl Into<String>, scheduled_for: Option<DateTime<Utc>>) -> Self {
        Self {
            id: make_id(),
            title: title.into(),
            resonance_delta: DEFAULT_TASK_DELTA,
            completed: false,
            scheduled_for,
            linked_habit_id: None,
            completed_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_tasks_start_open() {
        let task = Task::new("Write reflection", None);
        assert!(!task.completed);
        assert!(task.completed_at.is_none());
        assert_eq!(task.resonance_delta, DEFAULT_TASK_DELTA);
    }
}
