//! Habits (Resonary).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::make_id;

/// How often a habit recurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HabitCadence {
    Daily,
    Weekly,
}

impl Default for HabitCadence {
    fn default() -> Self {
        HabitCadence::Daily
    }
}

/// A tracked habit with streak state.
///
/// Check-ins increment the streak unconditionally, with no day-gap reset.
/// This is deliberately looser than the daily-gold streak, which does
/// detect gaps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Habit {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub cadence: HabitCadence,
    pub streak: u32,
    pub longest_streak: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_completed_on: Option<DateTime<Utc>>,
    pub resonance_delta: f64,
}

impl Habit {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        cadence: HabitCadence,
        resonance_delta: f64,
    ) -> Self {
        Self {
            id: make_id(),
            name: name.into(),
            description: description.into(),
            cadence,
            streak: 0,
            longest_streak: 0,
            last_completed_on: None,
            resonance_delta,
        }
    }

    /// Record a check-in: streak +1, longest-streak high-water mark,
    /// completion timestamp.
    pub fn check_in(&mut self, now: DateTime<Utc>) {
        self.streak += 1;
        self.longest_streak = self.longest_streak.max(self.streak);
        self.last_completed_on = Some(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_in_tracks_longest_streak() {
        let mut habit = Habit::new("Dawn Breath", "Three minutes", HabitCadence::Daily, 0.02);
        habit.check_in(Utc::now());
        habit.check_in(Utc::now());
        assert_eq!(habit.streak, 2);
        assert_eq!(habit.longest_streak, 2);
        assert!(habit.last_completed_on.is_some());
    }

    #[test]
    fn longest_streak_is_a_high_water_mark() {
        let mut habit = Habit::new("Gratitude", "Three moments", HabitCadence::Daily, 0.025);
        habit.longest_streak = 10;
        habit.streak = 2;
        habit.check_in(Utc::now());
        assert_eq!(habit.streak, 3);
        assert_eq!(habit.longest_streak, 10);
    }
}
