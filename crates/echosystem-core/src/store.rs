//! The ecosystem store: auth snapshot, six content collections, and the
//! resonance log.
//!
//! The store is plain owned state. All mutation goes through the
//! [`crate::Echosystem`] controller, which pairs collection updates with
//! resonance pulses and persistence write-through.

use serde::{Deserialize, Serialize};

use crate::content::{CreativeWork, FaithPractice, Habit, HabitCadence, JournalEntry, Quote, Task};
use crate::content::journal::{JournalMood, NewJournalEntry};
use crate::entitlement::AuthState;
use crate::resonance::{Module, ResonanceLogEntry};

/// Default retention cap for the resonance log.
pub const DEFAULT_LOG_CAP: usize = 500;

/// Persisted ecosystem state (the `echosystem-state` document, version 3).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EcosystemStore {
    pub onboarded: bool,
    pub auth: AuthState,
    #[serde(default)]
    pub journal_entries: Vec<JournalEntry>,
    #[serde(default)]
    pub quotes: Vec<Quote>,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub habits: Vec<Habit>,
    #[serde(default)]
    pub faith_practices: Vec<FaithPractice>,
    #[serde(default)]
    pub creative_works: Vec<CreativeWork>,
    /// Newest-first audit trail, capped by the controller.
    #[serde(default)]
    pub resonance_log: Vec<ResonanceLogEntry>,
}

impl EcosystemStore {
    /// An empty store: signed out, no content, no log.
    pub fn empty() -> Self {
        Self {
            onboarded: false,
            auth: AuthState::signed_out(),
            journal_entries: Vec::new(),
            quotes: Vec::new(),
            tasks: Vec::new(),
            habits: Vec::new(),
            faith_practices: Vec::new(),
            creative_works: Vec::new(),
            resonance_log: Vec::new(),
        }
    }

    /// The demo-seeded store a fresh install starts from.
    pub fn seeded() -> Self {
        let now = chrono::Utc::now();
        let mut store = Self::empty();

        store.journal_entries.push(JournalEntry::create(
            NewJournalEntry {
                title: "Dawn Resonance".into(),
                mood: JournalMood::Clear,
                body: "Woke before sunrise. Breath felt like low tide. Intention: listen, not rush."
                    .into(),
                linked_modules: vec![Module::Habits, Module::Quotes],
                resonance_delta: Some(0.05),
            },
            now,
        ));

        store.quotes.push(Quote::new(
            "The quieter you become, the more you are able to hear.",
            "Rumi",
            vec!["presence".into(), "clarity".into()],
            0.04,
        ));
        store.quotes.push(Quote::new(
            "Discipline is the bridge between goals and accomplishment.",
            "Jim Rohn",
            vec!["habits".into(), "tasks".into()],
            0.03,
        ));

        let mut gratitude_task = Task::new("Evening gratitude entry", None);
        gratitude_task.resonance_delta = 0.02;
        gratitude_task.linked_habit_id = Some("habit-evening-gratitude".into());
        let mut reflection_task = Task::new("Write resonance reflection", None);
        reflection_task.resonance_delta = 0.03;
        store.tasks.push(reflection_task);
        store.tasks.push(gratitude_task);

        let mut dawn_breath = Habit::new(
            "Dawn Breath",
            "Three minutes of intentional breathing before screens.",
            HabitCadence::Daily,
            0.02,
        );
        dawn_breath.id = "habit-dawn-breath".into();
        dawn_breath.streak = 4;
        dawn_breath.longest_streak = 12;
        dawn_breath.last_completed_on = Some(now);
        let mut gratitude = Habit::new(
            "Evening Gratitude",
            "Log three luminous moments before rest.",
            HabitCadence::Daily,
            0.025,
        );
        gratitude.id = "habit-evening-gratitude".into();
        gratitude.streak = 2;
        gratitude.longest_streak = 10;
        store.habits.push(dawn_breath);
        store.habits.push(gratitude);

        store.faith_practices.push(FaithPractice::new(
            "Morning Psalm",
            "Recite a psalm and note one guiding line.",
            0.03,
        ));

        let mut myth = CreativeWork::new(
            "The Myth of Returning Home",
            "Aria Suleiman",
            "We return not to the place, but to the echo that first called us to move.",
            0.05,
        );
        myth.progress = 0.4;
        store.creative_works.push(myth);

        store
    }

    /// Prepend a log entry, evicting the oldest past `cap`.
    pub fn push_log(&mut self, entry: ResonanceLogEntry, cap: usize) {
        self.resonance_log.insert(0, entry);
        self.resonance_log.truncate(cap);
    }

    pub fn find_task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn find_habit(&self, id: &str) -> Option<&Habit> {
        self.habits.iter().find(|h| h.id == id)
    }

    pub fn find_quote(&self, id: &str) -> Option<&Quote> {
        self.quotes.iter().find(|q| q.id == id)
    }

    pub fn find_faith_practice(&self, id: &str) -> Option<&FaithPractice> {
        self.faith_practices.iter().find(|p| p.id == id)
    }

    pub fn find_creative_work(&self, id: &str) -> Option<&CreativeWork> {
        self.creative_works.iter().find(|w| w.id == id)
    }
}

impl Default for EcosystemStore {
    fn default() -> Self {
        Self::seeded()
    }
}
