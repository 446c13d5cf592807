//! Content entity types, one submodule per home module.
//!
//! Each entity carries a `resonance_delta`: the score contribution applied
//! when the entity is acted upon. Collections are exclusively owned by the
//! ecosystem store; cross-links between modules synthesize new entities in
//! the target collection rather than aliasing existing ones.

pub mod creation;
pub mod faith;
pub mod habits;
pub mod journal;
pub mod quotes;
pub mod tasks;

pub use creation::CreativeWork;
pub use faith::FaithPractice;
pub use habits::{Habit, HabitCadence};
pub use journal::{JournalEntry, JournalMood, NewJournalEntry};
pub use quotes::Quote;
pub use tasks::Task;

/// Generate a fresh uuid-v4 entity id.
pub(crate) fn make_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
