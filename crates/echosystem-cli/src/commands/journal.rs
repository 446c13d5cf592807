//! Journal entry commands.

use chrono::Utc;
use clap::Subcommand;
use echosystem_core::{datetime::format_relative, JournalMood, Module, NewJournalEntry};

use super::open_app;

#[derive(Subcommand)]
pub enum JournalAction {
    /// Add a journal entry
    Add {
        /// Entry title
        title: String,
        /// Entry body
        #[arg(long)]
        body: String,
        /// Mood: clear, charged, or drifting
        #[arg(long, default_value = "clear")]
        mood: String,
        /// Comma-separated linked modules (quotes, tasks, habits, faith, creation)
        #[arg(long)]
        linked: Option<String>,
        /// Resonance delta override
        #[arg(long)]
        delta: Option<f64>,
    },
    /// List journal entries (newest first)
    List,
}

pub fn run(action: JournalAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = open_app()?;

    match action {
        JournalAction::Add {
            title,
            body,
            mood,
            linked,
            delta,
        } => {
            let mood: JournalMood = mood.parse()?;
            let linked_modules = match linked {
                Some(raw) => raw
                    .split(',')
                    .map(|s| s.trim().parse::<Module>())
                    .collect::<Result<Vec<_>, _>>()?,
                None => Vec::new(),
            };
            let entry = app.add_journal_entry(NewJournalEntry {
                title,
                mood,
                body,
                linked_modules,
                resonance_delta: delta,
            });
            println!("Entry created: {}", entry.id);
            println!("{}", serde_json::to_string_pretty(&entry)?);
        }
        JournalAction::List => {
            let now = Utc::now();
            for entry in &app.ecosystem().journal_entries {
                println!(
                    "{}  [{}] {} ({})",
                    entry.id,
                    entry.mood.as_str(),
                    entry.title,
                    format_relative(entry.created_at, now)
                );
            }
        }
    }
    Ok(())
}
