//! Resonance scalar and audit log commands.

use chrono::Utc;
use clap::Subcommand;
use echosystem_core::datetime::format_relative;

use super::open_app;

#[derive(Subcommand)]
pub enum ResonanceAction {
    /// Show the current resonance scalar and theme flags
    Status,
    /// Show the audit log (newest first)
    Log {
        /// Maximum entries to show
        #[arg(long, default_value = "20")]
        limit: usize,
    },
    /// Nudge the scalar directly (clamped to [0.1, 1.0])
    Shift {
        /// Signed delta
        delta: f64,
    },
}

pub fn run(action: ResonanceAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = open_app()?;

    match action {
        ResonanceAction::Status => {
            println!("resonance: {:.2}", app.resonance());
            println!("{}", serde_json::to_string_pretty(app.theme())?);
        }
        ResonanceAction::Log { limit } => {
            let now = Utc::now();
            for entry in app.resonance_log().iter().take(limit) {
                println!(
                    "{:+.4}  [{}] {} ({})",
                    entry.delta,
                    entry.module,
                    entry.note,
                    format_relative(entry.created_at, now)
                );
            }
        }
        ResonanceAction::Shift { delta } => {
            app.update_theme(|theme| theme.gently_shift_resonance(delta));
            println!("resonance: {:.2}", app.resonance());
        }
    }
    Ok(())
}
