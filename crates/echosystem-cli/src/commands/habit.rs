//! Habit tracking commands.

use clap::Subcommand;

use super::open_app;

#[derive(Subcommand)]
pub enum HabitAction {
    /// List habits with streak state
    List,
    /// Record a check-in
    CheckIn {
        /// Habit ID
        id: String,
    },
}

pub fn run(action: HabitAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = open_app()?;

    match action {
        HabitAction::List => {
            for habit in &app.ecosystem().habits {
                println!(
                    "{}  {} (streak {}, longest {})",
                    habit.id, habit.name, habit.streak, habit.longest_streak
                );
            }
        }
        HabitAction::CheckIn { id } => {
            if app.ecosystem().find_habit(&id).is_none() {
                return Err(format!("Habit not found: {id}").into());
            }
            app.log_habit_check_in(&id);
            let habit = app
                .ecosystem()
                .find_habit(&id)
                .ok_or(format!("Habit not found: {id}"))?;
            println!("Checked in: {} (streak {})", habit.name, habit.streak);
        }
    }
    Ok(())
}
