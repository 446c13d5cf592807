//! Task management commands.

use chrono::{DateTime, Utc};
use clap::Subcommand;

use super::open_app;

#[derive(Subcommand)]
pub enum TaskAction {
    /// Plan a new task
    Add {
        /// Task title
        title: String,
        /// Scheduled time (RFC 3339)
        #[arg(long)]
        scheduled_for: Option<String>,
    },
    /// List tasks
    List {
        /// Only show open tasks
        #[arg(long)]
        open: bool,
    },
    /// Toggle a task between open and completed
    Toggle {
        /// Task ID
        id: String,
    },
}

pub fn run(action: TaskAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = open_app()?;

    match action {
        TaskAction::Add {
            title,
            scheduled_for,
        } => {
            let scheduled_for = scheduled_for
                .map(|raw| DateTime::parse_from_rfc3339(&raw).map(|t| t.with_timezone(&Utc)))
                .transpose()?;
            let task = app.add_task(title, scheduled_for);
            println!("Task created: {}", task.id);
            println!("{}", serde_json::to_string_pretty(&task)?);
        }
        TaskAction::List { open } => {
            let tasks: Vec<_> = app
                .ecosystem()
                .tasks
                .iter()
                .filter(|t| !open || !t.completed)
                .collect();
            println!("{}", serde_json::to_string_pretty(&tasks)?);
        }
        TaskAction::Toggle { id } => {
            if app.ecosystem().find_task(&id).is_none() {
                return Err(format!("Task not found: {id}").into());
            }
            app.toggle_task(&id);
            let task = app
                .ecosystem()
                .find_task(&id)
                .ok_or(format!("Task not found: {id}"))?;
            println!(
                "{}: {}",
                if task.completed { "Completed" } else { "Reopened" },
                task.title
            );
            println!("{}", serde_json::to_string_pretty(task)?);
        }
    }
    Ok(())
}
