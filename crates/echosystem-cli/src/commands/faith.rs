//! Faith practice commands.

use clap::Subcommand;

use super::open_app;

#[derive(Subcommand)]
pub enum FaithAction {
    /// List faith practices
    List,
    /// Acknowledge a practice
    Acknowledge {
        /// Practice ID
        id: String,
    },
}

pub fn run(action: FaithAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = open_app()?;

    match action {
        FaithAction::List => {
            for practice in &app.ecosystem().faith_practices {
                let status = match practice.last_completed_on {
                    Some(at) => format!("last {}", at.format("%Y-%m-%d")),
                    None => "never".to_string(),
                };
                println!("{}  {} ({status})", practice.id, practice.title);
            }
        }
        FaithAction::Acknowledge { id } => {
            if app.ecosystem().find_faith_practice(&id).is_none() {
                return Err(format!("Practice not found: {id}").into());
            }
            app.acknowledge_faith_practice(&id);
            let practice = app
                .ecosystem()
                .find_faith_practice(&id)
                .ok_or(format!("Practice not found: {id}"))?;
            println!("Acknowledged: {}", practice.title);
        }
    }
    Ok(())
}
