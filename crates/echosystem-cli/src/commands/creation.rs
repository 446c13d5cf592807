//! Creative reading commands.

use clap::Subcommand;

use super::open_app;

#[derive(Subcommand)]
pub enum CreationAction {
    /// List creative works with progress
    List,
    /// Advance reading progress
    Advance {
        /// Work ID
        id: String,
        /// Progress increment (default 0.1)
        #[arg(long)]
        progress: Option<f64>,
    },
}

pub fn run(action: CreationAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = open_app()?;

    match action {
        CreationAction::List => {
            for work in &app.ecosystem().creative_works {
                println!(
                    "{}  {} by {} ({:.0}%)",
                    work.id,
                    work.title,
                    work.author,
                    work.progress * 100.0
                );
            }
        }
        CreationAction::Advance { id, progress } => {
            if app.ecosystem().find_creative_work(&id).is_none() {
                return Err(format!("Work not found: {id}").into());
            }
            app.advance_creative_work(&id, progress);
            let work = app
                .ecosystem()
                .find_creative_work(&id)
                .ok_or(format!("Work not found: {id}"))?;
            println!("{}: {:.0}%", work.title, work.progress * 100.0);
        }
    }
    Ok(())
}
