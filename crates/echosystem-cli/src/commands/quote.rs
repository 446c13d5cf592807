//! Quote curation commands.

use clap::Subcommand;

use super::open_app;

#[derive(Subcommand)]
pub enum QuoteAction {
    /// List quotes
    List,
    /// Mark a quote as resonated-with
    Resonate {
        /// Quote ID
        id: String,
    },
}

pub fn run(action: QuoteAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = open_app()?;

    match action {
        QuoteAction::List => {
            println!("{}", serde_json::to_string_pretty(&app.ecosystem().quotes)?);
        }
        QuoteAction::Resonate { id } => {
            if app.ecosystem().find_quote(&id).is_none() {
                return Err(format!("Quote not found: {id}").into());
            }
            app.resonate_with_quote(&id);
            let quote = app
                .ecosystem()
                .find_quote(&id)
                .ok_or(format!("Quote not found: {id}"))?;
            println!("Resonated: \"{}\" ({})", quote.text, quote.author);
        }
    }
    Ok(())
}
