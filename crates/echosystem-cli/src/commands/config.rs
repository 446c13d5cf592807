//! Configuration management commands.

use clap::Subcommand;
use echosystem_core::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Update configuration values
    Set {
        /// Resonance log retention cap
        #[arg(long)]
        max_log_entries: Option<usize>,
        /// Default dark mode
        #[arg(long)]
        dark_mode: Option<bool>,
        /// Seed demo content into fresh stores
        #[arg(long)]
        seed_demo_content: Option<bool>,
    },
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            let config = Config::load()?;
            println!("{}", toml::to_string_pretty(&config)?);
        }
        ConfigAction::Set {
            max_log_entries,
            dark_mode,
            seed_demo_content,
        } => {
            let mut config = Config::load()?;
            if let Some(cap) = max_log_entries {
                config.log.max_entries = cap;
            }
            if let Some(dark) = dark_mode {
                config.ui.dark_mode = dark;
            }
            if let Some(seed) = seed_demo_content {
                config.seed_demo_content = seed;
            }
            config.save()?;
            println!("Configuration saved:");
            println!("{}", toml::to_string_pretty(&config)?);
        }
    }
    Ok(())
}
