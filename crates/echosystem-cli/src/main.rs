use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "echosystem-cli", version, about = "Echosystem CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Authentication and pass management
    Auth {
        #[command(subcommand)]
        action: commands::auth::AuthAction,
    },
    /// Coin and gold balances
    Wallet {
        #[command(subcommand)]
        action: commands::wallet::WalletAction,
    },
    /// Journal entries
    Journal {
        #[command(subcommand)]
        action: commands::journal::JournalAction,
    },
    /// Task management
    Task {
        #[command(subcommand)]
        action: commands::task::TaskAction,
    },
    /// Habit tracking
    Habit {
        #[command(subcommand)]
        action: commands::habit::HabitAction,
    },
    /// Quote curation
    Quote {
        #[command(subcommand)]
        action: commands::quote::QuoteAction,
    },
    /// Faith practices
    Faith {
        #[command(subcommand)]
        action: commands::faith::FaithAction,
    },
    /// Creative reading progress
    Creation {
        #[command(subcommand)]
        action: commands::creation::CreationAction,
    },
    /// Resonance scalar and audit log
    Resonance {
        #[command(subcommand)]
        action: commands::resonance::ResonanceAction,
    },
    /// Theme display modes
    Theme {
        #[command(subcommand)]
        action: commands::theme::ThemeAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Restore the initial snapshot
    Reset,
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Auth { action } => commands::auth::run(action),
        Commands::Wallet { action } => commands::wallet::run(action),
        Commands::Journal { action } => commands::journal::run(action),
        Commands::Task { action } => commands::task::run(action),
        Commands::Habit { action } => commands::habit::run(action),
        Commands::Quote { action } => commands::quote::run(action),
        Commands::Faith { action } => commands::faith::run(action),
        Commands::Creation { action } => commands::creation::run(action),
        Commands::Resonance { action } => commands::resonance::run(action),
        Commands::Theme { action } => commands::theme::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Reset => commands::reset(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
