pub mod auth;
pub mod config;
pub mod creation;
pub mod faith;
pub mod habit;
pub mod journal;
pub mod quote;
pub mod resonance;
pub mod task;
pub mod theme;
pub mod wallet;

use echosystem_core::Echosystem;

/// Open the application over the default data directory.
pub fn open_app() -> Result<Echosystem, Box<dyn std::error::Error>> {
    Ok(Echosystem::open_default()?)
}

/// Restore the initial snapshot.
pub fn reset() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = open_app()?;
    app.reset();
    println!("State reset to initial snapshot (namespace: {})", app.namespace());
    Ok(())
}
