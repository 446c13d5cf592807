pub mod config;
pub mod kv;
pub mod persist;

pub use config::Config;
pub use kv::{JsonFileStore, KeyValueStore, MemoryStore};
pub use persist::{
    Envelope, Namespace, Persistence, STATE_STORE_NAME, STATE_VERSION, THEME_STORE_NAME,
    THEME_VERSION,
};

use std::path::PathBuf;

/// Returns `~/.config/echosystem[-dev]/` based on ECHOSYSTEM_ENV.
///
/// Set ECHOSYSTEM_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if the home directory cannot be determined or if
/// creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("ECHOSYSTEM_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("echosystem-dev")
    } else {
        base_dir.join("echosystem")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
