//! # Echosystem Core Library
//!
//! This library provides the core business logic for the Echosystem
//! wellness application. It implements a CLI-first philosophy where all
//! operations are available via a standalone CLI binary, with any GUI
//! layer sitting thinly over the same core library.
//!
//! ## Architecture
//!
//! - **Entitlement Engine**: four pass tiers (guest/account/gamer/flow)
//!   gating sync and AI features, with coin and gold currencies governed
//!   by boolean-returning guard operations
//! - **Resonance Propagation**: a clamped [0.1, 1.0] engagement scalar
//!   nudged by every action, paired with an append-only audit log
//! - **Content Actions**: journaling, quotes, tasks, habits, faith
//!   practices, and creative reading, each pulsing resonance on use
//! - **Storage**: namespaced JSON documents over a key-value backend and
//!   TOML-based configuration
//!
//! ## Key Components
//!
//! - [`Echosystem`]: application controller owning both stores and the
//!   persistence handle
//! - [`AuthState`]: entitlement snapshot and currency engine
//! - [`ThemeStore`]: display modes and the resonance scalar
//! - [`EcosystemStore`]: content collections and the resonance log

pub mod access;
pub mod app;
pub mod content;
pub mod datetime;
pub mod entitlement;
pub mod error;
pub mod resonance;
pub mod storage;
pub mod store;
pub mod theme;

pub use access::{ai_cost, should_sync, AiActionOutcome, Capabilities, BASE_AI_COST};
pub use app::Echosystem;
pub use content::{
    CreativeWork, FaithPractice, Habit, JournalEntry, JournalMood, NewJournalEntry, Quote, Task,
};
pub use entitlement::{
    AuthState, PassType, FLOW_PASS_PRICE, GAMER_PASS_PRICE, GOLD_DAILY_REWARD, GOLD_TO_COIN_RATE,
};
pub use error::{ConfigError, CoreError, Result, StorageError, ValidationError};
pub use resonance::{Module, ResonanceLogEntry};
pub use storage::{Config, JsonFileStore, KeyValueStore, MemoryStore, Namespace};
pub use store::EcosystemStore;
pub use theme::{AppearanceMode, HomeModule, ThemeMode, ThemeStore};
