//! Theme store: display modes and the global resonance scalar.
//!
//! Resonance is a bounded engagement score in [0.1, 1.0]. Every content and
//! auth action across the application nudges it through
//! [`ThemeStore::gently_shift_resonance`], which is the only mutator that
//! other modules are allowed to use. Direct assignment via
//! [`ThemeStore::set_resonance`] exists for settings screens and tests and
//! applies the same clamp.

use serde::{Deserialize, Serialize};

/// Lower bound of the resonance scalar.
pub const RESONANCE_MIN: f64 = 0.1;
/// Upper bound of the resonance scalar.
pub const RESONANCE_MAX: f64 = 1.0;

const RESONANCE_INITIAL: f64 = 0.35;

/// Copy voice for the whole application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Plain, direct interface copy.
    Normal,
    /// Mythic "lore" interface copy.
    Lore,
}

impl Default for ThemeMode {
    fn default() -> Self {
        ThemeMode::Normal
    }
}

/// Light/dark appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppearanceMode {
    Dark,
    Light,
}

impl Default for AppearanceMode {
    fn default() -> Self {
        AppearanceMode::Dark
    }
}

/// Home module tabs. Each maps to one content domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HomeModule {
    /// Journaling
    Luminote,
    /// Quote curation
    Vershine,
    /// Tasks
    Nextra,
    /// Habits
    Resonary,
    /// Faith practices
    Ekklesion,
    /// Creative reading
    Stellaread,
}

impl Default for HomeModule {
    fn default() -> Self {
        HomeModule::Luminote
    }
}

/// Theme state: display flags plus the resonance scalar.
///
/// Persisted as the `echosystem-theme` document (version 2).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeStore {
    #[serde(default)]
    pub mode: ThemeMode,
    #[serde(default)]
    pub appearance: AppearanceMode,
    #[serde(default = "default_resonance")]
    pub resonance: f64,
    #[serde(default)]
    pub active_tab: HomeModule,
}

fn default_resonance() -> f64 {
    RESONANCE_INITIAL
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self {
            mode: ThemeMode::default(),
            appearance: AppearanceMode::default(),
            resonance: RESONANCE_INITIAL,
            active_tab: HomeModule::default(),
        }
    }
}

impl ThemeStore {
    pub fn set_mode(&mut self, mode: ThemeMode) {
        self.mode = mode;
    }

    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            ThemeMode::Normal => ThemeMode::Lore,
            ThemeMode::Lore => ThemeMode::Normal,
        };
    }

    pub fn set_appearance(&mut self, appearance: AppearanceMode) {
        self.appearance = appearance;
    }

    pub fn toggle_appearance(&mut self) {
        self.appearance = match self.appearance {
            AppearanceMode::Dark => AppearanceMode::Light,
            AppearanceMode::Light => AppearanceMode::Dark,
        };
    }

    pub fn set_active_tab(&mut self, tab: HomeModule) {
        self.active_tab = tab;
    }

    /// Assign the resonance scalar directly, clamped to [0.1, 1.0].
    pub fn set_resonance(&mut self, value: f64) {
        self.resonance = value.clamp(RESONANCE_MIN, RESONANCE_MAX);
    }

    /// Nudge the resonance scalar by a bounded delta.
    ///
    /// The result is clamped to [0.1, 1.0] and stored rounded to two
    /// decimal places. This is the single mutation path used by every
    /// cross-module resonance pulse.
    pub fn gently_shift_resonance(&mut self, delta: f64) {
        let shifted = (self.resonance + delta).clamp(RESONANCE_MIN, RESONANCE_MAX);
        self.resonance = (shifted * 100.0).round() / 100.0;
    }

    pub fn is_lore_mode(&self) -> bool {
        self.mode == ThemeMode::Lore
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_clamps_to_upper_bound() {
        let mut theme = ThemeStore::default();
        theme.gently_shift_resonance(5.0);
        assert_eq!(theme.resonance, RESONANCE_MAX);
    }

    #[test]
    fn shift_clamps_to_lower_bound() {
        let mut theme = ThemeStore::default();
        theme.gently_shift_resonance(-5.0);
        assert_eq!(theme.resonance, RESONANCE_MIN);
    }

    #[test]
    fn shift_rounds_to_two_decimals() {
        let mut theme = ThemeStore::default();
        theme.gently_shift_resonance(0.025);
        // 0.35 + 0.025 = 0.375 -> 0.38
        assert_eq!(theme.resonance, 0.38);
    }

    #[test]
    fn repeated_shifts_stay_in_bounds() {
        let mut theme = ThemeStore::default();
        for _ in 0..100 {
            theme.gently_shift_resonance(0.07);
        }
        assert_eq!(theme.resonance, RESONANCE_MAX);
        for _ in 0..100 {
            theme.gently_shift_resonance(-0.07);
        }
        assert_eq!(theme.resonance, RESONANCE_MIN);
    }

    #[test]
    fn set_resonance_is_clamped() {
        let mut theme = ThemeStore::default();
        theme.set_resonance(2.0);
        assert_eq!(theme.resonance, RESONANCE_MAX);
        theme.set_resonance(0.0);
        assert_eq!(theme.resonance, RESONANCE_MIN);
        theme.set_resonance(0.6);
        assert_eq!(theme.resonance, 0.6);
    }

    #[test]
    fn toggles_flip_modes() {
        let mut theme = ThemeStore::default();
        theme.toggle_mode();
        assert!(theme.is_lore_mode());
        theme.toggle_mode();
        assert!(!theme.is_lore_mode());

        theme.toggle_appearance();
        assert_eq!(theme.appearance, AppearanceMode::Light);
    }
}
