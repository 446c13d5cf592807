//! Theme display-mode commands.

use clap::Subcommand;
use echosystem_core::{AppearanceMode, HomeModule, ThemeMode};

use super::open_app;

#[derive(Subcommand)]
pub enum ThemeAction {
    /// Show the theme state
    Show,
    /// Set the copy voice: normal or lore
    SetMode {
        /// Mode: normal or lore
        mode: String,
    },
    /// Flip between normal and lore copy
    ToggleMode,
    /// Set the appearance: dark or light
    SetAppearance {
        /// Appearance: dark or light
        appearance: String,
    },
    /// Flip between dark and light
    ToggleAppearance,
    /// Set the active home tab
    SetTab {
        /// Tab: luminote, vershine, nextra, resonary, ekklesion, or stellaread
        tab: String,
    },
}

fn parse_mode(raw: &str) -> Result<ThemeMode, String> {
    match raw {
        "normal" => Ok(ThemeMode::Normal),
        "lore" => Ok(ThemeMode::Lore),
        other => Err(format!("unknown mode: {other}")),
    }
}

fn parse_appearance(raw: &str) -> Result<AppearanceMode, String> {
    match raw {
        "dark" => Ok(AppearanceMode::Dark),
        "light" => Ok(AppearanceMode::Light),
        other => Err(format!("unknown appearance: {other}")),
    }
}

fn parse_tab(raw: &str) -> Result<HomeModule, String> {
    match raw {
        "luminote" => Ok(HomeModule::Luminote),
        "vershine" => Ok(HomeModule::Vershine),
        "nextra" => Ok(HomeModule::Nextra),
        "resonary" => Ok(HomeModule::Resonary),
        "ekklesion" => Ok(HomeModule::Ekklesion),
        "stellaread" => Ok(HomeModule::Stellaread),
        other => Err(format!("unknown tab: {other}")),
    }
}

pub fn run(action: ThemeAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = open_app()?;

    match action {
        ThemeAction::Show => {}
        ThemeAction::SetMode { mode } => {
            let mode = parse_mode(&mode)?;
            app.update_theme(|theme| theme.set_mode(mode));
        }
        ThemeAction::ToggleMode => {
            app.update_theme(|theme| theme.toggle_mode());
        }
        ThemeAction::SetAppearance { appearance } => {
            let appearance = parse_appearance(&appearance)?;
            app.update_theme(|theme| theme.set_appearance(appearance));
        }
        ThemeAction::ToggleAppearance => {
            app.update_theme(|theme| theme.toggle_appearance());
        }
        ThemeAction::SetTab { tab } => {
            let tab = parse_tab(&tab)?;
            app.update_theme(|theme| theme.set_active_tab(tab));
        }
    }
    println!("{}", serde_json::to_string_pretty(app.theme())?);
    Ok(())
}
