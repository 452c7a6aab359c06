//! Settings persistence system
//!
//! Saves and loads [`GameSettings`] to/from a JSON file. Provides automatic
//! persistence of user preferences across application sessions.
//!
//! # File Location
//!
//! Settings are stored in `settings.json` in the platform configuration
//! directory resolved by `directories::ProjectDirs`, with the working
//! directory as fallback.
//!
//! # Error Handling
//!
//! Both load and save operations handle errors gracefully:
//! - Load failures fall back to default settings
//! - Save failures are logged but don't interrupt gameplay
//!
//! # Usage
//!
//! Add [`SettingsPersistencePlugin`] to load on startup via
//! [`load_settings_system`] and save on change via [`save_settings_system`].
//! Headless apps and tests leave it out and keep the defaults.

use std::fs;
use std::path::{Path, PathBuf};

use bevy::prelude::*;
use directories::ProjectDirs;

use super::error::CoreResult;
use crate::core::GameSettings;

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// Resolve the settings file path
///
/// Returns `settings.json` in the user's configuration directory, or in the
/// working directory when no config dir can be determined.
pub fn settings_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("org", "chessboard", "Chessboard") {
        proj_dirs.config_dir().join(SETTINGS_FILENAME)
    } else {
        PathBuf::from(SETTINGS_FILENAME)
    }
}

/// Read and parse a settings file
pub fn read_settings(path: &Path) -> CoreResult<GameSettings> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Write settings as pretty JSON, creating parent directories
pub fn write_settings(path: &Path, settings: &GameSettings) -> CoreResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    Ok(())
}

/// Load settings from file on startup
///
/// If the file doesn't exist or is invalid, uses default settings.
pub fn load_settings_system(mut commands: Commands) {
    let path = settings_path();

    let settings = if path.exists() {
        match read_settings(&path) {
            Ok(settings) => {
                info!("[SETTINGS] Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                warn!(
                    "[SETTINGS] Failed to load settings file at {:?}: {}. Using defaults.",
                    path, e
                );
                GameSettings::default()
            }
        }
    } else {
        info!("[SETTINGS] No settings file found at {:?}. Using defaults.", path);
        GameSettings::default()
    };

    commands.insert_resource(settings);
}

/// Save settings to file when they change
pub fn save_settings_system(settings: Res<GameSettings>) {
    if !settings.is_changed() || settings.is_added() {
        return;
    }

    let path = settings_path();
    match write_settings(&path, &settings) {
        Ok(()) => info!("[SETTINGS] Saved settings to {:?}", path),
        Err(e) => error!("[SETTINGS] Failed to save settings to {:?}: {}", path, e),
    }
}

/// Loads settings at startup and writes them back whenever they change
pub struct SettingsPersistencePlugin;

impl Plugin for SettingsPersistencePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_settings_system)
            .add_systems(Last, save_settings_system);
    }
}
