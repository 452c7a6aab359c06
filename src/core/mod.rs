//! Core module - app state and configuration
//!
//! # Contents
//!
//! - [`GameState`] - `ModeSelect` / `InGame` screen state
//! - [`GameSettings`] - User preferences (piece theme, reply delay, hints)
//! - [`WindowConfig`] - Primary window settings
//! - [`CorePlugin`] - Registers the above
//! - [`settings_persistence`] - `settings.json` load/save
//! - [`error`] - [`CoreError`] for settings I/O

pub mod error;
pub mod plugin;
pub mod resources;
pub mod settings_persistence;
pub mod states;
pub mod window_config;

// Re-export commonly used items
pub use error::{CoreError, CoreResult};
pub use plugin::CorePlugin;
pub use resources::*;
pub use settings_persistence::SettingsPersistencePlugin;
pub use states::*;
pub use window_config::WindowConfig;
