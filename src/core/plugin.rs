//! Core plugin for the chess board
//!
//! Provides fundamental application setup including:
//! - State management ([`GameState`])
//! - Window and settings resources
//! - Transition logging
//!
//! # Plugin Order
//!
//! Recommended plugin order:
//! 1. [`bevy::DefaultPlugins`] - Core Bevy functionality
//! 2. [`bevy_egui::EguiPlugin`] - UI framework
//! 3. [`CorePlugin`] - Foundation (state, resources)
//! 4. [`crate::game::GamePlugin`] - Session and input
//! 5. Rendering and UI plugins
//!
//! Settings start at their defaults; add
//! [`super::settings_persistence::SettingsPersistencePlugin`] to load and
//! save them.

use bevy::prelude::*;

use super::{states::validate_and_log_state_transitions, BoardTheme, GameSettings, GameState, WindowConfig};

/// Core plugin: state machine and app-wide resources
///
/// # Usage
///
/// ```rust,ignore
/// App::new()
///     .add_plugins(DefaultPlugins)
///     .add_plugins(CorePlugin)
///     // ... other plugins
/// ```
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WindowConfig>()
            .init_resource::<GameSettings>()
            .init_state::<GameState>();

        app.register_type::<WindowConfig>()
            .register_type::<GameSettings>()
            .register_type::<BoardTheme>()
            .register_type::<GameState>();

        app.add_systems(Update, validate_and_log_state_transitions);
    }
}
