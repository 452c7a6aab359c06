//! Game plugin - session resource and gameplay systems
//!
//! # Plugin Dependencies
//!
//! This plugin depends on:
//! - [`crate::core::CorePlugin`] - `GameState` and `GameSettings`
//! - [`bevy::DefaultPlugins`] (or `MinimalPlugins` in tests) - Time, input
//!
//! # System Organization
//!
//! Systems are organized into sets with explicit ordering, all gated on
//! `GameState::InGame`:
//! - `Input` - Pointer input
//! - `Execution` - Computer reply
//! - `Visual` - Rendering updates (added by the rendering plugins)
//!
//! Settings sync runs ahead of the sets in every state, so a game started
//! from the mode menu already uses the loaded reply delay.
//!
//! # See Also
//!
//! - [`super::session`] - The session controller every system goes through
//! - [`super::system_sets`] - System set definitions

use bevy::prelude::*;

use super::ai::AIPlugin;
use super::session::SessionController;
use super::system_sets::GameSystems;
use super::systems::{apply_settings_system, board_pointer_system, PointerState};
use crate::core::GameState;

/// Game plugin
///
/// Registers the [`SessionController`] resource and the gameplay systems.
/// Add after [`crate::core::CorePlugin`].
pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SessionController>()
            .init_resource::<PointerState>();

        app.add_plugins(AIPlugin);

        // Input → Execution → Visual
        app.configure_sets(
            Update,
            (GameSystems::Input, GameSystems::Execution, GameSystems::Visual)
                .chain()
                .run_if(in_state(GameState::InGame)),
        );

        app.add_systems(
            Update,
            (
                board_pointer_system
                    .in_set(GameSystems::Input)
                    .run_if(resource_exists::<ButtonInput<MouseButton>>),
                apply_settings_system.before(GameSystems::Input),
            ),
        );

        app.add_systems(OnExit(GameState::InGame), clear_pointer_state);
    }
}

fn clear_pointer_state(mut pointer: ResMut<PointerState>) {
    *pointer = PointerState::default();
}
