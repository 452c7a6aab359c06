//! Chess board with human-vs-human and human-vs-computer play
//!
//! - [`game`] - Rules adapter, session controller, computer opponent
//! - [`core`] - App state, settings and their persistence
//! - [`rendering`] - 2D board and piece sprites
//! - [`ui`] - Egui mode picker and in-game panels

pub mod core;
pub mod game;
pub mod rendering;
pub mod ui;

use bevy::prelude::*;

/// Everything the board app needs on top of `DefaultPlugins` and `EguiPlugin`
pub struct ChessboardPlugins;

impl Plugin for ChessboardPlugins {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            core::CorePlugin,
            game::GamePlugin,
            rendering::BoardPlugin,
            ui::UIPlugin,
        ));
    }
}
