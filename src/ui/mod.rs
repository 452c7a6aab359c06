//! UI module - Egui-based panels
//!
//! - **launch_menu**: Mode picker shown before a game
//! - **game_ui**: Status line, captured pieces, settings toggles
//! - **styles**: Shared colors and frames
//!
//! Both plugins draw in `EguiPrimaryContextPass` and talk to the game only
//! through [`crate::game::session::SessionController`].

pub mod game_ui;
pub mod launch_menu;
pub mod styles;

// Re-export commonly used items
pub use game_ui::*;
pub use launch_menu::*;

use bevy::prelude::*;

/// All egui panels
pub struct UIPlugin;

impl Plugin for UIPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((LaunchMenuPlugin, GameUiPlugin));
    }
}
