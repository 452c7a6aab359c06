use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use chessboard::core::{SettingsPersistencePlugin, WindowConfig};
use chessboard::ChessboardPlugins;

fn main() {
    let window_config = WindowConfig::default();

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(window_config.to_window()),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        .insert_resource(window_config)
        .insert_resource(ClearColor(Color::srgb(0.12, 0.12, 0.14)))
        .add_plugins(ChessboardPlugins)
        .add_plugins(SettingsPersistencePlugin)
        .run();
}
