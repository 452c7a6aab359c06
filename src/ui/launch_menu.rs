//! Mode selection window
//!
//! Shown while no game is active. Picking a mode starts a fresh game on the
//! session and switches to `GameState::InGame`, which builds the board.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPrimaryContextPass};
use shakmaty::Color;

use crate::core::GameState;
use crate::game::error::GameResult;
use crate::game::session::SessionController;
use crate::game::types::GameMode;
use crate::ui::styles::{overlay_frame, UiColors};

/// Modes offered by the menu, in button order
pub const MENU_MODES: [GameMode; 3] = [
    GameMode::HumanVsHuman,
    GameMode::VS_COMPUTER,
    GameMode::HumanVsComputer {
        computer: Color::White,
    },
];

/// Start a game in `mode` and move to the board
///
/// On error (a mode is already active) the state is left alone.
pub fn start_game(
    session: &mut SessionController,
    next_state: &mut NextState<GameState>,
    mode: GameMode,
    now: std::time::Duration,
) -> GameResult<()> {
    session.select_mode(mode, now)?;
    next_state.set(GameState::InGame);
    Ok(())
}

/// Egui window with one button per game mode
pub fn mode_select_ui(
    mut contexts: EguiContexts,
    time: Res<Time>,
    mut session: ResMut<SessionController>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let mut chosen = None;
    egui::Window::new("Selecciona el modo de juego")
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .collapsible(false)
        .resizable(false)
        .title_bar(false)
        .frame(overlay_frame())
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(
                    egui::RichText::new("Selecciona el modo de juego")
                        .size(24.0)
                        .color(UiColors::TEXT_PRIMARY),
                );
                ui.add_space(20.0);

                for mode in MENU_MODES {
                    if ui.button(egui::RichText::new(mode.label()).size(20.0)).clicked() {
                        chosen = Some(mode);
                    }
                    ui.add_space(10.0);
                }
            });
        });

    if let Some(mode) = chosen {
        if let Err(e) = start_game(&mut session, &mut next_state, mode, time.elapsed()) {
            warn!("[UI] Could not start {}: {}", mode.label(), e);
        }
    }
}

/// Launch menu plugin that shows the mode picker before a game
pub struct LaunchMenuPlugin;

impl Plugin for LaunchMenuPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            EguiPrimaryContextPass,
            mode_select_ui.run_if(in_state(GameState::ModeSelect)),
        );
    }
}
