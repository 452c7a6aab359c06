//! In-game panels
//!
//! - Top bar: mode, status line, "Juego Nuevo"
//! - Left panel: black pieces captured by White
//! - Right panel: white pieces captured by Black
//! - Bottom bar: hint / hover toggles and board theme
//!
//! Captured pieces are drawn with the same piece images as the board, in
//! capture order, with the material lead under the side that holds it.

use std::collections::HashMap;

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPrimaryContextPass, EguiTextureHandle};
use shakmaty::{Color, Role};

use crate::core::{BoardTheme, GameSettings, GameState};
use crate::game::session::SessionController;
use crate::game::types::PieceToken;
use crate::ui::styles::UiColors;

/// Reset the session and go back to the mode picker
pub fn new_game(session: &mut SessionController, next_state: &mut NextState<GameState>) {
    session.reset_session();
    next_state.set(GameState::ModeSelect);
}

/// Edge length of a captured-piece icon, in points
const ICON_SIZE: f32 = 28.0;

/// Tokens of the captured pieces of `color`, in capture order
pub fn captured_icons(color: Color, roles: &[Role]) -> Vec<PieceToken> {
    roles.iter().map(|role| PieceToken::new(color, *role)).collect()
}

/// Material lead of `side`, e.g. `+3`; `None` unless `side` is ahead
///
/// `advantage` is positive when White is ahead.
pub fn advantage_label(advantage: i32, side: Color) -> Option<String> {
    let lead = match side {
        Color::White => advantage,
        Color::Black => -advantage,
    };
    (lead > 0).then(|| format!("+{lead}"))
}

/// Egui textures of the piece images shown in the captured panels
#[derive(Resource, Default)]
pub struct PieceIcons {
    theme: String,
    textures: HashMap<PieceToken, egui::TextureId>,
}

impl PieceIcons {
    /// Texture for `token`, registering its image with egui on first use
    fn texture(
        &mut self,
        token: PieceToken,
        theme: &str,
        contexts: &mut EguiContexts,
        asset_server: &AssetServer,
    ) -> egui::TextureId {
        if self.theme != theme {
            self.theme = theme.to_string();
            self.textures.clear();
        }
        *self.textures.entry(token).or_insert_with(|| {
            let image: Handle<Image> = asset_server.load(token.image_path(theme));
            contexts.add_image(EguiTextureHandle::Strong(image))
        })
    }
}

fn captured_panel(
    ui: &mut egui::Ui,
    title: &str,
    icons: &[(PieceToken, egui::TextureId)],
    lead: Option<String>,
) {
    ui.label(egui::RichText::new(title).strong());
    ui.add_space(5.0);
    ui.horizontal_wrapped(|ui| {
        for (token, texture) in icons {
            ui.add(egui::Image::new(egui::load::SizedTexture::new(
                *texture,
                [ICON_SIZE, ICON_SIZE],
            )))
            .on_hover_text(token.to_string());
        }
    });
    if let Some(lead) = lead {
        ui.add_space(5.0);
        ui.label(egui::RichText::new(lead).color(UiColors::ACCENT_GOLD));
    }
}

/// System to display the in-game panels
///
/// Runs in `EguiPrimaryContextPass`.
pub fn game_status_ui(
    mut contexts: EguiContexts,
    mut icons: ResMut<PieceIcons>,
    asset_server: Res<AssetServer>,
    mut session: ResMut<SessionController>,
    mut settings: ResMut<GameSettings>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let captured = session.captured().clone();
    let theme = settings.piece_theme.clone();
    let mut textures_for = |color: Color, roles: &[Role]| -> Vec<(PieceToken, egui::TextureId)> {
        captured_icons(color, roles)
            .into_iter()
            .map(|token| (token, icons.texture(token, &theme, &mut contexts, &asset_server)))
            .collect()
    };
    let black_icons = textures_for(Color::Black, &captured.black_lost);
    let white_icons = textures_for(Color::White, &captured.white_lost);
    let advantage = captured.material_advantage();

    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let game_over = session.game().is_some_and(|game| game.is_game_over());
    let in_check = session.game().is_some_and(|game| game.is_check());
    let mut reset_requested = false;

    egui::TopBottomPanel::top("game_top_bar")
        .resizable(false)
        .show(ctx, |ui| {
            ui.add_space(5.0);
            ui.horizontal(|ui| {
                if let Some(mode) = session.mode() {
                    ui.label(egui::RichText::new(mode.label()).color(UiColors::TEXT_TERTIARY));
                    ui.separator();
                }

                let status_color = if game_over {
                    UiColors::ACCENT_GOLD
                } else if in_check {
                    UiColors::DANGER
                } else {
                    UiColors::TEXT_PRIMARY
                };
                ui.colored_label(status_color, egui::RichText::new(session.status()).size(18.0));

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Juego Nuevo").clicked() {
                        reset_requested = true;
                    }
                });
            });
            ui.add_space(5.0);
        });

    egui::SidePanel::left("captured_black")
        .resizable(false)
        .default_width(140.0)
        .show(ctx, |ui| {
            captured_panel(
                ui,
                "Capturadas por Blancas",
                &black_icons,
                advantage_label(advantage, Color::White),
            );
        });

    egui::SidePanel::right("captured_white")
        .resizable(false)
        .default_width(140.0)
        .show(ctx, |ui| {
            captured_panel(
                ui,
                "Capturadas por Negras",
                &white_icons,
                advantage_label(advantage, Color::Black),
            );
        });

    egui::TopBottomPanel::bottom("game_settings_bar")
        .resizable(false)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                let mut show_hints = settings.show_hints;
                if ui.checkbox(&mut show_hints, "Mostrar jugadas").changed() {
                    settings.show_hints = show_hints;
                }

                let mut hover = settings.hover_highlights;
                if ui.checkbox(&mut hover, "Resaltar al pasar").changed() {
                    settings.hover_highlights = hover;
                }

                let mut theme = settings.board_theme;
                egui::ComboBox::from_label("Tablero")
                    .selected_text(theme.name())
                    .show_ui(ui, |ui| {
                        for option in BoardTheme::ALL {
                            ui.selectable_value(&mut theme, option, option.name());
                        }
                    });
                if theme != settings.board_theme {
                    settings.board_theme = theme;
                }
            });
        });

    if reset_requested {
        new_game(&mut session, &mut next_state);
    }
}

/// Plugin for the in-game panels
pub struct GameUiPlugin;

impl Plugin for GameUiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PieceIcons>().add_systems(
            EguiPrimaryContextPass,
            game_status_ui.run_if(in_state(GameState::InGame)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_captured_icons_use_board_images() {
        //! Icons keep capture order and load the board's piece images
        assert!(captured_icons(Color::Black, &[]).is_empty());

        let icons = captured_icons(Color::Black, &[Role::Pawn, Role::Knight]);
        let paths: Vec<_> = icons.iter().map(|token| token.image_path("wikipedia")).collect();
        assert_eq!(
            paths,
            vec![
                "img/chesspieces/wikipedia/bP.png",
                "img/chesspieces/wikipedia/bN.png",
            ]
        );
    }

    #[test]
    fn test_advantage_label_under_leading_side() {
        assert_eq!(advantage_label(3, Color::White).as_deref(), Some("+3"));
        assert_eq!(advantage_label(3, Color::Black), None);
        assert_eq!(advantage_label(-2, Color::Black).as_deref(), Some("+2"));
        assert_eq!(advantage_label(-2, Color::White), None);
        assert_eq!(advantage_label(0, Color::White), None);
    }
}
