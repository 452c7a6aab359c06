//! Move hints visualization system
//!
//! Paints every board square from the session's highlight map: highlighted
//! squares take the theme's highlight colour, the rest their base colour.
//! With `show_hints` off no square is ever painted as highlighted.

use bevy::prelude::*;

use crate::core::GameSettings;
use crate::game::session::SessionController;
use crate::rendering::utils::{square_color, BoardSquare};

/// Recolour squares from the current highlight map and theme
pub fn update_move_hints_system(
    session: Res<SessionController>,
    settings: Res<GameSettings>,
    mut squares: Query<(&BoardSquare, &mut Sprite)>,
) {
    let highlights = session.selection().highlights();
    for (board_square, mut sprite) in squares.iter_mut() {
        let lit = settings.show_hints && highlights.is_highlighted(board_square.square);
        let color = square_color(board_square.square, settings.board_theme, lit);
        // Only touch the sprite when the colour actually changes
        if sprite.color != color {
            sprite.color = color;
        }
    }
}
