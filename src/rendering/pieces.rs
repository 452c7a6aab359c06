//! Piece sprites, redrawn from the session's position
//!
//! The view never moves pieces by itself. After every accepted move (human
//! or computer) the session's FEN changes, and [`sync_piece_sprites_system`]
//! replaces all piece sprites with the placement of the live position.
//! This is the board widget's `position(fen)` call in ECS form.
//!
//! Images are loaded from `img/chesspieces/<theme>/<token>.png` under the
//! asset root, e.g. `img/chesspieces/wikipedia/bN.png`.

use bevy::prelude::*;

use crate::core::GameSettings;
use crate::game::session::SessionController;
use crate::game::types::PieceToken;
use crate::rendering::board::BoardViewState;
use crate::rendering::utils::{square_to_world, PieceSprite, PIECE_SIZE, PIECE_Z};

/// Respawn piece sprites whenever the drawn position is out of date
pub fn sync_piece_sprites_system(
    mut commands: Commands,
    session: Res<SessionController>,
    settings: Res<GameSettings>,
    asset_server: Res<AssetServer>,
    mut view: ResMut<BoardViewState>,
    pieces: Query<Entity, With<PieceSprite>>,
) {
    let (Some(game), Some(key)) = (session.game(), view.key) else {
        return;
    };
    let fen = game.fen();
    let theme_changed = settings.is_changed() && !settings.is_added();
    if !view.needs_sync && !theme_changed && view.synced_fen.as_deref() == Some(fen.as_str()) {
        return;
    }

    for entity in pieces.iter() {
        commands.entity(entity).despawn();
    }

    for (square, piece) in game.pieces() {
        let token = PieceToken::from(piece);
        let position = square_to_world(square);
        let image = asset_server.load(token.image_path(&settings.piece_theme));
        commands.spawn((
            Sprite {
                image,
                custom_size: Some(Vec2::splat(PIECE_SIZE)),
                ..default()
            },
            Transform::from_xyz(position.x, position.y, PIECE_Z),
            PieceSprite { square, token, key },
            Name::new(format!("{} {}", token, square)),
            DespawnOnExit(crate::core::GameState::InGame),
        ));
    }

    trace!("[BOARD] Pieces synced to {}", fen);
    view.synced_fen = Some(fen);
    view.needs_sync = false;
}
