//! Board creation and teardown
//!
//! Spawns the 64 square sprites when a game starts and removes every board
//! entity when it ends. Each entity carries the session's [`BoardKey`]; a
//! per-frame sweep despawns anything tagged with a key that is no longer
//! live, so nothing from an old board survives a reset.

use bevy::prelude::*;

use crate::core::{GameSettings, GameState};
use crate::game::session::SessionController;
use crate::game::system_sets::GameSystems;
use crate::game::types::BoardKey;
use crate::rendering::effects::update_move_hints_system;
use crate::rendering::pieces::sync_piece_sprites_system;
use crate::rendering::utils::{square_color, square_to_world, BoardCamera, BoardSquare, PieceSprite, SQUARE_SIZE, SQUARE_Z};
use shakmaty::Square;

/// What the view last drew
///
/// `synced_fen` is the position the piece sprites show; the sync system
/// respawns pieces whenever it differs from the session's FEN or a resync
/// has been requested.
#[derive(Resource, Debug, Default)]
pub struct BoardViewState {
    pub key: Option<BoardKey>,
    pub synced_fen: Option<String>,
    pub needs_sync: bool,
}

impl BoardViewState {
    /// Ask for the pieces to be redrawn from `fen`
    pub fn request_sync(&mut self, fen: String) {
        if self.synced_fen.as_deref() != Some(fen.as_str()) {
            self.needs_sync = true;
        }
    }
}

pub fn setup_board_camera(mut commands: Commands) {
    commands.spawn((Camera2d, BoardCamera, Name::new("Board Camera")));
}

pub(crate) fn create_board(
    mut commands: Commands,
    session: Res<SessionController>,
    settings: Res<GameSettings>,
    mut view: ResMut<BoardViewState>,
) {
    let key = session.board_key();

    let squares: Vec<_> = (0..64u32)
        .map(Square::new)
        .map(|square| {
            let position = square_to_world(square);
            (
                Sprite::from_color(
                    square_color(square, settings.board_theme, false),
                    Vec2::splat(SQUARE_SIZE),
                ),
                Transform::from_xyz(position.x, position.y, SQUARE_Z),
                BoardSquare { square, key },
                Name::new(format!("Square {}", square)),
                DespawnOnExit(GameState::InGame),
            )
        })
        .collect();
    commands.spawn_batch(squares);

    view.key = Some(key);
    view.synced_fen = None;
    view.needs_sync = true;
    info!("[BOARD] Board {} created", key);
}

/// Forget what was drawn; the entities go with `DespawnOnExit`
pub(crate) fn teardown_board(mut view: ResMut<BoardViewState>) {
    if let Some(key) = view.key.take() {
        info!("[BOARD] Board {} destroyed", key);
    }
    view.synced_fen = None;
    view.needs_sync = false;
}

/// Despawn board entities left over from an older board key
pub fn despawn_stale_board_entities(
    mut commands: Commands,
    session: Res<SessionController>,
    squares: Query<(Entity, &BoardSquare)>,
    pieces: Query<(Entity, &PieceSprite)>,
) {
    let live = session.board_key();
    let stale_squares = squares.iter().filter(|(_, s)| s.key != live).map(|(e, _)| e);
    let stale_pieces = pieces.iter().filter(|(_, p)| p.key != live).map(|(e, _)| e);
    for entity in stale_squares.chain(stale_pieces) {
        debug!("[BOARD] Despawning stale entity {:?}", entity);
        commands.entity(entity).despawn();
    }
}

/// Board camera plus [`BoardViewPlugin`]
pub struct BoardPlugin;

impl Plugin for BoardPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(BoardViewPlugin)
            .add_systems(Startup, setup_board_camera);
    }
}

/// Board lifecycle and the visual systems, without a camera
///
/// Runs headless, which is how the view is tested.
pub struct BoardViewPlugin;

impl Plugin for BoardViewPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BoardViewState>()
            .add_systems(OnEnter(GameState::InGame), create_board)
            .add_systems(OnExit(GameState::InGame), teardown_board)
            .add_systems(
                Update,
                (
                    despawn_stale_board_entities,
                    sync_piece_sprites_system,
                    update_move_hints_system,
                )
                    .chain()
                    .in_set(GameSystems::Visual),
            );
    }
}
