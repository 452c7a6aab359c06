//! Pointer input for the board
//!
//! Turns raw mouse input into session calls. The cursor is projected
//! through the board camera into world space and mapped to a square with
//! [`world_to_square`]; no picking backend is involved.
//!
//! | Pointer                  | Session call                               |
//! |--------------------------|--------------------------------------------|
//! | enters / leaves a square | `on_square_hover` / `on_square_hover_exit` |
//! | left press on a square   | `on_square_click`, then `can_drag`         |
//! | left release             | `on_drop` (or snapback off the board)      |
//!
//! While a drag is active the dragged sprite follows the cursor. A snapback
//! puts it back on its origin square; an accepted move asks the view to
//! resync from the session's FEN.
//!
//! Without a primary window or a board camera the system does nothing.

use std::time::Duration;

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use shakmaty::Square;

use crate::game::session::{DropOutcome, SessionController};
use crate::game::types::PieceToken;
use crate::rendering::board::BoardViewState;
use crate::rendering::utils::{
    square_to_world, world_to_square, BoardCamera, PieceSprite, DRAGGED_PIECE_Z, PIECE_Z,
};

/// Piece currently being dragged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveDrag {
    pub entity: Entity,
    pub source: Square,
    pub token: PieceToken,
}

/// Pointer state carried between frames
#[derive(Resource, Debug, Default)]
pub struct PointerState {
    /// Square under the cursor last frame
    pub hovered: Option<Square>,
    pub drag: Option<ActiveDrag>,
}

/// Cursor position in board world space
fn cursor_world_position(
    windows: &Query<&Window, With<PrimaryWindow>>,
    cameras: &Query<(&Camera, &GlobalTransform), With<BoardCamera>>,
) -> Option<Vec2> {
    let window = windows.single().ok()?;
    let (camera, camera_transform) = cameras.single().ok()?;
    let cursor = window.cursor_position()?;
    camera.viewport_to_world_2d(camera_transform, cursor).ok()
}

/// Route mouse input on the board to the session
pub fn board_pointer_system(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<BoardCamera>>,
    time: Res<Time>,
    mut session: ResMut<SessionController>,
    mut pointer: ResMut<PointerState>,
    mut view: ResMut<BoardViewState>,
    mut pieces: Query<(Entity, &PieceSprite, &mut Transform)>,
) {
    if windows.is_empty() || cameras.is_empty() {
        return;
    }
    let cursor = cursor_world_position(&windows, &cameras);
    let square = cursor.and_then(world_to_square);

    if square != pointer.hovered {
        if pointer.hovered.is_some() {
            session.on_square_hover_exit();
        }
        if let Some(entered) = square {
            session.on_square_hover(entered);
        }
        pointer.hovered = square;
    }

    if buttons.just_pressed(MouseButton::Left) {
        if let Some(pressed) = square {
            session.on_square_click(pressed);
            pointer.drag = start_drag(&session, pressed, &pieces);
        }
    }

    let Some(drag) = pointer.drag else {
        return;
    };
    let Ok((_, _, mut transform)) = pieces.get_mut(drag.entity) else {
        // Sprite was replaced by a resync mid-drag
        pointer.drag = None;
        return;
    };

    if let Some(position) = cursor {
        transform.translation = position.extend(DRAGGED_PIECE_Z);
    }

    if !buttons.just_released(MouseButton::Left) {
        return;
    }
    pointer.drag = None;

    match resolve_drop(&mut session, drag.source, square, time.elapsed()) {
        DropResolution::ReturnHome(home) => {
            transform.translation = home;
            debug!("[INPUT] {} snapped back to {}", drag.token, drag.source);
        }
        DropResolution::Resync(fen) => {
            debug!("[INPUT] Dropped {} from {}", drag.token, drag.source);
            view.request_sync(fen);
        }
    }
}

/// What the view does with a released piece
#[derive(Debug, Clone, PartialEq)]
pub enum DropResolution {
    /// Put the dragged sprite back at this translation
    ReturnHome(Vec3),
    /// Redraw all pieces from this FEN
    Resync(String),
}

/// Submit a release of the piece dragged from `source`
///
/// `target` is `None` when the pointer left the board, which is always a
/// snapback.
pub fn resolve_drop(
    session: &mut SessionController,
    source: Square,
    target: Option<Square>,
    now: Duration,
) -> DropResolution {
    let outcome = match target {
        Some(target) => session.on_drop(source, target, now),
        None => DropOutcome::Snapback,
    };
    match (outcome, session.on_snap_end()) {
        (DropOutcome::Accepted(_), Some(fen)) => DropResolution::Resync(fen),
        _ => DropResolution::ReturnHome(square_to_world(source).extend(PIECE_Z)),
    }
}

/// Begin dragging the live piece on `square` if the session allows it
fn start_drag(
    session: &SessionController,
    square: Square,
    pieces: &Query<(Entity, &PieceSprite, &mut Transform)>,
) -> Option<ActiveDrag> {
    let live = session.board_key();
    let (entity, sprite, _) = pieces
        .iter()
        .find(|(_, sprite, _)| sprite.square == square && sprite.key == live)?;
    if !session.can_drag(square, sprite.token) {
        return None;
    }
    trace!("[INPUT] Drag start {} from {}", sprite.token, square);
    Some(ActiveDrag {
        entity,
        source: square,
        token: sprite.token,
    })
}
