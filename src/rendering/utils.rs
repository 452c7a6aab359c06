//! Board geometry and view components
//!
//! The board is drawn in 2D world space centred on the origin, White at the
//! bottom. All mapping between `shakmaty::Square` and world coordinates
//! lives here so the spawn, sync and input systems agree on it.
//!
//! # Coordinates
//!
//! ```text
//!   rank 8  +---+---+ ... +---+
//!           |a8 |b8 |     |h8 |
//!           ...
//!   rank 1  |a1 |b1 |     |h1 |   a1 centre = (-3.5, -3.5) * SQUARE_SIZE
//!           +---+---+ ... +---+
//! ```
//!
//! Chess boards alternate between light and dark squares; a1 is dark.

use bevy::prelude::*;
use shakmaty::Square;

use crate::core::BoardTheme;
use crate::game::types::{BoardKey, PieceToken};

/// Edge length of one square in world units
pub const SQUARE_SIZE: f32 = 72.0;

/// Piece sprites are drawn slightly inside their square
pub const PIECE_SIZE: f32 = SQUARE_SIZE * 0.9;

pub const SQUARE_Z: f32 = 0.0;
pub const PIECE_Z: f32 = 1.0;
pub const DRAGGED_PIECE_Z: f32 = 10.0;

/// Board square sprite, tagged with the board it belongs to
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardSquare {
    pub square: Square,
    pub key: BoardKey,
}

/// Piece sprite resting on `square`, tagged with the board it belongs to
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceSprite {
    pub square: Square,
    pub token: PieceToken,
    pub key: BoardKey,
}

/// Marker for the 2D camera that looks at the board
#[derive(Component, Debug, Default)]
pub struct BoardCamera;

/// `(file, rank)` as 0..8 indices
pub fn square_coords(square: Square) -> (usize, usize) {
    let index = usize::from(square);
    (index % 8, index / 8)
}

/// Returns true if this square is a light square
pub fn is_light_square(square: Square) -> bool {
    let (file, rank) = square_coords(square);
    (file + rank) % 2 == 1
}

/// World-space centre of `square`
pub fn square_to_world(square: Square) -> Vec2 {
    let (file, rank) = square_coords(square);
    Vec2::new(
        (file as f32 - 3.5) * SQUARE_SIZE,
        (rank as f32 - 3.5) * SQUARE_SIZE,
    )
}

/// Square under a world-space point, `None` off the board
pub fn world_to_square(point: Vec2) -> Option<Square> {
    let half = 4.0 * SQUARE_SIZE;
    if point.x < -half || point.x >= half || point.y < -half || point.y >= half {
        return None;
    }
    let file = ((point.x + half) / SQUARE_SIZE).floor() as u32;
    let rank = ((point.y + half) / SQUARE_SIZE).floor() as u32;
    if file > 7 || rank > 7 {
        return None;
    }
    Some(Square::new(rank * 8 + file))
}

/// Colour of a square, highlighted or not
pub fn square_color(square: Square, theme: BoardTheme, highlighted: bool) -> Color {
    let (light, dark) = if highlighted {
        theme.highlight_colors()
    } else {
        theme.colors()
    };
    if is_light_square(square) {
        light
    } else {
        dark
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_a1_is_dark_h1_is_light() {
        assert!(!is_light_square(Square::A1));
        assert!(is_light_square(Square::H1));
        assert!(is_light_square(Square::A8));
        assert!(!is_light_square(Square::H8));
    }

    #[test]
    fn test_square_world_mapping() {
        //! Every square centre maps back to the same square
        for index in 0..64u32 {
            let square = Square::new(index);
            assert_eq!(world_to_square(square_to_world(square)), Some(square));
        }
    }

    #[test]
    fn test_square_centres() {
        assert_eq!(square_to_world(Square::A1), Vec2::new(-3.5, -3.5) * SQUARE_SIZE);
        assert_eq!(square_to_world(Square::H8), Vec2::new(3.5, 3.5) * SQUARE_SIZE);
    }

    #[test]
    fn test_off_board_points() {
        let edge = 4.0 * SQUARE_SIZE;
        assert_eq!(world_to_square(Vec2::new(edge, 0.0)), None);
        assert_eq!(world_to_square(Vec2::new(0.0, -edge - 1.0)), None);
        assert_eq!(world_to_square(Vec2::new(-edge, -edge)), Some(Square::A1));
    }
}
