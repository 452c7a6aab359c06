//! Captured pieces tracking
//!
//! Tracks the pieces each side has lost and calculates material advantage.
//! Rebuilt from the full move history after every ply, so the lists can
//! never drift from what the history says.
//!
//! # Material Values
//!
//! Standard chess piece values in pawns:
//! - Pawn: 1
//! - Knight/Bishop: 3
//! - Rook: 5
//! - Queen: 9
//! - King: 0 (cannot be captured)
//!
//! # Material Advantage
//!
//! Positive advantage means White is ahead, negative means Black is ahead.
//! Example: If White captured (Rook=5, Pawn=1) and Black captured (Knight=3),
//! White's advantage is (5+1) - 3 = +3 pawns.

use shakmaty::{Color, Role};

use crate::game::rules::MoveRecord;

/// Pieces lost by each side, in the order they were taken
///
/// # Fields
///
/// - `white_lost`: White pieces that Black has captured
/// - `black_lost`: Black pieces that White has captured
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedPieces {
    pub white_lost: Vec<Role>,
    pub black_lost: Vec<Role>,
}

impl CapturedPieces {
    /// Replay every captured-piece annotation in `history`
    pub fn from_history(history: &[MoveRecord]) -> Self {
        let mut captured = Self::default();
        for record in history {
            if let Some(role) = record.captured {
                captured.add_capture(!record.color, role);
            }
        }
        captured
    }

    /// Record a piece capture
    ///
    /// # Arguments
    ///
    /// * `captured_piece_color` - Color of the piece that was captured
    /// * `role` - Kind of piece that was captured
    pub fn add_capture(&mut self, captured_piece_color: Color, role: Role) {
        match captured_piece_color {
            Color::White => self.white_lost.push(role),
            Color::Black => self.black_lost.push(role),
        }
    }

    /// Material difference in pawn units
    ///
    /// Returns positive if White is ahead, negative if Black is ahead, 0 if equal.
    pub fn material_advantage(&self) -> i32 {
        let white_score: i32 = self.black_lost.iter().map(|r| piece_value(*r)).sum();
        let black_score: i32 = self.white_lost.iter().map(|r| piece_value(*r)).sum();
        white_score - black_score
    }

    pub fn total(&self) -> usize {
        self.white_lost.len() + self.black_lost.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Clear all captured pieces (for new game)
    pub fn clear(&mut self) {
        self.white_lost.clear();
        self.black_lost.clear();
    }
}

/// Value of a piece in pawns
///
/// King has value 0 as it cannot be captured (game ends in checkmate).
fn piece_value(role: Role) -> i32 {
    match role {
        Role::Pawn => 1,
        Role::Knight => 3,
        Role::Bishop => 3,
        Role::Rook => 5,
        Role::Queen => 9,
        Role::King => 0,
    }
}
