//! Move records exchanged between the rules adapter and its callers
//!
//! The rules engine's own `shakmaty::Move` encodes castling as king-takes-rook
//! and has drop moves we never play. Callers of the adapter only ever see
//! these two flat records, shaped like the verbose move objects a board
//! widget works with.

use shakmaty::{Color, File, Move, Role, Square};

/// A move that is legal in the current position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegalMove {
    pub from: Square,
    /// Destination as the player drags it; for castling this is the king's
    /// landing square (g- or c-file), not the rook's square.
    pub to: Square,
    pub color: Color,
    pub piece: Role,
    pub captured: Option<Role>,
    pub promotion: Option<Role>,
}

impl LegalMove {
    /// Flatten an engine move. Returns `None` for drop moves.
    pub(crate) fn from_engine(m: &Move, color: Color) -> Option<Self> {
        let from = m.from()?;
        let to = match *m {
            Move::Castle { king, rook } => king_destination(king, rook),
            _ => m.to(),
        };
        Some(Self {
            from,
            to,
            color,
            piece: m.role(),
            captured: m.capture(),
            promotion: m.promotion(),
        })
    }

    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

/// One entry of the verbose move history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    /// Colour of the side that moved
    pub color: Color,
    pub piece: Role,
    /// Kind of the piece taken by this move, if any (en passant included)
    pub captured: Option<Role>,
    pub promotion: Option<Role>,
    /// Standard algebraic notation, e.g. `Nxe5`
    pub san: String,
}

impl MoveRecord {
    pub(crate) fn new(legal: LegalMove, san: String) -> Self {
        Self {
            from: legal.from,
            to: legal.to,
            color: legal.color,
            piece: legal.piece,
            captured: legal.captured,
            promotion: legal.promotion,
            san,
        }
    }
}

fn king_destination(king: Square, rook: Square) -> Square {
    let file = if rook.file() > king.file() {
        File::G
    } else {
        File::C
    };
    Square::from_coords(file, king.rank())
}
