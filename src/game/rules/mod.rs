//! Chess rules adapter - the one live game of a session
//!
//! Wraps a `shakmaty::Chess` position behind the small query/mutation surface
//! the session needs. The rules engine stays authoritative for:
//! - Legal move generation
//! - Check / checkmate / stalemate / insufficient material
//! - FEN and SAN rendering
//!
//! This module adds the bookkeeping the engine leaves to its callers: the
//! verbose move history (with captured-piece annotations) and the position
//! keys needed for threefold repetition.
//!
//! # Failure semantics
//!
//! [`ChessRules::apply_move`] is the only mutation. An illegal attempt
//! returns [`GameError::IllegalMove`] and leaves the position untouched; it
//! never panics. Callers treat any `Err` as "snap the piece back".
//!
//! # Module Structure
//!
//! - `moves` - [`LegalMove`] and [`MoveRecord`], the flattened move shapes

pub mod moves;

#[cfg(test)]
mod tests;

use shakmaty::fen::Fen;
use shakmaty::san::San;
use shakmaty::{CastlingMode, Chess, Color, EnPassantMode, Move, Piece, Position, Role, Square};
use tracing::{debug, trace};

use crate::game::error::{GameError, GameResult};

pub use moves::{LegalMove, MoveRecord};

/// Half-moves without capture or pawn move after which the game is drawn
const FIFTY_MOVE_HALFMOVES: u32 = 100;

/// Number of occurrences of one position that draws the game
const REPETITION_LIMIT: usize = 3;

/// Game state adapter over the rules engine
///
/// # Usage
///
/// ```rust,ignore
/// let mut rules = ChessRules::new();
/// let record = rules.apply_move(Square::E2, Square::E4, Role::Queen)?;
/// assert_eq!(record.san, "e4");
/// assert_eq!(rules.current_turn(), Color::Black);
/// ```
#[derive(Debug, Clone)]
pub struct ChessRules {
    position: Chess,
    history: Vec<MoveRecord>,
    /// Repetition key of every position reached, starting position included
    seen_positions: Vec<String>,
}

impl Default for ChessRules {
    fn default() -> Self {
        Self::from_position(Chess::default())
    }
}

impl ChessRules {
    /// Standard starting position, empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an arbitrary position given as FEN
    pub fn from_fen(fen: &str) -> GameResult<Self> {
        let parsed: Fen = fen.parse().map_err(|e: shakmaty::fen::ParseFenError| {
            GameError::InvalidPosition {
                message: e.to_string(),
            }
        })?;
        let position: Chess = parsed
            .into_position(CastlingMode::Standard)
            .map_err(|e| GameError::InvalidPosition {
                message: e.to_string(),
            })?;
        Ok(Self::from_position(position))
    }

    fn from_position(position: Chess) -> Self {
        let seen_positions = vec![repetition_key(&position)];
        Self {
            position,
            history: Vec::new(),
            seen_positions,
        }
    }

    /// Side to move
    pub fn current_turn(&self) -> Color {
        self.position.turn()
    }

    pub fn is_check(&self) -> bool {
        self.position.is_check()
    }

    pub fn is_checkmate(&self) -> bool {
        self.position.is_checkmate()
    }

    pub fn is_stalemate(&self) -> bool {
        self.position.is_stalemate()
    }

    pub fn is_insufficient_material(&self) -> bool {
        self.position.is_insufficient_material()
    }

    /// Current position has occurred at least three times
    pub fn is_threefold_repetition(&self) -> bool {
        let Some(current) = self.seen_positions.last() else {
            return false;
        };
        self.seen_positions.iter().filter(|key| *key == current).count() >= REPETITION_LIMIT
    }

    /// Fifty full moves without a capture or a pawn move
    pub fn is_fifty_move_draw(&self) -> bool {
        self.position.halfmoves() >= FIFTY_MOVE_HALFMOVES
    }

    /// Any drawn terminal state
    pub fn is_draw(&self) -> bool {
        self.is_stalemate()
            || self.is_insufficient_material()
            || self.is_threefold_repetition()
            || self.is_fifty_move_draw()
    }

    pub fn is_game_over(&self) -> bool {
        self.is_checkmate() || self.is_draw()
    }

    /// Legal moves for the side to move, optionally only those starting on
    /// `square`. Order follows the engine's generation order.
    pub fn legal_moves(&self, square: Option<Square>) -> Vec<LegalMove> {
        let turn = self.current_turn();
        self.position
            .legal_moves()
            .iter()
            .filter_map(|m| LegalMove::from_engine(m, turn))
            .filter(|m| square.is_none_or(|sq| m.from == sq))
            .collect()
    }

    /// Distinct destination squares reachable from `square`
    ///
    /// Promotions produce one legal move per piece kind; they collapse to a
    /// single destination here.
    pub fn legal_destinations(&self, square: Square) -> Vec<Square> {
        let mut destinations: Vec<Square> = Vec::new();
        for m in self.legal_moves(Some(square)) {
            if !destinations.contains(&m.to) {
                destinations.push(m.to);
            }
        }
        destinations
    }

    /// Play `from -> to` for the side to move
    ///
    /// `promotion` is the preferred piece when the move promotes and is
    /// ignored otherwise.
    pub fn apply_move(&mut self, from: Square, to: Square, promotion: Role) -> GameResult<MoveRecord> {
        let turn = self.current_turn();
        let candidates: Vec<(Move, LegalMove)> = self
            .position
            .legal_moves()
            .iter()
            .filter_map(|m| LegalMove::from_engine(m, turn).map(|legal| (m.clone(), legal)))
            .filter(|(_, legal)| legal.from == from && legal.to == to)
            .collect();

        let chosen = candidates
            .iter()
            .find(|(_, legal)| legal.promotion == Some(promotion))
            .or_else(|| candidates.iter().find(|(_, legal)| legal.promotion.is_none()))
            .or_else(|| candidates.first())
            .cloned();

        let Some((engine_move, legal)) = chosen else {
            debug!("[RULES] Illegal move {}{} for {:?}", from, to, turn);
            return Err(GameError::IllegalMove {
                from: from.to_string(),
                to: to.to_string(),
            });
        };

        let san = San::from_move(&self.position, engine_move.clone()).to_string();
        let next = self
            .position
            .clone()
            .play(engine_move)
            .map_err(|_| GameError::EngineRejected {
                message: format!("{from}{to} in {}", self.fen()),
            })?;

        self.position = next;
        self.seen_positions.push(repetition_key(&self.position));

        let record = MoveRecord::new(legal, san);
        trace!("[RULES] Applied {} ({:?})", record.san, record.color);
        self.history.push(record.clone());
        Ok(record)
    }

    /// Apply a move taken from [`Self::legal_moves`]
    pub fn apply_legal(&mut self, legal: &LegalMove) -> GameResult<MoveRecord> {
        self.apply_move(legal.from, legal.to, legal.promotion.unwrap_or(Role::Queen))
    }

    /// FEN of the current position, used to resync the board view
    pub fn fen(&self) -> String {
        fen_string(&self.position)
    }

    /// Verbose move history, oldest first
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Move history as SAN strings, oldest first
    pub fn history_san(&self) -> Vec<String> {
        self.history.iter().map(|record| record.san.clone()).collect()
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.position.board().piece_at(square)
    }

    /// Every occupied square with its piece, a1 first
    pub fn pieces(&self) -> Vec<(Square, Piece)> {
        let board = self.position.board();
        board
            .occupied()
            .into_iter()
            .filter_map(|square| board.piece_at(square).map(|piece| (square, piece)))
            .collect()
    }
}

/// Parse a square name such as `e4`
pub fn parse_square(name: &str) -> GameResult<Square> {
    name.parse::<Square>().map_err(|_| GameError::InvalidSquare {
        name: name.to_string(),
    })
}

fn fen_string(position: &Chess) -> String {
    Fen::from_position(position, EnPassantMode::Legal).to_string()
}

/// Placement, side to move, castling rights and en passant square
///
/// The move clocks are left out so that the same position reached at
/// different move numbers compares equal.
fn repetition_key(position: &Chess) -> String {
    fen_string(position)
        .split(' ')
        .take(4)
        .collect::<Vec<_>>()
        .join(" ")
}
