//! Type definitions shared by the session, the rules adapter and the view
//!
//! Wraps the rules engine's vocabulary (`shakmaty::{Color, Role}`) in the
//! few domain types the board needs: the game mode, the two-character piece
//! token used for piece images, and the board lifecycle key.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use shakmaty::{Color, Piece, Role};

use super::error::{GameError, GameResult};

/// Who controls each side for the current session
///
/// The session stores `Option<GameMode>`; `None` means no mode chosen yet
/// (the launch menu is showing).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameMode {
    /// Two humans share the board (hot-seat)
    HumanVsHuman,

    /// One human against the random-move computer
    HumanVsComputer {
        /// The colour the computer plays
        computer: Color,
    },
}

impl GameMode {
    /// Human plays White, computer replies as Black
    pub const VS_COMPUTER: GameMode = GameMode::HumanVsComputer {
        computer: Color::Black,
    };

    /// The computer's colour, if the computer plays at all
    pub fn computer_color(self) -> Option<Color> {
        match self {
            GameMode::HumanVsHuman => None,
            GameMode::HumanVsComputer { computer } => Some(computer),
        }
    }

    /// Whether `color` is driven by the computer in this mode
    pub fn is_computer(self, color: Color) -> bool {
        self.computer_color() == Some(color)
    }

    /// Menu label (Spanish, as shown on the mode buttons)
    pub fn label(self) -> &'static str {
        match self {
            GameMode::HumanVsHuman => "Humano vs Humano",
            GameMode::HumanVsComputer {
                computer: Color::Black,
            } => "Humano vs PC",
            GameMode::HumanVsComputer {
                computer: Color::White,
            } => "PC vs Humano",
        }
    }
}

/// Colour + kind code of a piece, e.g. `wQ` or `bP`
///
/// This is the token the board view uses to pick a piece image, and the
/// token the drag-start predicate receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceToken {
    pub color: Color,
    pub role: Role,
}

impl PieceToken {
    pub fn new(color: Color, role: Role) -> Self {
        Self { color, role }
    }

    /// Image path for this piece under the given theme
    ///
    /// Relative to the asset root, so `img/chesspieces/wikipedia/wQ.png`
    /// resolves to `/img/chesspieces/wikipedia/wQ.png` on a web build.
    pub fn image_path(self, theme: &str) -> String {
        format!("img/chesspieces/{theme}/{self}.png")
    }
}

impl From<Piece> for PieceToken {
    fn from(piece: Piece) -> Self {
        Self::new(piece.color, piece.role)
    }
}

impl fmt::Display for PieceToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.color.char(), self.role.upper_char())
    }
}

impl FromStr for PieceToken {
    type Err = GameError;

    fn from_str(s: &str) -> GameResult<Self> {
        let invalid = || GameError::InvalidPieceToken {
            token: s.to_string(),
        };
        let mut chars = s.chars();
        let (Some(c), Some(r), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };
        let color = Color::from_char(c).ok_or_else(invalid)?;
        let role = Role::from_char(r.to_ascii_lowercase()).ok_or_else(invalid)?;
        Ok(Self::new(color, role))
    }
}

/// Board lifecycle key
///
/// Incremented on every reset. Board entities and scheduled computer
/// replies carry the key they were created under; anything holding a key
/// other than the session's current one belongs to a torn-down board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BoardKey(pub u64);

impl BoardKey {
    pub fn next(self) -> Self {
        BoardKey(self.0.wrapping_add(1))
    }
}

impl fmt::Display for BoardKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Spanish name of a side, as used in status text ("Blancas" / "Negras")
pub fn side_name(color: Color) -> &'static str {
    match color {
        Color::White => "Blancas",
        Color::Black => "Negras",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_token_display() {
        assert_eq!(PieceToken::new(Color::White, Role::Queen).to_string(), "wQ");
        assert_eq!(PieceToken::new(Color::Black, Role::Pawn).to_string(), "bP");
        assert_eq!(PieceToken::new(Color::Black, Role::Knight).to_string(), "bN");
    }

    #[test]
    fn test_piece_token_parse() {
        let token: PieceToken = "bK".parse().expect("valid token");
        assert_eq!(token, PieceToken::new(Color::Black, Role::King));
        assert!("xQ".parse::<PieceToken>().is_err());
        assert!("wZ".parse::<PieceToken>().is_err());
        assert!("wQQ".parse::<PieceToken>().is_err());
        assert!("".parse::<PieceToken>().is_err());
    }

    #[test]
    fn test_piece_image_path() {
        //! Piece images follow img/chesspieces/<theme>/<token>.png
        let token = PieceToken::new(Color::White, Role::Queen);
        assert_eq!(token.image_path("wikipedia"), "img/chesspieces/wikipedia/wQ.png");
    }

    #[test]
    fn test_game_mode_computer_color() {
        assert_eq!(GameMode::HumanVsHuman.computer_color(), None);
        assert_eq!(GameMode::VS_COMPUTER.computer_color(), Some(Color::Black));
        assert!(GameMode::VS_COMPUTER.is_computer(Color::Black));
        assert!(!GameMode::VS_COMPUTER.is_computer(Color::White));
    }

    #[test]
    fn test_board_key_increments() {
        let key = BoardKey::default();
        assert_eq!(key.next(), BoardKey(1));
        assert_eq!(key.next().next(), BoardKey(2));
    }
}
