//! Error types for game module
//!
//! Provides custom error types for game logic including move validation,
//! square parsing and session lifecycle.
//!
//! Every error here degrades to "nothing visibly happened" at the board:
//! the session turns a failed drop into a snapback and never propagates
//! these to the player.

/// Errors that can occur in game logic
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// Move is not in the legal move list for the side to move
    #[error("Illegal move: {from} -> {to}")]
    IllegalMove { from: String, to: String },

    /// The rules engine refused a move it had listed as legal
    #[error("Rules engine rejected move: {message}")]
    EngineRejected { message: String },

    /// Square name could not be parsed (e.g. "z9")
    #[error("Invalid square name: {name}")]
    InvalidSquare { name: String },

    /// Piece token could not be parsed (e.g. "xQ")
    #[error("Invalid piece token: {token}")]
    InvalidPieceToken { token: String },

    /// FEN string could not be turned into a playable position
    #[error("Invalid position: {message}")]
    InvalidPosition { message: String },

    /// A mode was chosen while another session was still active
    #[error("A game mode is already active; reset the session first")]
    ModeAlreadySelected,
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;
