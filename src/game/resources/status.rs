//! Status line shown under the board
//!
//! Derived from the rules adapter after every ply. The wording is the
//! Spanish text players of this board expect, e.g. `Turno de Negras` or
//! `Fin del juego, Blancas están en jaque mate.`

use std::fmt;

use shakmaty::Color;

use crate::game::rules::ChessRules;
use crate::game::types::side_name;

/// What the status line is reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Game continues; `in_check` is whether the side to move is in check
    InProgress { turn: Color, in_check: bool },
    /// `mated` is the side to move, which has been checkmated
    Checkmate { mated: Color },
    Draw,
}

impl GameStatus {
    pub fn of(rules: &ChessRules) -> Self {
        let turn = rules.current_turn();
        if rules.is_checkmate() {
            GameStatus::Checkmate { mated: turn }
        } else if rules.is_draw() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress {
                turn,
                in_check: rules.is_check(),
            }
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            GameStatus::Checkmate { mated } => {
                write!(f, "Fin del juego, {} están en jaque mate.", side_name(mated))
            }
            GameStatus::Draw => write!(f, "Fin del juego, posición de tablas"),
            GameStatus::InProgress { turn, in_check } => {
                write!(f, "Turno de {}", side_name(turn))?;
                if in_check {
                    write!(f, ", {} están en jaque", side_name(turn))?;
                }
                Ok(())
            }
        }
    }
}
