//! Application state for the chess board
//!
//! # State Flow
//!
//! ```text
//! [ModeSelect] --select_mode--> [InGame]
//!      ^                            |
//!      +------- "Juego Nuevo" ------+
//! ```
//!
//! # State Descriptions
//!
//! - **ModeSelect**: Mode picker window, no board on screen (starting state)
//! - **InGame**: Board, status line and captured-piece panels
//!
//! Board entities are spawned on `OnEnter(InGame)` and torn down on
//! `OnExit(InGame)`, so leaving the game always destroys the board.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

/// Primary state controlling which screen is shown
#[derive(Clone, Copy, Resource, PartialEq, Eq, Hash, Debug, Default, States, Reflect)]
pub enum GameState {
    /// Mode selection (starting state)
    ///
    /// The session has no mode and no game.
    #[default]
    ModeSelect,

    /// A game is on the board
    InGame,
}

fn is_valid_state_transition(from: GameState, to: GameState) -> bool {
    matches!(
        (from, to),
        (GameState::ModeSelect, GameState::InGame) | (GameState::InGame, GameState::ModeSelect)
    )
}

/// System to validate and log state transitions
///
/// Logs an error for transitions outside the two-state flow above.
pub fn validate_and_log_state_transitions(
    mut transition_events: MessageReader<StateTransitionEvent<GameState>>,
) {
    for event in transition_events.read() {
        match (event.exited, event.entered) {
            (Some(exited), Some(entered)) if exited == entered => {}
            (Some(exited), Some(entered)) => {
                if is_valid_state_transition(exited, entered) {
                    info!("[TRANSITION] {:?} -> {:?}", exited, entered);
                } else {
                    error!(
                        "[TRANSITION] INVALID: {:?} -> {:?} (state may be inconsistent)",
                        exited, entered
                    );
                }
            }
            (None, Some(entered)) => {
                debug!("[TRANSITION] Enter: {:?}", entered);
            }
            (Some(exited), None) => {
                debug!("[TRANSITION] Exit: {:?}", exited);
            }
            (None, None) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_state_default() {
        let state = GameState::default();
        assert_eq!(state, GameState::ModeSelect, "Game should start at mode selection");
    }

    #[test]
    fn test_valid_transitions() {
        assert!(is_valid_state_transition(GameState::ModeSelect, GameState::InGame));
        assert!(is_valid_state_transition(GameState::InGame, GameState::ModeSelect));
        assert!(!is_valid_state_transition(GameState::InGame, GameState::InGame));
    }
}
