//! Chess game systems module
//!
//! Thin ECS wrappers around [`crate::game::session::SessionController`]:
//!
//! - [`input`] - Mouse -> click / hover / drag / drop on the session
//! - [`game_logic`] - Settings propagation into the session
//!
//! The computer reply poll lives with the rest of the computer opponent in
//! [`crate::game::ai`].
//!
//! # System Execution Order
//!
//! ```text
//! (any state) apply_settings_system        settings -> session
//!    |
//! Input      board_pointer_system          clicks, drags, drops
//!    |
//! Execution  poll_computer_reply_system    due computer reply
//!    |
//! Visual     stale sweep, piece sync,      board redrawn from the session
//!            move hints
//! ```

pub mod game_logic;
pub mod input;

pub use game_logic::*;
pub use input::*;
