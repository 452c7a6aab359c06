//! Per-session game state
//!
//! Plain data structures owned by [`crate::game::session::SessionController`].
//! None of them is a bevy resource on its own: the session is the single
//! owner and hands out shared references to the view.
//!
//! - [`Selection`] - Selected square and its highlighted destinations
//! - [`CapturedPieces`] - Pieces lost by each side, rebuilt from history
//! - [`GameStatus`] - Turn / check / mate / draw status line
//!
//! These are pure data structure tests targets: every transition can be
//! driven without an `App`.

pub mod captured;
pub mod selection;
pub mod status;


pub use captured::*;
pub use selection::*;
pub use status::*;
