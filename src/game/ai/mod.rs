//! Computer opponent
//!
//! The computer is deliberately weak: it picks uniformly at random among the
//! legal moves of the side to move. What matters is *when* it moves, not
//! what it plays.
//!
//! # Architecture
//!
//! - [`pick_random_move`]: uniform choice over the legal move list
//! - [`ReplySchedule`]: at most one pending reply, tagged with the board key
//!   it was scheduled under
//! - [`AIPlugin`]: polls the schedule every frame against `Time`
//!
//! # Reply lifecycle
//!
//! 1. A human move is accepted in `HumanVsComputer` mode
//! 2. The session schedules a reply `reply_delay` into the future
//! 3. The poll system asks the session to fire it once due
//! 4. If the board was reset in between, the reply is stale and dropped
//!
//! The scheduled reply never touches a torn-down board: the key check
//! happens before any state is read.

pub mod random;
pub mod resource;
pub mod systems;

pub use random::pick_random_move;
pub use resource::{ReplyPoll, ReplySchedule, DEFAULT_REPLY_DELAY};
pub use systems::{poll_computer_reply_system, AIPlugin};
