//! Chess game logic module
//!
//! Pure game logic with a thin ECS layer on top. Everything stateful about a
//! game sits in one resource, [`session::SessionController`]; the systems
//! only translate input and time into session calls.
//!
//! # Module Organization
//!
//! - `rules` - Rules adapter over `shakmaty` (legality, status, history)
//! - `resources` - Selection/highlights, captured pieces, status line
//! - `ai` - Random-move computer and its reply schedule
//! - `session` - The session controller owning all of the above
//! - `systems` - Input and housekeeping systems
//! - `types` - Game mode, piece token, board key
//! - `error` - [`error::GameError`]
//! - `plugin` - GamePlugin that registers everything

pub mod ai;
pub mod error;
pub mod plugin;
pub mod resources;
pub mod rules;
pub mod session;
pub mod system_sets;
pub mod systems;
pub mod types;

// Re-export the plugin and session (main entry points)
pub use plugin::GamePlugin;
pub use session::{DropOutcome, SessionController};
