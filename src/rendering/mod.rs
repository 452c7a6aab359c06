//! Rendering module - 2D board view with Bevy sprites
//!
//! Draws what the session says and nothing more. The session owns the
//! position and the highlight map; these systems only read them.
//!
//! # Architecture
//!
//! - `board` - Square sprites, camera, board lifecycle ([`BoardPlugin`])
//! - `pieces` - Piece sprites resynchronised from the FEN
//! - `effects` - Destination highlights
//! - `utils` - Square <-> world geometry and view components
//!
//! # Liveness
//!
//! Every square and piece entity carries the [`crate::game::types::BoardKey`]
//! it was spawned under. Entities with an old key are despawned before any
//! other visual system runs, so stale entities are never updated.

pub mod board;
pub mod effects;
pub mod pieces;
pub mod utils;

// Re-export commonly used items
pub use board::*;
pub use effects::*;
pub use pieces::*;
pub use utils::*;
