//! System organization using SystemSets
//!
//! # Execution Order
//!
//! Systems run in this order each frame while a game is on the board:
//! 1. **Input** - Mouse input routed to the session
//! 2. **Execution** - Settings sync, scheduled computer reply
//! 3. **Visual** - Board entities redrawn from the session

use bevy::prelude::*;

/// System execution order for game logic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SystemSet)]
pub enum GameSystems {
    /// Input handling (pointer press, drag, release, hover)
    Input,

    /// Session updates
    ///
    /// Systems: settings propagation, computer reply
    Execution,

    /// Visual updates
    ///
    /// Systems: stale entity sweep, piece sync, highlights
    Visual,
}
