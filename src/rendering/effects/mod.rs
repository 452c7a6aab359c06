//! Visual effects module
//!
//! Destination highlights for the selected square.

pub mod move_hints;

pub use move_hints::*;
