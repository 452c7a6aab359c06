//! Core resources for app-wide configuration

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::game::ai::DEFAULT_REPLY_DELAY;

/// Piece image set used when no theme is configured
pub const DEFAULT_PIECE_THEME: &str = "wikipedia";

/// User preferences, persisted as `settings.json`
///
/// Missing fields in a stored file take their default value, so older
/// settings files keep loading.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize, Reflect)]
#[reflect(Resource)]
#[serde(default)]
pub struct GameSettings {
    /// Piece image set under `img/chesspieces/`
    pub piece_theme: String,

    /// Delay before the computer replies, in milliseconds
    pub reply_delay_ms: u64,

    /// Highlight destinations while hovering, not only on click
    pub hover_highlights: bool,

    /// Whether to show destination highlights at all
    pub show_hints: bool,

    /// Board theme
    pub board_theme: BoardTheme,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            piece_theme: DEFAULT_PIECE_THEME.to_string(),
            reply_delay_ms: DEFAULT_REPLY_DELAY.as_millis() as u64,
            hover_highlights: false,
            show_hints: true,
            board_theme: BoardTheme::Classic,
        }
    }
}

/// Board visual themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Reflect)]
pub enum BoardTheme {
    #[default]
    Classic,
    Modern,
    Wood,
    Marble,
}

impl BoardTheme {
    pub const ALL: [BoardTheme; 4] = [
        BoardTheme::Classic,
        BoardTheme::Modern,
        BoardTheme::Wood,
        BoardTheme::Marble,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            BoardTheme::Classic => "Classic",
            BoardTheme::Modern => "Modern",
            BoardTheme::Wood => "Wood",
            BoardTheme::Marble => "Marble",
        }
    }

    /// Returns (light_square_color, dark_square_color)
    pub fn colors(&self) -> (Color, Color) {
        match self {
            BoardTheme::Classic => (
                Color::srgb(0.94, 0.85, 0.71), // Cream
                Color::srgb(0.71, 0.53, 0.39), // Brown
            ),
            BoardTheme::Modern => (
                Color::srgb(0.9, 0.9, 0.9), // Light gray
                Color::srgb(0.3, 0.3, 0.3), // Dark gray
            ),
            BoardTheme::Wood => (
                Color::srgb(0.85, 0.70, 0.55), // Light wood
                Color::srgb(0.55, 0.35, 0.20), // Dark wood
            ),
            BoardTheme::Marble => (
                Color::srgb(0.95, 0.95, 0.95), // White marble
                Color::srgb(0.15, 0.15, 0.15), // Black marble
            ),
        }
    }

    /// Returns (light_highlight, dark_highlight) for destination squares
    pub fn highlight_colors(&self) -> (Color, Color) {
        match self {
            BoardTheme::Marble => (Color::srgb(0.65, 0.80, 0.95), Color::srgb(0.25, 0.45, 0.65)),
            _ => (Color::srgb(0.66, 0.66, 0.66), Color::srgb(0.41, 0.41, 0.41)),
        }
    }
}
