//! Selection and highlight state for the board
//!
//! Tracks at most one selected square and the set of squares highlighted as
//! its legal destinations. The highlight set is an explicit square -> bool
//! map that the view renders; nothing here touches entities.
//!
//! # State Machine
//!
//! ```text
//!            select(sq, >=1 dest)               select(sq', >=1 dest)
//!   [Idle] ----------------------> [Selected(sq)] ---------------------> [Selected(sq')]
//!     ^                                 |
//!     |   clear() / select(_, 0 dest)   |
//!     +---------------------------------+
//! ```
//!
//! Highlighting is exclusive: selecting a new square replaces the previous
//! highlight set, it never adds to it.

use shakmaty::Square;

/// Whether a square is currently selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionState {
    #[default]
    Idle,
    Selected(Square),
}

/// Square -> highlighted flag for all 64 squares
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightMap {
    squares: [bool; 64],
}

impl Default for HighlightMap {
    fn default() -> Self {
        Self {
            squares: [false; 64],
        }
    }
}

impl HighlightMap {
    pub fn is_highlighted(&self, square: Square) -> bool {
        self.squares[usize::from(square)]
    }

    /// Highlighted squares in a1..h8 order
    pub fn highlighted(&self) -> Vec<Square> {
        (0..64u32)
            .map(Square::new)
            .filter(|square| self.is_highlighted(*square))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.squares.iter().filter(|lit| **lit).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        self.squares = [false; 64];
    }

    /// Clear, then light exactly `squares`
    pub fn replace(&mut self, squares: &[Square]) {
        self.clear();
        for square in squares {
            self.squares[usize::from(*square)] = true;
        }
    }
}

/// Currently selected square and its highlighted destinations
#[derive(Debug, Clone, Default)]
pub struct Selection {
    state: SelectionState,
    highlights: HighlightMap,
}

impl Selection {
    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn selected(&self) -> Option<Square> {
        match self.state {
            SelectionState::Idle => None,
            SelectionState::Selected(square) => Some(square),
        }
    }

    pub fn is_selected(&self) -> bool {
        self.selected().is_some()
    }

    pub fn highlights(&self) -> &HighlightMap {
        &self.highlights
    }

    /// Select `square` given its legal destinations
    ///
    /// With no destinations the selection falls back to idle; otherwise the
    /// destinations become the only highlighted squares.
    pub fn select(&mut self, square: Square, destinations: &[Square]) -> SelectionState {
        if destinations.is_empty() {
            self.clear();
        } else {
            self.highlights.replace(destinations);
            self.state = SelectionState::Selected(square);
        }
        self.state
    }

    pub fn clear(&mut self) {
        self.state = SelectionState::Idle;
        self.highlights.clear();
    }
}
