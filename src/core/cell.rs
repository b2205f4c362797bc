//! Grid coordinates.
//!
//! Every position on the puzzle board is a `Cell` (row, col). Path legality
//! is defined in terms of Manhattan distance: a move is legal only onto a
//! 4-directionally adjacent cell.
//!
//! ## Usage
//!
//! ```
//! use mindstrike_engine::core::Cell;
//!
//! let a = Cell::new(0, 0);
//! let b = Cell::new(0, 1);
//!
//! assert!(a.is_adjacent(b));
//! assert!(!a.is_adjacent(Cell::new(1, 1))); // diagonal
//! ```

use serde::{Deserialize, Serialize};

/// A (row, col) coordinate on the puzzle grid.
///
/// Rows grow downward, columns grow rightward, origin at the top-left.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    /// Row index (0-based, top to bottom).
    pub row: usize,
    /// Column index (0-based, left to right).
    pub col: usize,
}

impl Cell {
    /// Create a new cell coordinate.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The top-left origin cell, where every target walk starts.
    #[must_use]
    pub const fn origin() -> Self {
        Self { row: 0, col: 0 }
    }

    /// Manhattan distance to another cell.
    #[must_use]
    pub fn manhattan_distance(self, other: Cell) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Whether `other` is a 4-directional neighbor (Manhattan distance 1).
    #[must_use]
    pub fn is_adjacent(self, other: Cell) -> bool {
        self.manhattan_distance(other) == 1
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
