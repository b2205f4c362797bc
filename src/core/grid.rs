//! The puzzle board: a square matrix of single-digit values.
//!
//! A `Grid` is generated once per level and never mutated afterwards; attempt
//! resets reuse the same board. Values are uniform in `[1, 9]`, drawn from an
//! injected [`PuzzleRng`] so a seed fully determines the board.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::cell::Cell;
use super::config::EngineError;
use super::rng::PuzzleRng;

/// Neighbor probe order: right, down, left, up.
///
/// Target walks pick uniformly among the candidates, but candidate order
/// feeds the RNG draw, so the order is part of behavioral parity.
const NEIGHBOR_OFFSETS: [(isize, isize); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// An immutable square grid of values in `[1, 9]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
    /// Row-major cell values.
    values: Vec<u8>,
}

impl Grid {
    /// Generate a fresh grid with independently uniform values in `[1, 9]`.
    ///
    /// Cells are drawn in row-major order, one RNG draw per cell.
    #[must_use]
    pub fn generate(size: usize, rng: &mut PuzzleRng) -> Self {
        let values = (0..size * size)
            .map(|_| rng.gen_range(1..10) as u8)
            .collect();
        Self { size, values }
    }

    /// Build a grid from explicit row-major values.
    ///
    /// Used to load fixed puzzles (replays, daily boards, tests). Rejects
    /// value counts that don't fill a `size`×`size` board and values outside
    /// `[1, 9]`.
    pub fn from_values(size: usize, values: Vec<u8>) -> Result<Self, EngineError> {
        let expected = size * size;
        if values.len() != expected {
            return Err(EngineError::WrongCellCount {
                expected,
                actual: values.len(),
            });
        }
        for (idx, &value) in values.iter().enumerate() {
            if !(1..=9).contains(&value) {
                return Err(EngineError::CellValueOutOfRange {
                    cell: Cell::new(idx / size, idx % size),
                    value,
                });
            }
        }
        Ok(Self { size, values })
    }

    /// Grid edge length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether a cell lies on the board.
    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.size && cell.col < self.size
    }

    /// Value at a cell.
    ///
    /// Returns `None` for out-of-bounds coordinates; the engine maps that to
    /// an explicit error at its boundary.
    #[must_use]
    pub fn value(&self, cell: Cell) -> Option<u8> {
        if self.contains(cell) {
            Some(self.values[cell.row * self.size + cell.col])
        } else {
            None
        }
    }

    /// In-bounds 4-neighbors of a cell, in probe order (right, down, left, up).
    ///
    /// SmallVec keeps the at-most-4 candidates off the heap.
    #[must_use]
    pub fn neighbors(&self, cell: Cell) -> SmallVec<[Cell; 4]> {
        let mut out = SmallVec::new();
        for (dr, dc) in NEIGHBOR_OFFSETS {
            let row = cell.row.checked_add_signed(dr);
            let col = cell.col.checked_add_signed(dc);
            if let (Some(row), Some(col)) = (row, col) {
                let candidate = Cell::new(row, col);
                if self.contains(candidate) {
                    out.push(candidate);
                }
            }
        }
        out
    }

    /// Iterate over all cells in row-major order with their values.
    pub fn cells(&self) -> impl Iterator<Item = (Cell, u8)> + '_ {
        self.values.iter().enumerate().map(move |(idx, &value)| {
            (Cell::new(idx / self.size, idx % self.size), value)
        })
    }
}
