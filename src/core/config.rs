//! Level configuration and engine errors.
//!
//! The engine never reaches into a shared level manager: whoever owns level
//! progression hands a `LevelConfig` by value into
//! [`initialize_level`](crate::engine::PathPuzzleEngine::initialize_level).
//! The config is validated at that boundary; everything past it can assume a
//! well-formed puzzle.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::cell::Cell;

/// Configuration for a single level, passed by value into the engine.
///
/// Derived from the level index by whatever owns progression (see
/// [`LevelSchedule`](crate::levels::LevelSchedule)); the engine only reads it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelConfig {
    /// Grid edge length. The board is `size`×`size`.
    pub size: usize,
    /// Number of moves granted per attempt.
    pub moves_budget: u32,
    /// Difficulty index (the level number). Scales focus drain and score.
    pub difficulty_index: u32,
}

impl LevelConfig {
    /// Create a new level configuration.
    #[must_use]
    pub const fn new(size: usize, moves_budget: u32, difficulty_index: u32) -> Self {
        Self {
            size,
            moves_budget,
            difficulty_index,
        }
    }

    /// Validate the configuration.
    ///
    /// Target walk lengths are drawn from `[3, size + 1]`, so any grid
    /// smaller than 2×2 cannot host a walk; such configs are rejected here
    /// rather than producing a degenerate puzzle.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.size < 2 {
            return Err(EngineError::GridTooSmall { size: self.size });
        }
        if self.moves_budget == 0 {
            return Err(EngineError::ZeroMoveBudget);
        }
        if self.difficulty_index == 0 {
            return Err(EngineError::ZeroDifficulty);
        }
        Ok(())
    }
}

/// Errors surfaced by the engine's fallible boundaries.
///
/// Move outcomes are not errors: legality of a move within a well-formed
/// puzzle is reported via [`MoveOutcome`](crate::engine::MoveOutcome). This
/// enum covers configuration and precondition violations only.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Grid edge below 2: the walk-length range `[3, size + 1]` is empty.
    #[error("grid size {size} is too small, target walks need at least 2x2")]
    GridTooSmall {
        /// The rejected edge length.
        size: usize,
    },

    /// A level must grant at least one move.
    #[error("moves budget must be at least 1")]
    ZeroMoveBudget,

    /// Difficulty indices start at 1.
    #[error("difficulty index must be at least 1")]
    ZeroDifficulty,

    /// A submitted cell lies outside the current grid.
    #[error("cell {cell} is outside the {size}x{size} grid")]
    OutOfBounds {
        /// The offending coordinate.
        cell: Cell,
        /// Edge length of the current grid.
        size: usize,
    },

    /// A fixed puzzle's grid does not match the configured size.
    #[error("config wants a {config}x{config} grid but the loaded grid is {grid}x{grid}")]
    GridSizeMismatch {
        /// Edge length demanded by the level config.
        config: usize,
        /// Edge length of the supplied grid.
        grid: usize,
    },

    /// A fixed puzzle was loaded with the wrong number of cell values.
    #[error("expected {expected} cell values for the grid, got {actual}")]
    WrongCellCount {
        /// `size * size` for the requested grid.
        expected: usize,
        /// Number of values actually supplied.
        actual: usize,
    },

    /// A fixed puzzle contained a cell value outside `[1, 9]`.
    #[error("cell {cell} holds {value}, outside the valid range 1..=9")]
    CellValueOutOfRange {
        /// Location of the bad value.
        cell: Cell,
        /// The rejected value.
        value: u8,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config() {
        let config = LevelConfig::new(4, 10, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_tiny_grid() {
        let config = LevelConfig::new(1, 10, 1);
        assert_eq!(
            config.validate(),
            Err(EngineError::GridTooSmall { size: 1 })
        );

        let config = LevelConfig::new(0, 10, 1);
        assert_eq!(
            config.validate(),
            Err(EngineError::GridTooSmall { size: 0 })
        );
    }

    #[test]
    fn test_rejects_zero_budget_and_difficulty() {
        assert_eq!(
            LevelConfig::new(4, 0, 1).validate(),
            Err(EngineError::ZeroMoveBudget)
        );
        assert_eq!(
            LevelConfig::new(4, 10, 0).validate(),
            Err(EngineError::ZeroDifficulty)
        );
    }

    #[test]
    fn test_smallest_accepted_grid() {
        // 2x2 is the floor: walk lengths [3, 3] are drawable
        assert!(LevelConfig::new(2, 5, 1).validate().is_ok());
    }

    #[test]
    fn test_error_display() {
        let err = EngineError::OutOfBounds {
            cell: Cell::new(7, 0),
            size: 4,
        };
        assert_eq!(err.to_string(), "cell (7, 0) is outside the 4x4 grid");
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = LevelConfig::new(5, 8, 6);
        let json = serde_json::to_string(&config).unwrap();
        let back: LevelConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
