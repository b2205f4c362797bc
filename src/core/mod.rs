//! Core engine types: cells, the grid, level configuration, RNG.
//!
//! These are the game-agnostic building blocks; the rules live in
//! [`crate::engine`].

pub mod cell;
pub mod config;
pub mod grid;
pub mod rng;

pub use cell::Cell;
pub use config::{EngineError, LevelConfig};
pub use grid::Grid;
pub use rng::{PuzzleRng, PuzzleRngState};
