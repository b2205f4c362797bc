//! The puzzle rules: target generation, move validation, focus, scoring.

pub mod focus;
pub mod outcome;
pub mod puzzle;
pub mod target;

pub use focus::FocusMeter;
pub use outcome::MoveOutcome;
pub use puzzle::PathPuzzleEngine;
pub use target::{generate_target, TargetWalk};
