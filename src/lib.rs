//! # mindstrike-engine
//!
//! A path-sum puzzle engine: generate a square grid of digits and a
//! reachable target, validate adjacency-constrained path moves, and score
//! wins by time, level, and sustained focus.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: All randomness flows through an injected seedable
//!    RNG. A seed replays the exact grids, targets, and reference walks.
//!
//! 2. **Synchronous and I/O-free**: The engine owns no clock, scheduler, or
//!    storage. Front ends drive ticks, forward focus events, and persist
//!    scores however they like.
//!
//! 3. **Reachable by construction**: Targets are computed by walking an
//!    actual path over the generated grid, so every puzzle has at least one
//!    solution.
//!
//! ## Modules
//!
//! - `core`: cells, the grid, level configuration, errors, RNG
//! - `engine`: move validation, target generation, focus gauge, scoring
//! - `levels`: campaign schedule deriving per-level configuration
//! - `score`: running total and high-water mark
//! - `session`: campaign driver wiring schedule, engine, and score

pub mod core;
pub mod engine;
pub mod levels;
pub mod score;
pub mod session;

// Re-export commonly used types
pub use crate::core::{Cell, EngineError, Grid, LevelConfig, PuzzleRng, PuzzleRngState};
pub use crate::engine::{
    generate_target, FocusMeter, MoveOutcome, PathPuzzleEngine, TargetWalk,
};
pub use crate::levels::{LevelSchedule, MAX_LEVEL};
pub use crate::score::ScoreBoard;
pub use crate::session::{GameSession, SessionEvent};
