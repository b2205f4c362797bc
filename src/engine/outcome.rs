//! Move outcomes.
//!
//! Every call to [`submit_move`](super::PathPuzzleEngine::submit_move) on a
//! well-formed puzzle resolves to exactly one of these five values. This is a
//! game-state signal, not an error channel: rejections leave the engine
//! untouched, terminal outcomes tell the caller to advance or reset.

use serde::{Deserialize, Serialize};

/// Result of submitting a single move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The cell is already part of the current path. No state change.
    AlreadyVisited,
    /// The cell is not 4-adjacent to the path head. No state change.
    InvalidMove,
    /// Move accepted; the attempt continues.
    Continue,
    /// Move accepted and the running sum hit the target. Terminal: the
    /// caller advances the level or ends the game.
    Win,
    /// Move accepted but the attempt is spent (no moves left, or the sum
    /// overshot the target). Terminal: the caller resets the attempt.
    Lose,
}

impl MoveOutcome {
    /// Whether this outcome ends the current attempt.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, MoveOutcome::Win | MoveOutcome::Lose)
    }

    /// Whether the move was rejected without touching engine state.
    #[must_use]
    pub fn is_rejection(self) -> bool {
        matches!(self, MoveOutcome::AlreadyVisited | MoveOutcome::InvalidMove)
    }
}
