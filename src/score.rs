//! Session scoring.
//!
//! Tracks the running total and its high-water mark. Persistence belongs to
//! the caller; the board is serde-serializable so a front end can stash it
//! wherever it keeps its save data.

use serde::{Deserialize, Serialize};

/// Running score with a high-water mark.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBoard {
    total: i64,
    high: i64,
}

impl ScoreBoard {
    /// Start from zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume from a previously saved high score.
    #[must_use]
    pub fn with_high_score(high: i64) -> Self {
        Self { total: 0, high }
    }

    /// Current total.
    #[must_use]
    pub fn total(&self) -> i64 {
        self.total
    }

    /// Best total ever reached.
    #[must_use]
    pub fn high_score(&self) -> i64 {
        self.high
    }

    /// Bank points, raising the high-water mark if surpassed.
    pub fn add_points(&mut self, points: i64) {
        self.total += points;
        if self.total > self.high {
            self.high = self.total;
        }
    }

    /// Deduct points, flooring the total at zero. The high score keeps.
    pub fn penalty(&mut self, points: i64) {
        self.total = (self.total - points).max(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_points_tracks_high_score() {
        let mut board = ScoreBoard::new();

        board.add_points(300);
        assert_eq!(board.total(), 300);
        assert_eq!(board.high_score(), 300);

        board.add_points(200);
        assert_eq!(board.total(), 500);
        assert_eq!(board.high_score(), 500);
    }

    #[test]
    fn test_penalty_floors_at_zero() {
        let mut board = ScoreBoard::new();
        board.add_points(100);

        board.penalty(250);
        assert_eq!(board.total(), 0);
        // The high-water mark survives
        assert_eq!(board.high_score(), 100);
    }

    #[test]
    fn test_high_score_only_rises_past_previous_best() {
        let mut board = ScoreBoard::with_high_score(1000);

        board.add_points(400);
        assert_eq!(board.high_score(), 1000);

        board.add_points(700);
        assert_eq!(board.high_score(), 1100);
    }

    #[test]
    fn test_serde_roundtrip() {
        let mut board = ScoreBoard::new();
        board.add_points(790);

        let json = serde_json::to_string(&board).unwrap();
        let back: ScoreBoard = serde_json::from_str(&json).unwrap();
        assert_eq!(board, back);
    }
}
