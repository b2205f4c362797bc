//! Level progression.
//!
//! The schedule owns the level index and derives each level's configuration
//! as a pure function of it; the engine only ever sees the produced
//! [`LevelConfig`]. Difficulty scales in tiers: boards grow at levels 4 and
//! 8, the move budget shrinks every third level down to a floor of 5.

use serde::{Deserialize, Serialize};

use crate::core::LevelConfig;

/// Highest level in the campaign.
pub const MAX_LEVEL: u32 = 15;

/// Board size for levels below 4.
const SIZE_EARLY: usize = 4;
/// Board size for levels 4 through 7.
const SIZE_MID: usize = 5;
/// Board size from level 8 on.
const SIZE_LATE: usize = 6;
/// Starting move budget, reduced by one every third level.
const MOVES_START: u32 = 10;
/// Move budget never drops below this.
const MOVES_FLOOR: u32 = 5;

/// Derives per-level configuration and tracks campaign progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelSchedule {
    current_level: u32,
}

impl Default for LevelSchedule {
    fn default() -> Self {
        Self::new()
    }
}

impl LevelSchedule {
    /// Start a campaign at level 1.
    #[must_use]
    pub fn new() -> Self {
        Self { current_level: 1 }
    }

    /// The current level number (1-based).
    #[must_use]
    pub fn current_level(&self) -> u32 {
        self.current_level
    }

    /// Configuration for the current level.
    #[must_use]
    pub fn config(&self) -> LevelConfig {
        Self::config_for(self.current_level)
    }

    /// Configuration for an arbitrary level number. Pure function.
    #[must_use]
    pub fn config_for(level: u32) -> LevelConfig {
        let size = if level < 4 {
            SIZE_EARLY
        } else if level < 8 {
            SIZE_MID
        } else {
            SIZE_LATE
        };
        let moves = (MOVES_START - level / 3).max(MOVES_FLOOR);

        LevelConfig::new(size, moves, level)
    }

    /// Advance to the next level.
    ///
    /// Returns `false` when already at [`MAX_LEVEL`]: the campaign is over
    /// and the level index stays put.
    pub fn advance(&mut self) -> bool {
        if self.current_level < MAX_LEVEL {
            self.current_level += 1;
            true
        } else {
            false
        }
    }
}
