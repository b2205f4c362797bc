//! Campaign session: schedule + engine + score board.
//!
//! A `GameSession` is the engine-side counterpart of a front end's game loop.
//! It owns level progression and scoring so the presentation layer only has
//! to render state, forward input and focus events, and drive ticks. Wins
//! bank the round score and advance the campaign; losses reset the attempt
//! on the same puzzle.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Cell, EngineError};
use crate::engine::{MoveOutcome, PathPuzzleEngine};
use crate::levels::LevelSchedule;
use crate::score::ScoreBoard;

/// What a submitted move meant for the campaign.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// The engine rejected the move; nothing changed.
    Rejected(MoveOutcome),
    /// Move accepted, attempt still running.
    Continued,
    /// Attempt won; the round score is banked and the next level is live.
    LevelCleared {
        /// The level now being played.
        next_level: u32,
        /// Points banked for the cleared round.
        round_score: i64,
    },
    /// Attempt won on the final level; the campaign is over.
    CampaignComplete {
        /// Points banked for the final round.
        round_score: i64,
        /// Total score across the campaign.
        final_score: i64,
    },
    /// Attempt lost; the same puzzle is reset for a retry.
    AttemptFailed,
}

/// A full campaign run against one engine.
#[derive(Debug)]
pub struct GameSession {
    schedule: LevelSchedule,
    engine: PathPuzzleEngine,
    score: ScoreBoard,
}

impl GameSession {
    /// Start a fresh campaign at level 1.
    pub fn new(seed: u64) -> Result<Self, EngineError> {
        Self::resume(LevelSchedule::new(), ScoreBoard::new(), seed)
    }

    /// Resume a campaign from saved progress.
    pub fn resume(
        schedule: LevelSchedule,
        score: ScoreBoard,
        seed: u64,
    ) -> Result<Self, EngineError> {
        let engine = PathPuzzleEngine::new(schedule.config(), seed)?;
        Ok(Self {
            schedule,
            engine,
            score,
        })
    }

    /// Submit a move and resolve its campaign-level consequences.
    pub fn play(&mut self, cell: Cell) -> Result<SessionEvent, EngineError> {
        let outcome = self.engine.submit_move(cell)?;

        let event = match outcome {
            MoveOutcome::Win => {
                let round_score = self.engine.compute_round_score();
                self.score.add_points(round_score);

                if self.schedule.advance() {
                    self.engine.initialize_level(self.schedule.config())?;
                    debug!(
                        next_level = self.schedule.current_level(),
                        round_score,
                        total = self.score.total(),
                        "level cleared"
                    );
                    SessionEvent::LevelCleared {
                        next_level: self.schedule.current_level(),
                        round_score,
                    }
                } else {
                    debug!(final_score = self.score.total(), "campaign complete");
                    SessionEvent::CampaignComplete {
                        round_score,
                        final_score: self.score.total(),
                    }
                }
            }
            MoveOutcome::Lose => {
                self.engine.reset_attempt();
                debug!(level = self.schedule.current_level(), "attempt failed");
                SessionEvent::AttemptFailed
            }
            MoveOutcome::Continue => SessionEvent::Continued,
            rejected => SessionEvent::Rejected(rejected),
        };

        Ok(event)
    }

    /// Forward one external time-step to the focus gauge.
    pub fn tick(&mut self) {
        self.engine.tick();
    }

    /// Forward a window focus/blur signal.
    pub fn set_focused(&mut self, focused: bool) {
        self.engine.set_focused(focused);
    }

    /// The engine, for rendering grid/path/target state.
    #[must_use]
    pub fn engine(&self) -> &PathPuzzleEngine {
        &self.engine
    }

    /// Campaign progression state.
    #[must_use]
    pub fn schedule(&self) -> LevelSchedule {
        self.schedule
    }

    /// Score state.
    #[must_use]
    pub fn score(&self) -> ScoreBoard {
        self.score
    }
}
