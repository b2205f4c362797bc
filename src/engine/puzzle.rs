//! The path puzzle engine.
//!
//! One engine instance hosts one session: the presentation layer feeds it
//! level configs, pointer input, tick pulses, and focus signals, and reads
//! back outcomes and scores. The engine is single-threaded and synchronous;
//! it holds no locks, performs no I/O, and owns no clock beyond the session
//! start timestamp.
//!
//! ## Usage
//!
//! ```
//! use mindstrike_engine::core::{Cell, LevelConfig};
//! use mindstrike_engine::engine::{MoveOutcome, PathPuzzleEngine};
//!
//! let config = LevelConfig::new(4, 10, 1);
//! let mut engine = PathPuzzleEngine::new(config, 42).unwrap();
//!
//! // Replay the reference solution; the final step wins.
//! let solution = engine.reference_solution().unwrap().to_vec();
//! let mut last = MoveOutcome::Continue;
//! for cell in solution {
//!     last = engine.submit_move(cell).unwrap();
//! }
//! assert_eq!(last, MoveOutcome::Win);
//! ```

use std::time::{Duration, Instant};

use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use crate::core::{Cell, EngineError, Grid, LevelConfig, PuzzleRng, PuzzleRngState};

use super::focus::FocusMeter;
use super::outcome::MoveOutcome;
use super::target::generate_target;

/// Base score points per difficulty index on a win.
const SCORE_BASE_PER_LEVEL: i64 = 100;
/// Time bonus starts here and loses one point per elapsed second.
const TIME_BONUS_CEILING: i64 = 500;

/// The puzzle engine: grid, target, path, focus gauge, and scoring.
///
/// All randomness flows through the injected seedable [`PuzzleRng`]; a seed
/// fully determines every grid and target the engine will ever produce.
#[derive(Debug)]
pub struct PathPuzzleEngine {
    config: LevelConfig,
    grid: Grid,
    target_sum: u32,
    /// Walk that generated the target. `None` for fixed puzzles.
    solution: Option<Vec<Cell>>,
    /// Accepted moves in order.
    path: Vec<Cell>,
    /// Same cells as `path`, for O(1) revisit checks.
    path_index: FxHashSet<Cell>,
    current_sum: u32,
    moves_left: u32,
    focus: FocusMeter,
    started_at: Instant,
    rng: PuzzleRng,
}

impl PathPuzzleEngine {
    /// Create an engine and generate its first level.
    pub fn new(config: LevelConfig, seed: u64) -> Result<Self, EngineError> {
        config.validate()?;

        let mut rng = PuzzleRng::new(seed);
        let grid = Grid::generate(config.size, &mut rng);
        let walk = generate_target(&grid, &mut rng);

        debug!(
            size = config.size,
            target = walk.target,
            moves = config.moves_budget,
            "level initialized"
        );

        Ok(Self {
            config,
            target_sum: walk.target,
            solution: Some(walk.cells),
            grid,
            path: Vec::new(),
            path_index: FxHashSet::default(),
            current_sum: 0,
            moves_left: config.moves_budget,
            focus: FocusMeter::new(),
            started_at: Instant::now(),
            rng,
        })
    }

    /// Create an engine around a fixed board and target.
    ///
    /// Used for replays and curated puzzles; the RNG is still seeded so that
    /// a later [`initialize_level`](Self::initialize_level) can generate
    /// boards deterministically.
    pub fn with_puzzle(
        config: LevelConfig,
        grid: Grid,
        target_sum: u32,
        seed: u64,
    ) -> Result<Self, EngineError> {
        config.validate()?;
        if grid.size() != config.size {
            return Err(EngineError::GridSizeMismatch {
                config: config.size,
                grid: grid.size(),
            });
        }

        Ok(Self {
            config,
            grid,
            target_sum,
            solution: None,
            path: Vec::new(),
            path_index: FxHashSet::default(),
            current_sum: 0,
            moves_left: config.moves_budget,
            focus: FocusMeter::new(),
            started_at: Instant::now(),
            rng: PuzzleRng::new(seed),
        })
    }

    /// Start a fresh level: new grid, new target, clean attempt state, and a
    /// new session timestamp. The focus gauge carries across levels.
    pub fn initialize_level(&mut self, config: LevelConfig) -> Result<(), EngineError> {
        config.validate()?;

        self.config = config;
        self.grid = Grid::generate(config.size, &mut self.rng);
        let walk = generate_target(&self.grid, &mut self.rng);
        self.target_sum = walk.target;
        self.solution = Some(walk.cells);
        self.path.clear();
        self.path_index.clear();
        self.current_sum = 0;
        self.moves_left = config.moves_budget;
        self.started_at = Instant::now();

        debug!(
            size = config.size,
            target = self.target_sum,
            moves = config.moves_budget,
            "level initialized"
        );
        Ok(())
    }

    /// Retry the current level: same grid and target, fresh path, sum, and
    /// move budget.
    pub fn reset_attempt(&mut self) {
        self.path.clear();
        self.path_index.clear();
        self.current_sum = 0;
        self.moves_left = self.config.moves_budget;
        debug!(target = self.target_sum, "attempt reset");
    }

    /// Submit a move onto `cell`.
    ///
    /// Checks run in order: bounds (an error, not an outcome), revisit,
    /// adjacency to the path head. Rejections leave all state untouched.
    /// Accepted moves extend the path, grow the running sum, and spend one
    /// move, then resolve to `Win`, `Lose`, or `Continue`. A move that hits
    /// the target on the last budgeted move wins: the win check runs first.
    pub fn submit_move(&mut self, cell: Cell) -> Result<MoveOutcome, EngineError> {
        let Some(value) = self.grid.value(cell) else {
            return Err(EngineError::OutOfBounds {
                cell,
                size: self.grid.size(),
            });
        };

        if self.path_index.contains(&cell) {
            trace!(%cell, "move rejected: already visited");
            return Ok(MoveOutcome::AlreadyVisited);
        }

        if let Some(&head) = self.path.last() {
            if !head.is_adjacent(cell) {
                trace!(%cell, %head, "move rejected: not adjacent");
                return Ok(MoveOutcome::InvalidMove);
            }
        }

        self.path.push(cell);
        self.path_index.insert(cell);
        self.current_sum += u32::from(value);
        self.moves_left = self.moves_left.saturating_sub(1);

        let outcome = if self.current_sum == self.target_sum {
            MoveOutcome::Win
        } else if self.moves_left == 0 || self.current_sum > self.target_sum {
            MoveOutcome::Lose
        } else {
            MoveOutcome::Continue
        };

        trace!(
            %cell,
            sum = self.current_sum,
            target = self.target_sum,
            moves_left = self.moves_left,
            ?outcome,
            "move accepted"
        );
        Ok(outcome)
    }

    /// Advance the focus gauge by one external time-step.
    ///
    /// The caller owns the cadence (typically ~100ms); the engine never
    /// schedules anything itself.
    pub fn tick(&mut self) {
        self.focus.tick(self.config.difficulty_index);
    }

    /// Record a window focus/blur signal.
    pub fn set_focused(&mut self, focused: bool) {
        self.focus.set_focused(focused);
    }

    /// Round score for the current state and the given elapsed session time.
    ///
    /// `base + time_bonus + focus_bonus` where base is 100 per difficulty
    /// index, the time bonus counts down from 500 by whole elapsed seconds
    /// (floored at 0), and the focus bonus is the gauge doubled and truncated
    /// toward zero.
    #[must_use]
    pub fn score_at(&self, elapsed: Duration) -> i64 {
        let base = SCORE_BASE_PER_LEVEL * i64::from(self.config.difficulty_index);
        let time_bonus = (TIME_BONUS_CEILING - elapsed.as_secs() as i64).max(0);
        let focus_bonus = (self.focus.level() * 2.0) as i64;
        base + time_bonus + focus_bonus
    }

    /// Round score measured against the real session clock. Called on a win.
    #[must_use]
    pub fn compute_round_score(&self) -> i64 {
        self.score_at(self.started_at.elapsed())
    }

    // === Accessors ===

    /// The current level configuration.
    #[must_use]
    pub fn config(&self) -> LevelConfig {
        self.config
    }

    /// The current board.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The sum the player is trying to hit.
    #[must_use]
    pub fn target_sum(&self) -> u32 {
        self.target_sum
    }

    /// Running sum of the current path.
    #[must_use]
    pub fn current_sum(&self) -> u32 {
        self.current_sum
    }

    /// Moves remaining in this attempt.
    #[must_use]
    pub fn moves_left(&self) -> u32 {
        self.moves_left
    }

    /// Accepted moves, in order.
    #[must_use]
    pub fn path(&self) -> &[Cell] {
        &self.path
    }

    /// Current focus gauge level.
    #[must_use]
    pub fn focus_level(&self) -> f64 {
        self.focus.level()
    }

    /// Whether the window currently has focus.
    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.focus.is_focused()
    }

    /// The walk that generated the current target, if this level's puzzle
    /// was generated (fixed puzzles carry none). Usable as a hint source.
    #[must_use]
    pub fn reference_solution(&self) -> Option<&[Cell]> {
        self.solution.as_deref()
    }

    /// Snapshot of the RNG for session checkpointing.
    #[must_use]
    pub fn rng_state(&self) -> PuzzleRngState {
        self.rng.state()
    }
}
