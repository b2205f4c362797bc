//! Target generation: a random simple walk over the grid.
//!
//! The target sum is computed by actually walking a path, which guarantees at
//! least one solution exists. The procedure:
//!
//! 1. Draw a walk length `L` uniformly from `[3, size + 1]`.
//! 2. Start at the origin; its value seeds the sum.
//! 3. Repeat `L − 1` times: collect in-bounds unvisited 4-neighbors of the
//!    current cell; stop early if none remain; otherwise step onto one chosen
//!    uniformly at random and add its value.
//!
//! The resulting target is reachable by construction but neither unique nor
//! minimal; shorter or different paths may also hit it.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::core::{Cell, Grid, PuzzleRng};

/// A generated target together with the walk that produced it.
///
/// The walk doubles as the reference solution: replaying its cells through
/// the engine reaches the target without overshooting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TargetWalk {
    /// Sum of grid values along the walk.
    pub target: u32,
    /// The cells visited, in order, starting at the origin.
    pub cells: Vec<Cell>,
}

/// Generate a reachable target for `grid`.
///
/// Callers must hand in a grid of size ≥ 2 (enforced upstream by
/// [`LevelConfig::validate`](crate::core::LevelConfig::validate)) so the
/// walk-length range is non-empty.
#[must_use]
pub fn generate_target(grid: &Grid, rng: &mut PuzzleRng) -> TargetWalk {
    let walk_length = rng.gen_range_inclusive(3..=grid.size() + 1);

    let start = Cell::origin();
    let mut current = start;
    // Origin value is always on the grid.
    let mut target = u32::from(grid.value(start).unwrap_or(0));
    let mut visited: FxHashSet<Cell> = FxHashSet::default();
    visited.insert(start);
    let mut cells = vec![start];

    for _ in 0..walk_length - 1 {
        let candidates: SmallVec<[Cell; 4]> = grid
            .neighbors(current)
            .into_iter()
            .filter(|cell| !visited.contains(cell))
            .collect();

        // Boxed in: the walk ends early and the target stands as-is.
        let Some(&next) = rng.choose(&candidates) else {
            break;
        };

        target += u32::from(grid.value(next).unwrap_or(0));
        visited.insert(next);
        cells.push(next);
        current = next;
    }

    TargetWalk { target, cells }
}
