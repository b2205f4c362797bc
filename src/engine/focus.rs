//! The focus gauge.
//!
//! A session-wide meter in `[0, 100]` tracking sustained player attention,
//! independent of puzzle state. The presentation layer forwards window
//! focus/blur events via [`set_focused`](FocusMeter::set_focused) and drives
//! decay by calling [`tick`](FocusMeter::tick) on a fixed cadence (the engine
//! owns no clock).
//!
//! Each tick drains `drain_rate × (1 + 0.1 × difficulty) × 0.1`, where the
//! drain rate is 0.5 while focused and 3.0 while blurred. Only the upper
//! bound is clamped here; depletion below zero is meaningful and handled by
//! the caller.

use serde::{Deserialize, Serialize};

/// Per-tick drain while the window has focus.
const FOCUSED_DRAIN: f64 = 0.5;
/// Per-tick drain while the window is blurred.
const UNFOCUSED_DRAIN: f64 = 3.0;
/// Fixed time-step factor applied every tick.
const TICK_STEP: f64 = 0.1;
/// Gauge ceiling.
const FOCUS_MAX: f64 = 100.0;

/// Decaying attention gauge.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FocusMeter {
    level: f64,
    focused: bool,
}

impl Default for FocusMeter {
    fn default() -> Self {
        Self::new()
    }
}

impl FocusMeter {
    /// Create a full gauge in the focused state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            level: FOCUS_MAX,
            focused: true,
        }
    }

    /// Current gauge level. At most 100; may run negative once depleted.
    #[must_use]
    pub fn level(&self) -> f64 {
        self.level
    }

    /// Whether the gauge is currently in the focused (slow-drain) state.
    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Record a focus/blur signal from the presentation layer.
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Advance the gauge by one external time-step.
    ///
    /// `difficulty_index` scales the drain: each level adds 10% on top of
    /// the base rate.
    pub fn tick(&mut self, difficulty_index: u32) {
        let drain_rate = if self.focused {
            FOCUSED_DRAIN
        } else {
            UNFOCUSED_DRAIN
        };
        let multiplier = 1.0 + 0.1 * f64::from(difficulty_index);
        self.level -= drain_rate * multiplier * TICK_STEP;
        if self.level > FOCUS_MAX {
            self.level = FOCUS_MAX;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_full_and_focused() {
        let meter = FocusMeter::new();
        assert_eq!(meter.level(), 100.0);
        assert!(meter.is_focused());
    }

    #[test]
    fn test_focused_drain_per_tick() {
        let mut meter = FocusMeter::new();
        meter.tick(1);
        // 0.5 * 1.1 * 0.1 = 0.055
        assert!((meter.level() - 99.945).abs() < 1e-9);
    }

    #[test]
    fn test_unfocused_drains_faster() {
        let mut focused = FocusMeter::new();
        let mut blurred = FocusMeter::new();
        blurred.set_focused(false);

        for _ in 0..10 {
            focused.tick(3);
            blurred.tick(3);
        }

        assert!(blurred.level() < focused.level());
        // Exactly 6x the drain at equal difficulty
        let focused_loss = 100.0 - focused.level();
        let blurred_loss = 100.0 - blurred.level();
        assert!((blurred_loss - 6.0 * focused_loss).abs() < 1e-9);
    }

    #[test]
    fn test_difficulty_scales_drain() {
        let mut easy = FocusMeter::new();
        let mut hard = FocusMeter::new();

        easy.tick(1);
        hard.tick(10);

        assert!(hard.level() < easy.level());
    }

    #[test]
    fn test_never_exceeds_ceiling() {
        let mut meter = FocusMeter::new();
        for _ in 0..100 {
            meter.tick(1);
            assert!(meter.level() <= 100.0);
        }
    }

    #[test]
    fn test_no_floor_clamp() {
        let mut meter = FocusMeter::new();
        meter.set_focused(false);

        // 3.0 * 2.5 * 0.1 = 0.75 per tick at difficulty 15
        for _ in 0..200 {
            meter.tick(15);
        }

        // 200 ticks drain 150 points; depletion is visible to the caller
        assert!(meter.level() < 0.0);
    }
}
