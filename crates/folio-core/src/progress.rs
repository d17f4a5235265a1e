use crate::constants::{PROGRESS_SNAP_EPSILON, SENSITIVITY_DIVISOR};

/// Input-side progress: only touched by input events, never by the frame loop.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ProgressState {
    /// Unclamped result of the latest accumulation step.
    pub raw: f32,
    /// `raw` saturated to [0, 1].
    pub clamped: f32,
    /// Set once, the first time `clamped` reaches 1.
    pub completed: bool,
    /// Set by the first non-zero delta; hides the scroll hint.
    pub started: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccumulateOutcome {
    /// Input arrived after completion (or teardown) and was dropped.
    Ignored,
    Advanced,
    /// This delta carried `clamped` to 1 for the first time.
    Completed,
}

#[derive(Clone, Debug)]
pub struct ProgressAccumulator {
    state: ProgressState,
    sensitivity: f32,
    // Running position in f64; `state` holds its f32 view.
    position: f64,
}

impl Default for ProgressAccumulator {
    fn default() -> Self {
        Self::new(SENSITIVITY_DIVISOR)
    }
}

impl ProgressAccumulator {
    pub fn new(sensitivity: f32) -> Self {
        Self {
            state: ProgressState::default(),
            sensitivity,
            position: 0.0,
        }
    }

    #[inline]
    pub fn state(&self) -> ProgressState {
        self.state
    }

    #[inline]
    pub fn clamped(&self) -> f32 {
        self.state.clamped
    }

    #[inline]
    pub fn is_completed(&self) -> bool {
        self.state.completed
    }

    /// Add `delta_y / sensitivity` to progress.
    ///
    /// Accumulation restarts from the clamped value, so scrolling past either
    /// end never builds up slack that has to be scrolled back first.
    pub fn accumulate(&mut self, delta_y: f32) -> AccumulateOutcome {
        if self.state.completed || !delta_y.is_finite() {
            return AccumulateOutcome::Ignored;
        }
        if delta_y != 0.0 {
            self.state.started = true;
        }
        let raw = self.position + f64::from(delta_y) / f64::from(self.sensitivity);
        // Deltas that split the sensitivity evenly must land on exactly 1.
        self.position = if raw >= 1.0 - PROGRESS_SNAP_EPSILON {
            1.0
        } else {
            raw.clamp(0.0, 1.0)
        };
        self.state.raw = raw as f32;
        self.state.clamped = self.position as f32;
        log::debug!(
            "[progress] delta={:.1} raw={:.4} clamped={:.4}",
            delta_y,
            self.state.raw,
            self.state.clamped
        );
        if self.state.clamped >= 1.0 {
            self.state.completed = true;
            return AccumulateOutcome::Completed;
        }
        AccumulateOutcome::Advanced
    }
}
