//! The scroll-entry sequence: input deltas in, per-frame styles out.
//!
//! Two timelines feed it on the same thread. Input handlers call
//! [`EntrySequencer::on_input`], which only touches the accumulator and the
//! gate. The frame loop calls [`EntrySequencer::advance`], which moves the
//! spring toward the clamped progress, runs the settle timer and, once,
//! fires the completion callback.

use crate::config::{ConfigError, SequencerConfig};
use crate::constants::MAX_FRAME_DT_SEC;
use crate::gate::{CompletionGate, GatePhase};
use crate::layout::Glyph;
use crate::mapper::{self, ElementStyle};
use crate::progress::{AccumulateOutcome, ProgressAccumulator, ProgressState};
use crate::spring::Spring;
use std::time::Duration;

/// Everything the renderer needs for one frame, apart from per-glyph styles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameOutput {
    pub smoothed: f32,
    pub backdrop_opacity: f32,
    pub container_scale: f32,
    pub hint_visible: bool,
    /// False once the gate has left `Active`; the overlay lets clicks through.
    pub interactive: bool,
    pub phase: GatePhase,
    /// True on the single frame that handed control back to the host.
    pub completed_now: bool,
}

pub struct EntrySequencer {
    config: SequencerConfig,
    progress: ProgressAccumulator,
    spring: Spring,
    gate: CompletionGate,
    clock: Duration,
    on_complete: Option<Box<dyn FnOnce()>>,
    torn_down: bool,
}

impl EntrySequencer {
    pub fn new(
        config: SequencerConfig,
        on_complete: impl FnOnce() + 'static,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            progress: ProgressAccumulator::new(config.sensitivity),
            spring: Spring::new(config.spring),
            gate: CompletionGate::new(config.settle_delay),
            clock: Duration::ZERO,
            on_complete: Some(Box::new(on_complete)),
            torn_down: false,
            config,
        })
    }

    #[inline]
    pub fn config(&self) -> &SequencerConfig {
        &self.config
    }

    #[inline]
    pub fn progress(&self) -> ProgressState {
        self.progress.state()
    }

    #[inline]
    pub fn smoothed(&self) -> f32 {
        self.spring.position
    }

    #[inline]
    pub fn phase(&self) -> GatePhase {
        self.gate.phase()
    }

    #[inline]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Feed one signed scroll/drag delta (positive = forward).
    pub fn on_input(&mut self, delta_y: f32) -> AccumulateOutcome {
        if self.torn_down || !self.gate.accepts_input() {
            return AccumulateOutcome::Ignored;
        }
        let outcome = self.progress.accumulate(delta_y);
        self.spring.set_target(self.progress.clamped());
        if outcome == AccumulateOutcome::Completed {
            self.gate.trigger(self.clock);
        }
        outcome
    }

    /// Per-frame update. Inert after teardown.
    pub fn advance(&mut self, dt: Duration) -> FrameOutput {
        if self.torn_down {
            return self.output(false);
        }
        let dt_sec = dt.as_secs_f32().min(MAX_FRAME_DT_SEC);
        self.clock += dt;
        self.spring.step(dt_sec);
        let completed_now = self.gate.poll(self.clock);
        if completed_now {
            if let Some(cb) = self.on_complete.take() {
                cb();
            }
        }
        self.output(completed_now)
    }

    /// Style for one glyph at the current smoothed progress.
    pub fn glyph_style(&self, glyph: &Glyph) -> Option<ElementStyle> {
        let Glyph::Letter { index, .. } = *glyph else {
            return None;
        };
        let total = self.config.name.total();
        let smoothed = self.spring.position;
        Some(if self.config.reduced_motion {
            mapper::map_element_reduced(index, total, smoothed)
        } else {
            mapper::map_element(index, total, smoothed)
        })
    }

    /// Stop reacting to anything. A pending completion is dropped unfired.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        self.on_complete = None;
        log::info!(
            "[entry] teardown at clamped={:.3} phase={:?}",
            self.progress.clamped(),
            self.gate.phase()
        );
    }

    fn output(&self, completed_now: bool) -> FrameOutput {
        let smoothed = self.spring.position;
        FrameOutput {
            smoothed,
            backdrop_opacity: mapper::backdrop_opacity(smoothed),
            container_scale: mapper::container_scale(smoothed),
            hint_visible: !self.progress.state().started,
            interactive: !self.torn_down && self.gate.accepts_input(),
            phase: self.gate.phase(),
            completed_now,
        }
    }
}
