use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GatePhase {
    Active,
    /// Progress hit 1 at `since`; waiting out the settle delay.
    Completing { since: Duration },
    Done,
}

/// One-shot hand-off from the entry sequence to the host view.
///
/// `Active -> Completing -> Done`; every transition happens at most once and
/// `Done` is terminal.
#[derive(Clone, Debug)]
pub struct CompletionGate {
    phase: GatePhase,
    settle: Duration,
}

impl CompletionGate {
    pub fn new(settle: Duration) -> Self {
        Self {
            phase: GatePhase::Active,
            settle,
        }
    }

    #[inline]
    pub fn phase(&self) -> GatePhase {
        self.phase
    }

    #[inline]
    pub fn accepts_input(&self) -> bool {
        self.phase == GatePhase::Active
    }

    /// Start the settle timer. Returns false if already triggered.
    pub fn trigger(&mut self, now: Duration) -> bool {
        if self.phase != GatePhase::Active {
            return false;
        }
        log::info!("[gate] completing, settle={}ms", self.settle.as_millis());
        self.phase = GatePhase::Completing { since: now };
        true
    }

    /// Returns true exactly once: on the poll where the settle delay has elapsed.
    pub fn poll(&mut self, now: Duration) -> bool {
        match self.phase {
            GatePhase::Completing { since } if now.saturating_sub(since) >= self.settle => {
                log::info!("[gate] done");
                self.phase = GatePhase::Done;
                true
            }
            _ => false,
        }
    }
}
