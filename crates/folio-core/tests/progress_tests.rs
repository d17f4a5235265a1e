// Host-side tests for the input accumulator and completion gate.

use folio_core::gate::{CompletionGate, GatePhase};
use folio_core::progress::{AccumulateOutcome, ProgressAccumulator};
use std::time::Duration;

#[test]
fn clamped_stays_in_unit_interval_for_any_delta() {
    let mut acc = ProgressAccumulator::new(3000.0);
    let deltas = [
        120.0, -9000.0, 1e9, -1e9, 0.0, 53.5, -0.25, 2999.0, -4500.0, 700.0, 1e-3,
    ];
    for d in deltas {
        acc.accumulate(d);
        let c = acc.clamped();
        assert!((0.0..=1.0).contains(&c), "clamped={c} after delta={d}");
        if acc.is_completed() {
            break;
        }
    }
}

#[test]
fn deltas_summing_to_one_complete_exactly_once() {
    let mut acc = ProgressAccumulator::new(3000.0);
    let mut completions = 0;
    for _ in 0..4 {
        if acc.accumulate(750.0) == AccumulateOutcome::Completed {
            completions += 1;
        }
    }
    assert_eq!(acc.clamped(), 1.0);
    assert!(acc.is_completed());
    for _ in 0..10 {
        assert_eq!(acc.accumulate(750.0), AccumulateOutcome::Ignored);
        assert_eq!(acc.accumulate(-750.0), AccumulateOutcome::Ignored);
    }
    assert_eq!(completions, 1);
    assert_eq!(acc.clamped(), 1.0);
}

#[test]
fn even_splits_of_the_sensitivity_always_complete() {
    let mut stuck = Vec::new();
    for n in (1..=100).chain([240, 1000]) {
        let mut acc = ProgressAccumulator::new(3000.0);
        let delta = 3000.0 / n as f32;
        let mut completions = 0;
        for _ in 0..n {
            if acc.accumulate(delta) == AccumulateOutcome::Completed {
                completions += 1;
            }
        }
        if completions != 1 || acc.clamped() != 1.0 {
            stuck.push((n, acc.clamped()));
        }
    }
    assert!(stuck.is_empty(), "splits that never completed: {stuck:?}");
}

#[test]
fn just_short_of_the_end_does_not_complete() {
    let mut acc = ProgressAccumulator::new(3000.0);
    assert_eq!(acc.accumulate(2990.0), AccumulateOutcome::Advanced);
    assert!(acc.clamped() < 1.0);
    assert!(!acc.is_completed());
}

#[test]
fn negative_delta_at_zero_stays_at_zero() {
    let mut acc = ProgressAccumulator::new(3000.0);
    assert_eq!(acc.accumulate(-500.0), AccumulateOutcome::Advanced);
    let s = acc.state();
    assert_eq!(s.clamped, 0.0);
    assert!(s.raw < 0.0);
}

#[test]
fn overscroll_does_not_build_slack() {
    let mut acc = ProgressAccumulator::new(3000.0);
    acc.accumulate(-30_000.0);
    // One forward notch moves progress straight away.
    acc.accumulate(300.0);
    assert!((acc.clamped() - 0.1).abs() < 1e-6);
}

#[test]
fn large_single_delta_saturates_and_completes() {
    let mut acc = ProgressAccumulator::new(3000.0);
    assert_eq!(acc.accumulate(1e7), AccumulateOutcome::Completed);
    assert_eq!(acc.clamped(), 1.0);
}

#[test]
fn started_flag_ignores_zero_deltas() {
    let mut acc = ProgressAccumulator::new(3000.0);
    acc.accumulate(0.0);
    assert!(!acc.state().started);
    acc.accumulate(-1.0);
    assert!(acc.state().started);
}

#[test]
fn non_finite_delta_is_dropped() {
    let mut acc = ProgressAccumulator::new(3000.0);
    acc.accumulate(600.0);
    assert_eq!(acc.accumulate(f32::NAN), AccumulateOutcome::Ignored);
    assert_eq!(acc.accumulate(f32::INFINITY), AccumulateOutcome::Ignored);
    assert!((acc.clamped() - 0.2).abs() < 1e-6);
}

#[test]
fn gate_walks_active_completing_done_once() {
    let mut gate = CompletionGate::new(Duration::from_millis(800));
    assert!(gate.accepts_input());
    assert!(!gate.poll(Duration::from_secs(5)), "nothing to fire while active");

    assert!(gate.trigger(Duration::from_millis(100)));
    assert!(!gate.trigger(Duration::from_millis(150)));
    assert!(!gate.accepts_input());
    assert_eq!(
        gate.phase(),
        GatePhase::Completing {
            since: Duration::from_millis(100)
        }
    );

    assert!(!gate.poll(Duration::from_millis(899)));
    assert!(gate.poll(Duration::from_millis(900)));
    assert_eq!(gate.phase(), GatePhase::Done);
    assert!(!gate.poll(Duration::from_millis(2000)));
    assert!(!gate.trigger(Duration::from_millis(2000)));
}
