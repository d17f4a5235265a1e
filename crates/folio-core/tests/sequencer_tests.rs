// Host-side tests for the composed entry sequence.

use folio_core::{
    AccumulateOutcome, ConfigError, EntrySequencer, GatePhase, Glyph, SequencerConfig,
    SpringParams,
};
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

const FRAME: Duration = Duration::from_micros(16_667);

fn make_sequencer() -> (EntrySequencer, Rc<Cell<u32>>) {
    let fired = Rc::new(Cell::new(0));
    let f = fired.clone();
    let seq = EntrySequencer::new(SequencerConfig::default(), move || f.set(f.get() + 1))
        .expect("default config is valid");
    (seq, fired)
}

fn run_frames(seq: &mut EntrySequencer, n: usize) {
    for _ in 0..n {
        seq.advance(FRAME);
    }
}

#[test]
fn completion_fires_once_after_settle_delay() {
    let (mut seq, fired) = make_sequencer();
    for _ in 0..2 {
        seq.on_input(1500.0);
    }
    assert_eq!(seq.progress().clamped, 1.0);
    assert!(matches!(seq.phase(), GatePhase::Completing { .. }));

    // 800ms settle: nothing at ~0.5s
    run_frames(&mut seq, 30);
    assert_eq!(fired.get(), 0);

    let mut handed_off = 0;
    for _ in 0..60 {
        if seq.advance(FRAME).completed_now {
            handed_off += 1;
        }
    }
    assert_eq!(fired.get(), 1);
    assert_eq!(handed_off, 1);
    assert_eq!(seq.phase(), GatePhase::Done);

    // further input after completion changes nothing
    for _ in 0..5 {
        assert_eq!(seq.on_input(3000.0), AccumulateOutcome::Ignored);
        assert_eq!(seq.on_input(-3000.0), AccumulateOutcome::Ignored);
    }
    run_frames(&mut seq, 120);
    assert_eq!(fired.get(), 1);
    assert_eq!(seq.progress().clamped, 1.0);
}

#[test]
fn smoothed_lags_then_tracks_clamped() {
    let (mut seq, _) = make_sequencer();
    seq.on_input(1500.0);
    assert_eq!(seq.progress().clamped, 0.5);
    let first = seq.advance(FRAME).smoothed;
    assert!(first > 0.0 && first < 0.5);
    run_frames(&mut seq, 180);
    assert!((seq.smoothed() - 0.5).abs() < 1e-3);
}

#[test]
fn input_is_visible_to_the_very_next_frame() {
    let (mut seq, _) = make_sequencer();
    run_frames(&mut seq, 10);
    assert_eq!(seq.smoothed(), 0.0);
    seq.on_input(600.0);
    assert!(seq.advance(FRAME).smoothed > 0.0);
}

#[test]
fn teardown_stops_input_and_callback() {
    let (mut seq, fired) = make_sequencer();
    seq.on_input(900.0);
    let before = seq.progress();
    seq.teardown();

    assert_eq!(seq.on_input(5000.0), AccumulateOutcome::Ignored);
    assert_eq!(seq.progress(), before);
    run_frames(&mut seq, 200);
    assert_eq!(fired.get(), 0);
    assert!(seq.is_torn_down());
}

#[test]
fn teardown_while_settling_drops_the_callback() {
    let (mut seq, fired) = make_sequencer();
    seq.on_input(3000.0);
    assert!(matches!(seq.phase(), GatePhase::Completing { .. }));
    seq.teardown();
    run_frames(&mut seq, 200);
    assert_eq!(fired.get(), 0);
    assert!(!seq.advance(FRAME).interactive);
}

#[test]
fn hint_hides_after_first_input_and_overlay_releases_pointer() {
    let (mut seq, _) = make_sequencer();
    let out = seq.advance(FRAME);
    assert!(out.hint_visible);
    assert!(out.interactive);
    seq.on_input(10.0);
    assert!(!seq.advance(FRAME).hint_visible);
    seq.on_input(5000.0);
    assert!(!seq.advance(FRAME).interactive);
}

#[test]
fn backdrop_fades_only_near_the_end() {
    let (mut seq, _) = make_sequencer();
    seq.on_input(1500.0);
    run_frames(&mut seq, 180);
    let out = seq.advance(FRAME);
    assert_eq!(out.backdrop_opacity, 1.0);
    assert!(out.container_scale > 1.2 && out.container_scale < 1.3);
}

#[test]
fn glyph_styles_skip_spacers() {
    let (mut seq, _) = make_sequencer();
    seq.on_input(3000.0);
    run_frames(&mut seq, 240);
    let layout = seq.config().name.clone();
    for glyph in layout.single_line() {
        match glyph {
            Glyph::Spacer => assert!(seq.glyph_style(&glyph).is_none()),
            Glyph::Letter { .. } => {
                let s = seq.glyph_style(&glyph).unwrap();
                assert!(s.depth.is_finite() && s.opacity.is_finite());
                assert!(s.opacity <= 1.0 && s.opacity >= 0.0);
            }
        }
    }
}

#[test]
fn reduced_motion_keeps_glyphs_in_place() {
    let config = SequencerConfig {
        reduced_motion: true,
        ..SequencerConfig::default()
    };
    let mut seq = EntrySequencer::new(config, || {}).unwrap();
    seq.on_input(1500.0);
    run_frames(&mut seq, 60);
    for glyph in seq.config().name.single_line() {
        if let Some(s) = seq.glyph_style(&glyph) {
            assert_eq!(s.depth, 0.0);
            assert_eq!(s.blur, 0.0);
        }
    }
}

#[test]
fn invalid_config_is_rejected() {
    let bad = SequencerConfig {
        sensitivity: 0.0,
        ..SequencerConfig::default()
    };
    assert!(matches!(
        EntrySequencer::new(bad, || {}),
        Err(ConfigError::Sensitivity(_))
    ));

    let bad_mass = SequencerConfig {
        spring: SpringParams {
            mass: 0.0,
            ..SpringParams::default()
        },
        ..SequencerConfig::default()
    };
    assert_eq!(bad_mass.validate(), Err(ConfigError::SpringMass(0.0)));

    let bad_damping = SequencerConfig {
        spring: SpringParams {
            damping: f32::NAN,
            ..SpringParams::default()
        },
        ..SequencerConfig::default()
    };
    assert!(matches!(
        bad_damping.validate(),
        Err(ConfigError::SpringCoefficient { name: "damping", .. })
    ));
}

fn with_spring(stiffness: f32, damping: f32) -> SequencerConfig {
    SequencerConfig {
        spring: SpringParams {
            stiffness,
            damping,
            ..SpringParams::default()
        },
        ..SequencerConfig::default()
    }
}

#[test]
fn springs_that_never_settle_are_rejected() {
    assert_eq!(
        with_spring(0.0, 0.0).validate(),
        Err(ConfigError::SpringStiffness(0.0))
    );
    assert_eq!(
        with_spring(0.0, 20.0).validate(),
        Err(ConfigError::SpringStiffness(0.0))
    );
    assert!(matches!(
        with_spring(100.0, 0.0).validate(),
        Err(ConfigError::Underdamped { .. })
    ));
    // ratio 0.5
    assert!(matches!(
        EntrySequencer::new(with_spring(100.0, 10.0), || {}),
        Err(ConfigError::Underdamped { .. })
    ));
}

#[test]
fn accepted_springs_reach_the_target() {
    for (stiffness, damping) in [(100.0, 20.0), (100.0, 14.0), (400.0, 60.0)] {
        let config = with_spring(stiffness, damping);
        assert_eq!(config.validate(), Ok(()));
        let mut seq = EntrySequencer::new(config, || {}).unwrap();
        seq.on_input(1500.0);
        run_frames(&mut seq, 600);
        assert!(
            (seq.smoothed() - 0.5).abs() < 1e-3,
            "k={stiffness} c={damping} stalled at {}",
            seq.smoothed()
        );
    }
}

#[test]
fn zero_settle_delay_hands_off_on_next_frame() {
    let fired = Rc::new(Cell::new(false));
    let f = fired.clone();
    let config = SequencerConfig {
        settle_delay: Duration::ZERO,
        ..SequencerConfig::default()
    };
    let mut seq = EntrySequencer::new(config, move || f.set(true)).unwrap();
    seq.on_input(3000.0);
    assert!(!fired.get());
    assert!(seq.advance(FRAME).completed_now);
    assert!(fired.get());
}
