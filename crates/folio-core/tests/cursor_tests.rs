use folio_core::cursor::*;
use glam::Vec2;

fn button() -> TargetRect {
    TargetRect {
        left: 100.0,
        top: 50.0,
        right: 200.0,
        bottom: 90.0,
    }
}

#[test]
fn idle_cursor_spins_and_wraps() {
    let mut c = TargetCursor::new(CursorConfig::default(), Vec2::ZERO);
    c.tick(0.5);
    assert!((c.rotation - 90.0).abs() < 1e-3);
    for _ in 0..7 {
        c.tick(0.5);
    }
    assert!(c.rotation >= 0.0 && c.rotation < 360.0);
    assert_eq!(c.corners, idle_corners(&c.cfg));
}

#[test]
fn entering_a_target_locks_corners_onto_it() {
    let pos = Vec2::new(150.0, 70.0);
    let mut c = TargetCursor::new(CursorConfig::default(), pos);
    c.tick(0.3);
    c.enter(button());
    assert!(c.is_locked());
    assert_eq!(c.rotation, 0.0);
    assert_eq!(c.strength(), 0.0);

    c.tick(0.1);
    assert!((c.strength() - 0.5).abs() < 1e-4);
    c.tick(0.2);
    assert_eq!(c.strength(), 1.0);

    let goal = target_corners(&c.cfg, &button(), pos);
    for (got, want) in c.corners.iter().zip(goal.iter()) {
        assert!((*got - *want).length() < 1e-3);
    }
    // corners frame the element, bordered
    assert_eq!(goal[0] + pos, Vec2::new(97.0, 47.0));
    assert_eq!(goal[2] + pos, Vec2::new(191.0, 81.0));
}

#[test]
fn rotation_holds_while_locked() {
    let mut c = TargetCursor::new(CursorConfig::default(), Vec2::ZERO);
    c.enter(button());
    c.tick(1.0);
    assert_eq!(c.rotation, 0.0);
    c.leave();
    assert!(!c.is_locked());
    assert_eq!(c.corners, idle_corners(&c.cfg));
    c.tick(0.25);
    assert!(c.rotation > 0.0);
}

#[test]
fn touch_and_mobile_hosts_keep_native_cursor() {
    assert!(cursor_enabled(false, 400.0, false));
    assert!(cursor_enabled(true, 1280.0, false));
    assert!(!cursor_enabled(true, 768.0, false));
    assert!(!cursor_enabled(false, 1920.0, true));
    assert!(is_mobile_user_agent(
        "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)"
    ));
    assert!(!is_mobile_user_agent(
        "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0"
    ));
}

#[test]
fn scrolling_a_locked_target_keeps_the_ramp() {
    let mut c = TargetCursor::new(CursorConfig::default(), Vec2::new(150.0, 70.0));
    c.enter(button());
    c.tick(0.05);
    let ramped = c.strength();
    assert!(ramped > 0.0);

    let moved = TargetRect {
        top: 20.0,
        bottom: 60.0,
        ..button()
    };
    for _ in 0..10 {
        c.retarget(moved);
    }
    assert!(c.is_locked());
    assert_eq!(c.strength(), ramped);

    c.tick(10.0);
    let goal = target_corners(&c.cfg, &moved, c.position);
    for (got, want) in c.corners.iter().zip(goal.iter()) {
        assert!((*got - *want).length() < 1e-3);
    }
}

#[test]
fn retarget_while_idle_does_not_lock() {
    let mut c = TargetCursor::new(CursorConfig::default(), Vec2::ZERO);
    c.retarget(button());
    assert!(!c.is_locked());
    c.tick(0.5);
    assert!((c.rotation - 90.0).abs() < 1e-3);
}

#[test]
fn target_scrolled_out_from_under_the_pointer_releases() {
    let mut c = TargetCursor::new(CursorConfig::default(), Vec2::new(150.0, 70.0));
    c.enter(button());
    c.tick(1.0);
    c.leave();
    assert!(!c.is_locked());
    assert_eq!(c.strength(), 0.0);
    assert_eq!(c.corners, idle_corners(&c.cfg));
    c.tick(0.5);
    assert!(c.rotation > 0.0);
}
