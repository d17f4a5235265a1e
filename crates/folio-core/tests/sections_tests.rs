use folio_core::sections::{indicator, scroll_offset, section_for_scroll, Section, SectionNav};

#[test]
fn anchors_follow_scroll_order() {
    for (i, s) in Section::ALL.iter().enumerate() {
        assert_eq!(s.index(), i);
        assert_eq!(Section::from_index(i), Some(*s));
    }
    assert_eq!(Section::About.anchor(), "about");
    assert_eq!(Section::from_index(5), None);
}

#[test]
fn scroll_position_rounds_to_nearest_section() {
    assert_eq!(section_for_scroll(0.0, 1000.0), 0);
    assert_eq!(section_for_scroll(1490.0, 1000.0), 1);
    assert_eq!(section_for_scroll(1510.0, 1000.0), 2);
    assert_eq!(section_for_scroll(99_999.0, 1000.0), 4);
    assert_eq!(section_for_scroll(-300.0, 1000.0), 0);
    assert_eq!(section_for_scroll(500.0, 0.0), 0);
    assert_eq!(section_for_scroll(f64::NAN, 1000.0), 0);
    assert_eq!(scroll_offset(2, 800.0), 1600.0);
    assert_eq!(scroll_offset(9, 800.0), 3200.0);
}

#[test]
fn indicator_fills_connectors_behind_current() {
    let dots = indicator(2, 5);
    assert_eq!(dots.len(), 5);
    assert!(dots[2].active);
    assert_eq!(dots.iter().filter(|d| d.active).count(), 1);
    assert_eq!(dots[0].connector_filled, Some(true));
    assert_eq!(dots[1].connector_filled, Some(true));
    assert_eq!(dots[2].connector_filled, Some(false));
    assert_eq!(dots[4].connector_filled, None);
}

#[test]
fn navigation_is_locked_until_entry() {
    let mut nav = SectionNav::default();
    assert_eq!(nav.on_scroll(2000.0, 1000.0), None);
    assert_eq!(nav.jump_to(3, 1000.0), None);
    assert_eq!(nav.next(1000.0), None);

    nav.set_entered(true);
    assert_eq!(nav.on_scroll(2000.0, 1000.0), Some(2));
    assert_eq!(nav.on_scroll(2100.0, 1000.0), None);
    assert_eq!(nav.current(), 2);
    assert_eq!(nav.next(1000.0), Some(3000.0));
    assert_eq!(nav.prev(1000.0), Some(1000.0));
}

#[test]
fn next_and_prev_stop_at_the_ends() {
    let mut nav = SectionNav::default();
    nav.set_entered(true);
    assert_eq!(nav.prev(500.0), Some(0.0));
    nav.on_scroll(2000.0, 500.0);
    assert_eq!(nav.current(), 4);
    assert_eq!(nav.next(500.0), Some(2000.0));
}
