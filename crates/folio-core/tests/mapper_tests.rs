use folio_core::mapper::*;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn ranges_partition_with_double_overlap() {
    let first = ElementRange::for_index(0, 4).unwrap();
    assert_eq!(first.start, 0.0);
    assert!(approx(first.end, 0.5));

    let last = ElementRange::for_index(3, 4).unwrap();
    assert!(approx(last.start, 0.75));
    assert!(approx(last.end, 1.25), "trailing range may run past 1.0");
}

#[test]
fn zero_total_has_no_range_and_rests() {
    assert!(ElementRange::for_index(0, 0).is_none());
    assert_eq!(map_element(0, 0, 0.5), ElementStyle::REST);
    assert_eq!(map_element_reduced(0, 0, 0.5), ElementStyle::REST);
}

#[test]
fn last_element_at_full_progress_is_finite() {
    for total in 1..20 {
        let s = map_element(total - 1, total, 1.0);
        for v in [s.depth, s.opacity, s.blur, s.glow] {
            assert!(v.is_finite(), "total={total} produced {s:?}");
        }
        let r = map_element_reduced(total - 1, total, 1.0);
        assert!(r.opacity.is_finite());
    }
}

#[test]
fn untouched_glyph_is_at_rest() {
    assert_eq!(map_element(0, 4, 0.0), ElementStyle::REST);
    // later glyphs wait further back but are otherwise untouched
    let s = map_element(2, 4, 0.0);
    assert!(approx(s.depth, -1500.0));
    assert_eq!(s.opacity, 1.0);
    assert_eq!(s.blur, 0.0);
    assert_eq!(s.glow, 0.0);
}

#[test]
fn opacity_fades_over_a_tenth_after_one_step() {
    // index 1 of 4: fade window is [0.5, 0.6]
    assert!(approx(map_element(1, 4, 0.5).opacity, 1.0));
    assert!(approx(map_element(1, 4, 0.55).opacity, 0.5));
    assert!(approx(map_element(1, 4, 0.6).opacity, 0.0));
    assert!(approx(map_element(1, 4, 0.9).opacity, 0.0));
}

#[test]
fn depth_extrapolates_without_clamping() {
    // index 0 of 4: depth maps [0, 1] -> [0, 1500]
    assert!(approx(map_element(0, 4, 0.5).depth, 750.0));
    assert!(approx(map_element(0, 4, 1.0).depth, 1500.0));
    // index 2 starts at 0.5; before its start depth goes negative rather than clamping
    assert!(map_element(2, 4, 0.25).depth < 0.0);
}

#[test]
fn blur_and_glow_clamp_to_their_windows() {
    // index 0 of 4: blur over [0, 0.25], glow over [0, 0.125]
    assert!(approx(map_element(0, 4, 0.125).blur, 5.0));
    assert!(approx(map_element(0, 4, 0.9).blur, 10.0));
    assert!(approx(map_element(0, 4, 0.0625).glow, 0.5));
    assert!(approx(map_element(0, 4, 0.9).glow, 1.0));
}

#[test]
fn reduced_motion_only_fades() {
    let s = map_element_reduced(0, 4, 0.25);
    assert_eq!(s.depth, 0.0);
    assert_eq!(s.blur, 0.0);
    assert!(approx(s.opacity, 0.6));
    assert!(approx(map_element_reduced(0, 4, 1.0).opacity, 0.2));
}

#[test]
fn interpolate_handles_degenerate_and_reversed_ranges() {
    assert_eq!(interpolate(0.4, (0.5, 0.5), (1.0, 0.0), true), 1.0);
    assert_eq!(interpolate(0.5, (0.5, 0.5), (1.0, 0.0), true), 0.0);
    assert!(approx(interpolate(0.25, (0.0, 1.0), (10.0, 20.0), true), 12.5));
    assert!(approx(interpolate(2.0, (0.0, 1.0), (0.0, 10.0), false), 20.0));
    assert!(approx(interpolate(2.0, (0.0, 1.0), (0.0, 10.0), true), 10.0));
}

#[test]
fn container_transforms_follow_progress() {
    assert_eq!(backdrop_opacity(0.0), 1.0);
    assert_eq!(backdrop_opacity(0.8), 1.0);
    assert!(approx(backdrop_opacity(0.9), 0.5));
    assert_eq!(backdrop_opacity(1.0), 0.0);
    assert_eq!(container_scale(0.0), 1.0);
    assert!(approx(container_scale(1.0), 1.5));
}
