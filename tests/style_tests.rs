// Host-side tests for the CSS string builders.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod style {
    include!("../src/style.rs");
}

use folio_core::ElementStyle;
use style::*;

#[test]
fn resting_glyph_is_plain() {
    let css = glyph_css(&ElementStyle::REST);
    assert!(css.contains("translateZ(0.0px)"));
    assert!(css.contains("opacity:1.000"));
    assert!(css.contains("filter:none"));
    assert!(css.contains("rgba(255,255,255,0.000)"));
}

#[test]
fn animated_glyph_carries_every_channel() {
    let css = glyph_css(&ElementStyle {
        depth: 750.0,
        opacity: 0.5,
        blur: 5.0,
        glow: 1.0,
    });
    assert!(css.contains("translateZ(750.0px)"));
    assert!(css.contains("opacity:0.500"));
    assert!(css.contains("filter:blur(5.00px)"));
    assert!(css.contains("text-shadow:0 0 20.0px rgba(255,255,255,0.800)"));
}

#[test]
fn overlay_releases_pointer_when_not_interactive() {
    assert_eq!(overlay_css(1.0, true), "opacity:1.000;pointer-events:auto");
    assert_eq!(overlay_css(0.25, false), "opacity:0.250;pointer-events:none");
    assert_eq!(container_css(1.5), "transform:scale(1.5000)");
}

#[test]
fn progress_bar_is_clamped() {
    assert_eq!(progress_bar_css(42.0), "width:42.0%");
    assert_eq!(progress_bar_css(130.0), "width:100.0%");
    assert_eq!(progress_bar_css(-1.0), "width:0.0%");
    assert_eq!(blur_filter(-2.0), "none");
}
