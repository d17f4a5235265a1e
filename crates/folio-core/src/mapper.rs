//! Per-glyph transforms for the entry flight.
//!
//! Everything here is a pure function of the smoothed progress and a glyph's
//! static `(index, total)`. Nothing is stored between frames; the renderer
//! calls these every tick and writes the result straight into styles.

use crate::constants::*;

/// Linear map of `value` from `input` onto `output`.
///
/// With `clamp` the result is held between the two output points. A
/// degenerate input range behaves as a step at `input.1`.
#[inline]
pub fn interpolate(value: f32, input: (f32, f32), output: (f32, f32), clamp: bool) -> f32 {
    let (in0, in1) = input;
    let (out0, out1) = output;
    let span = in1 - in0;
    if span.abs() <= f32::EPSILON {
        return if value >= in1 { out1 } else { out0 };
    }
    let mut t = (value - in0) / span;
    if clamp {
        t = t.clamp(0.0, 1.0);
    }
    out0 + (out1 - out0) * t
}

/// Sub-interval of global progress during which a glyph is primarily active.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElementRange {
    pub start: f32,
    pub end: f32,
    pub step: f32,
}

impl ElementRange {
    /// Even partition widened by [`OVERLAP_FACTOR`], so neighbours move together.
    ///
    /// `end` may exceed 1.0 for trailing glyphs; only progress is bounded.
    pub fn for_index(index: usize, total: usize) -> Option<Self> {
        if total == 0 {
            return None;
        }
        let step = 1.0 / total as f32;
        let start = index as f32 * step;
        Some(Self {
            start,
            end: start + step * OVERLAP_FACTOR,
            step,
        })
    }
}

/// Visual outputs for one glyph on one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElementStyle {
    /// Translation toward the viewer in px.
    pub depth: f32,
    pub opacity: f32,
    /// Blur radius in px.
    pub blur: f32,
    /// Glow intensity in [0, 1].
    pub glow: f32,
}

impl ElementStyle {
    pub const REST: Self = Self {
        depth: 0.0,
        opacity: 1.0,
        blur: 0.0,
        glow: 0.0,
    };
}

pub fn map_element(index: usize, total: usize, smoothed: f32) -> ElementStyle {
    let Some(r) = ElementRange::for_index(index, total) else {
        return ElementStyle::REST;
    };
    // Depth keeps extrapolating past 1.0 so glyphs continue receding.
    let depth = interpolate(smoothed, (r.start, 1.0), (0.0, DEPTH_MAX_PX), false);
    let fade_from = r.start + r.step;
    let opacity = interpolate(
        smoothed,
        (fade_from, fade_from + OPACITY_FADE_SPAN),
        (1.0, 0.0),
        true,
    );
    let blur = interpolate(smoothed, (r.start, r.start + r.step), (0.0, BLUR_MAX_PX), true);
    ElementStyle {
        depth,
        opacity,
        blur,
        glow: glow_for(&r, smoothed),
    }
}

/// Reduced-motion variant: no flight or blur, a gentle fade across the window.
pub fn map_element_reduced(index: usize, total: usize, smoothed: f32) -> ElementStyle {
    let Some(r) = ElementRange::for_index(index, total) else {
        return ElementStyle::REST;
    };
    ElementStyle {
        depth: 0.0,
        opacity: interpolate(
            smoothed,
            (r.start, r.end),
            (1.0, REDUCED_MOTION_MIN_OPACITY),
            true,
        ),
        blur: 0.0,
        glow: glow_for(&r, smoothed),
    }
}

#[inline]
fn glow_for(r: &ElementRange, smoothed: f32) -> f32 {
    interpolate(smoothed, (r.start, r.start + r.step * 0.5), (0.0, 1.0), true)
}

/// Black backdrop fades out over the last stretch, revealing the main view.
#[inline]
pub fn backdrop_opacity(smoothed: f32) -> f32 {
    interpolate(smoothed, (BACKDROP_FADE_START, 1.0), (1.0, 0.0), true)
}

/// Whole overlay scales up slightly to suggest momentum.
#[inline]
pub fn container_scale(smoothed: f32) -> f32 {
    interpolate(smoothed, (0.0, 1.0), (1.0, CONTAINER_SCALE_END), true)
}
