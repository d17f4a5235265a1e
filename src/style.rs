// CSS strings for glyph and overlay styles.

use crate::constants::GLOW_RGB;
use folio_core::constants::{GLOW_ALPHA_MAX, GLOW_RADIUS_MAX_PX};
use folio_core::ElementStyle;

pub fn glyph_css(style: &ElementStyle) -> String {
    let [r, g, b] = GLOW_RGB;
    format!(
        "display:inline-block;backface-visibility:hidden;transform:translateZ({:.1}px);opacity:{:.3};filter:{};text-shadow:0 0 {:.1}px rgba({},{},{},{:.3})",
        style.depth,
        style.opacity,
        blur_filter(style.blur),
        style.glow * GLOW_RADIUS_MAX_PX,
        r,
        g,
        b,
        style.glow * GLOW_ALPHA_MAX,
    )
}

#[inline]
pub fn blur_filter(blur_px: f32) -> String {
    if blur_px <= 0.0 {
        "none".to_string()
    } else {
        format!("blur({:.2}px)", blur_px)
    }
}

pub fn overlay_css(backdrop_opacity: f32, interactive: bool) -> String {
    format!(
        "opacity:{:.3};pointer-events:{}",
        backdrop_opacity,
        if interactive { "auto" } else { "none" }
    )
}

pub fn container_css(scale: f32) -> String {
    format!("transform:scale({:.4})", scale)
}

pub fn cursor_css(x: f32, y: f32, rotation_deg: f32) -> String {
    format!(
        "transform:translate({:.1}px,{:.1}px) translate(-50%,-50%) rotate({:.1}deg)",
        x, y, rotation_deg
    )
}

pub fn corner_css(dx: f32, dy: f32) -> String {
    format!("transform:translate({:.1}px,{:.1}px)", dx, dy)
}

pub fn progress_bar_css(percent: f64) -> String {
    format!("width:{:.1}%", percent.clamp(0.0, 100.0))
}
