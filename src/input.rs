// Host-testable input normalisation; no web-sys types in here.

use crate::constants::{WHEEL_LINE_PX, WHEEL_PAGE_FALLBACK_PX};

/// Convert a wheel event's `deltaY` into pixels whatever its `deltaMode`.
#[inline]
pub fn wheel_delta_px(delta_y: f64, delta_mode: u32, page_height: f64) -> f64 {
    match delta_mode {
        1 => delta_y * WHEEL_LINE_PX,
        2 => {
            let page = if page_height > 0.0 {
                page_height
            } else {
                WHEEL_PAGE_FALLBACK_PX
            };
            delta_y * page
        }
        _ => delta_y,
    }
}

/// Turns successive touch Y positions into scroll-like deltas.
///
/// Dragging a finger up reads as scrolling forward, matching the wheel.
#[derive(Clone, Copy, Debug, Default)]
pub struct TouchTracker {
    last_y: Option<f64>,
}

impl TouchTracker {
    pub fn start(&mut self, y: f64) {
        self.last_y = Some(y);
    }

    pub fn move_to(&mut self, y: f64) -> Option<f64> {
        let prev = self.last_y.replace(y)?;
        Some(prev - y)
    }

    pub fn end(&mut self) {
        self.last_y = None;
    }
}
