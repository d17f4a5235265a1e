//! Geometry for the custom "target" cursor: four corner brackets that idle
//! around the pointer, spinning, and snap onto whatever interactive element
//! the pointer is over.

use crate::constants::*;
use glam::Vec2;
use smallvec::SmallVec;

pub type Corners = SmallVec<[Vec2; 4]>;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorConfig {
    pub border: f32,
    pub corner: f32,
    pub spin_period_sec: f32,
    pub hover_ramp_sec: f32,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            border: CURSOR_BORDER_PX,
            corner: CURSOR_CORNER_PX,
            spin_period_sec: CURSOR_SPIN_PERIOD_SEC,
            hover_ramp_sec: CURSOR_HOVER_RAMP_SEC,
        }
    }
}

/// Client-space rectangle of a hovered element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TargetRect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

/// Corner offsets (top-left, top-right, bottom-right, bottom-left) relative to
/// the cursor when it is not over a target.
pub fn idle_corners(cfg: &CursorConfig) -> Corners {
    let s = cfg.corner;
    SmallVec::from_buf([
        Vec2::new(-s * 1.5, -s * 1.5),
        Vec2::new(s * 0.5, -s * 1.5),
        Vec2::new(s * 0.5, s * 0.5),
        Vec2::new(-s * 1.5, s * 0.5),
    ])
}

/// Corner offsets that frame `rect`, relative to the cursor at `cursor`.
pub fn target_corners(cfg: &CursorConfig, rect: &TargetRect, cursor: Vec2) -> Corners {
    let b = cfg.border;
    let s = cfg.corner;
    SmallVec::from_buf([
        Vec2::new(rect.left - b, rect.top - b) - cursor,
        Vec2::new(rect.right + b - s, rect.top - b) - cursor,
        Vec2::new(rect.right + b - s, rect.bottom + b - s) - cursor,
        Vec2::new(rect.left - b, rect.bottom + b - s) - cursor,
    ])
}

#[derive(Clone, Debug)]
pub struct TargetCursor {
    pub cfg: CursorConfig,
    pub position: Vec2,
    pub corners: Corners,
    /// Degrees, kept in [0, 360) while idle.
    pub rotation: f32,
    target: Option<TargetRect>,
    strength: f32,
}

impl TargetCursor {
    pub fn new(cfg: CursorConfig, position: Vec2) -> Self {
        Self {
            corners: idle_corners(&cfg),
            cfg,
            position,
            rotation: 0.0,
            target: None,
            strength: 0.0,
        }
    }

    #[inline]
    pub fn is_locked(&self) -> bool {
        self.target.is_some()
    }

    #[inline]
    pub fn strength(&self) -> f32 {
        self.strength
    }

    pub fn move_to(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Pointer entered an interactive element: stop spinning and lock on.
    pub fn enter(&mut self, rect: TargetRect) {
        self.target = Some(rect);
        self.rotation = 0.0;
        self.strength = 0.0;
    }

    /// The locked target moved under the pointer (scroll, resize). Keeps the
    /// ramp where it is; does nothing while idle.
    pub fn retarget(&mut self, rect: TargetRect) {
        if let Some(target) = self.target.as_mut() {
            *target = rect;
        }
    }

    /// Pointer left the target: release the corners and resume the spin.
    pub fn leave(&mut self) {
        self.target = None;
        self.strength = 0.0;
        self.corners = idle_corners(&self.cfg);
        self.rotation = self.rotation.rem_euclid(360.0);
    }

    pub fn tick(&mut self, dt_sec: f32) {
        match self.target {
            Some(rect) => {
                let ramp = self.cfg.hover_ramp_sec;
                self.strength = if ramp > 0.0 {
                    (self.strength + dt_sec / ramp).min(1.0)
                } else {
                    1.0
                };
                let goal = target_corners(&self.cfg, &rect, self.position);
                for (c, g) in self.corners.iter_mut().zip(goal.iter()) {
                    *c += (*g - *c) * self.strength;
                }
            }
            None => {
                if self.cfg.spin_period_sec > 0.0 {
                    self.rotation = (self.rotation + 360.0 * dt_sec / self.cfg.spin_period_sec)
                        .rem_euclid(360.0);
                }
            }
        }
    }
}

/// Touch devices and small screens get the native cursor.
pub fn cursor_enabled(has_touch: bool, viewport_width: f64, mobile_user_agent: bool) -> bool {
    !((has_touch && viewport_width <= 768.0) || mobile_user_agent)
}

pub fn is_mobile_user_agent(ua: &str) -> bool {
    let ua = ua.to_ascii_lowercase();
    [
        "android",
        "webos",
        "iphone",
        "ipad",
        "ipod",
        "blackberry",
        "iemobile",
        "opera mini",
    ]
    .iter()
    .any(|needle| ua.contains(needle))
}
