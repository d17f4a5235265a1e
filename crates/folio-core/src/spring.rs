use crate::constants::*;

/// Mass/spring/damper coefficients for the progress filter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringParams {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
    pub rest_delta: f32,
    pub rest_speed: f32,
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            stiffness: SPRING_STIFFNESS,
            damping: SPRING_DAMPING,
            mass: SPRING_MASS,
            rest_delta: SPRING_REST_DELTA,
            rest_speed: SPRING_REST_SPEED,
        }
    }
}

impl SpringParams {
    /// 1.0 is critical; below that the filter rings.
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

/// Second-order filter tracking a target inside `[0, 1]`.
///
/// Integrated with fixed semi-implicit Euler substeps so the result does not
/// depend on frame rate. Position is held inside the unit interval.
#[derive(Clone, Debug)]
pub struct Spring {
    pub position: f32,
    pub velocity: f32,
    pub target: f32,
    pub params: SpringParams,
}

impl Default for Spring {
    fn default() -> Self {
        Self::new(SpringParams::default())
    }
}

impl Spring {
    pub fn new(params: SpringParams) -> Self {
        Self {
            position: 0.0,
            velocity: 0.0,
            target: 0.0,
            params,
        }
    }

    #[inline]
    pub fn set_target(&mut self, target: f32) {
        self.target = target.clamp(0.0, 1.0);
    }

    pub fn is_at_rest(&self) -> bool {
        self.position == self.target && self.velocity == 0.0
    }

    /// Advance by `dt_sec` and return the new position.
    pub fn step(&mut self, dt_sec: f32) -> f32 {
        if dt_sec.is_nan() || dt_sec <= 0.0 || self.is_at_rest() {
            return self.position;
        }
        let dt = dt_sec.min(MAX_FRAME_DT_SEC);
        let substeps = (dt / SPRING_SUBSTEP_SEC).ceil().max(1.0) as u32;
        let h = dt / substeps as f32;
        let p = self.params;
        for _ in 0..substeps {
            let force = p.stiffness * (self.target - self.position) - p.damping * self.velocity;
            self.velocity += force / p.mass * h;
            self.position += self.velocity * h;
            if self.position < 0.0 || self.position > 1.0 {
                self.position = self.position.clamp(0.0, 1.0);
                self.velocity = 0.0;
            }
        }
        if (self.target - self.position).abs() < p.rest_delta && self.velocity.abs() < p.rest_speed
        {
            self.position = self.target;
            self.velocity = 0.0;
        }
        self.position
    }
}
