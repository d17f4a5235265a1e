use crate::constants::{
    FIRST_NAME, LAST_NAME, MIN_SPRING_DAMPING_RATIO, SENSITIVITY_DIVISOR, SETTLE_DELAY_MS,
};
use crate::layout::{NameLayout, StyleRule};
use crate::spring::SpringParams;
use std::time::Duration;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("sensitivity divisor must be finite and positive, got {0}")]
    Sensitivity(f32),
    #[error("spring {name} must be finite and non-negative, got {value}")]
    SpringCoefficient { name: &'static str, value: f32 },
    #[error("spring stiffness must be positive, got {0}")]
    SpringStiffness(f32),
    #[error("spring mass must be positive, got {0}")]
    SpringMass(f32),
    #[error("spring damping ratio {ratio} is below {min}; the filter would ring")]
    Underdamped { ratio: f32, min: f32 },
    #[error("display name is empty")]
    EmptyName,
}

/// Options recognised by the entry sequence.
#[derive(Clone, Debug)]
pub struct SequencerConfig {
    /// Device scroll units that map to a full 0..1 sweep.
    pub sensitivity: f32,
    pub settle_delay: Duration,
    pub spring: SpringParams,
    pub name: NameLayout,
    pub reduced_motion: bool,
}

impl Default for SequencerConfig {
    fn default() -> Self {
        Self {
            sensitivity: SENSITIVITY_DIVISOR,
            settle_delay: Duration::from_millis(SETTLE_DELAY_MS),
            spring: SpringParams::default(),
            name: NameLayout::new(FIRST_NAME, LAST_NAME),
            reduced_motion: false,
        }
    }
}

impl SequencerConfig {
    pub fn with_style_rule(mut self, rule: StyleRule) -> Self {
        self.name.rule = rule;
        self
    }

    /// The spring must settle: positive stiffness and mass, and a damping
    /// ratio of at least [`MIN_SPRING_DAMPING_RATIO`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.sensitivity.is_finite() || self.sensitivity <= 0.0 {
            return Err(ConfigError::Sensitivity(self.sensitivity));
        }
        let s = &self.spring;
        for (name, value) in [
            ("stiffness", s.stiffness),
            ("damping", s.damping),
            ("rest_delta", s.rest_delta),
            ("rest_speed", s.rest_speed),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::SpringCoefficient { name, value });
            }
        }
        if s.stiffness <= 0.0 {
            return Err(ConfigError::SpringStiffness(s.stiffness));
        }
        if !s.mass.is_finite() || s.mass <= 0.0 {
            return Err(ConfigError::SpringMass(s.mass));
        }
        let ratio = s.damping_ratio();
        if ratio < MIN_SPRING_DAMPING_RATIO {
            return Err(ConfigError::Underdamped {
                ratio,
                min: MIN_SPRING_DAMPING_RATIO,
            });
        }
        if self.name.first.trim().is_empty() && self.name.last.trim().is_empty() {
            return Err(ConfigError::EmptyName);
        }
        Ok(())
    }
}
