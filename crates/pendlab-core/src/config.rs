//! Pendulum configuration — owned by the external UI, read as an immutable
//! snapshot once per tick.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::MIN_LENGTH;

/// Slider ranges used by the lab UI. Validation shares them so the control
/// panel and the engine agree on what a sane parameter looks like.
pub const GRAVITY_RANGE: RangeInclusive<f64> = 1.6..=25.0;
pub const LENGTH_RANGE: RangeInclusive<f64> = 0.1..=5.0;
pub const MASS_RANGE: RangeInclusive<f64> = 0.1..=10.0;
pub const ANGLE_RANGE_DEG: RangeInclusive<f64> = -90.0..=90.0;
pub const DAMPING_RANGE: RangeInclusive<f64> = 0.0..=1.0;

/// Named gravity presets (m/s²).
pub const GRAVITY_MOON: f64 = 1.6;
pub const GRAVITY_EARTH: f64 = 9.8;
pub const GRAVITY_JUPITER: f64 = 24.8;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("non-finite {0}")]
    NonFinite(&'static str),

    #[error("gravity must be positive, got {0}")]
    NonPositiveGravity(f64),

    #[error("length must be positive, got {0}")]
    NonPositiveLength(f64),

    #[error("mass must be positive, got {0}")]
    NonPositiveMass(f64),

    #[error("damping must be non-negative, got {0}")]
    NegativeDamping(f64),
}

/// Pendulum parameters for one tick.
///
/// Mass affects only the energy magnitudes and the rendered bob radius; it
/// cancels out of the torque equation and never influences the trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Gravitational acceleration (m/s²).
    pub gravity: f64,
    /// String length (m).
    pub length: f64,
    /// Bob mass (kg).
    pub mass: f64,
    /// Release angle (degrees).
    #[serde(rename = "initialAngle")]
    pub initial_angle_deg: f64,
    /// Viscous damping coefficient.
    pub damping: f64,
    /// Freezes the simulation while true.
    pub paused: bool,
}

impl Default for SimulationConfig {
    /// The lab's opening experiment: Earth gravity, 2 m string, light damping.
    fn default() -> Self {
        Self {
            gravity: GRAVITY_EARTH,
            length: 2.0,
            mass: 1.0,
            initial_angle_deg: 30.0,
            damping: 0.05,
            paused: false,
        }
    }
}

impl SimulationConfig {
    /// Whether switching from `prev` to `self` requires re-seeding the state.
    ///
    /// Exact numeric inequality on the structural parameters; `damping` and
    /// `paused` edits apply in place without a reset.
    pub fn needs_reset(&self, prev: &Self) -> bool {
        self.length != prev.length
            || self.initial_angle_deg != prev.initial_angle_deg
            || self.gravity != prev.gravity
            || self.mass != prev.mass
    }

    /// Release angle in radians.
    pub fn initial_angle_rad(&self) -> f64 {
        self.initial_angle_deg.to_radians()
    }

    /// Length with the singularity floor applied.
    pub fn effective_length(&self) -> f64 {
        self.length.max(MIN_LENGTH)
    }

    /// Check the snapshot for physically degenerate parameters.
    ///
    /// The integrator itself never guards these (non-finite inputs propagate
    /// through integration unchanged, matching the lab's original behavior);
    /// callers are expected to validate at the configuration boundary.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("gravity", self.gravity),
            ("length", self.length),
            ("mass", self.mass),
            ("initial angle", self.initial_angle_deg),
            ("damping", self.damping),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite(name));
            }
        }
        if self.gravity <= 0.0 {
            return Err(ConfigError::NonPositiveGravity(self.gravity));
        }
        if self.length <= 0.0 {
            return Err(ConfigError::NonPositiveLength(self.length));
        }
        if self.mass <= 0.0 {
            return Err(ConfigError::NonPositiveMass(self.mass));
        }
        if self.damping < 0.0 {
            return Err(ConfigError::NegativeDamping(self.damping));
        }
        Ok(())
    }
}
