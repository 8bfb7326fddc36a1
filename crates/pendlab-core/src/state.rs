//! Simulation state — mutable per-tick data.

use crate::history::HistoryBuffer;
use crate::{SimulationConfig, Vec2};

/// Mutable simulation state.
///
/// Written only by the integrator and the reset policy inside a tick;
/// the renderer and stats consumer read it between ticks.
#[derive(Debug, Clone)]
pub struct SimulationState {
    /// Angle from the vertical (radians).
    pub angle: f64,
    /// Angular velocity (rad/s).
    pub angular_velocity: f64,
    /// Angular acceleration (rad/s²). Recomputed every step; only the
    /// current tick's value is meaningful.
    pub angular_acceleration: f64,
    /// Simulation time (s). Advances only while unpaused.
    pub elapsed_time: f64,
    /// Largest linear bob speed observed since the last reset (m/s).
    pub max_observed_velocity: f64,
    /// Rolling (time, angle) window for the waveform display.
    pub history: HistoryBuffer,
}

impl SimulationState {
    /// Fresh state seeded from the configured release angle, at rest.
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self {
            angle: config.initial_angle_rad(),
            angular_velocity: 0.0,
            angular_acceleration: 0.0,
            elapsed_time: 0.0,
            max_observed_velocity: 0.0,
            history: HistoryBuffer::new(),
        }
    }

    /// Bob position relative to the pivot, in meters.
    ///
    /// Screen convention: x grows to the right, y grows downward, so the
    /// bob hangs at `(0, length)` when the angle is zero.
    pub fn bob_position(&self, length: f64) -> Vec2 {
        Vec2::new(length * self.angle.sin(), length * self.angle.cos())
    }
}
