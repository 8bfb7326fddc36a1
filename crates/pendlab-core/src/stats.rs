//! Derived physical quantities published to the UI.

use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

use crate::{SimulationConfig, SimulationState};

/// Stateless snapshot of derived quantities.
///
/// Recomputed from the current state every tick (paused ticks included, so
/// the UI shows a frozen-but-consistent view); never stored long-term.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationStats {
    /// Small-angle period `2π·√(L/g)` (s). A theoretical reference value,
    /// deliberately independent of the measured motion — no zero-crossing
    /// period measurement is performed.
    pub period: f64,
    /// Largest linear bob speed since the last reset (m/s).
    pub max_velocity: f64,
    /// Kinetic energy of the bob (J).
    pub kinetic_energy: f64,
    /// Potential energy above the lowest point of the swing (J).
    pub potential_energy: f64,
    /// Total mechanical energy (J).
    pub total_energy: f64,
}

impl SimulationStats {
    /// Pure function of the current state and configuration.
    pub fn compute(state: &SimulationState, config: &SimulationConfig) -> Self {
        let height = config.length * (1.0 - state.angle.cos());
        let potential_energy = config.mass * config.gravity * height;

        let linear_velocity = state.angular_velocity * config.length;
        let kinetic_energy = 0.5 * config.mass * linear_velocity * linear_velocity;

        let period = TAU * (config.length / config.gravity).sqrt();

        Self {
            period,
            max_velocity: state.max_observed_velocity,
            kinetic_energy,
            potential_energy,
            total_energy: kinetic_energy + potential_energy,
        }
    }
}
