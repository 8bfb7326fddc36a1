//! pendlab-core — physics and telemetry engine for the pendulum lab.
//!
//! Advances a damped simple pendulum by one fixed timestep per host frame,
//! keeps a rolling window of angle samples for the waveform display, and
//! derives the energy/period statistics published to the UI.
//!
//! The crate is host-agnostic: the browser front-end (`pendlab-web`) drives
//! [`Simulation::tick`] from its frame callback and reads the state snapshot
//! back for rendering.

pub mod config;
pub mod history;
pub mod integrator;
pub mod publisher;
pub mod sim;
pub mod state;
pub mod stats;

pub use config::{ConfigError, SimulationConfig};
pub use history::{HistoryBuffer, Sample};
pub use publisher::StatsPublisher;
pub use sim::Simulation;
pub use state::SimulationState;
pub use stats::SimulationStats;

use nalgebra as na;

/// 2D vector alias.
pub type Vec2 = na::Vector2<f64>;

/// Fixed integration timestep (s). Each tick assumes one 60 Hz frame;
/// deviation from that cadence changes the effective simulation speed.
pub const DT: f64 = 1.0 / 60.0;

/// Trailing window retained by the history buffer (s).
pub const HISTORY_WINDOW: f64 = 5.0;

/// Floor on pendulum length (m). Guards the division in the torque term.
pub const MIN_LENGTH: f64 = 0.1;
