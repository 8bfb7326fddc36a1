//! Fixed-timestep integration of the damped nonlinear pendulum.
//!
//! Semi-implicit (symplectic) Euler: the velocity update happens first and
//! the position update uses the already-updated velocity, which keeps the
//! total energy bounded over long undamped runs where plain explicit Euler
//! drifts upward.

use crate::{SimulationConfig, SimulationState, DT, HISTORY_WINDOW};

/// Cap on the wall-clock time consumed by one measured-delta frame (s).
/// A backgrounded tab can report multi-second deltas; integrating them all
/// at once would freeze the page in a catch-up loop.
const MAX_FRAME_SECONDS: f64 = 0.25;

/// Advance the pendulum by one fixed `DT` step.
///
/// The torque equation is mass-independent:
/// `α = -(g / max(0.1, L)) · sin(θ) - damping · ω`.
/// Non-positive or non-finite gravity is deliberately not guarded here; it
/// propagates through the state as-is (validation belongs at the
/// configuration boundary, see [`SimulationConfig::validate`]).
///
/// Side effects: updates the max-velocity watermark and appends the new
/// `(elapsed_time, angle)` sample to the history, evicting entries that
/// fell out of the trailing window.
pub fn step(state: &mut SimulationState, config: &SimulationConfig) {
    let gravity_term = -(config.gravity / config.effective_length()) * state.angle.sin();
    let damping_term = -config.damping * state.angular_velocity;
    state.angular_acceleration = gravity_term + damping_term;

    // Velocity first, then position with the updated velocity.
    state.angular_velocity += state.angular_acceleration * DT;
    state.angle += state.angular_velocity * DT;
    state.elapsed_time += DT;

    let linear_speed = (state.angular_velocity * config.length).abs();
    if linear_speed > state.max_observed_velocity {
        state.max_observed_velocity = linear_speed;
    }

    state.history.push(state.elapsed_time, state.angle);
    state
        .history
        .evict_before(state.elapsed_time - HISTORY_WINDOW);
}

/// Advance by measured wall-clock time instead of the fixed frame cadence.
///
/// Splits `frame_seconds` into whole `DT` substeps and carries the remainder
/// in `carry` for the next frame, so the physics step itself is identical to
/// [`step`]. Returns the number of substeps taken.
///
/// This is the explicit frame-rate-independent mode; the default lab
/// behavior stays one `DT` per frame regardless of wall-clock time.
pub fn step_measured(
    state: &mut SimulationState,
    config: &SimulationConfig,
    carry: &mut f64,
    frame_seconds: f64,
) -> u32 {
    *carry += frame_seconds.clamp(0.0, MAX_FRAME_SECONDS);
    let mut steps = 0;
    while *carry >= DT {
        step(state, config);
        *carry -= DT;
        steps += 1;
    }
    steps
}
