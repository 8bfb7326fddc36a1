//! Per-frame tick orchestration: reset check, integrate, derive, publish.

use crate::{integrator, DT};
use crate::{SimulationConfig, SimulationState, SimulationStats, StatsPublisher};

/// The engine driven once per host frame.
///
/// Owns the simulation state, the previous configuration snapshot used by
/// the reset policy, and the stats throttle. Single writer: all mutation
/// happens inside [`tick`](Simulation::tick); readers (renderer, stats
/// consumer) observe the state between ticks.
#[derive(Debug, Clone)]
pub struct Simulation {
    state: SimulationState,
    prev_config: SimulationConfig,
    publisher: StatsPublisher,
    /// Fractional-frame remainder for the measured-delta mode.
    carry: f64,
}

impl Simulation {
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            state: SimulationState::from_config(&config),
            prev_config: config,
            publisher: StatsPublisher::new(),
            carry: 0.0,
        }
    }

    /// Read-only view of the current state.
    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    /// The configuration snapshot the last tick ran with.
    pub fn config(&self) -> &SimulationConfig {
        &self.prev_config
    }

    /// Derived quantities for the current snapshot, recomputed on demand.
    /// Valid while paused too — the frozen state yields frozen stats.
    pub fn current_stats(&self) -> SimulationStats {
        SimulationStats::compute(&self.state, &self.prev_config)
    }

    /// One frame at the assumed 60 Hz cadence.
    ///
    /// Order within the tick: structural-reset check first (runs even while
    /// paused), then — if unpaused — one fixed `DT` integration step, then
    /// the throttled stats snapshot. Returns `Some(stats)` only on the
    /// frames where the ~10 Hz publish gate fires; never while paused.
    pub fn tick(&mut self, config: &SimulationConfig) -> Option<SimulationStats> {
        self.apply_config(config);
        if config.paused {
            return None;
        }
        integrator::step(&mut self.state, config);
        self.throttled_stats(DT)
    }

    /// Frame driven by measured wall-clock time instead of the fixed
    /// cadence. Explicit alternative to [`tick`](Simulation::tick); pick one
    /// per `Simulation` and stay with it.
    pub fn tick_measured(
        &mut self,
        config: &SimulationConfig,
        frame_seconds: f64,
    ) -> Option<SimulationStats> {
        self.apply_config(config);
        if config.paused {
            // Don't bank time that passed while frozen.
            self.carry = 0.0;
            return None;
        }
        let steps =
            integrator::step_measured(&mut self.state, config, &mut self.carry, frame_seconds);
        self.throttled_stats(steps as f64 * DT)
    }

    /// Reset policy: a change to any structural parameter (length, release
    /// angle, gravity, mass) replaces the whole state before integration,
    /// regardless of the paused flag. Damping and pause edits pass through.
    fn apply_config(&mut self, config: &SimulationConfig) {
        if config.needs_reset(&self.prev_config) {
            self.state = SimulationState::from_config(config);
            self.publisher.reset();
            self.carry = 0.0;
        }
        self.prev_config = *config;
    }

    fn throttled_stats(&mut self, advanced: f64) -> Option<SimulationStats> {
        self.publisher
            .should_publish(advanced)
            .then(|| SimulationStats::compute(&self.state, &self.prev_config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn tick_publishes_at_ten_hz() {
        let config = SimulationConfig::default();
        let mut sim = Simulation::new(config);

        let mut publishes = 0;
        for _ in 0..600 {
            if sim.tick(&config).is_some() {
                publishes += 1;
            }
        }
        // 10 seconds of sim time at ~10 Hz.
        assert!((95..=101).contains(&publishes), "got {publishes}");
    }

    #[test]
    fn paused_tick_never_publishes() {
        let config = SimulationConfig {
            paused: true,
            ..SimulationConfig::default()
        };
        let mut sim = Simulation::new(config);
        for _ in 0..100 {
            assert!(sim.tick(&config).is_none());
        }
        // But the frozen snapshot still has consistent derived stats.
        let stats = sim.current_stats();
        assert!(stats.total_energy > 0.0);
        assert_eq!(stats.kinetic_energy, 0.0);
    }

    #[test]
    fn damping_edit_keeps_state_mid_swing() {
        let base = SimulationConfig::default();
        let mut sim = Simulation::new(base);
        for _ in 0..120 {
            sim.tick(&base);
        }
        let angle_before = sim.state().angle;
        let time_before = sim.state().elapsed_time;

        let edited = SimulationConfig {
            damping: 0.3,
            ..base
        };
        sim.tick(&edited);

        // No reset: time keeps running from where it was.
        assert_relative_eq!(sim.state().elapsed_time, time_before + DT);
        assert_ne!(sim.state().angle, base.initial_angle_rad());
        assert_ne!(sim.state().angle, angle_before); // still integrating
    }

    #[test]
    fn structural_edit_resets_even_while_paused() {
        let base = SimulationConfig::default();
        let mut sim = Simulation::new(base);
        for _ in 0..240 {
            sim.tick(&base);
        }
        assert!(sim.state().elapsed_time > 0.0);

        let edited = SimulationConfig {
            length: 3.0,
            paused: true,
            ..base
        };
        sim.tick(&edited);

        assert_eq!(sim.state().elapsed_time, 0.0);
        assert_eq!(sim.state().angular_velocity, 0.0);
        assert_eq!(sim.state().max_observed_velocity, 0.0);
        assert!(sim.state().history.is_empty());
        assert_relative_eq!(sim.state().angle, base.initial_angle_rad());
    }

    #[test]
    fn measured_tick_ignores_time_stalled_while_paused() {
        let running = SimulationConfig::default();
        let paused = SimulationConfig {
            paused: true,
            ..running
        };
        let mut sim = Simulation::new(running);

        sim.tick_measured(&running, 0.5 * DT); // half a frame banked
        sim.tick_measured(&paused, 3.0); // long pause, bank must clear

        let before = sim.state().elapsed_time;
        sim.tick_measured(&running, 0.4 * DT); // less than a full step
        assert_eq!(sim.state().elapsed_time, before);
    }
}
