//! Damped free swing — prints the telemetry the lab UI would receive.

use pendlab_core::{Simulation, SimulationConfig, DT};

fn main() {
    let config = SimulationConfig::default();
    let mut sim = Simulation::new(config);

    let stats = sim.current_stats();
    println!("Theoretical period: {:.4} s", stats.period);
    println!("Initial energy:     {:.4} J", stats.total_energy);
    println!();
    println!("time(s)   angle(rad)  omega(rad/s)  KE(J)    PE(J)    total(J)");
    println!("─────────────────────────────────────────────────────────────────");

    // 10 seconds of 60 Hz frames; print whenever the ~10 Hz gate fires.
    let total_ticks = (10.0 / DT) as usize;
    for _ in 0..total_ticks {
        if let Some(stats) = sim.tick(&config) {
            let state = sim.state();
            println!(
                "{:7.2}   {:9.5}   {:10.5}   {:6.4}   {:6.4}   {:6.4}",
                state.elapsed_time,
                state.angle,
                state.angular_velocity,
                stats.kinetic_energy,
                stats.potential_energy,
                stats.total_energy,
            );
        }
    }

    println!();
    println!(
        "Max bob speed observed: {:.4} m/s over {} samples in the 5 s window",
        sim.state().max_observed_velocity,
        sim.state().history.len(),
    );
}
