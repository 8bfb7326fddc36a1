//! Throttled forwarding of stats snapshots to the external consumer.

/// Gates stats publication to roughly 10 Hz of simulated time.
///
/// The lab originally gated on `elapsed_time mod 0.1 < 0.02`, which drifts
/// with the frame cadence. This uses an explicit accumulator instead —
/// publish once accumulated unpaused sim-time since the last publish
/// reaches the interval — preserving the observed ~10 Hz cadence while
/// staying frame-rate independent. Paused ticks accumulate nothing, so no
/// publish ever fires while paused.
#[derive(Debug, Clone, Copy)]
pub struct StatsPublisher {
    interval: f64,
    accumulated: f64,
}

impl StatsPublisher {
    /// Default publish interval (s), ~10 Hz.
    pub const DEFAULT_INTERVAL: f64 = 0.1;

    pub fn new() -> Self {
        Self::with_interval(Self::DEFAULT_INTERVAL)
    }

    /// `interval` must be positive.
    pub fn with_interval(interval: f64) -> Self {
        debug_assert!(interval > 0.0);
        Self {
            // Primed so the first unpaused tick publishes immediately.
            interval,
            accumulated: interval,
        }
    }

    /// Account `dt` seconds of unpaused simulation time; true when a
    /// publish is due. At most one publish per call.
    pub fn should_publish(&mut self, dt: f64) -> bool {
        self.accumulated += dt;
        // Tolerance absorbs 6 × (1/60) summing to just under 0.1.
        if self.accumulated + 1e-9 < self.interval {
            return false;
        }
        self.accumulated = 0.0;
        true
    }

    /// Re-prime after a structural reset so the fresh state is visible to
    /// the consumer on the next unpaused tick.
    pub fn reset(&mut self) {
        self.accumulated = self.interval;
    }
}

impl Default for StatsPublisher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DT;

    #[test]
    fn first_tick_publishes_immediately() {
        let mut publisher = StatsPublisher::new();
        assert!(publisher.should_publish(DT));
    }

    #[test]
    fn publishes_every_six_ticks_at_60hz() {
        let mut publisher = StatsPublisher::new();
        publisher.should_publish(DT); // drain the primed publish

        let mut published = Vec::new();
        for tick in 0..60 {
            if publisher.should_publish(DT) {
                published.push(tick);
            }
        }
        // 0.1 s / (1/60 s) = 6 ticks between publishes.
        assert_eq!(published, vec![5, 11, 17, 23, 29, 35, 41, 47, 53, 59]);
    }

    #[test]
    fn no_accumulation_means_no_publish() {
        let mut publisher = StatsPublisher::new();
        publisher.should_publish(DT);
        for _ in 0..1000 {
            assert!(!publisher.should_publish(0.0));
        }
    }

    #[test]
    fn reset_reprimes_the_gate() {
        let mut publisher = StatsPublisher::new();
        publisher.should_publish(DT);
        assert!(!publisher.should_publish(DT));

        publisher.reset();
        assert!(publisher.should_publish(DT));
    }
}
