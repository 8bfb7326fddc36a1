//! Rolling time-window of angle samples feeding the waveform display.

use std::collections::VecDeque;

/// One recorded (time, angle) pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Simulation time at which the sample was taken (s).
    pub time: f64,
    /// Angle from the vertical (radians).
    pub angle: f64,
}

/// FIFO buffer retaining samples inside a trailing time window.
///
/// Samples arrive in non-decreasing time order and are only ever removed
/// from the front, so eviction is amortized O(1) per tick. The buffer is
/// never reordered and carries no derived statistics; it exists solely for
/// waveform plotting.
#[derive(Debug, Clone, Default)]
pub struct HistoryBuffer {
    samples: VecDeque<Sample>,
}

impl HistoryBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sample. Callers must push in non-decreasing time order.
    pub fn push(&mut self, time: f64, angle: f64) {
        self.samples.push_back(Sample { time, angle });
    }

    /// Drop expired samples from the front (strictly older than `cutoff`).
    pub fn evict_before(&mut self, cutoff: f64) {
        while self.samples.front().is_some_and(|s| s.time < cutoff) {
            self.samples.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Samples in increasing time order, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Sample> {
        self.samples.iter()
    }

    /// Most recent sample, if any.
    pub fn latest(&self) -> Option<&Sample> {
        self.samples.back()
    }

    pub fn oldest(&self) -> Option<&Sample> {
        self.samples.front()
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }
}
