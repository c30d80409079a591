//! Simulation time management

/// Fixed-step simulation clock
///
/// Every displayed frame advances the clock by exactly one step; there is no
/// accumulator decoupling simulation from display refresh. Time is derived
/// from the frame count in `f64` so it neither drifts nor stalls on long runs.
#[derive(Debug, Clone)]
pub struct SimulationClock {
    time_step: f32,
    frame_count: u64,
}

impl SimulationClock {
    /// Create a clock at time zero with the given step (seconds)
    pub fn new(time_step: f32) -> Self {
        Self {
            time_step,
            frame_count: 0,
        }
    }

    /// Advance by one step and return the new simulation time
    pub fn advance(&mut self) -> f64 {
        self.frame_count += 1;
        self.total_time()
    }

    /// Get the fixed step in seconds
    pub fn time_step(&self) -> f32 {
        self.time_step
    }

    /// Get the current simulation time in seconds
    pub fn total_time(&self) -> f64 {
        self.frame_count as f64 * f64::from(self.time_step)
    }

    /// Get the number of steps taken so far
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::new(1.0 / 60.0)
    }
}
