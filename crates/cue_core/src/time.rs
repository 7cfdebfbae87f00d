//! Simulation time
//!
//! Fixed-rate tick clock that supplies the per-tick delta handed to behaviors.
//! Behaviors never read a wall clock; everything timed advances by this delta.

/// Default simulation tick rate (60 Hz = 16.666ms per tick)
pub const TICK_RATE_HZ: u32 = 60;

/// Simulation time tracker
#[derive(Debug, Clone)]
pub struct SimulationTime {
    tick_rate_hz: u32,
    tick_count: u64,
    elapsed: f64,
}

impl SimulationTime {
    pub fn new(tick_rate_hz: u32) -> Self {
        Self {
            tick_rate_hz: tick_rate_hz.max(1),
            tick_count: 0,
            elapsed: 0.0,
        }
    }

    /// Seconds covered by one tick.
    pub fn delta(&self) -> f64 {
        1.0 / self.tick_rate_hz as f64
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Advance by one fixed tick and return the delta that was applied.
    pub fn advance_tick(&mut self) -> f64 {
        let delta = self.delta();
        self.advance_by(delta);
        delta
    }

    /// Advance by an externally measured delta (variable-rate hosts).
    pub fn advance_by(&mut self, delta: f64) {
        self.tick_count += 1;
        self.elapsed += delta;
    }

    /// Total simulated seconds.
    pub fn total_seconds(&self) -> f64 {
        self.elapsed
    }
}

impl Default for SimulationTime {
    fn default() -> Self {
        Self::new(TICK_RATE_HZ)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_ticks_accumulate() {
        let mut time = SimulationTime::new(4);
        assert_eq!(time.delta(), 0.25);
        for _ in 0..4 {
            time.advance_tick();
        }
        assert_eq!(time.tick_count(), 4);
        assert_eq!(time.total_seconds(), 1.0);
    }

    #[test]
    fn zero_rate_is_clamped() {
        let time = SimulationTime::new(0);
        assert_eq!(time.delta(), 1.0);
    }
}
