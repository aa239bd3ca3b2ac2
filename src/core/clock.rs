/// Seconds-equivalent added to the clock on every tick
pub const TICK_STEP: f64 = 0.01;

/// Fixed-step animation clock
///
/// Advances by a constant step per tick, independent of wall time, so motion
/// depends only on how many frames have run.
#[derive(Debug, Clone, Copy)]
pub struct TickClock {
    time: f64,
    step: f64,
    ticks: u64,
}

impl TickClock {
    /// Create a clock at time zero
    pub fn new(step: f64) -> Self {
        Self {
            time: 0.0,
            step,
            ticks: 0,
        }
    }

    /// Advance one step, returning the new time
    pub fn tick(&mut self) -> f64 {
        self.ticks += 1;
        self.time += self.step;
        self.time
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

impl Default for TickClock {
    fn default() -> Self {
        Self::new(TICK_STEP)
    }
}
