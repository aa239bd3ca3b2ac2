/// Self-contained timers - accumulate delta time and decide when to fire

/// Fixed rate timer - fires once per interval, carrying the remainder
#[derive(Debug, Clone, Copy)]
pub struct FixedInterval {
    pub interval: f32,
    pub accumulator: f32,
}

impl FixedInterval {
    /// Create timer that fires every `interval` seconds
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            accumulator: 0.0,
        }
    }

    /// Update with delta, returns how many intervals elapsed
    pub fn tick(&mut self, delta: f32) -> u32 {
        self.accumulator += delta;

        let fired = (self.accumulator / self.interval).floor();
        self.accumulator -= fired * self.interval;
        fired as u32
    }
}

/// Countdown timer - fires once after duration
#[derive(Debug, Clone, Copy)]
pub struct Countdown {
    duration: f32,
    elapsed: f32,
    active: bool,
}

impl Countdown {
    /// Create inactive countdown
    pub fn new(duration: f32) -> Self {
        Self {
            duration,
            elapsed: 0.0,
            active: false,
        }
    }

    /// Start countdown
    pub fn start(&mut self) {
        self.elapsed = 0.0;
        self.active = true;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Tick with delta, returns the time left over past completion
    pub fn tick(&mut self, delta: f32) -> Option<f32> {
        if !self.active {
            return None;
        }

        self.elapsed += delta;

        if self.elapsed >= self.duration {
            self.active = false;
            Some(self.elapsed - self.duration)
        } else {
            None
        }
    }
}
