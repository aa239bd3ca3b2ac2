//! Character-by-character text reveal for the hero tagline.

use crate::core::{Countdown, FixedInterval};

/// Seconds between characters when no interval is given
pub const DEFAULT_INTERVAL: f32 = 0.08;

pub const HERO_INTERVAL: f32 = 0.06;
pub const HERO_DELAY: f32 = 0.8;
pub const HERO_TAGLINE: &str = "Full Stack Rust Engineer | Critical Thinker | Problem Solver";

/// Reveals `text` one character per interval once the start delay has passed
///
/// The first character appears the moment the delay ends.
#[derive(Debug, Clone)]
pub struct Typewriter {
    text: String,
    char_count: usize,
    revealed: usize,
    delay: Countdown,
    interval: FixedInterval,
}

impl Typewriter {
    pub fn new(text: impl Into<String>, interval: f32) -> Self {
        let text = text.into();
        let char_count = text.chars().count();
        let mut delay = Countdown::new(0.0);
        delay.start();
        Self {
            text,
            char_count,
            revealed: 0,
            delay,
            interval: FixedInterval::new(interval),
        }
    }

    /// The homepage tagline: 60 ms per character after 800 ms
    pub fn hero() -> Self {
        Self::new(HERO_TAGLINE, HERO_INTERVAL).with_delay(HERO_DELAY)
    }

    pub fn with_delay(mut self, seconds: f32) -> Self {
        self.delay = Countdown::new(seconds);
        self.delay.start();
        self
    }

    /// Advance by `delta` seconds; returns how many characters appeared
    pub fn advance(&mut self, delta: f32) -> usize {
        if self.is_complete() {
            return 0;
        }

        let before = self.revealed;
        let mut typed = 0;
        let mut budget = delta;

        if self.delay.is_active() {
            match self.delay.tick(delta) {
                Some(overshoot) => {
                    typed = 1;
                    budget = overshoot;
                }
                None => return 0,
            }
        }

        typed += self.interval.tick(budget) as usize;
        self.revealed = (self.revealed + typed).min(self.char_count);
        self.revealed - before
    }

    /// The revealed prefix
    pub fn visible(&self) -> &str {
        match self.text.char_indices().nth(self.revealed) {
            Some((end, _)) => &self.text[..end],
            None => &self.text,
        }
    }

    pub fn revealed(&self) -> usize {
        self.revealed
    }

    pub fn is_complete(&self) -> bool {
        self.revealed >= self.char_count
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Default for Typewriter {
    fn default() -> Self {
        Self::new(String::new(), DEFAULT_INTERVAL)
    }
}
