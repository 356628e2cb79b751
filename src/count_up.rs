// src/count_up.rs
//
// Count-up reveal of the total: discrete steps of target/steps, one per
// scheduler tick. Intermediate values are rounded up (never past the
// target); the step that reaches or passes the target shows it exactly
// and ends the animation.

use std::time::Duration;

use crate::{
    config::consts::{COUNT_UP_STEPS, COUNT_UP_TICK_MS},
    core::number::format_number,
};

#[derive(Clone, Debug, PartialEq)]
pub struct CountUp {
    target: f64,
    increment: f64,
    current: f64,
    shown: f64,
    done: bool,
}

impl CountUp {
    pub fn new(target: f64) -> Self {
        Self::with_steps(target, COUNT_UP_STEPS)
    }

    pub fn with_steps(target: f64, steps: u32) -> Self {
        let steps = steps.max(1);
        Self {
            target,
            increment: target / steps as f64,
            current: 0.0,
            shown: 0.0,
            done: false,
        }
    }

    pub fn target(&self) -> f64 { self.target }
    pub fn is_done(&self) -> bool { self.done }

    /// Value on screen right now.
    pub fn shown(&self) -> f64 { self.shown }

    pub fn text(&self) -> String { format_number(self.shown) }

    /// One scheduler tick. Returns the value to show.
    pub fn tick(&mut self) -> f64 {
        if self.done { return self.shown; }

        self.current += self.increment;
        if self.current >= self.target {
            self.shown = self.target;
            self.done = true;
        } else {
            self.shown = self.current.ceil().min(self.target);
        }
        self.shown
    }

    /// Apply `n` ticks at once (a slow frame may owe several).
    pub fn advance(&mut self, n: u32) -> f64 {
        for _ in 0..n {
            if self.done { break; }
            self.tick();
        }
        self.shown
    }
}

/// Turns frame-to-frame elapsed time into whole ticks, carrying the remainder.
#[derive(Clone, Debug)]
pub struct TickClock {
    period: Duration,
    carry: Duration,
}

impl Default for TickClock {
    fn default() -> Self {
        Self::new(Duration::from_millis(COUNT_UP_TICK_MS))
    }
}

impl TickClock {
    pub fn new(period: Duration) -> Self {
        Self { period: period.max(Duration::from_millis(1)), carry: Duration::ZERO }
    }

    pub fn due(&mut self, elapsed: Duration) -> u32 {
        let total = self.carry + elapsed;
        let n = (total.as_nanos() / self.period.as_nanos()) as u32;
        self.carry = total - self.period * n;
        n
    }
}
