//! Platform contracts
//!
//! Input and time come from the outside world. The frame driver only sees
//! these traits, so a windowed backend and the headless one are
//! interchangeable.

pub mod headless;

use std::time::{Duration, Instant};

use crate::input::InputFrame;
use crate::sim::GameState;

/// Source of per-frame input
pub trait InputSource {
    /// Look at the state before polling (only synthetic sources care)
    fn observe(&mut self, _state: &GameState) {}

    fn poll(&mut self) -> InputFrame;
}

/// Frame timing
pub trait FrameClock {
    /// Seconds since the previous call
    fn delta(&mut self) -> f32;

    /// Block for `seconds`
    fn wait(&mut self, seconds: f32);
}

/// Wall clock timing
#[derive(Debug, Clone)]
pub struct SystemClock {
    last: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self {
            last: Instant::now(),
        }
    }
}

impl FrameClock for SystemClock {
    fn delta(&mut self) -> f32 {
        let now = Instant::now();
        let dt = (now - self.last).as_secs_f32();
        self.last = now;
        dt
    }

    fn wait(&mut self, seconds: f32) {
        if seconds > 0.0 {
            std::thread::sleep(Duration::from_secs_f32(seconds));
        }
        self.last = Instant::now();
    }
}

/// Constant timestep; waits are recorded instead of slept
#[derive(Debug, Clone, PartialEq)]
pub struct FixedClock {
    pub dt: f32,
    pub waited: f32,
}

impl FixedClock {
    pub fn new(dt: f32) -> Self {
        Self { dt, waited: 0.0 }
    }
}

impl FrameClock for FixedClock {
    fn delta(&mut self) -> f32 {
        self.dt
    }

    fn wait(&mut self, seconds: f32) {
        self.waited += seconds.max(0.0);
    }
}
