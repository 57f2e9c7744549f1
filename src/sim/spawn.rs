//! Time-gated enemy population control

use serde::{Deserialize, Serialize};

/// Spawn timer and spawned-count bookkeeping for one level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnController {
    /// Seconds accumulated since the last timed spawn
    pub timer: f32,
    pub interval: f32,
    /// Enemies spawned so far (initial population included)
    pub spawned: u32,
    pub cap: u32,
}

impl SpawnController {
    pub fn new(interval: f32, cap: u32, initial: u32) -> Self {
        Self {
            timer: 0.0,
            interval,
            spawned: initial.min(cap),
            cap,
        }
    }

    /// Accumulate `dt`; returns true when a spawn is due.
    ///
    /// The caller must follow a `true` with `record_spawn` or `skip_spawn`.
    pub fn advance(&mut self, dt: f32) -> bool {
        self.timer += dt;
        self.timer >= self.interval && self.spawned < self.cap
    }

    /// A spawn happened: reset the timer and count it
    pub fn record_spawn(&mut self) {
        self.timer = 0.0;
        self.spawned = (self.spawned + 1).min(self.cap);
    }

    /// A due spawn could not be placed: wait another interval
    pub fn skip_spawn(&mut self) {
        self.timer = 0.0;
    }

    /// Every enemy that will ever spawn has spawned
    pub fn exhausted(&self) -> bool {
        self.spawned >= self.cap
    }
}
