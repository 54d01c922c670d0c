//! Simulation clock handed to sub-controllers.

use serde::{Deserialize, Serialize};

/// Fixed-rate simulation time: a tick counter and the rate it advances at.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameTime {
    pub tick: u32,
    /// Ticks per second. Zero is treated as "stopped".
    pub tick_rate: u32,
}

impl GameTime {
    pub fn new(tick_rate: u32) -> Self {
        Self { tick: 0, tick_rate }
    }

    /// Seconds per tick, or 0 for a stopped clock.
    #[inline]
    pub fn tick_duration(&self) -> f32 {
        if self.tick_rate == 0 {
            0.0
        } else {
            1.0 / self.tick_rate as f32
        }
    }

    #[inline]
    pub fn advance(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }
}

impl Default for GameTime {
    fn default() -> Self {
        Self::new(60)
    }
}
