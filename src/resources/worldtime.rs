//! Simulation time resource.
//!
//! The main loop advances the simulation in fixed ticks. [`WorldTime`]
//! carries the tick length and counts how many ticks ran.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldTime {
    /// Seconds simulated so far.
    pub elapsed: f32,
    /// Length of the current tick in seconds.
    pub delta: f32,
    /// Ticks run so far.
    pub frame_count: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            frame_count: 0,
        }
    }
}

/// Accumulates real frame time and hands it out in fixed-length ticks.
///
/// Keeps per-tick behavior (camera easing, movement steps) independent of
/// the render frame rate.
#[derive(Debug, Clone, Copy)]
pub struct FixedStep {
    tick: f32,
    accumulator: f32,
    max_ticks_per_frame: u32,
}

impl FixedStep {
    /// A stepper running `tick_rate` ticks per second.
    pub fn new(tick_rate: u32, max_ticks_per_frame: u32) -> Result<Self, String> {
        if tick_rate == 0 {
            return Err("Tick rate must be positive".to_string());
        }
        Ok(Self {
            tick: 1.0 / tick_rate as f32,
            accumulator: 0.0,
            max_ticks_per_frame: max_ticks_per_frame.max(1),
        })
    }

    pub fn tick(&self) -> f32 {
        self.tick
    }

    /// Add a frame's worth of time and return how many ticks are due.
    ///
    /// At most `max_ticks_per_frame` ticks are returned; time beyond that is
    /// dropped so a long stall does not trigger a burst of catch-up ticks.
    pub fn advance(&mut self, frame_time: f32) -> u32 {
        self.accumulator += frame_time.max(0.0);
        let mut ticks = 0;
        while self.accumulator >= self.tick && ticks < self.max_ticks_per_frame {
            self.accumulator -= self.tick;
            ticks += 1;
        }
        if ticks == self.max_ticks_per_frame {
            self.accumulator = self.accumulator.min(self.tick);
        }
        ticks
    }
}
