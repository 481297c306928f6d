//! Frame drivers that call into a [`CyclotronWorld`] at a cadence of their choosing.
//!
//! The core never schedules itself; a host pairs a [`FrameClock`] with a
//! [`FrameDriver`] (or calls [`CyclotronWorld::step`] directly from its own loop).

use std::time::Instant;

use crate::{
    config::DEFAULT_FRAME_BUDGET_MS,
    error::CyclotronResult,
    utils::logging::{warn_if_frame_budget_exceeded, ScopedTimer},
    world::CyclotronWorld,
};

/// Source of per-frame wall-clock deltas (seconds).
pub trait FrameClock {
    fn delta(&mut self) -> f64;
}

/// Constant delta, for deterministic hosts and tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    pub delta: f64,
}

impl FixedClock {
    pub fn new(delta: f64) -> Self {
        Self { delta }
    }
}

impl FrameClock for FixedClock {
    fn delta(&mut self) -> f64 {
        self.delta
    }
}

/// Measures real time elapsed between frames.
#[derive(Debug, Clone, Copy)]
pub struct WallClock {
    last: Instant,
}

impl Default for WallClock {
    fn default() -> Self {
        Self::new()
    }
}

impl WallClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }
}

impl FrameClock for WallClock {
    fn delta(&mut self) -> f64 {
        let now = Instant::now();
        let delta = now.duration_since(self.last).as_secs_f64();
        self.last = now;
        delta
    }
}

/// Summary of one [`FrameDriver::run`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub frames: usize,
    pub turns_emitted: usize,
    pub slow_frames: usize,
}

#[derive(Debug, Clone, Copy)]
pub struct FrameDriver {
    pub budget_ms: f32,
}

impl Default for FrameDriver {
    fn default() -> Self {
        Self {
            budget_ms: DEFAULT_FRAME_BUDGET_MS,
        }
    }
}

impl FrameDriver {
    pub fn new(budget_ms: f32) -> Self {
        Self { budget_ms }
    }

    /// Steps `world` once per frame until it stops running or `max_frames` is reached.
    ///
    /// A halt outside the physical regime ends the run with a report; the
    /// world's status carries the reason.
    pub fn run<C: FrameClock>(
        &self,
        world: &mut CyclotronWorld,
        clock: &mut C,
        max_frames: usize,
    ) -> CyclotronResult<FrameReport> {
        let mut report = FrameReport::default();
        while report.frames < max_frames && world.is_running() {
            let real_dt = clock.delta();
            let timer = ScopedTimer::new("driver::frame");
            let stepped = world.step(real_dt);
            if warn_if_frame_budget_exceeded(report.frames, timer.elapsed(), self.budget_ms) {
                report.slow_frames += 1;
            }
            report.frames += 1;
            match stepped {
                Ok(Some(_)) => report.turns_emitted += 1,
                Ok(None) => {}
                Err(err) if err.is_terminal() => break,
                Err(err) => return Err(err),
            }
        }
        Ok(report)
    }
}
