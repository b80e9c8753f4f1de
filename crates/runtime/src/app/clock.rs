use std::thread;
use std::time::{Duration, Instant};

/// Tick counter wrap bound. Effectively unreachable in real sessions
/// (over a billion years at 30 ticks per second); the wrap exists as a
/// safeguard, not a correctness feature.
pub const TICK_WRAP: u64 = 1_000_000_000_000_000_000;

/// Fixed-rate loop driver.
///
/// `tick()` sleeps off whatever remains of the frame budget and then
/// increments the tick counter. All per-entity timing in the runtime
/// (movement impulses, animation durations) is expressed in whole
/// ticks of this loop, never wall-clock time. That makes the target
/// frame rate part of game speed: raising it speeds the game up. The
/// coupling is deliberate, not an oversight to repair.
#[derive(Debug)]
pub struct FrameClock {
    frame_budget: Duration,
    last_tick: Option<Instant>,
    ticks: u64,
}

impl FrameClock {
    pub fn new(target_fps: u32) -> Self {
        let target_fps = target_fps.max(1);
        Self {
            frame_budget: Duration::from_secs_f64(1.0 / f64::from(target_fps)),
            last_tick: None,
            ticks: 0,
        }
    }

    /// Blocks until the frame budget since the previous tick has
    /// elapsed, then advances the counter.
    pub fn tick(&mut self) {
        if let Some(last) = self.last_tick {
            let elapsed = Instant::now().saturating_duration_since(last);
            let sleep = remaining_budget(elapsed, self.frame_budget);
            if sleep > Duration::ZERO {
                thread::sleep(sleep);
            }
        }
        self.last_tick = Some(Instant::now());
        self.ticks += 1;
        if self.ticks >= TICK_WRAP {
            self.ticks = 0;
        }
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn frame_budget(&self) -> Duration {
        self.frame_budget
    }

    #[cfg(test)]
    fn with_tick_count(mut self, ticks: u64) -> Self {
        self.ticks = ticks;
        self
    }
}

fn remaining_budget(elapsed: Duration, budget: Duration) -> Duration {
    if elapsed < budget {
        budget - elapsed
    } else {
        Duration::ZERO
    }
}
