use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Time elapsed since the previous frame tick, in seconds.
    pub dt: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Frame clock producing `FrameTime` snapshots.
///
/// Delta time is clamped so an animation never jumps across most of its
/// duration after the window was minimized or the process was stopped in a
/// debugger.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    /// Creates a clock with the default clamps (0.1 ms .. 100 ms).
    pub fn new() -> Self {
        Self::with_clamps(Duration::from_micros(100), Duration::from_millis(100))
    }

    /// Creates a clock with custom delta-time clamps.
    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        Self {
            last: Instant::now(),
            frame_index: 0,
            dt_min,
            dt_max,
        }
    }

    /// Resets the clock baseline, e.g. after the surface was reconfigured.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    /// Advances the clock to the current instant.
    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    /// Advances the clock to `now`.
    pub fn tick_at(&mut self, now: Instant) -> FrameTime {
        let dt = now
            .saturating_duration_since(self.last)
            .clamp(self.dt_min, self.dt_max);

        self.last = now;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            now,
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_reports_elapsed_time() {
        let mut clock = FrameClock::new();
        let start = Instant::now() + Duration::from_millis(1);
        clock.tick_at(start);
        let ft = clock.tick_at(start + Duration::from_millis(16));
        assert!((ft.dt - 0.016).abs() < 1e-6);
        assert_eq!(ft.frame_index, 1);
    }

    #[test]
    fn tick_clamps_long_stalls() {
        let mut clock = FrameClock::with_clamps(Duration::from_millis(1), Duration::from_millis(50));
        let start = Instant::now() + Duration::from_millis(1);
        clock.tick_at(start);
        let ft = clock.tick_at(start + Duration::from_secs(3));
        assert!((ft.dt - 0.05).abs() < 1e-6);
    }

    #[test]
    fn tick_clamps_zero_dt_to_minimum() {
        let mut clock = FrameClock::with_clamps(Duration::from_millis(1), Duration::from_millis(50));
        let start = Instant::now() + Duration::from_millis(1);
        clock.tick_at(start);
        let ft = clock.tick_at(start);
        assert!((ft.dt - 0.001).abs() < 1e-6);
    }
}
