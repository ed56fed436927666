use std::time::Duration;

use crate::easing::Easing;

/// A scalar animated from `from` to `to` over a fixed duration.
///
/// Driven by frame deltas; there is no wall-clock inside.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    duration: f32,
    elapsed: f32,
    easing: Easing,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration: duration.as_secs_f32(),
            elapsed: 0.0,
            easing,
        }
    }

    /// Advances by `dt` seconds and returns the new value.
    /// Negative or non-finite deltas are treated as zero.
    pub fn advance(&mut self, dt: f32) -> f32 {
        if dt.is_finite() && dt > 0.0 {
            self.elapsed = (self.elapsed + dt).min(self.duration);
        }
        self.value()
    }

    /// Linear progress in `[0, 1]`. A zero-length tween is always complete.
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    /// Current value. Returns `to` exactly once finished.
    pub fn value(&self) -> f32 {
        if self.is_finished() {
            return self.to;
        }
        let eased = self.easing.apply(self.progress());
        self.from + (self.to - self.from) * eased
    }

    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn linear_tween_hits_midpoint() {
        let mut t = Tween::new(0.0, 100.0, ms(1000), Easing::Linear);
        let v = t.advance(0.5);
        assert!((v - 50.0).abs() < 1e-3);
        assert!(!t.is_finished());
    }

    #[test]
    fn overshooting_dt_lands_exactly_on_target() {
        let mut t = Tween::new(10.0, 2413.19, ms(1000), Easing::FAST_OUT_SLOW_IN);
        assert_eq!(t.advance(5.0), 2413.19);
        assert!(t.is_finished());
        assert_eq!(t.progress(), 1.0);
    }

    #[test]
    fn zero_duration_is_immediately_finished() {
        let t = Tween::new(3.0, 7.0, Duration::ZERO, Easing::Linear);
        assert!(t.is_finished());
        assert_eq!(t.value(), 7.0);
    }

    #[test]
    fn negative_and_nan_deltas_do_not_move() {
        let mut t = Tween::new(0.0, 1.0, ms(100), Easing::Linear);
        assert_eq!(t.advance(-1.0), 0.0);
        assert_eq!(t.advance(f32::NAN), 0.0);
    }

    #[test]
    fn descending_tween_is_non_increasing() {
        let mut t = Tween::new(500.0, 0.0, ms(2000), Easing::FAST_OUT_LINEAR_IN);
        let mut prev = t.value();
        assert_eq!(prev, 500.0);
        while !t.is_finished() {
            let v = t.advance(1.0 / 60.0);
            assert!(v <= prev + 1e-3);
            prev = v;
        }
        assert_eq!(prev, 0.0);
    }
}
