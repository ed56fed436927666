//! Easing curves for the reveal radius.

/// Maps linear progress in `[0, 1]` to eased progress in `[0, 1]`.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub enum Easing {
    #[default]
    Linear,
    /// CSS-style cubic Bézier with control points (x1, y1) and (x2, y2).
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// Accelerates quickly, settles slowly. Used for the expanding reveal.
    pub const FAST_OUT_SLOW_IN: Easing = Easing::CubicBezier(0.4, 0.0, 0.2, 1.0);

    /// Accelerates quickly and keeps going. Used for the contracting reveal.
    pub const FAST_OUT_LINEAR_IN: Easing = Easing::CubicBezier(0.4, 0.0, 1.0, 1.0);

    /// Applies the curve. Input is clamped; the endpoints are exact.
    pub fn apply(self, t: f32) -> f32 {
        if t <= 0.0 || t.is_nan() {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }

        match self {
            Easing::Linear => t,
            Easing::CubicBezier(x1, y1, x2, y2) => {
                let p = solve_bezier_x(t as f64, x1 as f64, x2 as f64);
                bezier_sample(p, y1 as f64, y2 as f64).clamp(0.0, 1.0) as f32
            }
        }
    }
}

/// Finds the curve parameter whose x equals `x`.
///
/// Newton-Raphson first; bisection when the slope flattens out. f64 keeps
/// the radius free of frame-to-frame jitter on large viewports.
fn solve_bezier_x(x: f64, x1: f64, x2: f64) -> f64 {
    let mut p = x;
    for _ in 0..8 {
        let err = bezier_sample(p, x1, x2) - x;
        if err.abs() < 1e-7 {
            return p;
        }
        let slope = bezier_slope(p, x1, x2);
        if slope.abs() < 1e-7 {
            break;
        }
        p = (p - err / slope).clamp(0.0, 1.0);
    }

    let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
    p = x;
    for _ in 0..32 {
        let val = bezier_sample(p, x1, x2);
        if (val - x).abs() < 1e-7 {
            break;
        }
        if val < x {
            lo = p;
        } else {
            hi = p;
        }
        p = (lo + hi) * 0.5;
    }
    p
}

/// B(t) = 3(1-t)²t·p1 + 3(1-t)t²·p2 + t³, in Horner form.
#[inline]
fn bezier_sample(t: f64, p1: f64, p2: f64) -> f64 {
    let a = 1.0 - 3.0 * p2 + 3.0 * p1;
    let b = 3.0 * p2 - 6.0 * p1;
    let c = 3.0 * p1;
    ((a * t + b) * t + c) * t
}

#[inline]
fn bezier_slope(t: f64, p1: f64, p2: f64) -> f64 {
    let a = 1.0 - 3.0 * p2 + 3.0 * p1;
    let b = 3.0 * p2 - 6.0 * p1;
    let c = 3.0 * p1;
    (3.0 * a * t + 2.0 * b) * t + c
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURVES: [Easing; 3] = [Easing::Linear, Easing::FAST_OUT_SLOW_IN, Easing::FAST_OUT_LINEAR_IN];

    #[test]
    fn endpoints_are_exact() {
        for e in CURVES {
            assert_eq!(e.apply(0.0), 0.0);
            assert_eq!(e.apply(1.0), 1.0);
        }
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        for e in CURVES {
            assert_eq!(e.apply(-0.5), 0.0);
            assert_eq!(e.apply(1.5), 1.0);
            assert_eq!(e.apply(f32::NAN), 0.0);
        }
    }

    #[test]
    fn curves_are_monotonic() {
        for e in CURVES {
            let mut prev = 0.0;
            for i in 1..=200 {
                let v = e.apply(i as f32 / 200.0);
                assert!(v + 1e-6 >= prev, "{e:?} dipped at step {i}");
                prev = v;
            }
        }
    }

    #[test]
    fn fast_out_slow_in_leads_linear_at_midpoint() {
        assert!(Easing::FAST_OUT_SLOW_IN.apply(0.5) > 0.6);
    }

    #[test]
    fn fast_out_linear_in_trails_linear_at_midpoint() {
        assert!(Easing::FAST_OUT_LINEAR_IN.apply(0.5) < 0.45);
    }

    #[test]
    fn bezier_hits_known_sample() {
        // At curve parameter 0.5, FAST_OUT_SLOW_IN sits at x = 0.35, y = 0.5.
        let y = Easing::FAST_OUT_SLOW_IN.apply(0.35);
        assert!((y - 0.5).abs() < 1e-4, "got {y}");
    }
}
