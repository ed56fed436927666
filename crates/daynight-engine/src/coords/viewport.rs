use super::Vec2;

/// Size of the drawable area in logical pixels.
///
/// Measured by the host after each layout pass (window resize / scale change).
/// The renderer uses it to convert logical positions to NDC; the reveal
/// geometry uses its four corners.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns a copy with negative or non-finite dimensions replaced by zero.
    #[inline]
    pub fn sanitized(self) -> Self {
        let clean = |v: f32| if v.is_finite() && v > 0.0 { v } else { 0.0 };
        Self::new(clean(self.width), clean(self.height))
    }

    /// Corners in the order top-left, top-right, bottom-left, bottom-right.
    #[inline]
    pub fn corners(self) -> [Vec2; 4] {
        [
            Vec2::new(0.0, 0.0),
            Vec2::new(self.width, 0.0),
            Vec2::new(0.0, self.height),
            Vec2::new(self.width, self.height),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitized_clamps_negative_and_nan() {
        let v = Viewport::new(-5.0, f32::NAN).sanitized();
        assert_eq!(Viewport::new(f32::INFINITY, 3.0).sanitized(), Viewport::new(0.0, 3.0));
        assert_eq!(v, Viewport::new(0.0, 0.0));
    }

    #[test]
    fn sanitized_keeps_positive_sizes() {
        let v = Viewport::new(1080.0, 2400.0);
        assert_eq!(v.sanitized(), v);
    }

    #[test]
    fn corners_span_the_viewport() {
        let [tl, tr, bl, br] = Viewport::new(10.0, 20.0).corners();
        assert_eq!(tl, Vec2::new(0.0, 0.0));
        assert_eq!(tr, Vec2::new(10.0, 0.0));
        assert_eq!(bl, Vec2::new(0.0, 20.0));
        assert_eq!(br, Vec2::new(10.0, 20.0));
    }
}
