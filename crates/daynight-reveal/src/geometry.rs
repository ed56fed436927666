//! Reveal geometry.

use daynight_engine::coords::{Vec2, Viewport};

/// Smallest radius of a circle centered at `origin` that covers all of `viewport`.
///
/// The farthest point of an axis-aligned rectangle from any point is one of
/// its corners, so this is the largest corner distance. Origins outside the
/// rectangle are fine. Negative or non-finite sizes count as zero, and a
/// non-finite origin yields 0. Distances that overflow `f32` saturate at
/// `f32::MAX`.
pub fn distance_to_farthest_corner(viewport: Viewport, origin: Vec2) -> f32 {
    if !origin.is_finite() {
        return 0.0;
    }

    viewport
        .sanitized()
        .corners()
        .into_iter()
        .map(|corner| corner.distance(origin))
        .fold(0.0, f32::max)
        .min(f32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() <= 1e-3 * b.abs().max(1.0)
    }

    // ── covering radius ───────────────────────────────────────────────────

    #[test]
    fn bottom_center_toggle_on_phone_viewport() {
        let r = distance_to_farthest_corner(Viewport::new(1080.0, 2400.0), Vec2::new(540.0, 2352.0));
        assert!(close(r, 540.0f32.hypot(2352.0)));
        assert!(close(r, 2413.19));
    }

    #[test]
    fn radius_is_max_of_corner_distances() {
        let viewport = Viewport::new(300.0, 200.0);
        for origin in [
            Vec2::new(0.0, 0.0),
            Vec2::new(150.0, 100.0),
            Vec2::new(290.0, 12.0),
            Vec2::new(-40.0, 500.0),
            Vec2::new(1000.0, -1000.0),
        ] {
            let r = distance_to_farthest_corner(viewport, origin);
            let dists: Vec<f32> = viewport.corners().iter().map(|c| c.distance(origin)).collect();
            assert!(dists.iter().all(|&d| r >= d), "origin {origin:?}");
            assert!(dists.iter().any(|&d| d == r), "origin {origin:?}");
        }
    }

    #[test]
    fn origin_in_top_left_reaches_bottom_right() {
        let r = distance_to_farthest_corner(Viewport::new(30.0, 40.0), Vec2::zero());
        assert!(close(r, 50.0));
    }

    // ── symmetry ──────────────────────────────────────────────────────────

    #[test]
    fn mirrored_origin_gives_same_radius() {
        let viewport = Viewport::new(400.0, 700.0);
        let origin = Vec2::new(90.0, 610.0);
        let mirrored_x = Vec2::new(400.0 - origin.x, origin.y);
        let mirrored_y = Vec2::new(origin.x, 700.0 - origin.y);

        let r = distance_to_farthest_corner(viewport, origin);
        assert!(close(r, distance_to_farthest_corner(viewport, mirrored_x)));
        assert!(close(r, distance_to_farthest_corner(viewport, mirrored_y)));
    }

    #[test]
    fn rotating_viewport_and_origin_gives_same_radius() {
        let r = distance_to_farthest_corner(Viewport::new(400.0, 700.0), Vec2::new(90.0, 610.0));
        // 90° rotation: (x, y) in w×h maps to (h - y, x) in h×w.
        let rotated = distance_to_farthest_corner(Viewport::new(700.0, 400.0), Vec2::new(90.0, 90.0));
        assert!(close(r, rotated));
    }

    #[test]
    fn center_of_square_is_half_diagonal() {
        let r = distance_to_farthest_corner(Viewport::new(100.0, 100.0), Vec2::new(50.0, 50.0));
        assert!(close(r, 50.0 * 2.0f32.sqrt()));
    }

    // ── degenerate viewports ──────────────────────────────────────────────

    #[test]
    fn empty_viewport_at_origin_is_zero() {
        assert_eq!(distance_to_farthest_corner(Viewport::new(0.0, 0.0), Vec2::zero()), 0.0);
    }

    #[test]
    fn zero_height_viewport_spans_its_width() {
        let r = distance_to_farthest_corner(Viewport::new(80.0, 0.0), Vec2::new(20.0, 0.0));
        assert_eq!(r, 60.0);
    }

    #[test]
    fn zero_width_viewport_spans_its_height() {
        let r = distance_to_farthest_corner(Viewport::new(0.0, 50.0), Vec2::new(0.0, 10.0));
        assert_eq!(r, 40.0);
    }

    #[test]
    fn negative_and_nan_sizes_degrade_to_zero_area() {
        assert_eq!(distance_to_farthest_corner(Viewport::new(-10.0, -10.0), Vec2::zero()), 0.0);
        assert_eq!(distance_to_farthest_corner(Viewport::new(f32::NAN, 0.0), Vec2::zero()), 0.0);
    }

    #[test]
    fn overflowing_distance_saturates() {
        let r = distance_to_farthest_corner(Viewport::new(f32::MAX, f32::MAX), Vec2::zero());
        assert_eq!(r, f32::MAX);
        let r = distance_to_farthest_corner(Viewport::new(10.0, 10.0), Vec2::new(-f32::MAX, f32::MAX));
        assert!(r.is_finite());
    }

    #[test]
    fn non_finite_origin_is_zero() {
        let r = distance_to_farthest_corner(Viewport::new(100.0, 100.0), Vec2::new(f32::NAN, 1.0));
        assert_eq!(r, 0.0);
    }
}
