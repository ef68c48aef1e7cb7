//! Cubic Bézier and Catmull-Rom evaluation for camera flight paths.
//!
//! Both path kinds take four control points and a normalized parameter in
//! [0, 1]. A Bézier curve only touches its first and last control point; a
//! Catmull-Rom path passes through all four, which makes it the better fit
//! for waypoint-style flights.

use glam::Vec3;

/// Evaluate a cubic Bézier curve at `t`.
///
/// `B(t) = (1−t)³·P0 + 3(1−t)²t·P1 + 3(1−t)t²·P2 + t³·P3`
///
/// `t` is clamped to [0, 1], so `t = 0` yields exactly `points[0]` and
/// `t = 1` exactly `points[3]`.
#[must_use]
pub fn cubic_bezier(points: &[Vec3; 4], t: f32) -> Vec3 {
    let t = t.clamp(0.0, 1.0);
    let u = 1.0 - t;
    points[0] * (u * u * u)
        + points[1] * (3.0 * u * u * t)
        + points[2] * (3.0 * u * t * t)
        + points[3] * (t * t * t)
}

/// Evaluate one Catmull-Rom segment at `t` in [0, 1].
///
/// The segment interpolates from `p1` (at `t = 0`) to `p2` (at `t = 1`);
/// `p0` and `p3` only shape the tangents. Uniform parameterization with the
/// standard 0.5 tension.
#[must_use]
pub fn catmull_rom(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> Vec3 {
    let t = t.clamp(0.0, 1.0);
    let t2 = t * t;
    let t3 = t2 * t;
    0.5 * ((p1 * 2.0)
        + (p2 - p0) * t
        + (p0 * 2.0 - p1 * 5.0 + p2 * 4.0 - p3) * t2
        + (p1 * 3.0 - p0 - p2 * 3.0 + p3) * t3)
}

/// Evaluate a four-point Catmull-Rom path at `t` in [0, 1].
///
/// The unit interval is split into three equal thirds, one segment per
/// consecutive control-point pair. The 4-point windows clamp at the path
/// ends by doubling the first and last points, so the path starts exactly
/// at `points[0]` and ends exactly at `points[3]` while staying continuous
/// across the `t = 1/3` and `t = 2/3` boundaries.
#[must_use]
pub fn catmull_rom_path(points: &[Vec3; 4], t: f32) -> Vec3 {
    if t >= 1.0 {
        // Snap to the final control point to avoid floating-point overshoot.
        return points[3];
    }
    let t = t.max(0.0);
    let scaled = t * 3.0;
    if scaled < 1.0 {
        catmull_rom(points[0], points[0], points[1], points[2], scaled)
    } else if scaled < 2.0 {
        catmull_rom(points[0], points[1], points[2], points[3], scaled - 1.0)
    } else {
        catmull_rom(points[1], points[2], points[3], points[3], scaled - 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn control_points() -> [Vec3; 4] {
        [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(10.0, 5.0, 0.0),
            Vec3::new(20.0, 5.0, -10.0),
            Vec3::new(30.0, 0.0, -20.0),
        ]
    }

    #[test]
    fn test_bezier_starts_at_p0() {
        let points = control_points();
        let start = cubic_bezier(&points, 0.0);
        assert!((start - points[0]).length() < EPS);
    }

    #[test]
    fn test_bezier_ends_at_p3() {
        let points = control_points();
        let end = cubic_bezier(&points, 1.0);
        assert!((end - points[3]).length() < EPS);
    }

    #[test]
    fn test_bezier_midpoint_of_straight_line() {
        // Collinear, evenly spaced control points degenerate to a straight
        // line traversed at constant speed.
        let points = [
            Vec3::ZERO,
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(3.0, 0.0, 0.0),
        ];
        let mid = cubic_bezier(&points, 0.5);
        assert!((mid - Vec3::new(1.5, 0.0, 0.0)).length() < EPS);
    }

    #[test]
    fn test_bezier_clamps_out_of_range_t() {
        let points = control_points();
        assert!((cubic_bezier(&points, -0.5) - points[0]).length() < EPS);
        assert!((cubic_bezier(&points, 1.5) - points[3]).length() < EPS);
    }

    #[test]
    fn test_catmull_rom_interpolates_middle_points() {
        let [p0, p1, p2, p3] = control_points();
        assert!((catmull_rom(p0, p1, p2, p3, 0.0) - p1).length() < EPS);
        assert!((catmull_rom(p0, p1, p2, p3, 1.0) - p2).length() < EPS);
    }

    #[test]
    fn test_path_starts_at_p0_ends_at_p3() {
        let points = control_points();
        assert!((catmull_rom_path(&points, 0.0) - points[0]).length() < EPS);
        assert!((catmull_rom_path(&points, 1.0) - points[3]).length() < EPS);
    }

    #[test]
    fn test_path_passes_through_inner_points_at_thirds() {
        let points = control_points();
        let at_third = catmull_rom_path(&points, 1.0 / 3.0);
        let at_two_thirds = catmull_rom_path(&points, 2.0 / 3.0);
        assert!((at_third - points[1]).length() < 1e-4);
        assert!((at_two_thirds - points[2]).length() < 1e-4);
    }

    #[test]
    fn test_path_continuous_across_segment_boundaries() {
        let points = control_points();
        for boundary in [1.0 / 3.0, 2.0 / 3.0] {
            let before = catmull_rom_path(&points, boundary - 1e-4);
            let after = catmull_rom_path(&points, boundary + 1e-4);
            assert!(
                (after - before).length() < 0.05,
                "jump at t = {boundary}: {before} vs {after}"
            );
        }
    }

    #[test]
    fn test_path_snaps_exactly_to_p3_at_completion() {
        let points = control_points();
        assert_eq!(catmull_rom_path(&points, 1.0), points[3]);
        assert_eq!(catmull_rom_path(&points, 1.0 + f32::EPSILON), points[3]);
    }
}
