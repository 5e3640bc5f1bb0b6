use crate::math::Point2;

/// A cardinal (Catmull-Rom family) spline through a set of control points.
///
/// `tension` in `[0, 1]` scales the tangents: 0 is the loosest curve, 1
/// collapses the tangents and the spline tightens toward the control
/// polyline. Open splines clamp the end neighbors, which is equivalent to
/// repeating the first and last control points, so both endpoints are
/// interpolated exactly. Closed splines wrap the indices cyclically.
#[derive(Debug, Clone)]
pub struct CatmullRom {
    points: Vec<Point2>,
    tension: f64,
    closed: bool,
}

impl CatmullRom {
    /// Default tension of the cardinal spline.
    pub const DEFAULT_TENSION: f64 = 0.5;

    /// Creates a spline over the given control points.
    #[must_use]
    pub fn new(points: Vec<Point2>, tension: f64, closed: bool) -> Self {
        Self {
            points,
            tension,
            closed,
        }
    }

    /// Number of spline segments. An open spline over `m` points has
    /// `m - 1` segments, a closed one has `m`.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        let m = self.points.len();
        if m < 2 {
            0
        } else if self.closed {
            m
        } else {
            m - 1
        }
    }

    fn control(&self, i: isize) -> Point2 {
        let m = self.points.len() as isize;
        let idx = if self.closed {
            i.rem_euclid(m)
        } else {
            i.clamp(0, m - 1)
        };
        self.points[usize::try_from(idx).unwrap_or(0)]
    }

    /// Evaluates the spline at `u` in `[0, segment_count()]`.
    ///
    /// The integer part of `u` selects the segment and the fractional part
    /// is the position within it; `u` is clamped to the parameter range.
    #[must_use]
    pub fn point(&self, u: f64) -> Point2 {
        let segs = self.segment_count();
        if segs == 0 {
            return self.points.first().copied().unwrap_or_else(Point2::origin);
        }
        let u = u.clamp(0.0, segs as f64);
        let mut seg = u.floor() as usize;
        if seg >= segs {
            // u at the very end of the range evaluates the last segment at t = 1
            seg = segs - 1;
        }
        let t = u - seg as f64;
        let i = seg as isize;

        let p0 = self.control(i - 1);
        let p1 = self.control(i);
        let p2 = self.control(i + 1);
        let p3 = self.control(i + 2);

        // Cardinal tangents, scaled down as tension rises.
        let k = (1.0 - self.tension) * 0.5;
        let m1 = (p2 - p0) * k;
        let m2 = (p3 - p1) * k;

        // Cubic Hermite basis.
        let t2 = t * t;
        let t3 = t2 * t;
        let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
        let h10 = t3 - 2.0 * t2 + t;
        let h01 = -2.0 * t3 + 3.0 * t2;
        let h11 = t3 - t2;

        Point2::new(
            h00 * p1.x + h10 * m1.x + h01 * p2.x + h11 * m2.x,
            h00 * p1.y + h10 * m1.y + h01 * p2.y + h11 * m2.y,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    fn zigzag() -> Vec<Point2> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(2.0, 0.0),
            Point2::new(3.0, 1.0),
        ]
    }

    #[test]
    fn interpolates_control_points_at_integer_parameters() {
        let points = zigzag();
        let spline = CatmullRom::new(points.clone(), CatmullRom::DEFAULT_TENSION, false);
        for (i, expected) in points.iter().enumerate() {
            let p = spline.point(i as f64);
            assert!((p.x - expected.x).abs() < TOL, "i={i} x={}", p.x);
            assert!((p.y - expected.y).abs() < TOL, "i={i} y={}", p.y);
        }
    }

    #[test]
    fn open_spline_hits_both_endpoints() {
        let points = zigzag();
        let spline = CatmullRom::new(points.clone(), 0.0, false);
        let start = spline.point(0.0);
        let end = spline.point(spline.segment_count() as f64);
        assert!((start - points[0]).norm() < TOL);
        assert!((end - points[3]).norm() < TOL);
    }

    #[test]
    fn closed_spline_wraps_back_to_start() {
        let points = zigzag();
        let spline = CatmullRom::new(points.clone(), CatmullRom::DEFAULT_TENSION, true);
        assert_eq!(spline.segment_count(), 4);
        let wrapped = spline.point(4.0);
        assert!((wrapped - points[0]).norm() < TOL);
    }

    #[test]
    fn full_tension_is_linear_between_points() {
        // With tension 1 the tangents vanish and the midpoint of each
        // segment is the Hermite blend of the endpoints alone.
        let spline = CatmullRom::new(zigzag(), 1.0, false);
        let mid = spline.point(0.5);
        assert!((mid.x - 0.5).abs() < TOL);
        assert!((mid.y - 0.5).abs() < TOL);
    }

    #[test]
    fn parameter_is_clamped_to_range() {
        let points = zigzag();
        let spline = CatmullRom::new(points.clone(), 0.5, false);
        let below = spline.point(-3.0);
        let above = spline.point(100.0);
        assert!((below - points[0]).norm() < TOL);
        assert!((above - points[3]).norm() < TOL);
    }
}
