mod simplify;
mod spline;

pub use simplify::{douglas_peucker_rank, DpSpan};
pub use spline::CatmullRom;

use crate::error::{GeometryError, Result};
use crate::math::{vector_2d, Point2};

/// An axis-aligned bounding rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Minimum corner.
    pub min: Point2,
    /// Maximum corner.
    pub max: Point2,
}

impl BoundingBox {
    /// Grows the box to include `p`.
    pub fn expand(&mut self, p: Point2) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    /// Width of the box.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Height of the box.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}

/// An ordered sequence of 2D points forming a polyline.
///
/// The order is semantically meaningful: it defines the polyline topology
/// and, for closed curves, the winding and the sign of [`Curve::area`].
/// The mutators (`push`, `pop`, `reverse`, `set`) exist for the owner
/// while the curve is being built; every geometric operation takes `&self`
/// and returns a new value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Curve {
    points: Vec<Point2>,
}

impl Curve {
    /// Creates an empty curve.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a curve from an ordered list of points.
    #[must_use]
    pub fn from_points(points: Vec<Point2>) -> Self {
        Self { points }
    }

    /// The ordered points of the curve.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Iterates over the points in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Point2> {
        self.points.iter()
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the curve has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Appends a point.
    pub fn push(&mut self, p: Point2) {
        self.points.push(p);
    }

    /// Removes and returns the last point.
    pub fn pop(&mut self) -> Option<Point2> {
        self.points.pop()
    }

    /// Reverses the point order in place.
    pub fn reverse(&mut self) {
        self.points.reverse();
    }

    /// Overwrites the point at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn set(&mut self, index: usize, p: Point2) {
        self.points[index] = p;
    }

    /// Cumulative arc length at each point.
    ///
    /// Same length as the curve; the first entry is 0 and the sequence is
    /// non-decreasing. Empty for the empty curve.
    #[must_use]
    pub fn arc_length(&self) -> Vec<f64> {
        if self.points.is_empty() {
            return Vec::new();
        }
        let mut lengths = Vec::with_capacity(self.points.len());
        lengths.push(0.0);
        let mut total = 0.0;
        for pair in self.points.windows(2) {
            total += (pair[1] - pair[0]).norm();
            lengths.push(total);
        }
        lengths
    }

    /// Total length of the curve; 0 for fewer than 2 points.
    #[must_use]
    pub fn perimeter(&self) -> f64 {
        self.arc_length().last().copied().unwrap_or(0.0)
    }

    /// Signed area enclosed by the curve (shoelace formula over the
    /// implicit closing edge). Positive for counter-clockwise winding.
    #[must_use]
    pub fn area(&self) -> f64 {
        let n = self.points.len();
        if n < 3 {
            return 0.0;
        }
        let mut sum = 0.0;
        for i in 0..n {
            let j = (i + 1) % n;
            sum += self.points[i].x * self.points[j].y - self.points[j].x * self.points[i].y;
        }
        sum * 0.5
    }

    /// Arithmetic mean of the points.
    ///
    /// This is the unweighted vertex mean, not the area-weighted polygon
    /// centroid; the two agree only for roughly uniform point spacing.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::TooFewPoints` for an empty curve.
    pub fn centroid(&self) -> Result<Point2> {
        if self.points.is_empty() {
            return Err(GeometryError::TooFewPoints {
                needed: 1,
                actual: 0,
            }
            .into());
        }
        let mut x = 0.0;
        let mut y = 0.0;
        for p in &self.points {
            x += p.x;
            y += p.y;
        }
        let n = self.points.len() as f64;
        Ok(Point2::new(x / n, y / n))
    }

    /// Minimum axis-aligned bounding rectangle, or `None` for the empty
    /// curve.
    #[must_use]
    pub fn bounds(&self) -> Option<BoundingBox> {
        let mut iter = self.points.iter();
        let first = *iter.next()?;
        let mut bb = BoundingBox {
            min: first,
            max: first,
        };
        for p in iter {
            bb.expand(*p);
        }
        Some(bb)
    }

    /// Even-odd ray-casting containment test, treating the curve as a
    /// closed ring. Returns `false` for fewer than 3 points. Points
    /// exactly on the boundary are classified arbitrarily.
    #[must_use]
    pub fn contains(&self, point: Point2) -> bool {
        let n = self.points.len();
        if n < 3 {
            return false;
        }
        let mut inside = false;
        let mut prev = self.points[n - 1];
        for &p in &self.points {
            if (p.y > point.y) != (prev.y > point.y)
                && point.x < (prev.x - p.x) * (point.y - p.y) / (prev.y - p.y) + p.x
            {
                inside = !inside;
            }
            prev = p;
        }
        inside
    }

    /// Keeps only the points whose Douglas–Peucker rank is assigned and
    /// below `max_count`. The two endpoints always receive ranks 0 and 1,
    /// so they survive any `max_count >= 2`; interior points within
    /// `tolerance` of their chord are dropped.
    #[must_use]
    pub fn subsample(&self, tolerance: f64, max_count: usize) -> Curve {
        let rank = douglas_peucker_rank(&self.points, tolerance);
        let points = self
            .points
            .iter()
            .zip(&rank)
            .filter_map(|(p, r)| match r {
                Some(k) if *k < max_count => Some(*p),
                _ => None,
            })
            .collect();
        Curve { points }
    }

    /// One iteration of Chaikin corner cutting, inserting the 1/4 and 3/4
    /// points of each edge. Open curves keep their exact endpoints; closed
    /// curves treat the sequence cyclically. Curves of fewer than 2 points
    /// are returned unchanged.
    #[must_use]
    pub fn chaikin(&self, closed: bool) -> Curve {
        let n = self.points.len();
        if n < 2 {
            return self.clone();
        }
        let mut out = Vec::with_capacity(2 * n);
        let (mut q, start) = if closed {
            (self.points[n - 1], 0)
        } else {
            (self.points[0], 1)
        };
        for i in start..n {
            let p = self.points[i];
            let e = p - q;
            if closed || i != 1 {
                out.push(q + e * 0.25);
            } else {
                out.push(q);
            }
            if closed || i + 1 < n {
                out.push(q + e * 0.75);
            } else {
                out.push(p);
            }
            q = p;
        }
        Curve { points: out }
    }

    /// Resamples the curve to exactly `n` points evenly spaced by arc
    /// length, linearly interpolating between the straddling originals.
    ///
    /// When `closed`, arc length is measured over a virtual closed view
    /// that wraps the last point back to the first; the receiver is never
    /// mutated and the coincident closing sample is dropped, so the result
    /// still has `n` points starting at the first original point.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::SampleCountTooSmall` when `n < 2` and
    /// `GeometryError::TooFewPoints` when the curve has fewer than 2
    /// points.
    pub fn resample(&self, n: usize, closed: bool) -> Result<Curve> {
        if n < 2 {
            return Err(GeometryError::SampleCountTooSmall(n).into());
        }
        let m = self.points.len();
        if m < 2 {
            return Err(GeometryError::TooFewPoints {
                needed: 2,
                actual: m,
            }
            .into());
        }
        let count = if closed { m + 1 } else { m };
        let point_at = |i: usize| self.points[i % m];

        let mut per = Vec::with_capacity(count);
        per.push(0.0);
        let mut total = 0.0;
        for i in 1..count {
            total += (point_at(i) - point_at(i - 1)).norm();
            per.push(total);
        }

        let samples = if closed { n + 1 } else { n };
        let dlen = total / (samples - 1) as f64;
        let mut out = Vec::with_capacity(n);
        out.push(point_at(0));
        let mut j = 0;
        for i in 1..samples {
            let d = dlen * i as f64;
            while j + 1 < count - 1 && per[j + 1] < d {
                j += 1;
            }
            let span = per[j + 1] - per[j];
            let alpha = if span == 0.0 { 0.0 } else { (d - per[j]) / span };
            out.push(vector_2d::mix(point_at(j), point_at(j + 1), alpha));
        }
        if closed {
            // first and last coincide on the closed ring
            out.pop();
        }
        Ok(Curve { points: out })
    }

    /// Resamples through a cardinal spline over the curve's points,
    /// evaluated at `n` evenly spaced parameter values. Open curves clamp
    /// the end neighbors so both endpoints are interpolated exactly;
    /// closed curves wrap. `tension` is typically
    /// [`CatmullRom::DEFAULT_TENSION`].
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::SampleCountTooSmall` when `n < 2` and
    /// `GeometryError::TooFewPoints` when the curve has fewer than 2
    /// points.
    pub fn spline_resample(&self, n: usize, closed: bool, tension: f64) -> Result<Curve> {
        if n < 2 {
            return Err(GeometryError::SampleCountTooSmall(n).into());
        }
        let m = self.points.len();
        if m < 2 {
            return Err(GeometryError::TooFewPoints {
                needed: 2,
                actual: m,
            }
            .into());
        }
        let spline = CatmullRom::new(self.points.clone(), tension, closed);
        let f = spline.segment_count() as f64 / (n - 1) as f64;
        let points = (0..n).map(|i| spline.point(i as f64 * f)).collect();
        Ok(Curve { points })
    }
}

impl From<Vec<Point2>> for Curve {
    fn from(points: Vec<Point2>) -> Self {
        Self { points }
    }
}

impl FromIterator<Point2> for Curve {
    fn from_iter<I: IntoIterator<Item = Point2>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl std::ops::Index<usize> for Curve {
    type Output = Point2;

    fn index(&self, index: usize) -> &Point2 {
        &self.points[index]
    }
}

impl<'a> IntoIterator for &'a Curve {
    type Item = &'a Point2;
    type IntoIter = std::slice::Iter<'a, Point2>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const TOL: f64 = 1e-10;

    /// A unit square centered at the origin, counter-clockwise.
    fn unit_square() -> Curve {
        Curve::from_points(vec![
            Point2::new(-0.5, -0.5),
            Point2::new(0.5, -0.5),
            Point2::new(0.5, 0.5),
            Point2::new(-0.5, 0.5),
        ])
    }

    // ── queries ──

    #[test]
    fn arc_length_starts_at_zero_and_is_monotone() {
        let curve = Curve::from_points(vec![
            Point2::new(0.0, 0.0),
            Point2::new(3.0, 4.0),
            Point2::new(3.0, 4.0),
            Point2::new(6.0, 8.0),
        ]);
        let lengths = curve.arc_length();
        assert_eq!(lengths.len(), curve.len());
        assert!(lengths[0].abs() < TOL);
        for pair in lengths.windows(2) {
            assert!(pair[1] >= pair[0]);
        }
        assert!((lengths[3] - 10.0).abs() < TOL);
    }

    #[test]
    fn arc_length_of_empty_curve_is_empty() {
        assert!(Curve::new().arc_length().is_empty());
    }

    #[test]
    fn perimeter_is_sum_of_segment_distances() {
        let curve = unit_square();
        let mut expected = 0.0;
        for pair in curve.points().windows(2) {
            expected += (pair[1] - pair[0]).norm();
        }
        assert_relative_eq!(curve.perimeter(), expected);
        assert_relative_eq!(curve.perimeter(), 3.0);
    }

    #[test]
    fn perimeter_of_degenerate_curves_is_zero() {
        assert!(Curve::new().perimeter().abs() < TOL);
        let single = Curve::from_points(vec![Point2::new(1.0, 2.0)]);
        assert!(single.perimeter().abs() < TOL);
    }

    #[test]
    fn area_sign_follows_winding() {
        let ccw = unit_square();
        assert_relative_eq!(ccw.area(), 1.0);
        let mut cw = ccw.clone();
        cw.reverse();
        assert_relative_eq!(cw.area(), -1.0);
    }

    #[test]
    fn centroid_is_vertex_mean() {
        let square = unit_square();
        let c = square.centroid().unwrap();
        assert!(c.x.abs() < TOL);
        assert!(c.y.abs() < TOL);
    }

    #[test]
    fn centroid_of_empty_curve_errors() {
        assert!(Curve::new().centroid().is_err());
    }

    #[test]
    fn bounds_cover_all_points() {
        let bb = unit_square().bounds().unwrap();
        assert!((bb.min.x + 0.5).abs() < TOL);
        assert!((bb.max.y - 0.5).abs() < TOL);
        assert!((bb.width() - 1.0).abs() < TOL);
        assert!((bb.height() - 1.0).abs() < TOL);
        assert!(Curve::new().bounds().is_none());
    }

    #[test]
    fn contains_center_but_not_far_point() {
        let square = unit_square();
        assert!(square.contains(Point2::new(0.0, 0.0)));
        assert!(!square.contains(Point2::new(10.0, 10.0)));
    }

    #[test]
    fn contains_is_false_below_three_points() {
        let segment = Curve::from_points(vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)]);
        assert!(!segment.contains(Point2::new(0.5, 0.0)));
    }

    // ── transforms ──

    #[test]
    fn subsample_of_collinear_curve_keeps_endpoints_only() {
        let points: Vec<Point2> = (0..50).map(|i| Point2::new(f64::from(i), 0.0)).collect();
        let line = Curve::from_points(points);
        let simplified = line.subsample(0.1, usize::MAX);
        assert_eq!(simplified.len(), 2);
        assert_eq!(simplified[0], line[0]);
        assert_eq!(simplified[1], line[49]);
    }

    #[test]
    fn subsample_respects_max_count() {
        let points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.1),
            Point2::new(2.0, 5.0),
            Point2::new(3.0, -0.1),
            Point2::new(4.0, 0.0),
        ];
        let curve = Curve::from_points(points);
        // Ranks 0, 1, 2 are the endpoints plus the spike at index 2.
        let kept = curve.subsample(0.0, 3);
        assert_eq!(kept.len(), 3);
        assert_eq!(kept[1], curve[2]);
    }

    #[test]
    fn subsample_with_tiny_max_count_trims_endpoints() {
        // Only points with rank < max_count survive, so a budget below 2
        // eats into the endpoints themselves (rank 1 is the last point).
        let points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 2.0),
            Point2::new(2.0, 0.0),
        ];
        let curve = Curve::from_points(points);
        assert_eq!(curve.subsample(0.0, 2).points(), &[curve[0], curve[2]]);
        assert_eq!(curve.subsample(0.0, 1).points(), &[curve[0]]);
        assert!(curve.subsample(0.0, 0).is_empty());
    }

    #[test]
    fn chaikin_open_preserves_endpoints() {
        let curve = Curve::from_points(vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(2.0, 0.0),
        ]);
        let cut = curve.chaikin(false);
        assert_eq!(cut.len(), 4);
        assert_eq!(cut[0], curve[0]);
        assert_eq!(cut[cut.len() - 1], curve[2]);
    }

    #[test]
    fn chaikin_closed_cuts_every_corner() {
        let cut = unit_square().chaikin(true);
        assert_eq!(cut.len(), 8);
        // Every output point lies strictly inside the square's corners.
        for p in &cut {
            assert!(p.x.abs() < 0.5 || p.y.abs() < 0.5);
        }
    }

    #[test]
    fn resample_open_produces_exact_count_and_even_spacing() {
        let curve = Curve::from_points(vec![
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(4.0, 4.0),
        ]);
        let resampled = curve.resample(2, false).unwrap();
        assert_eq!(resampled.len(), 2);
        // Odd counts place a sample exactly on the corner, so consecutive
        // samples are a full arc-length step apart in the plane as well.
        for n in [3, 5, 9, 33] {
            let resampled = curve.resample(n, false).unwrap();
            assert_eq!(resampled.len(), n);
            assert_eq!(resampled[0], curve[0]);
            assert!((resampled[n - 1] - curve[2]).norm() < TOL);
            let step = 8.0 / (n - 1) as f64;
            for pair in resampled.points().windows(2) {
                assert!(((pair[1] - pair[0]).norm() - step).abs() < TOL);
            }
        }
    }

    #[test]
    fn resample_closed_wraps_without_mutating_receiver() {
        let square = unit_square();
        let before = square.clone();
        let resampled = square.resample(8, true).unwrap();
        assert_eq!(square, before);
        assert_eq!(resampled.len(), 8);
        assert_eq!(resampled[0], square[0]);
        // Samples sit on the square's perimeter at spacing 0.5.
        for pair in resampled.points().windows(2) {
            assert!(((pair[1] - pair[0]).norm() - 0.5).abs() < TOL);
        }
    }

    #[test]
    fn resample_rejects_bad_inputs() {
        let curve = unit_square();
        assert!(curve.resample(1, false).is_err());
        let short = Curve::from_points(vec![Point2::new(0.0, 0.0)]);
        assert!(short.resample(4, false).is_err());
    }

    #[test]
    fn spline_resample_interpolates_open_endpoints() {
        let curve = Curve::from_points(vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 2.0),
            Point2::new(3.0, -1.0),
            Point2::new(5.0, 0.5),
        ]);
        let smooth = curve
            .spline_resample(17, false, CatmullRom::DEFAULT_TENSION)
            .unwrap();
        assert_eq!(smooth.len(), 17);
        assert!((smooth[0] - curve[0]).norm() < TOL);
        assert!((smooth[16] - curve[3]).norm() < TOL);
    }

    #[test]
    fn spline_resample_closed_returns_to_start() {
        let smooth = unit_square()
            .spline_resample(13, true, CatmullRom::DEFAULT_TENSION)
            .unwrap();
        assert_eq!(smooth.len(), 13);
        assert!((smooth[0] - smooth[12]).norm() < TOL);
    }
}
