use crate::heap::ScoreHeap;
use crate::math::{vector_2d, Point2};

/// A span of a polyline still eligible for subdivision, together with the
/// interior point farthest from the chord `[first, last]`.
#[derive(Debug, Clone, Copy)]
pub struct DpSpan {
    /// Index of the span's first point.
    pub first: usize,
    /// Index of the span's last point.
    pub last: usize,
    /// Index of the interior point farthest from the chord.
    pub farthest: usize,
    /// Perpendicular distance of `farthest` from the chord.
    pub dist: f64,
}

impl DpSpan {
    /// Scans the interior of `[first, last]` for the point farthest from
    /// the chord connecting the span's endpoints.
    fn new(first: usize, last: usize, points: &[Point2]) -> Self {
        let a = points[first];
        let b = points[last];
        let mut dist = 0.0;
        let mut farthest = first + 1;
        for (i, p) in points.iter().enumerate().take(last).skip(first + 1) {
            let d = vector_2d::point_segment_distance(*p, a, b);
            if d > dist {
                dist = d;
                farthest = i;
            }
        }
        Self {
            first,
            last,
            farthest,
            dist,
        }
    }
}

/// Returns the Douglas–Peucker generalization rank of each vertex.
///
/// `rank[i] == Some(k)` means vertex `i` is the `(k + 1)`-th vertex kept
/// by a progressive simplification of the polyline; ranks 0 and 1 are
/// always the two endpoints. Vertices whose span falls within `tolerance`
/// are never selected and stay `None`.
///
/// Spans are processed worst first through a max [`ScoreHeap`], so ranks
/// reflect the global order of perpendicular error. Each pop either stops
/// the loop or ranks exactly one point and pushes at most two sub-spans,
/// so at most `n - 2` interior points are ranked.
#[must_use]
pub fn douglas_peucker_rank(points: &[Point2], tolerance: f64) -> Vec<Option<usize>> {
    let n = points.len();
    let mut rank = vec![None; n];
    if n == 0 {
        return rank;
    }
    rank[0] = Some(0);
    rank[n - 1] = Some(1);
    if n <= 2 {
        return rank;
    }

    let mut queue = ScoreHeap::max(|span: &DpSpan| span.dist);
    queue.push(DpSpan::new(0, n - 1, points));

    let mut next_rank = 2;
    while let Some(span) = queue.pop() {
        if span.dist < tolerance {
            break; // every remaining span is within tolerance
        }
        rank[span.farthest] = Some(next_rank);
        next_rank += 1;
        if span.farthest > span.first + 1 {
            queue.push(DpSpan::new(span.first, span.farthest, points));
        }
        if span.last > span.farthest + 1 {
            queue.push(DpSpan::new(span.farthest, span.last, points));
        }
    }
    rank
}
