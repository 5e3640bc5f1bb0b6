use super::{Point2, Vector2, TOLERANCE};
use crate::error::{GeometryError, Result};

/// Segments shorter than this are treated as single points in
/// [`point_segment_distance`].
const DEGENERATE_SEGMENT_LENGTH: f64 = 1e-5;

/// Rotates a vector by `angle` radians, counter-clockwise positive.
#[must_use]
pub fn rotate(v: Vector2, angle: f64) -> Vector2 {
    let (s, c) = angle.sin_cos();
    Vector2::new(c * v.x - s * v.y, s * v.x + c * v.y)
}

/// Linear interpolation between two points: `p * (1 - alpha) + q * alpha`.
#[must_use]
pub fn mix(p: Point2, q: Point2, alpha: f64) -> Point2 {
    Point2::new(
        p.x * (1.0 - alpha) + q.x * alpha,
        p.y * (1.0 - alpha) + q.y * alpha,
    )
}

/// Returns `v` scaled to unit length.
///
/// # Errors
///
/// Returns `GeometryError::ZeroVector` if `v` has zero norm.
pub fn normalized(v: Vector2) -> Result<Vector2> {
    let len = v.norm();
    if len < TOLERANCE {
        return Err(GeometryError::ZeroVector.into());
    }
    Ok(v / len)
}

/// Returns the unsigned angle between `u` and `v`, in `[0, π]`.
///
/// The cosine argument is clamped to `[-1, 1]` so near-parallel inputs
/// cannot push it outside the domain of `acos`.
///
/// # Errors
///
/// Returns `GeometryError::ZeroVector` if either vector has zero norm.
pub fn angle_between(u: Vector2, v: Vector2) -> Result<f64> {
    let lu = u.norm();
    let lv = v.norm();
    if lu < TOLERANCE || lv < TOLERANCE {
        return Err(GeometryError::ZeroVector.into());
    }
    Ok((u.dot(&v) / (lu * lv)).clamp(-1.0, 1.0).acos())
}

/// Returns the signed angle that rotates `u` onto `v`.
///
/// Negative when the triple (origin, u, v) turns counter-clockwise, so the
/// sign convention matches [`orient`].
///
/// # Errors
///
/// Returns `GeometryError::ZeroVector` if either vector has zero norm.
pub fn signed_angle(u: Vector2, v: Vector2) -> Result<f64> {
    let a = angle_between(u, v)?;
    if orient(Point2::origin(), Point2::from(u), Point2::from(v)) > 0 {
        Ok(-a)
    } else {
        Ok(a)
    }
}

/// Orientation of the triangle `(a, p, q)`: the sign of twice its signed
/// area. Returns `1` for counter-clockwise, `-1` for clockwise, and `0`
/// only on exact collinearity.
#[must_use]
pub fn orient(a: Point2, p: Point2, q: Point2) -> i8 {
    let det = (p.x - a.x) * (q.y - a.y) - (q.x - a.x) * (p.y - a.y);
    if det > 0.0 {
        1
    } else if det < 0.0 {
        -1
    } else {
        0
    }
}

/// Returns the minimum distance from `p` to the segment `[a, b]`.
///
/// The projection parameter is clamped to the segment; a degenerate
/// segment falls back to the point-to-point distance.
#[must_use]
pub fn point_segment_distance(p: Point2, a: Point2, b: Point2) -> f64 {
    let s = (b - a).norm();
    if s < DEGENERATE_SEGMENT_LENGTH {
        return (p - a).norm();
    }
    let dir = (b - a) / s;
    let d = (p - a).dot(&dir);
    if d < 0.0 {
        return (p - a).norm();
    }
    if d > s {
        return (p - b).norm();
    }
    (mix(a, b, d / s) - p).norm()
}
