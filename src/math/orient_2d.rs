use super::{Point2, Vector2};

/// Which side of a directed line a point lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Strictly counter-clockwise of the line direction.
    Left,
    /// Clockwise of the line direction, or on the line itself.
    Right,
}

/// 2D cross product `u.x * v.y - u.y * v.x`.
#[must_use]
pub fn cross_2d(u: &Vector2, v: &Vector2) -> f64 {
    u.x * v.y - u.y * v.x
}

/// Twice the signed area of the triangle `(a, b, c)`.
///
/// Positive when `c` is counter-clockwise of `a → b`. Callers compare the
/// result against zero exactly; no tolerance is applied.
#[must_use]
fn orient(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    cross_2d(&(b - a), &(c - a))
}

/// Classifies `p` against the directed line `a → b`.
///
/// A positive cross product of `(b - a)` and `(p - a)` is [`Side::Left`];
/// zero or negative is [`Side::Right`].
#[must_use]
pub fn side_of_line(a: &Point2, b: &Point2, p: &Point2) -> Side {
    if orient(a, b, p) > 0.0 {
        Side::Left
    } else {
        Side::Right
    }
}

/// Returns `true` if `p` lies inside the axis-aligned box spanned by `a` and `b`.
///
/// Only meaningful when `p` is already known to be collinear with `a` and `b`.
fn in_bounding_box(a: &Point2, b: &Point2, p: &Point2) -> bool {
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}

/// Exact test for two finite segments `p1–p2` and `q1–q2` sharing any point.
///
/// Touching endpoints and collinear overlap count as intersecting.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn segments_intersect(p1: &Point2, p2: &Point2, q1: &Point2, q2: &Point2) -> bool {
    let d1 = orient(q1, q2, p1);
    let d2 = orient(q1, q2, p2);
    let d3 = orient(p1, p2, q1);
    let d4 = orient(p1, p2, q2);

    // Proper crossing: each segment's endpoints straddle the other.
    if ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
    {
        return true;
    }

    (d1 == 0.0 && in_bounding_box(q1, q2, p1))
        || (d2 == 0.0 && in_bounding_box(q1, q2, p2))
        || (d3 == 0.0 && in_bounding_box(p1, p2, q1))
        || (d4 == 0.0 && in_bounding_box(p1, p2, q2))
}
