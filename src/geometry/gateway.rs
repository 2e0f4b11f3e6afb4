use super::{NodeRole, Point};
use crate::math::{cross_2d, segments_intersect, side_of_line, Side};

/// A navigation gate: a segment the route must pass through, in `order`.
#[derive(Debug, Clone, PartialEq)]
pub struct Gateway {
    pub left: Point,
    pub right: Point,
    /// Position of this gate in the traversal sequence.
    pub order: u32,
}

impl Gateway {
    /// Creates a gateway from its two endpoints and traversal order.
    #[must_use]
    pub fn new(left: Point, right: Point, order: u32) -> Self {
        Self { left, right, order }
    }

    /// Role carried by the graph nodes built from this gateway's endpoints.
    #[must_use]
    pub fn role(&self) -> NodeRole {
        NodeRole::Gateway(self.order)
    }

    /// Length of the gate mouth.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.left.distance_to(&self.right)
    }

    /// Side of the directed line `left → right` that `point` lies on.
    #[must_use]
    pub fn side_of(&self, point: &Point) -> Side {
        side_of_line(&self.left.position, &self.right.position, &point.position)
    }

    /// Returns `true` if either endpoint carries `label`.
    #[must_use]
    pub fn has_endpoint(&self, label: &str) -> bool {
        self.left.label == label || self.right.label == label
    }

    /// Endpoints ordered `(left, right)` as seen travelling `from → to`.
    ///
    /// The endpoint strictly left of the hop comes first; when neither or both
    /// are, the stored order is kept and the funnel test rejects the hop.
    #[must_use]
    pub fn oriented(&self, from: &Point, to: &Point) -> (&Point, &Point) {
        let stored_left = side_of_line(&from.position, &to.position, &self.left.position);
        let stored_right = side_of_line(&from.position, &to.position, &self.right.position);
        match (stored_left, stored_right) {
            (Side::Right, Side::Left) => (&self.right, &self.left),
            _ => (&self.left, &self.right),
        }
    }

    /// Funnel test: the hop `from → to` passes strictly between the two
    /// endpoints as seen from `from`.
    ///
    /// Holds when `cross(d, left - from) > 0` and `cross(d, right - from) < 0`
    /// with `d = to - from` and endpoints taken from [`Gateway::oriented`]. An
    /// endpoint lying on the hop line fails the test.
    #[must_use]
    pub fn is_threaded_by(&self, from: &Point, to: &Point) -> bool {
        let (left, right) = self.oriented(from, to);
        let dir = to.position - from.position;
        let cross_left = cross_2d(&dir, &(left.position - from.position));
        let cross_right = cross_2d(&dir, &(right.position - from.position));
        cross_left > 0.0 && cross_right < 0.0
    }

    /// Returns `true` if the hop `from–to` touches this gate segment.
    #[must_use]
    pub fn is_crossed_by(&self, from: &Point, to: &Point) -> bool {
        segments_intersect(
            &from.position,
            &to.position,
            &self.left.position,
            &self.right.position,
        )
    }
}
