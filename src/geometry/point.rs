use crate::math::{distance, Point2};

/// A labelled 2D point.
///
/// The label is the point's identity: two points with the same label refer to
/// the same input location, regardless of how they were obtained.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    /// Unique identifier carried through to the output path.
    pub label: String,
    /// Position in the plane.
    pub position: Point2,
}

impl Point {
    /// Creates a point from a label and coordinates.
    #[must_use]
    pub fn new(label: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            label: label.into(),
            position: Point2::new(x, y),
        }
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.position.x
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.position.y
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance_to(&self, other: &Point) -> f64 {
        distance(&self.position, &other.position)
    }

    /// Returns `true` if both coordinates are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.position.x.is_finite() && self.position.y.is_finite()
    }
}
