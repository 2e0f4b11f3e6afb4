mod build_graph;
mod shortest_path;
mod validate_path;

pub use build_graph::BuildVisibilityGraph;
pub use shortest_path::{PathResult, ShortestPath};
pub use validate_path::ValidatePath;

use crate::error::Result;
use crate::geometry::{Gateway, Point};

/// Shortest route from `start` to `end` through `gateways`.
///
/// Shorthand for [`ShortestPath::execute`].
///
/// # Errors
///
/// Returns an error if the input geometry is invalid or a start/end node is
/// missing from the built graph.
pub fn solve(gateways: &[Gateway], start: &Point, end: &Point) -> Result<PathResult> {
    ShortestPath::new(gateways, start, end).execute()
}

/// Shorthand for [`ValidatePath::execute`].
#[must_use]
pub fn validate_path(path: &[Point], gateways: &[Gateway], start: &Point, end: &Point) -> bool {
    ValidatePath::new(path, gateways, start, end).execute()
}
