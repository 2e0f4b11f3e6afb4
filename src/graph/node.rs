use std::fmt;

use crate::geometry::{NodeRole, Point};

/// Position of a node in the [`VisibilityGraph`](super::VisibilityGraph) arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeIndex(pub usize);

impl fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A point of interest in the graph together with its place in the route.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphNode {
    pub point: Point,
    pub role: NodeRole,
}

impl GraphNode {
    #[must_use]
    pub fn new(point: Point, role: NodeRole) -> Self {
        Self { point, role }
    }
}
