use super::NodeIndex;

/// One direction of a weighted graph edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphEdge {
    pub from: NodeIndex,
    pub to: NodeIndex,
    /// Euclidean length of the hop.
    pub weight: f64,
}

impl GraphEdge {
    #[must_use]
    pub fn new(from: NodeIndex, to: NodeIndex, weight: f64) -> Self {
        Self { from, to, weight }
    }
}
