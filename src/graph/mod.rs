pub mod edge;
pub mod node;

pub use edge::GraphEdge;
pub use node::{GraphNode, NodeIndex};

use std::fmt;

use crate::error::GraphError;
use crate::geometry::NodeRole;

/// Visibility graph over the route's points of interest.
///
/// Nodes live in a flat arena addressed by [`NodeIndex`]; adjacency is one
/// edge list per node. Every edge is stored twice, once from each end.
#[derive(Debug, Clone, Default)]
pub struct VisibilityGraph {
    nodes: Vec<GraphNode>,
    adjacency: Vec<Vec<GraphEdge>>,
}

impl VisibilityGraph {
    /// Creates a new, empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Node operations ---

    /// Appends a node with no edges and returns its index.
    pub fn add_node(&mut self, node: GraphNode) -> NodeIndex {
        let index = NodeIndex(self.nodes.len());
        self.nodes.push(node);
        self.adjacency.push(Vec::new());
        index
    }

    /// Returns the node at `index`, if any.
    #[must_use]
    pub fn node(&self, index: NodeIndex) -> Option<&GraphNode> {
        self.nodes.get(index.0)
    }

    /// All nodes in index order.
    #[must_use]
    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Index of the first node labelled `label`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if no node carries the label.
    pub fn node_index(&self, label: &str) -> Result<NodeIndex, GraphError> {
        self.nodes
            .iter()
            .position(|node| node.point.label == label)
            .map(NodeIndex)
            .ok_or_else(|| GraphError::NodeNotFound(label.to_owned()))
    }

    /// Index of the node with the given role, if exactly one exists.
    ///
    /// Only meaningful for [`NodeRole::Start`] and [`NodeRole::End`].
    #[must_use]
    pub fn sentinel(&self, role: NodeRole) -> Option<NodeIndex> {
        let mut matches = self.nodes.iter().enumerate().filter(|(_, n)| n.role == role);
        match (matches.next(), matches.next()) {
            (Some((i, _)), None) => Some(NodeIndex(i)),
            _ => None,
        }
    }

    // --- Edge operations ---

    /// Connects `a` and `b` in both directions with the same weight.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn add_undirected_edge(&mut self, a: NodeIndex, b: NodeIndex, weight: f64) {
        self.adjacency[a.0].push(GraphEdge::new(a, b, weight));
        self.adjacency[b.0].push(GraphEdge::new(b, a, weight));
    }

    /// Outgoing edges of `index`; empty for an unknown index.
    #[must_use]
    pub fn neighbors(&self, index: NodeIndex) -> &[GraphEdge] {
        self.adjacency.get(index.0).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Per-node adjacency lists in index order.
    #[must_use]
    pub fn adjacency(&self) -> &[Vec<GraphEdge>] {
        &self.adjacency
    }

    /// Each undirected edge once, as its `from < to` half.
    pub fn edges(&self) -> impl Iterator<Item = &GraphEdge> {
        self.adjacency
            .iter()
            .flatten()
            .filter(|edge| edge.from < edge.to)
    }

    /// Number of undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }
}

impl fmt::Display for VisibilityGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Visibility graph")?;
        writeln!(f, "Nodes ({}):", self.nodes.len())?;
        for (i, node) in self.nodes.iter().enumerate() {
            writeln!(
                f,
                "  {i}: {} ({}, {}) [{}]",
                node.point.label,
                node.point.x(),
                node.point.y(),
                node.role
            )?;
        }
        writeln!(f, "Edges ({}):", self.edge_count())?;
        for edge in self.edges() {
            writeln!(
                f,
                "  {} -> {} (weight: {:.6})",
                self.nodes[edge.from.0].point.label,
                self.nodes[edge.to.0].point.label,
                edge.weight
            )?;
        }
        Ok(())
    }
}
