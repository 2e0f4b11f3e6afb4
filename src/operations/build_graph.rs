use std::collections::HashMap;

use tracing::{debug, trace, warn};

use crate::error::{GeometryError, Result};
use crate::geometry::{is_visible, Gateway, NodeRole, Point};
use crate::graph::{GraphNode, NodeIndex, VisibilityGraph};
use crate::math::{Point2, TOLERANCE};

/// Builds the visibility graph for one routing query.
///
/// Nodes are laid out as `[start, gate0.left, gate0.right, …, end]`. Every
/// unordered node pair is connected when the hop respects gate ordering,
/// threads every gate that is current or still ahead, and is visible
/// under [`is_visible`].
pub struct BuildVisibilityGraph<'a> {
    gateways: &'a [Gateway],
    start: &'a Point,
    end: &'a Point,
}

impl<'a> BuildVisibilityGraph<'a> {
    /// Creates a new `BuildVisibilityGraph` operation.
    #[must_use]
    pub fn new(gateways: &'a [Gateway], start: &'a Point, end: &'a Point) -> Self {
        Self {
            gateways,
            start,
            end,
        }
    }

    /// Executes the operation, returning a freshly built graph.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError`] if a coordinate is not finite, a gateway has
    /// zero length, or a label is bound to conflicting points.
    pub fn execute(&self) -> Result<VisibilityGraph> {
        validate_input(self.gateways, self.start, self.end)?;

        let mut graph = VisibilityGraph::new();
        graph.add_node(GraphNode::new(self.start.clone(), NodeRole::Start));
        for gate in self.gateways {
            graph.add_node(GraphNode::new(gate.left.clone(), gate.role()));
            graph.add_node(GraphNode::new(gate.right.clone(), gate.role()));
        }
        graph.add_node(GraphNode::new(self.end.clone(), NodeRole::End));

        let n = graph.node_count();
        for i in 0..n {
            for j in (i + 1)..n {
                let (a, b) = (&graph.nodes()[i], &graph.nodes()[j]);
                if !can_connect(a, b, self.gateways) {
                    continue;
                }
                let weight = a.point.distance_to(&b.point);
                trace!(
                    from = %a.point.label,
                    to = %b.point.label,
                    weight,
                    "edge accepted"
                );
                graph.add_undirected_edge(NodeIndex(i), NodeIndex(j), weight);
            }
        }

        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            gateways = self.gateways.len(),
            "visibility graph built"
        );
        Ok(graph)
    }
}

/// Rejects input the graph cannot be built from.
fn validate_input(
    gateways: &[Gateway],
    start: &Point,
    end: &Point,
) -> std::result::Result<(), GeometryError> {
    for point in [start, end]
        .into_iter()
        .chain(gateways.iter().flat_map(|g| [&g.left, &g.right]))
    {
        if !point.is_finite() {
            return Err(GeometryError::NonFinite(point.label.clone()));
        }
    }

    if start.label == end.label {
        return Err(GeometryError::DuplicateLabel(start.label.clone()));
    }

    let mut seen: HashMap<&str, &Point2> = HashMap::new();
    for gate in gateways {
        if gate.length() < TOLERANCE {
            return Err(GeometryError::Degenerate(gate.order));
        }
        for point in [&gate.left, &gate.right] {
            if point.label == start.label || point.label == end.label {
                return Err(GeometryError::DuplicateLabel(point.label.clone()));
            }
            match seen.get(point.label.as_str()) {
                Some(&position) if *position != point.position => {
                    return Err(GeometryError::DuplicateLabel(point.label.clone()));
                }
                Some(_) => {}
                None => {
                    seen.insert(&point.label, &point.position);
                }
            }
        }
    }

    for pair in gateways.windows(2) {
        if pair[1].order < pair[0].order {
            warn!(
                previous = pair[0].order,
                next = pair[1].order,
                "gateways are not supplied in traversal order"
            );
        }
    }

    Ok(())
}

/// Full edge test used while building: ordering, then geometry.
pub(crate) fn can_connect(from: &GraphNode, to: &GraphNode, gateways: &[Gateway]) -> bool {
    respects_ordering(from.role, to.role)
        && hop_is_legal(&from.point, from.role, &to.point, to.role, gateways)
}

/// Gates are visited in non-decreasing order; anything may lead to the end.
fn respects_ordering(from: NodeRole, to: NodeRole) -> bool {
    from <= to || to == NodeRole::End
}

/// Geometric part of the edge test, shared with path validation.
pub(crate) fn hop_is_legal(
    from: &Point,
    from_role: NodeRole,
    to: &Point,
    to_role: NodeRole,
    gateways: &[Gateway],
) -> bool {
    let current = from_role.max(to_role);
    respects_orientation(from, to, current, gateways) && is_visible(from, to, gateways, current)
}

/// Every gate at or beyond `current` must be threaded by the hop.
fn respects_orientation(
    from: &Point,
    to: &Point,
    current: NodeRole,
    gateways: &[Gateway],
) -> bool {
    gateways
        .iter()
        .filter(|gate| gate.role() >= current)
        .all(|gate| gate.is_threaded_by(from, to))
}
