use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::{debug, trace};

use super::BuildVisibilityGraph;
use crate::error::Result;
use crate::geometry::{Gateway, Point};
use crate::graph::{NodeIndex, VisibilityGraph};

/// Outcome of a routing query.
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult {
    /// Route from start to end; empty when no route exists.
    pub path: Vec<Point>,
    /// Sum of hop lengths; `+inf` when no route exists.
    pub total_distance: f64,
    pub found: bool,
}

impl PathResult {
    /// The result for an unreachable end point.
    #[must_use]
    pub fn not_found() -> Self {
        Self {
            path: Vec::new(),
            total_distance: f64::INFINITY,
            found: false,
        }
    }

    /// Length of each hop, in path order.
    #[must_use]
    pub fn hop_lengths(&self) -> Vec<f64> {
        self.path
            .windows(2)
            .map(|hop| hop[0].distance_to(&hop[1]))
            .collect()
    }
}

/// Heap entry ordered so that `BinaryHeap` pops the smallest distance first,
/// breaking ties by the lower node index.
#[derive(Debug, Clone, Copy)]
struct QueueEntry {
    distance: f64,
    node: NodeIndex,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on both keys for min-heap behavior.
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Computes the shortest route from `start` to `end` through `gateways`.
pub struct ShortestPath<'a> {
    gateways: &'a [Gateway],
    start: &'a Point,
    end: &'a Point,
}

impl<'a> ShortestPath<'a> {
    /// Creates a new `ShortestPath` query.
    #[must_use]
    pub fn new(gateways: &'a [Gateway], start: &'a Point, end: &'a Point) -> Self {
        Self {
            gateways,
            start,
            end,
        }
    }

    /// Executes the query.
    ///
    /// An unreachable end is not an error: it yields [`PathResult::not_found`].
    ///
    /// # Errors
    ///
    /// Returns an error if the input geometry is invalid or the start or end
    /// node cannot be located in the built graph.
    pub fn execute(&self) -> Result<PathResult> {
        self.execute_with_graph().map(|(result, _)| result)
    }

    /// Executes the query and also returns the graph it searched.
    ///
    /// # Errors
    ///
    /// Same as [`ShortestPath::execute`].
    pub fn execute_with_graph(&self) -> Result<(PathResult, VisibilityGraph)> {
        let graph = BuildVisibilityGraph::new(self.gateways, self.start, self.end).execute()?;
        let source = graph.node_index(&self.start.label)?;
        let target = graph.node_index(&self.end.label)?;
        let result = dijkstra(&graph, source, target);
        Ok((result, graph))
    }
}

/// Dijkstra search from `source` to `target`, stopping once `target` is settled.
fn dijkstra(graph: &VisibilityGraph, source: NodeIndex, target: NodeIndex) -> PathResult {
    let n = graph.node_count();
    let mut distance = vec![f64::INFINITY; n];
    let mut previous: Vec<Option<NodeIndex>> = vec![None; n];
    let mut visited = vec![false; n];
    let mut queue = BinaryHeap::new();

    distance[source.0] = 0.0;
    queue.push(QueueEntry {
        distance: 0.0,
        node: source,
    });

    while let Some(QueueEntry { node: u, .. }) = queue.pop() {
        if visited[u.0] {
            continue;
        }
        visited[u.0] = true;
        trace!(node = %u, distance = distance[u.0], "settled");
        if u == target {
            break;
        }

        for edge in graph.neighbors(u) {
            let v = edge.to;
            if visited[v.0] {
                continue;
            }
            let candidate = distance[u.0] + edge.weight;
            if candidate < distance[v.0] {
                distance[v.0] = candidate;
                previous[v.0] = Some(u);
                queue.push(QueueEntry {
                    distance: candidate,
                    node: v,
                });
            }
        }
    }

    if distance[target.0].is_infinite() {
        debug!("no path from start to end");
        return PathResult::not_found();
    }

    let path = reconstruct(graph, &previous, target);
    debug!(
        hops = path.len().saturating_sub(1),
        total_distance = distance[target.0],
        "path found"
    );
    PathResult {
        path,
        total_distance: distance[target.0],
        found: true,
    }
}

/// Walks `previous` back from `target` and returns the points in route order.
fn reconstruct(
    graph: &VisibilityGraph,
    previous: &[Option<NodeIndex>],
    target: NodeIndex,
) -> Vec<Point> {
    let mut indices = vec![target];
    let mut current = target;
    while let Some(prev) = previous[current.0] {
        indices.push(prev);
        current = prev;
    }
    indices.reverse();
    indices
        .into_iter()
        .filter_map(|index| graph.node(index))
        .map(|node| node.point.clone())
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{GatepathError, GeometryError};
    use crate::geometry::NodeRole;
    use crate::graph::GraphNode;
    use crate::operations::ValidatePath;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn start() -> Point {
        Point::new("FROM", 0.0, 0.0)
    }

    fn end() -> Point {
        Point::new("TO", 10.0, 0.0)
    }

    fn labels(result: &PathResult) -> Vec<&str> {
        result.path.iter().map(|p| p.label.as_str()).collect()
    }

    fn assert_consistent(result: &PathResult, gateways: &[Gateway], s: &Point, e: &Point) {
        assert!(result.found);
        let sum: f64 = result.hop_lengths().iter().sum();
        assert_relative_eq!(result.total_distance, sum, max_relative = 1e-9);
        assert!(ValidatePath::new(&result.path, gateways, s, e).execute());
    }

    // ── graph-level search ──

    fn diamond() -> VisibilityGraph {
        // 0 ─1─ 1 ─1─ 3, 0 ─1─ 2 ─1─ 3, 0 ─3─ 3
        let mut graph = VisibilityGraph::new();
        graph.add_node(GraphNode::new(Point::new("S", 0.0, 0.0), NodeRole::Start));
        graph.add_node(GraphNode::new(Point::new("A", 1.0, 1.0), NodeRole::Gateway(0)));
        graph.add_node(GraphNode::new(Point::new("B", 1.0, -1.0), NodeRole::Gateway(0)));
        graph.add_node(GraphNode::new(Point::new("E", 2.0, 0.0), NodeRole::End));
        graph.add_undirected_edge(NodeIndex(0), NodeIndex(1), 1.0);
        graph.add_undirected_edge(NodeIndex(0), NodeIndex(2), 1.0);
        graph.add_undirected_edge(NodeIndex(1), NodeIndex(3), 1.0);
        graph.add_undirected_edge(NodeIndex(2), NodeIndex(3), 1.0);
        graph.add_undirected_edge(NodeIndex(0), NodeIndex(3), 3.0);
        graph
    }

    #[test]
    fn dijkstra_prefers_cheaper_detour() {
        let result = dijkstra(&diamond(), NodeIndex(0), NodeIndex(3));
        assert!(result.found);
        assert_abs_diff_eq!(result.total_distance, 2.0);
        assert_eq!(result.path.len(), 3);
    }

    #[test]
    fn dijkstra_breaks_ties_by_lower_index() {
        for _ in 0..10 {
            let result = dijkstra(&diamond(), NodeIndex(0), NodeIndex(3));
            assert_eq!(labels(&result), ["S", "A", "E"]);
        }
    }

    #[test]
    fn dijkstra_reports_unreachable_target() {
        let mut graph = VisibilityGraph::new();
        graph.add_node(GraphNode::new(Point::new("S", 0.0, 0.0), NodeRole::Start));
        graph.add_node(GraphNode::new(Point::new("E", 1.0, 0.0), NodeRole::End));
        let result = dijkstra(&graph, NodeIndex(0), NodeIndex(1));
        assert_eq!(result, PathResult::not_found());
        assert!(result.total_distance.is_infinite());
    }

    #[test]
    fn queue_pops_smallest_then_lowest_index() {
        let mut queue = BinaryHeap::new();
        for (distance, node) in [(2.0, 0), (1.0, 5), (1.0, 3), (0.5, 9)] {
            queue.push(QueueEntry {
                distance,
                node: NodeIndex(node),
            });
        }
        let order: Vec<usize> = std::iter::from_fn(|| queue.pop().map(|e| e.node.0)).collect();
        assert_eq!(order, [9, 3, 5, 0]);
    }

    // ── end-to-end queries ──

    #[test]
    fn no_gateways_goes_straight() {
        let (s, e) = (start(), end());
        let result = ShortestPath::new(&[], &s, &e).execute().unwrap();
        assert!(result.found);
        assert_abs_diff_eq!(result.total_distance, 10.0, epsilon = 1e-12);
        assert_eq!(result.path, vec![s.clone(), e.clone()]);
        assert_consistent(&result, &[], &s, &e);
    }

    #[test]
    fn single_gate_on_the_straight_line() {
        let (s, e) = (start(), end());
        let gates = [Gateway::new(
            Point::new("L", 5.0, -1.0),
            Point::new("R", 5.0, 1.0),
            0,
        )];
        let result = ShortestPath::new(&gates, &s, &e).execute().unwrap();
        assert!(result.found);
        assert_abs_diff_eq!(result.total_distance, 10.0, epsilon = 1e-9);
        assert_consistent(&result, &gates, &s, &e);
    }

    #[test]
    fn aligned_gates_are_threaded_in_one_hop() {
        let (s, e) = (start(), Point::new("TO", 10.0, 1.0));
        let gates = [
            Gateway::new(Point::new("A", 2.0, -1.0), Point::new("B", 2.0, 2.0), 0),
            Gateway::new(Point::new("C", 5.0, 3.0), Point::new("D", 5.0, -2.0), 1),
            Gateway::new(Point::new("E", 8.0, 0.0), Point::new("F", 8.0, 2.0), 2),
        ];
        let result = ShortestPath::new(&gates, &s, &e).execute().unwrap();
        assert_consistent(&result, &gates, &s, &e);
        assert_abs_diff_eq!(result.total_distance, 101.0_f64.sqrt(), epsilon = 1e-9);
    }

    #[test]
    fn gate_off_the_line_blocks_route() {
        let (s, e) = (start(), end());
        let gates = [Gateway::new(
            Point::new("L", 5.0, 2.0),
            Point::new("R", 5.0, 4.0),
            0,
        )];
        let result = ShortestPath::new(&gates, &s, &e).execute().unwrap();
        assert!(!result.found);
        assert!(result.path.is_empty());
        assert!(result.total_distance.is_infinite());
    }

    #[test]
    fn repeated_solves_are_bit_identical() {
        let (s, e) = (start(), Point::new("TO", 10.0, 1.0));
        let gates = [
            Gateway::new(Point::new("A", 2.0, -1.0), Point::new("B", 2.0, 2.0), 0),
            Gateway::new(Point::new("C", 5.0, 3.0), Point::new("D", 5.0, -2.0), 1),
        ];
        let first = ShortestPath::new(&gates, &s, &e).execute().unwrap();
        for _ in 0..5 {
            let again = ShortestPath::new(&gates, &s, &e).execute().unwrap();
            assert_eq!(again.path, first.path);
            assert_eq!(again.total_distance.to_bits(), first.total_distance.to_bits());
        }
    }

    #[test]
    fn graph_is_returned_for_diagnostics() {
        let (s, e) = (start(), end());
        let gates = [Gateway::new(
            Point::new("L", 5.0, -1.0),
            Point::new("R", 5.0, 1.0),
            0,
        )];
        let (result, graph) = ShortestPath::new(&gates, &s, &e)
            .execute_with_graph()
            .unwrap();
        assert!(result.found);
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.sentinel(NodeRole::Start), Some(NodeIndex(0)));
        assert_eq!(graph.sentinel(NodeRole::End), Some(NodeIndex(3)));
    }

    #[test]
    fn invalid_geometry_is_an_error_not_a_missing_path() {
        let (s, e) = (start(), end());
        let gates = [Gateway::new(
            Point::new("L", 5.0, 0.0),
            Point::new("R", 5.0, 0.0),
            0,
        )];
        let err = ShortestPath::new(&gates, &s, &e).execute().unwrap_err();
        assert!(matches!(
            err,
            GatepathError::Geometry(GeometryError::Degenerate(0))
        ));
    }
}
