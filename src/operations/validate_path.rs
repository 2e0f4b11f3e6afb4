use tracing::debug;

use super::build_graph::hop_is_legal;
use crate::geometry::{Gateway, NodeRole, Point};

/// Re-checks a candidate route against the ordering and geometric rules.
///
/// Independent of the solver: any sequence of points can be checked. Each
/// point is attributed to the first gateway (in supplied order) carrying its
/// label, so a label shared by several gateways is judged by the earliest one.
///
/// Points that are neither the start, the end, nor an endpoint of any gateway
/// add nothing to the gate-order sequence, but any hop touching one is
/// illegal, so a path containing such a point is invalid.
pub struct ValidatePath<'a> {
    path: &'a [Point],
    gateways: &'a [Gateway],
    start: &'a Point,
    end: &'a Point,
}

impl<'a> ValidatePath<'a> {
    /// Creates a new `ValidatePath` query.
    #[must_use]
    pub fn new(
        path: &'a [Point],
        gateways: &'a [Gateway],
        start: &'a Point,
        end: &'a Point,
    ) -> Self {
        Self {
            path,
            gateways,
            start,
            end,
        }
    }

    /// Executes the validation, returning `true` if the route is legal.
    #[must_use]
    pub fn execute(&self) -> bool {
        let (Some(first), Some(last)) = (self.path.first(), self.path.last()) else {
            debug!("rejected: empty path");
            return false;
        };
        if first.label != self.start.label || last.label != self.end.label {
            debug!(first = %first.label, last = %last.label, "rejected: wrong endpoints");
            return false;
        }

        let orders: Vec<u32> = self
            .path
            .iter()
            .filter_map(|point| self.gateway_order(&point.label))
            .collect();
        if let Some(pair) = orders.windows(2).find(|pair| pair[1] < pair[0]) {
            debug!(from = pair[0], to = pair[1], "rejected: gate order decreases");
            return false;
        }

        self.path.windows(2).all(|hop| {
            let (from, to) = (&hop[0], &hop[1]);
            let legal = match (self.role_of(&from.label), self.role_of(&to.label)) {
                (Some(from_role), Some(to_role)) => {
                    hop_is_legal(from, from_role, to, to_role, self.gateways)
                }
                _ => false,
            };
            if !legal {
                debug!(from = %from.label, to = %to.label, "rejected: illegal hop");
            }
            legal
        })
    }

    /// Order of the first gateway with an endpoint labelled `label`.
    fn gateway_order(&self, label: &str) -> Option<u32> {
        self.gateways
            .iter()
            .find(|gate| gate.has_endpoint(label))
            .map(|gate| gate.order)
    }

    fn role_of(&self, label: &str) -> Option<NodeRole> {
        if label == self.start.label {
            Some(NodeRole::Start)
        } else if label == self.end.label {
            Some(NodeRole::End)
        } else {
            self.gateway_order(label).map(NodeRole::Gateway)
        }
    }
}
