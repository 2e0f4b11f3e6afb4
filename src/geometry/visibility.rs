use super::{Gateway, NodeRole, Point};

/// Combined line-of-sight test for a straight hop `from → to`.
///
/// The hop is visible when:
/// 1. it touches no gateway that is still ahead, i.e. whose role is strictly
///    greater than `current`;
/// 2. it threads the mouth of every gateway (see [`Gateway::is_threaded_by`]).
#[must_use]
pub fn is_visible(from: &Point, to: &Point, gateways: &[Gateway], current: NodeRole) -> bool {
    let blocked = gateways
        .iter()
        .filter(|gate| gate.role() > current)
        .any(|gate| gate.is_crossed_by(from, to));
    if blocked {
        return false;
    }

    gateways.iter().all(|gate| gate.is_threaded_by(from, to))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate(order: u32, x: f64, half_width: f64) -> Gateway {
        Gateway::new(
            Point::new(format!("L{order}"), x, -half_width),
            Point::new(format!("R{order}"), x, half_width),
            order,
        )
    }

    #[test]
    fn no_gateways_is_always_visible() {
        let from = Point::new("S", 0.0, 0.0);
        let to = Point::new("T", 3.0, 4.0);
        assert!(is_visible(&from, &to, &[], NodeRole::Start));
    }

    #[test]
    fn passed_gate_does_not_block() {
        let gates = [gate(0, 5.0, 1.0)];
        let from = Point::new("S", 0.0, 0.0);
        let to = Point::new("T", 10.0, 0.0);
        assert!(is_visible(&from, &to, &gates, NodeRole::End));
    }

    #[test]
    fn upcoming_gate_blocks_crossing_hop() {
        let gates = [gate(0, 5.0, 1.0)];
        let from = Point::new("S", 0.0, 0.0);
        let to = Point::new("T", 10.0, 0.0);
        assert!(!is_visible(&from, &to, &gates, NodeRole::Start));
    }

    #[test]
    fn current_gate_does_not_block_but_next_gate_does() {
        let gates = [gate(0, 5.0, 1.0), gate(1, 8.0, 1.0)];
        let from = Point::new("S", 0.0, 0.0);
        // Crosses gate 0 and stops short of gate 1, which it still threads.
        let short = Point::new("M", 6.0, 0.0);
        assert!(is_visible(&from, &short, &gates, NodeRole::Gateway(0)));
        // Crosses gate 1, still ahead of gate 0.
        let long = Point::new("T", 10.0, 0.0);
        assert!(!is_visible(&from, &long, &gates, NodeRole::Gateway(0)));
        assert!(is_visible(&from, &long, &gates, NodeRole::Gateway(1)));
    }

    #[test]
    fn funnel_applies_to_every_gate() {
        // Second gate sits off the straight line, so the hop misses its mouth.
        let gates = [
            gate(0, 5.0, 1.0),
            Gateway::new(Point::new("L1", 8.0, 2.0), Point::new("R1", 8.0, 4.0), 1),
        ];
        let from = Point::new("S", 0.0, 0.0);
        let to = Point::new("T", 10.0, 0.0);
        assert!(!is_visible(&from, &to, &gates, NodeRole::End));
    }

    #[test]
    fn aligned_gates_are_all_threaded() {
        let gates = [gate(0, 3.0, 1.0), gate(1, 6.0, 2.0)];
        let from = Point::new("S", 0.0, 0.0);
        let to = Point::new("T", 10.0, 0.5);
        assert!(is_visible(&from, &to, &gates, NodeRole::End));
    }
}
