/// Position of a graph node within the ordered route.
///
/// The derived ordering is `Start < Gateway(0) < Gateway(1) < … < End`, so the
/// start and end of the route compare below and above every real gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NodeRole {
    Start,
    Gateway(u32),
    End,
}

impl std::fmt::Display for NodeRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Gateway(order) => write!(f, "gate {order}"),
            Self::End => f.write_str("end"),
        }
    }
}
