use super::Edge;

/// A discrete time step.
pub type Time = u32;

/// A space-time resource: an edge (or, for wait edges, a node) at a given time step.
///
/// When used as a key for move usage, the edge is always the canonical representative of its
/// undirected edge (see [`crate::map::Map::undirected_edge`]), so that the two directions of an
/// undirected edge share a single key.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct EdgeTime {
    pub edge: Edge,
    pub time: Time,
}

impl EdgeTime {
    pub fn new(edge: Edge, time: Time) -> Self {
        EdgeTime { edge, time }
    }
}
