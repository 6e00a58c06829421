//! The environment in which the agents move.
//!
//! The conflict handlers only need a handful of lookups from the environment: the destination of a
//! directed edge, its opposite edge and the canonical representative of its undirected edge.
//! Coordinates are only used to produce readable diagnostics.
mod display;
mod grid_map;

use std::fmt::Debug;

pub use display::*;
pub use grid_map::*;

use crate::basic_types::Edge;
use crate::basic_types::Node;

/// The environment graph as seen by the conflict handlers.
pub trait Map: Debug {
    /// The node in which an agent traversing `edge` ends up.
    ///
    /// For a wait edge this is the origin of the edge.
    fn destination(&self, edge: Edge) -> Node;

    /// The coordinates of `node`, used for diagnostics.
    fn coordinates(&self, node: Node) -> (u32, u32);

    /// The edge which traverses the same undirected edge as `edge`, in the other direction.
    ///
    /// A wait edge is its own opposite.
    fn opposite_edge(&self, edge: Edge) -> Edge {
        Edge::new(self.destination(edge), edge.direction.opposite())
    }

    /// The canonical representative of the undirected edge which `edge` traverses.
    ///
    /// An edge and its opposite edge have the same undirected edge.
    fn undirected_edge(&self, edge: Edge) -> Edge {
        if edge.is_wait() || edge.direction.is_canonical() {
            edge
        } else {
            self.opposite_edge(edge)
        }
    }

    /// The coordinates of the destination of `edge`, used for diagnostics.
    fn destination_coordinates(&self, edge: Edge) -> (u32, u32) {
        self.coordinates(self.destination(edge))
    }
}
