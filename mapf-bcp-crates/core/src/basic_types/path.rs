use std::fmt::Display;

use itertools::Itertools;

use super::Edge;
use super::Node;
use super::Time;
use crate::asserts::mapf_assert_simple;

/// The identifier of an agent.
pub type Agent = u32;

/// The route of a single agent through space and time.
///
/// At time `t < len() - 1` the agent traverses `edges[t]`. The last edge is the wait edge at the
/// destination; from time `len() - 1` onwards the agent is considered to stay at its destination
/// for the remainder of the planning horizon.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Path {
    edges: Box<[Edge]>,
}

impl Path {
    /// Creates a new path from its edges.
    ///
    /// Paths are produced by the pricing procedure and are assumed to be well-formed; an empty
    /// path is rejected.
    pub fn new(edges: impl Into<Box<[Edge]>>) -> Self {
        let edges = edges.into();
        mapf_assert_simple!(!edges.is_empty(), "a path contains at least one edge");
        Path { edges }
    }

    /// The number of edges of the path.
    pub fn len(&self) -> Time {
        self.edges.len() as Time
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// The time at which the agent arrives at its destination, after which it only waits.
    pub fn last_step(&self) -> Time {
        self.len() - 1
    }

    /// The edge traversed at time `time`, if the agent has not yet reached its destination.
    pub fn edge_at(&self, time: Time) -> Option<Edge> {
        if time < self.last_step() {
            Some(self.edges[time as usize])
        } else {
            None
        }
    }

    /// The node at which the agent ends up.
    pub fn final_node(&self) -> Node {
        self.edges[self.edges.len() - 1].node
    }

    /// Iterates over the edges traversed before reaching the destination, together with the time
    /// at which they are traversed.
    pub fn timed_edges(&self) -> impl Iterator<Item = (Time, Edge)> + '_ {
        self.edges[..self.edges.len() - 1]
            .iter()
            .enumerate()
            .map(|(time, edge)| (time as Time, *edge))
    }
}

impl Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.edges.iter().join(" "))
    }
}
