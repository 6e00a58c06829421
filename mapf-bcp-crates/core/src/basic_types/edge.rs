use std::fmt::Display;

use super::Direction;
use crate::containers::StorageKey;

/// A location in the environment graph.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Node(u32);

impl Node {
    pub fn new(id: u32) -> Self {
        Node(id)
    }

    pub fn id(self) -> u32 {
        self.0
    }
}

impl StorageKey for Node {
    fn index(&self) -> usize {
        self.0 as usize
    }

    fn create_from_index(index: usize) -> Self {
        Node(index as u32)
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// A directed edge: leaving `node` in `direction`.
///
/// An edge with direction [`Direction::Wait`] denotes staying at `node` for one time step.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Edge {
    pub node: Node,
    pub direction: Direction,
}

impl Edge {
    pub fn new(node: Node, direction: Direction) -> Self {
        Edge { node, direction }
    }

    /// The edge which keeps an agent at `node` for a single time step.
    pub fn wait(node: Node) -> Self {
        Edge {
            node,
            direction: Direction::Wait,
        }
    }

    pub fn is_wait(&self) -> bool {
        self.direction.is_wait()
    }
}

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.node, self.direction)
    }
}
