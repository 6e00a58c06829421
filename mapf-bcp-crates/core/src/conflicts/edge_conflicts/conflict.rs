use std::fmt::Display;

use crate::basic_types::Edge;
use crate::basic_types::Node;
use crate::basic_types::Path;
use crate::basic_types::Time;
use crate::conflicts::ConflictClass;
use crate::map::DisplayEdge;
use crate::map::Map;

/// A set of space-time edges of which at most one may be used in an integral solution.
///
/// The set consists of an undirected edge (both of its directions) at `time` and, when waits are
/// modelled, the wait at one of its endpoints at `time`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeConflict {
    edges: [Edge; 2],
    wait: Option<Edge>,
    time: Time,
}

impl EdgeConflict {
    /// The conflict between the two directions of the undirected edge of `edge` at `time`.
    pub fn between_moves(map: &dyn Map, edge: Edge, time: Time) -> Self {
        EdgeConflict {
            edges: [edge, map.opposite_edge(edge)],
            wait: None,
            time,
        }
    }

    /// Adds the wait at `node` to the conflict.
    pub fn with_wait_at(self, node: Node) -> Self {
        EdgeConflict {
            wait: Some(Edge::wait(node)),
            ..self
        }
    }

    /// The two directions of the conflicting edge.
    pub fn moves(&self) -> [Edge; 2] {
        self.edges
    }

    /// The wait edge of the conflict, if waits are modelled.
    pub fn wait(&self) -> Option<Edge> {
        self.wait
    }

    pub fn time(&self) -> Time {
        self.time
    }

    pub fn class(&self) -> ConflictClass {
        if self.wait.is_some() {
            ConflictClass::EdgeWait
        } else {
            ConflictClass::Edge
        }
    }

    /// All edges of the conflict.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edges.iter().copied().chain(self.wait)
    }

    pub fn contains(&self, edge: Edge) -> bool {
        self.edges().any(|other| other == edge)
    }

    /// Whether an agent following `path` uses one of the edges of the conflict.
    ///
    /// Before its last step the agent uses `path[time]`; from its last step onwards it waits at
    /// its final node, which only conflicts when waits are modelled.
    pub fn is_used_by(&self, path: &Path) -> bool {
        match path.edge_at(self.time) {
            Some(edge) => self.contains(edge),
            None => self
                .wait
                .is_some_and(|wait| wait.node == path.final_node()),
        }
    }

    /// The name of the row of the cut, e.g. `edge_conflict((0,0),(1,0),3)`.
    pub fn row_name(&self, map: &dyn Map) -> String {
        let (x1, y1) = map.coordinates(self.edges[0].node);
        let (x2, y2) = map.destination_coordinates(self.edges[0]);
        format!("edge_conflict(({x1},{y1}),({x2},{y2}),{})", self.time)
    }

    /// Formats the conflict by the coordinates of its edges.
    pub fn display<'a>(&'a self, map: &'a dyn Map) -> DisplayConflict<'a> {
        DisplayConflict {
            map,
            conflict: self,
        }
    }
}

/// Formats an [`EdgeConflict`] by coordinates, see [`EdgeConflict::display`].
#[derive(Debug, Clone, Copy)]
pub struct DisplayConflict<'a> {
    map: &'a dyn Map,
    conflict: &'a EdgeConflict,
}

impl Display for DisplayConflict<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", DisplayEdge::new(self.map, self.conflict.edges[0]))?;
        if let Some(wait) = self.conflict.wait {
            let (x, y) = self.map.coordinates(wait.node);
            write!(f, " + wait ({x},{y})")?;
        }
        write!(f, " at t={}", self.conflict.time)
    }
}
