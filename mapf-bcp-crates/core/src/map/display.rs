use std::fmt::Display;

use super::Map;
use crate::basic_types::Edge;
use crate::basic_types::Path;

/// Formats an [`Edge`] by the coordinates of its endpoints, e.g. `((0,0),(1,0))`.
#[derive(Clone, Copy, Debug)]
pub struct DisplayEdge<'a> {
    map: &'a dyn Map,
    edge: Edge,
}

impl<'a> DisplayEdge<'a> {
    pub fn new(map: &'a dyn Map, edge: Edge) -> Self {
        DisplayEdge { map, edge }
    }
}

impl Display for DisplayEdge<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (x1, y1) = self.map.coordinates(self.edge.node);
        let (x2, y2) = self.map.destination_coordinates(self.edge);
        write!(f, "(({x1},{y1}),({x2},{y2}))")
    }
}

/// Formats a [`Path`] as the sequence of coordinates visited by the agent.
#[derive(Clone, Copy, Debug)]
pub struct DisplayPath<'a> {
    map: &'a dyn Map,
    path: &'a Path,
}

impl<'a> DisplayPath<'a> {
    pub fn new(map: &'a dyn Map, path: &'a Path) -> Self {
        DisplayPath { map, path }
    }
}

impl Display for DisplayPath<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, edge) in self.path.edges().iter().enumerate() {
            let (x, y) = self.map.coordinates(edge.node);
            if index > 0 {
                write!(f, " ")?;
            }
            write!(f, "({x},{y})")?;
        }
        Ok(())
    }
}
