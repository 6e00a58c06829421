use enum_map::enum_map;
use enum_map::EnumMap;

use super::Map;
use crate::asserts::mapf_assert_simple;
use crate::basic_types::Direction;
use crate::basic_types::Edge;
use crate::basic_types::Node;
use crate::containers::KeyedVec;
use crate::containers::StorageKey;

/// A 4-connected grid.
///
/// The node at column `x` and row `y` has identifier `y * width + x`. Row 0 is the top row, so
/// [`Direction::North`] decreases `y`.
#[derive(Clone, Debug)]
pub struct GridMap {
    width: u32,
    height: u32,
    passable: KeyedVec<Node, bool>,
    offsets: EnumMap<Direction, (i64, i64)>,
}

impl GridMap {
    /// The number of cells of a `width` by `height` grid, or [`None`] if the cells cannot all be
    /// given a node identifier.
    pub fn num_cells(width: u32, height: u32) -> Option<usize> {
        width.checked_mul(height).map(|num_cells| num_cells as usize)
    }

    /// Creates a grid of which every cell is passable.
    ///
    /// The grid has to satisfy [`GridMap::num_cells`].
    pub fn open(width: u32, height: u32) -> Self {
        let num_cells = GridMap::num_cells(width, height).unwrap_or(0);
        GridMap::from_passable(width, height, vec![true; num_cells])
    }

    /// Creates a grid from the passability of its cells, given row by row.
    pub fn from_passable(width: u32, height: u32, cells: Vec<bool>) -> Self {
        let num_cells = GridMap::num_cells(width, height);
        mapf_assert_simple!(
            num_cells == Some(cells.len()),
            "expected {num_cells:?} cells for a {width}x{height} grid, got {}",
            cells.len()
        );

        let mut passable = KeyedVec::default();
        for cell in cells {
            let _ = passable.push(cell);
        }

        GridMap {
            width,
            height,
            passable,
            offsets: enum_map! {
                Direction::North => (0, -1),
                Direction::South => (0, 1),
                Direction::East => (1, 0),
                Direction::West => (-1, 0),
                Direction::Wait => (0, 0),
            },
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the node at column `x` and row `y`, or [`None`] if the cell is outside of the grid
    /// or blocked.
    pub fn node_at(&self, x: u32, y: u32) -> Option<Node> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let node = Node::new(y * self.width + x);
        self.is_passable(node).then_some(node)
    }

    pub fn is_passable(&self, node: Node) -> bool {
        self.passable.get(node).copied().unwrap_or(false)
    }

    /// Returns the node reached from `node` by moving in `direction`, or [`None`] if that move
    /// leaves the grid or enters a blocked cell.
    pub fn neighbour(&self, node: Node, direction: Direction) -> Option<Node> {
        let (x, y) = self.coordinates(node);
        let (dx, dy) = self.offsets[direction];

        let x = u32::try_from(x as i64 + dx).ok()?;
        let y = u32::try_from(y as i64 + dy).ok()?;
        self.node_at(x, y)
    }

    /// Returns the direction which moves an agent from `from` to the adjacent node `to`, if any.
    pub fn direction_between(&self, from: Node, to: Node) -> Option<Direction> {
        self.offsets
            .iter()
            .map(|(direction, _)| direction)
            .find(|&direction| self.neighbour(from, direction) == Some(to))
    }
}

impl Map for GridMap {
    fn destination(&self, edge: Edge) -> Node {
        let destination = self.neighbour(edge.node, edge.direction);
        mapf_assert_simple!(
            destination.is_some(),
            "edge {edge} leaves the passable part of the grid"
        );
        destination.unwrap_or(edge.node)
    }

    fn coordinates(&self, node: Node) -> (u32, u32) {
        let index = node.index() as u32;
        (index % self.width, index / self.width)
    }
}
