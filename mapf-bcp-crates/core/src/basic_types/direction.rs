use std::fmt::Display;

use enum_map::Enum;

/// The ways in which an agent can act during a single time step.
///
/// All directions except [`Direction::Wait`] move the agent to a neighbouring node; waiting keeps
/// the agent at its current node.
#[derive(Enum, Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Direction {
    North,
    South,
    East,
    West,
    Wait,
}

impl Direction {
    /// The direction which traverses the same undirected edge the other way around.
    ///
    /// Waiting is its own opposite.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
            Direction::Wait => Direction::Wait,
        }
    }

    pub fn is_wait(self) -> bool {
        self == Direction::Wait
    }

    /// Whether an edge in this direction is the representative of its undirected edge.
    ///
    /// Of every pair of opposite moves exactly one is canonical; the undirected edge is identified
    /// with that move.
    pub fn is_canonical(self) -> bool {
        matches!(self, Direction::East | Direction::South)
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::North => write!(f, "north"),
            Direction::South => write!(f, "south"),
            Direction::East => write!(f, "east"),
            Direction::West => write!(f, "west"),
            Direction::Wait => write!(f, "wait"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Direction;

    #[test]
    fn opposite_is_an_involution() {
        for direction in [
            Direction::North,
            Direction::South,
            Direction::East,
            Direction::West,
            Direction::Wait,
        ] {
            assert_eq!(direction.opposite().opposite(), direction);
        }
    }

    #[test]
    fn exactly_one_of_each_move_pair_is_canonical() {
        for direction in [
            Direction::North,
            Direction::South,
            Direction::East,
            Direction::West,
        ] {
            assert_ne!(direction.is_canonical(), direction.opposite().is_canonical());
        }
    }
}
