//! Parser for files of weighted agent paths.
//!
//! Every non-empty line describes one path variable:
//! ```text
//! # agent weight positions...
//! 0 0.6 0,0 1,0
//! 1 0.6 1,0 0,0
//! ```
//! Consecutive positions are either equal (a wait) or adjacent (a move). The agent waits at its
//! last position for the remainder of the horizon. Everything after a `#` is ignored.
use std::io::BufRead;
use std::io::BufReader;
use std::io::Read;

use mapf_bcp::basic_types::Agent;
use mapf_bcp::basic_types::Edge;
use mapf_bcp::basic_types::Node;
use mapf_bcp::basic_types::Path;
use mapf_bcp::map::GridMap;
use mapf_bcp::map::Map;

use super::InstanceParseError;

/// A path together with the agent it belongs to and its value in the relaxation.
#[derive(Debug, Clone)]
pub(crate) struct WeightedPath {
    pub(crate) agent: Agent,
    pub(crate) weight: f64,
    pub(crate) path: Path,
}

pub(crate) fn parse_paths(
    source: impl Read,
    map: &GridMap,
) -> Result<Vec<WeightedPath>, InstanceParseError> {
    let mut paths = Vec::new();

    for (index, line) in BufReader::new(source).lines().enumerate() {
        let line = line?;
        let content = line.split('#').next().unwrap_or("").trim();
        if content.is_empty() {
            continue;
        }

        paths.push(parse_path(content, index + 1, map)?);
    }

    Ok(paths)
}

fn parse_path(
    content: &str,
    line: usize,
    map: &GridMap,
) -> Result<WeightedPath, InstanceParseError> {
    let mut fields = content.split_whitespace();

    let agent = parse_field(fields.next(), line, "agent")?;
    let weight = parse_field(fields.next(), line, "weight")?;

    let nodes = fields
        .map(|position| parse_position(position, line, map))
        .collect::<Result<Vec<_>, _>>()?;
    if nodes.is_empty() {
        return Err(InstanceParseError::MissingField {
            line,
            field: "position",
        });
    }

    let mut edges = nodes
        .windows(2)
        .map(|pair| {
            map.direction_between(pair[0], pair[1])
                .map(|direction| Edge::new(pair[0], direction))
                .ok_or_else(|| {
                    let (from_x, from_y) = map.coordinates(pair[0]);
                    let (to_x, to_y) = map.coordinates(pair[1]);
                    InstanceParseError::NonAdjacentPositions {
                        line,
                        from_x,
                        from_y,
                        to_x,
                        to_y,
                    }
                })
        })
        .collect::<Result<Vec<_>, _>>()?;
    edges.push(Edge::wait(nodes[nodes.len() - 1]));

    Ok(WeightedPath {
        agent,
        weight,
        path: Path::new(edges),
    })
}

fn parse_field<T: std::str::FromStr>(
    value: Option<&str>,
    line: usize,
    field: &'static str,
) -> Result<T, InstanceParseError> {
    let value = value.ok_or(InstanceParseError::MissingField { line, field })?;
    value.parse().map_err(|_| InstanceParseError::InvalidField {
        line,
        field,
        value: value.to_owned(),
    })
}

fn parse_position(position: &str, line: usize, map: &GridMap) -> Result<Node, InstanceParseError> {
    let invalid = || InstanceParseError::InvalidField {
        line,
        field: "position",
        value: position.to_owned(),
    };

    let (x, y) = position.split_once(',').ok_or_else(invalid)?;
    let x = x.trim().parse::<u32>().map_err(|_| invalid())?;
    let y = y.trim().parse::<u32>().map_err(|_| invalid())?;

    map.node_at(x, y)
        .ok_or(InstanceParseError::BlockedPosition { line, x, y })
}

#[cfg(test)]
mod tests {
    use mapf_bcp::basic_types::Direction;

    use super::*;

    #[test]
    fn positions_are_turned_into_edges() {
        let map = GridMap::open(2, 2);
        let source = "# a comment\n\n3 0.25 0,0 0,0 1,0 1,1 # trailing comment\n";

        let paths = parse_paths(source.as_bytes(), &map).expect("valid paths");

        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].agent, 3);
        assert_eq!(paths[0].weight, 0.25);
        let directions = paths[0]
            .path
            .edges()
            .iter()
            .map(|edge| edge.direction)
            .collect::<Vec<_>>();
        assert_eq!(
            directions,
            vec![
                Direction::Wait,
                Direction::East,
                Direction::South,
                Direction::Wait
            ]
        );
        assert_eq!(map.coordinates(paths[0].path.final_node()), (1, 1));
    }

    #[test]
    fn jumps_are_rejected() {
        let map = GridMap::open(3, 1);

        let error = parse_paths("0 1 0,0 2,0".as_bytes(), &map).expect_err("not adjacent");

        assert!(matches!(
            error,
            InstanceParseError::NonAdjacentPositions { line: 1, .. }
        ));
    }

    #[test]
    fn blocked_positions_are_rejected() {
        let map = GridMap::from_passable(2, 1, vec![true, false]);

        let error = parse_paths("0 1 0,0 1,0".as_bytes(), &map).expect_err("blocked");

        assert!(matches!(
            error,
            InstanceParseError::BlockedPosition {
                line: 1,
                x: 1,
                y: 0
            }
        ));
    }

    #[test]
    fn malformed_weights_are_rejected() {
        let map = GridMap::open(1, 1);

        let error = parse_paths("0 heavy 0,0".as_bytes(), &map).expect_err("invalid weight");

        assert!(matches!(
            error,
            InstanceParseError::InvalidField {
                field: "weight",
                ..
            }
        ));
    }
}
