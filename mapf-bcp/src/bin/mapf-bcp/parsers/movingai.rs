//! Parser for grid maps in the MovingAI benchmark format.
//!
//! ```text
//! type octile
//! height 2
//! width 3
//! map
//! ..@
//! ...
//! ```
//!
//! The cells `.`, `G` and `S` are passable, every other cell is blocked.
use std::io::BufRead;
use std::io::BufReader;
use std::io::Read;

use mapf_bcp::map::GridMap;

use super::InstanceParseError;

pub(crate) fn parse_movingai(source: impl Read) -> Result<GridMap, InstanceParseError> {
    let mut lines = BufReader::new(source).lines();
    let mut next_line = || -> Result<Option<String>, InstanceParseError> {
        for line in lines.by_ref() {
            let line = line?;
            if !line.trim().is_empty() {
                return Ok(Some(line));
            }
        }
        Ok(None)
    };

    let mut height = None;
    let mut width = None;
    loop {
        let line = next_line()?.ok_or(InstanceParseError::MissingHeader("map"))?;
        let mut words = line.split_whitespace();
        match (words.next(), words.next()) {
            (Some("type"), Some(_)) => {}
            (Some("height"), Some(value)) => height = Some(parse_dimension(value, &line)?),
            (Some("width"), Some(value)) => width = Some(parse_dimension(value, &line)?),
            (Some("map"), None) => break,
            _ => return Err(InstanceParseError::InvalidHeader(line)),
        }
    }

    let height = height.ok_or(InstanceParseError::MissingHeader("height"))?;
    let width = width.ok_or(InstanceParseError::MissingHeader("width"))?;

    let num_cells = GridMap::num_cells(width, height).ok_or_else(|| {
        InstanceParseError::InvalidHeader(format!("height {height}, width {width}"))
    })?;

    let mut cells = Vec::with_capacity(num_cells);
    for row in 0..height {
        let line = next_line()?.ok_or(InstanceParseError::IncorrectRowCount {
            expected: height,
            parsed: row,
        })?;
        let row_cells = line.trim_end().chars().collect::<Vec<_>>();
        if row_cells.len() != width as usize {
            return Err(InstanceParseError::IncorrectRowLength {
                row,
                expected: width,
                parsed: row_cells.len(),
            });
        }
        cells.extend(row_cells.into_iter().map(is_passable));
    }

    Ok(GridMap::from_passable(width, height, cells))
}

fn parse_dimension(value: &str, line: &str) -> Result<u32, InstanceParseError> {
    value
        .parse()
        .map_err(|_| InstanceParseError::InvalidHeader(line.to_owned()))
}

fn is_passable(cell: char) -> bool {
    matches!(cell, '.' | 'G' | 'S')
}
