pub(crate) mod movingai;
pub(crate) mod paths;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum InstanceParseError {
    #[error("failed to read file")]
    Io(#[from] std::io::Error),

    #[error("missing '{0}' header")]
    MissingHeader(&'static str),

    #[error("'{0}' is an invalid header")]
    InvalidHeader(String),

    #[error("expected {expected} rows, but parsed {parsed}")]
    IncorrectRowCount { expected: u32, parsed: u32 },

    #[error("row {row} should have {expected} cells, but has {parsed}")]
    IncorrectRowLength {
        row: u32,
        expected: u32,
        parsed: usize,
    },

    #[error("line {line}: missing {field}")]
    MissingField { line: usize, field: &'static str },

    #[error("line {line}: '{value}' is not a valid {field}")]
    InvalidField {
        line: usize,
        field: &'static str,
        value: String,
    },

    #[error("line {line}: ({x},{y}) is not a passable cell of the map")]
    BlockedPosition { line: usize, x: u32, y: u32 },

    #[error("line {line}: ({from_x},{from_y}) and ({to_x},{to_y}) are not adjacent")]
    NonAdjacentPositions {
        line: usize,
        from_x: u32,
        from_y: u32,
        to_x: u32,
        to_y: u32,
    },
}
