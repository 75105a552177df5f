//! Plain-text maze format.
//!
//! One line per row. `*` is a wall, `S` the start, `E` the goal (exit), `+`
//! a path cell and a space an open cell.

use crate::error::Error;
use crate::grid::{CellMarker, Maze};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown marker {ch:?} at row {row}, column {column}")]
    UnknownMarker { ch: char, row: usize, column: usize },
    #[error(transparent)]
    Shape(#[from] Error),
}

pub fn parse(input: &str) -> Result<Maze, ParseError> {
    let rows = input
        .trim_end_matches(|ch: char| ch == '\n' || ch == '\r')
        .lines()
        .enumerate()
        .map(|(row, line)| {
            line.chars()
                .enumerate()
                .map(|(column, ch)| {
                    CellMarker::from_char(ch).ok_or(ParseError::UnknownMarker { ch, row, column })
                })
                .collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Maze::from_rows(&rows)?)
}

pub fn render(maze: &Maze) -> String {
    let mut out = String::new();
    for row in maze.rows() {
        out.extend(row.into_iter().map(CellMarker::to_char));
        out.push('\n');
    }
    out
}
