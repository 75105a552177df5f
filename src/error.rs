use crate::grid::CellMarker;
use grid_2d::Coord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("no {0:?} cell in maze")]
    NotFound(CellMarker),
    #[error("no single step leads from {from:?} to {to:?}")]
    InvalidMove { from: Coord, to: Coord },
    #[error("open set is empty")]
    FrontierExhausted,
    #[error("parent chain broken at {at:?}")]
    BrokenChain { at: Coord },
    #[error("start lies outside the grid")]
    StartOutsideGrid,
    #[error("goal lies outside the grid")]
    GoalOutsideGrid,
    #[error("start cell is solid")]
    StartSolid,
    #[error("{0:?} lies outside the grid")]
    OutsideGrid(Coord),
    #[error("maze has no cells")]
    EmptyMaze,
    #[error("row {row} has {actual} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("movement cost to {at:?} does not fit in a u32")]
    CostOverflow { at: Coord },
    #[error("gave up after {0} expansions")]
    ExpansionLimitReached(usize),
}
