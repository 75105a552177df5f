use crate::error::Error;
use direction::Direction;
use grid_2d::Coord;

pub const ORTHOGONAL_COST: u32 = 10;
pub const DIAGONAL_COST: u32 = 14;

fn manhatten_distance(a: Coord, b: Coord) -> u32 {
    ((a.x - b.x).abs() + (a.y - b.y).abs()) as u32
}

/// Direction of the single step leading from `from` to `to`.
pub fn direction_between(from: Coord, to: Coord) -> Result<Direction, Error> {
    let direction = match (to.x - from.x, to.y - from.y) {
        (0, -1) => Direction::North,
        (1, -1) => Direction::NorthEast,
        (1, 0) => Direction::East,
        (1, 1) => Direction::SouthEast,
        (0, 1) => Direction::South,
        (-1, 1) => Direction::SouthWest,
        (-1, 0) => Direction::West,
        (-1, -1) => Direction::NorthWest,
        _ => return Err(Error::InvalidMove { from, to }),
    };
    Ok(direction)
}

/// Fixed step costs for octile movement.
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CostModel {
    pub orthogonal: u32,
    pub diagonal: u32,
}

impl CostModel {
    pub fn new(orthogonal: u32, diagonal: u32) -> Self {
        Self {
            orthogonal,
            diagonal,
        }
    }

    pub fn direction_cost(&self, direction: Direction) -> u32 {
        if direction.is_ordinal() {
            self.diagonal
        } else {
            self.orthogonal
        }
    }

    pub fn step_cost(&self, from: Coord, to: Coord) -> Result<u32, Error> {
        direction_between(from, to).map(|direction| self.direction_cost(direction))
    }

    /// Orthogonal-only distance to the goal, ignoring walls. Overestimates
    /// routes that can cut corners diagonally. Saturates at `u32::MAX`.
    pub fn heuristic(&self, coord: Coord, goal: Coord) -> u32 {
        manhatten_distance(coord, goal).saturating_mul(self.orthogonal)
    }
}

impl Default for CostModel {
    fn default() -> Self {
        Self::new(ORTHOGONAL_COST, DIAGONAL_COST)
    }
}
