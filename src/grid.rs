use crate::error::Error;
use direction::Direction;
use grid_2d::{Coord, Grid, Size};

/// Neighbour order used for discovery. Discovery order decides which of two
/// equally cheap open cells is expanded first, so it must not change.
pub static NEIGHBOUR_DIRECTIONS: [Direction; 8] = [
    Direction::East,
    Direction::West,
    Direction::South,
    Direction::North,
    Direction::SouthEast,
    Direction::SouthWest,
    Direction::NorthEast,
    Direction::NorthWest,
];

pub trait SolidGrid {
    fn size(&self) -> Size;
    fn is_solid(&self, coord: Coord) -> Option<bool>;
    fn is_solid_or_outside(&self, coord: Coord) -> bool {
        self.is_solid(coord).unwrap_or(true)
    }
}

#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellMarker {
    Open,
    Wall,
    Start,
    Goal,
    Path,
}

impl CellMarker {
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            ' ' => Some(CellMarker::Open),
            '*' => Some(CellMarker::Wall),
            'S' => Some(CellMarker::Start),
            'E' => Some(CellMarker::Goal),
            '+' => Some(CellMarker::Path),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            CellMarker::Open => ' ',
            CellMarker::Wall => '*',
            CellMarker::Start => 'S',
            CellMarker::Goal => 'E',
            CellMarker::Path => '+',
        }
    }

    pub fn is_passable(self) -> bool {
        self != CellMarker::Wall
    }
}

/// Rectangular table of cell markers. `Coord::x` is the column and
/// `Coord::y` the row.
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    cells: Grid<CellMarker>,
}

impl Maze {
    pub fn new(size: Size) -> Self {
        Self {
            cells: Grid::new_clone(size, CellMarker::Open),
        }
    }

    pub fn from_rows(rows: &[Vec<CellMarker>]) -> Result<Self, Error> {
        let width = match rows.first() {
            Some(first) if !first.is_empty() => first.len(),
            _ => return Err(Error::EmptyMaze),
        };
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != width {
                return Err(Error::RaggedRow {
                    row,
                    expected: width,
                    actual: cells.len(),
                });
            }
        }
        let size = Size::new(width as u32, rows.len() as u32);
        let cells = Grid::new_fn(size, |coord: Coord| {
            rows[coord.y as usize][coord.x as usize]
        });
        Ok(Self { cells })
    }

    pub fn size(&self) -> Size {
        self.cells.size()
    }

    pub fn at(&self, coord: Coord) -> Option<CellMarker> {
        self.cells.get(coord).cloned()
    }

    /// Overwrites a single cell, returning the marker it replaced.
    pub fn set(&mut self, coord: Coord, marker: CellMarker) -> Result<CellMarker, Error> {
        let cell = self.cells.get_mut(coord).ok_or(Error::OutsideGrid(coord))?;
        Ok(::std::mem::replace(cell, marker))
    }

    pub fn in_bounds(&self, coord: Coord) -> bool {
        self.cells.get(coord).is_some()
    }

    pub fn is_passable(&self, coord: Coord) -> bool {
        self.at(coord).map_or(false, CellMarker::is_passable)
    }

    /// All eight neighbouring coordinates, whether or not they exist.
    pub fn neighbours8(&self, coord: Coord) -> impl Iterator<Item = Coord> {
        neighbours8(coord)
    }

    pub fn find_marker(&self, marker: CellMarker) -> Result<Coord, Error> {
        self.cells
            .enumerate()
            .find(|&(_, &cell)| cell == marker)
            .map(|(coord, _)| coord)
            .ok_or(Error::NotFound(marker))
    }

    pub fn rows(&self) -> impl Iterator<Item = Vec<CellMarker>> + '_ {
        let size = self.size();
        (0..size.height() as i32).map(move |y| {
            (0..size.width() as i32)
                .filter_map(|x| self.at(Coord::new(x, y)))
                .collect()
        })
    }

    /// Copy of this maze with every coordinate of `path` marked as `Path`.
    pub fn with_path(&self, path: &[Coord]) -> Result<Self, Error> {
        let mut marked = self.clone();
        for &coord in path {
            marked.set(coord, CellMarker::Path)?;
        }
        Ok(marked)
    }
}

impl SolidGrid for Maze {
    fn size(&self) -> Size {
        self.cells.size()
    }
    fn is_solid(&self, coord: Coord) -> Option<bool> {
        self.at(coord).map(|cell| !cell.is_passable())
    }
}

pub fn neighbours8(coord: Coord) -> impl Iterator<Item = Coord> {
    NEIGHBOUR_DIRECTIONS.iter().map(move |direction| {
        let offset = direction.coord();
        Coord::new(coord.x + offset.x, coord.y + offset.y)
    })
}
