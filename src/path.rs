use crate::cost::direction_between;
use crate::error::Error;
use direction::Direction;
use grid_2d::Coord;
use std::collections::HashMap;
use std::slice;

pub trait ParentMap {
    fn parent(&self, coord: Coord) -> Option<Coord>;
}

impl ParentMap for HashMap<Coord, Coord> {
    fn parent(&self, coord: Coord) -> Option<Coord> {
        self.get(&coord).cloned()
    }
}

/// Follows parent links back from `goal` to `start` and returns the cells
/// strictly between them, ordered from start to goal.
///
/// The walk gives up with `Error::BrokenChain` if a link is missing or if
/// `start` has not been reached after `limit` links, which is what a cycle
/// in `parents` looks like from here.
pub fn reconstruct<P>(parents: &P, start: Coord, goal: Coord, limit: usize) -> Result<Vec<Coord>, Error>
where
    P: ParentMap + ?Sized,
{
    let mut path = Vec::new();
    if start == goal {
        return Ok(path);
    }
    let mut current = goal;
    for _ in 0..limit {
        let parent = parents
            .parent(current)
            .ok_or(Error::BrokenChain { at: current })?;
        if parent == start {
            path.reverse();
            return Ok(path);
        }
        path.push(parent);
        current = parent;
    }
    Err(Error::BrokenChain { at: current })
}

/// Iterates over the steps of a route, yielding the cell each step lands on
/// and the direction it was entered from the previous cell.
pub struct PathWalk<'a> {
    current_coord: Coord,
    coords: slice::Iter<'a, Coord>,
}

impl<'a> PathWalk<'a> {
    /// `path` lists every cell after `start`, goal included.
    pub fn new(start: Coord, path: &'a [Coord]) -> Self {
        Self {
            current_coord: start,
            coords: path.iter(),
        }
    }
}

impl<'a> Iterator for PathWalk<'a> {
    type Item = Result<(Coord, Direction), Error>;
    fn next(&mut self) -> Option<Self::Item> {
        let &next_coord = self.coords.next()?;
        let step = direction_between(self.current_coord, next_coord);
        self.current_coord = next_coord;
        Some(step.map(|direction| (next_coord, direction)))
    }
}
