use crate::config::SearchConfig;
use crate::cost::CostModel;
use crate::error::Error;
use crate::frontier::Frontier;
use crate::grid::{CellMarker, Maze, SolidGrid};
use crate::metadata::SearchMetadata;
use crate::path;
use grid_2d::{Coord, Size};
use log::{debug, trace};

/// Result of a search that did not fail. Running out of open cells is an
/// expected answer rather than an error.
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Found(T),
    NoPath(SearchMetadata),
}

impl<T> Outcome<T> {
    pub fn found(self) -> Option<T> {
        match self {
            Outcome::Found(value) => Some(value),
            Outcome::NoPath(_) => None,
        }
    }

    pub fn is_found(&self) -> bool {
        match self {
            Outcome::Found(_) => true,
            Outcome::NoPath(_) => false,
        }
    }
}

#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub start: Coord,
    pub goal: Coord,
    /// Cells strictly between start and goal, in walking order.
    pub path: Vec<Coord>,
    pub metadata: SearchMetadata,
}

impl Solution {
    /// Every cell of the route after the start, goal included.
    pub fn route(&self) -> Vec<Coord> {
        let mut route = self.path.clone();
        if self.start != self.goal {
            route.push(self.goal);
        }
        route
    }

    pub fn route_cost(&self, costs: &CostModel) -> Result<u32, Error> {
        let route = self.route();
        path::PathWalk::new(self.start, &route).try_fold(0u32, |total, step| {
            let (to, direction) = step?;
            total
                .checked_add(costs.direction_cost(direction))
                .ok_or(Error::CostOverflow { at: to })
        })
    }
}

#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolvedMaze {
    pub maze: Maze,
    pub solution: Solution,
}

/// Runs A* searches. Holds on to its frontier so that repeated searches over
/// grids of the same size do not reallocate.
#[derive(Debug, Clone)]
pub struct Solver {
    config: SearchConfig,
    frontier: Frontier,
}

impl Solver {
    pub fn new(size: Size) -> Self {
        Self::with_config(size, SearchConfig::default())
    }

    pub fn with_config(size: Size, config: SearchConfig) -> Self {
        Self {
            config,
            frontier: Frontier::new(size),
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    pub fn solve(&mut self, maze: &Maze) -> Result<Outcome<SolvedMaze>, Error> {
        let start = maze.find_marker(CellMarker::Start)?;
        let goal = maze.find_marker(CellMarker::Goal)?;
        match self.search(maze, start, goal)? {
            Outcome::Found(solution) => {
                let maze = maze.with_path(&solution.path)?;
                Ok(Outcome::Found(SolvedMaze { maze, solution }))
            }
            Outcome::NoPath(metadata) => Ok(Outcome::NoPath(metadata)),
        }
    }

    pub fn search<G>(&mut self, grid: &G, start: Coord, goal: Coord) -> Result<Outcome<Solution>, Error>
    where
        G: SolidGrid,
    {
        match grid.is_solid(start) {
            None => return Err(Error::StartOutsideGrid),
            Some(true) => return Err(Error::StartSolid),
            Some(false) => (),
        }
        if grid.is_solid(goal).is_none() {
            return Err(Error::GoalOutsideGrid);
        }

        let size = grid.size();
        if self.frontier.size() != size {
            self.frontier = Frontier::new(size);
        }

        let costs = self.config.costs;
        self.frontier.reset(start, goal, &costs)?;
        debug!("searching from {:?} to {:?}", start, goal);

        if start == goal {
            self.frontier.settle(start)?;
            return Ok(Outcome::Found(Solution {
                start,
                goal,
                path: Vec::new(),
                metadata: SearchMetadata {
                    num_nodes_visited: 1,
                    cost: 0,
                    length: 0,
                },
            }));
        }

        for neighbour in self.frontier.reachable_neighbours(grid, start) {
            self.frontier.discover(neighbour, start, &costs)?;
        }
        self.frontier.settle(start)?;

        let mut current = match self.frontier.select_next() {
            Ok(coord) => coord,
            Err(Error::FrontierExhausted) => return Ok(self.exhausted()),
            Err(e) => return Err(e),
        };

        let mut num_expansions = 0;
        loop {
            self.frontier.settle(current)?;
            if current == goal {
                break;
            }

            num_expansions += 1;
            if num_expansions > self.config.max_expansions {
                return Err(Error::ExpansionLimitReached(self.config.max_expansions));
            }
            trace!("expanding {:?}", current);
            self.expand(grid, current, &costs)?;

            current = match self.frontier.select_next() {
                Ok(coord) => coord,
                Err(Error::FrontierExhausted) => return Ok(self.exhausted()),
                Err(e) => return Err(e),
            };
        }

        let limit = size.count() as usize;
        let path = path::reconstruct(&self.frontier, start, goal, limit)?;
        let cost = self
            .frontier
            .movement_cost(goal)
            .ok_or(Error::BrokenChain { at: goal })?;
        let metadata = SearchMetadata {
            num_nodes_visited: self.frontier.closed_len(),
            cost,
            length: path.len() + 1,
        };
        debug!(
            "found path of {} steps costing {} after closing {} cells",
            metadata.length, metadata.cost, metadata.num_nodes_visited
        );
        Ok(Outcome::Found(Solution {
            start,
            goal,
            path,
            metadata,
        }))
    }

    fn expand<G>(&mut self, grid: &G, current: Coord, costs: &CostModel) -> Result<(), Error>
    where
        G: SolidGrid,
    {
        for neighbour in self.frontier.reachable_neighbours(grid, current) {
            if self.frontier.is_open(neighbour) {
                self.frontier.relax(neighbour, current, costs)?;
            } else {
                self.frontier.discover(neighbour, current, costs)?;
            }
        }
        Ok(())
    }

    fn exhausted<T>(&self) -> Outcome<T> {
        let metadata = SearchMetadata {
            num_nodes_visited: self.frontier.closed_len(),
            ..Default::default()
        };
        debug!(
            "no path after closing {} cells",
            metadata.num_nodes_visited
        );
        Outcome::NoPath(metadata)
    }
}

pub fn solve(maze: &Maze, config: SearchConfig) -> Result<Outcome<SolvedMaze>, Error> {
    Solver::with_config(maze.size(), config).solve(maze)
}
