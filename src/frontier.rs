use crate::cost::CostModel;
use crate::error::Error;
use crate::grid::{self, SolidGrid};
use crate::path::ParentMap;
use best::BestMap;
use grid_2d::{Coord, Grid, Size};
use indexmap::IndexSet;
use log::trace;
use std::cmp::Reverse;

#[derive(Debug, Clone, Copy, Default)]
struct SearchNode {
    seen: u64,
    visited: u64,
    parent: Option<Coord>,
    movement_cost: u32,
    heuristic_cost: u32,
}

impl SearchNode {
    fn net_cost(&self) -> u32 {
        self.movement_cost.saturating_add(self.heuristic_cost)
    }
}

/// Open and closed sets plus the per-cell cost table and parent links of a
/// single search.
///
/// Tables are not cleared between runs. Each run bumps `seq`, and a node only
/// counts as discovered (or closed) when its `seen` (or `visited`) stamp
/// matches the current run.
#[derive(Debug, Clone)]
pub struct Frontier {
    seq: u64,
    goal: Coord,
    open: IndexSet<Coord>,
    closed_count: usize,
    node_grid: Grid<SearchNode>,
}

impl Frontier {
    pub fn new(size: Size) -> Self {
        Self {
            seq: 1,
            goal: Coord::new(0, 0),
            open: IndexSet::new(),
            closed_count: 0,
            node_grid: Grid::new_clone(size, SearchNode::default()),
        }
    }

    pub fn size(&self) -> Size {
        self.node_grid.size()
    }

    pub fn goal(&self) -> Coord {
        self.goal
    }

    /// `start` is known with a movement cost of zero but is not placed in the
    /// open set.
    pub fn reset(&mut self, start: Coord, goal: Coord, costs: &CostModel) -> Result<(), Error> {
        self.seq += 1;
        self.goal = goal;
        self.open.clear();
        self.closed_count = 0;
        let seq = self.seq;
        let node = self.node_mut(start)?;
        node.seen = seq;
        node.parent = None;
        node.movement_cost = 0;
        node.heuristic_cost = costs.heuristic(start, goal);
        Ok(())
    }

    fn node(&self, coord: Coord) -> Option<&SearchNode> {
        self.node_grid
            .get(coord)
            .filter(|node| node.seen == self.seq)
    }

    fn node_mut(&mut self, coord: Coord) -> Result<&mut SearchNode, Error> {
        self.node_grid
            .get_mut(coord)
            .ok_or(Error::OutsideGrid(coord))
    }

    pub fn is_known(&self, coord: Coord) -> bool {
        self.node(coord).is_some()
    }

    pub fn is_open(&self, coord: Coord) -> bool {
        self.open.contains(&coord)
    }

    pub fn is_closed(&self, coord: Coord) -> bool {
        self.node(coord).map_or(false, |node| node.visited == self.seq)
    }

    pub fn open_len(&self) -> usize {
        self.open.len()
    }

    pub fn closed_len(&self) -> usize {
        self.closed_count
    }

    pub fn movement_cost(&self, coord: Coord) -> Option<u32> {
        self.node(coord).map(|node| node.movement_cost)
    }

    pub fn heuristic_cost(&self, coord: Coord) -> Option<u32> {
        self.node(coord).map(|node| node.heuristic_cost)
    }

    pub fn net_cost(&self, coord: Coord) -> Option<u32> {
        self.node(coord).map(SearchNode::net_cost)
    }

    pub fn parent(&self, coord: Coord) -> Option<Coord> {
        self.node(coord).and_then(|node| node.parent)
    }

    pub fn reachable_neighbours<G>(&self, grid: &G, coord: Coord) -> Vec<Coord>
    where
        G: SolidGrid,
    {
        grid::neighbours8(coord)
            .filter(|&neighbour| !grid.is_solid_or_outside(neighbour))
            .filter(|&neighbour| !self.is_closed(neighbour))
            .collect()
    }

    pub fn discover(&mut self, coord: Coord, via: Coord, costs: &CostModel) -> Result<bool, Error> {
        if self.is_known(coord) {
            return Ok(false);
        }
        let parent_cost = self.movement_cost(via).ok_or(Error::BrokenChain { at: via })?;
        let movement_cost = parent_cost
            .checked_add(costs.step_cost(via, coord)?)
            .ok_or(Error::CostOverflow { at: coord })?;
        let heuristic_cost = costs.heuristic(coord, self.goal);
        let seq = self.seq;
        let node = self.node_mut(coord)?;
        node.seen = seq;
        node.parent = Some(via);
        node.movement_cost = movement_cost;
        node.heuristic_cost = heuristic_cost;
        self.open.insert(coord);
        trace!(
            "discovered {:?} via {:?} (g={}, h={})",
            coord,
            via,
            movement_cost,
            heuristic_cost
        );
        Ok(true)
    }

    pub fn relax(&mut self, coord: Coord, via: Coord, costs: &CostModel) -> Result<bool, Error> {
        if !self.is_open(coord) {
            return Ok(false);
        }
        let parent_cost = self.movement_cost(via).ok_or(Error::BrokenChain { at: via })?;
        let candidate = parent_cost
            .checked_add(costs.step_cost(via, coord)?)
            .ok_or(Error::CostOverflow { at: coord })?;
        let heuristic_cost = costs.heuristic(coord, self.goal);
        let node = self.node_mut(coord)?;
        if candidate >= node.movement_cost {
            return Ok(false);
        }
        trace!(
            "relaxed {:?} via {:?} (g {} -> {})",
            coord,
            via,
            node.movement_cost,
            candidate
        );
        node.parent = Some(via);
        node.movement_cost = candidate;
        node.heuristic_cost = heuristic_cost;
        Ok(true)
    }

    // Ties go to whichever of the tied cells entered the open set first.
    pub fn select_next(&self) -> Result<Coord, Error> {
        let mut best_map = BestMap::new();
        for &coord in self.open.iter() {
            if let Some(net_cost) = self.net_cost(coord) {
                best_map.insert_gt(Reverse(net_cost), coord);
            }
        }
        best_map.into_value().ok_or(Error::FrontierExhausted)
    }

    pub fn settle(&mut self, coord: Coord) -> Result<(), Error> {
        if self.is_closed(coord) {
            return Ok(());
        }
        let known = self.is_known(coord);
        self.open.shift_remove(&coord);
        let seq = self.seq;
        let node = self.node_mut(coord)?;
        if !known {
            *node = SearchNode::default();
            node.seen = seq;
        }
        node.visited = seq;
        self.closed_count += 1;
        Ok(())
    }
}

impl ParentMap for Frontier {
    fn parent(&self, coord: Coord) -> Option<Coord> {
        Frontier::parent(self, coord)
    }
}
