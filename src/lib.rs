//! A* search over walled mazes with octile (8-direction) movement.
//!
//! Orthogonal steps cost 10 and diagonal steps 14 by default. The heuristic
//! is the Manhattan distance to the goal scaled by the orthogonal cost.

mod config;
mod cost;
mod error;
mod frontier;
mod grid;
mod metadata;
mod path;
mod solver;
pub mod text;

pub use config::*;
pub use cost::*;
pub use error::*;
pub use frontier::*;
pub use grid::*;
pub use metadata::*;
pub use path::*;
pub use solver::*;

pub use grid_2d::{Coord, Size};

#[cfg(test)]
mod tests;
