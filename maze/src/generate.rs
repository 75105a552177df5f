use maze_search::{CellMarker, Coord, Error, Maze, Size};
use rand::Rng;

/// Random maze with the start in the top-left corner and the goal in the
/// bottom-right corner. Every other cell is a wall with probability
/// `density`.
pub fn generate<R: Rng>(size: Size, density: f64, rng: &mut R) -> Result<Maze, Error> {
    let mut maze = Maze::new(size);
    for y in 0..size.height() as i32 {
        for x in 0..size.width() as i32 {
            if rng.gen_bool(density) {
                maze.set(Coord::new(x, y), CellMarker::Wall)?;
            }
        }
    }
    maze.set(Coord::new(0, 0), CellMarker::Start)?;
    let goal = Coord::new(size.width() as i32 - 1, size.height() as i32 - 1);
    maze.set(goal, CellMarker::Goal)?;
    Ok(maze)
}
