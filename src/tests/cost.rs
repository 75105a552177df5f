use crate::*;
use direction::Direction;

#[test]
fn orthogonal_and_diagonal_steps() {
    let costs = CostModel::default();
    let origin = Coord::new(3, 3);

    assert_eq!(costs.step_cost(origin, Coord::new(4, 3)), Ok(10));
    assert_eq!(costs.step_cost(origin, Coord::new(3, 2)), Ok(10));
    assert_eq!(costs.step_cost(origin, Coord::new(2, 2)), Ok(14));
    assert_eq!(costs.step_cost(origin, Coord::new(4, 4)), Ok(14));
}

#[test]
fn identical_cells_are_not_a_move() {
    let costs = CostModel::default();
    let coord = Coord::new(1, 1);
    assert_eq!(
        costs.step_cost(coord, coord),
        Err(Error::InvalidMove {
            from: coord,
            to: coord,
        })
    );
}

#[test]
fn distant_cells_are_not_a_move() {
    let costs = CostModel::default();
    let from = Coord::new(0, 0);
    for &to in &[Coord::new(2, 0), Coord::new(0, -2), Coord::new(2, 1), Coord::new(5, 5)] {
        assert_eq!(costs.step_cost(from, to), Err(Error::InvalidMove { from, to }));
    }
}

#[test]
fn directions_between_adjacent_cells() {
    let origin = Coord::new(0, 0);
    assert_eq!(direction_between(origin, Coord::new(0, -1)), Ok(Direction::North));
    assert_eq!(direction_between(origin, Coord::new(1, 1)), Ok(Direction::SouthEast));
    assert_eq!(direction_between(origin, Coord::new(-1, 0)), Ok(Direction::West));
}

#[test]
fn heuristic_is_scaled_manhatten_distance() {
    let costs = CostModel::default();
    let goal = Coord::new(2, 2);
    assert_eq!(costs.heuristic(goal, goal), 0);
    assert_eq!(costs.heuristic(Coord::new(0, 0), goal), 40);
    assert_eq!(costs.heuristic(Coord::new(1, 1), goal), 20);
    assert_eq!(costs.heuristic(Coord::new(5, 0), goal), 50);
}

#[test]
fn heuristic_overestimates_diagonal_routes() {
    let costs = CostModel::default();
    let goal = Coord::new(2, 2);
    let true_cost = costs.step_cost(Coord::new(0, 0), Coord::new(1, 1)).unwrap()
        + costs.step_cost(Coord::new(1, 1), goal).unwrap();
    assert!(costs.heuristic(Coord::new(0, 0), goal) > true_cost);
}

#[test]
fn custom_step_costs() {
    let costs = CostModel::new(2, 3);
    assert_eq!(costs.step_cost(Coord::new(0, 0), Coord::new(0, 1)), Ok(2));
    assert_eq!(costs.step_cost(Coord::new(0, 0), Coord::new(1, 1)), Ok(3));
    assert_eq!(costs.heuristic(Coord::new(0, 0), Coord::new(3, 4)), 14);
}

#[test]
fn heuristic_saturates_instead_of_overflowing() {
    let costs = CostModel::new(u32::MAX / 2, u32::MAX / 2);
    assert_eq!(costs.heuristic(Coord::new(0, 0), Coord::new(1, 0)), u32::MAX / 2);
    assert_eq!(costs.heuristic(Coord::new(0, 0), Coord::new(4, 0)), u32::MAX);
}
