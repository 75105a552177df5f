use crate::*;
use proptest::prelude::*;

fn coord_in(width: u32, height: u32) -> impl Strategy<Value = Coord> {
    (0..width as i32, 0..height as i32).prop_map(|(x, y)| Coord::new(x, y))
}

fn open_maze_with_endpoints() -> impl Strategy<Value = (Maze, Coord, Coord)> {
    (1..12u32, 1..12u32).prop_flat_map(|(width, height)| {
        (coord_in(width, height), coord_in(width, height))
            .prop_map(move |(start, goal)| (Maze::new(Size::new(width, height)), start, goal))
    })
}

fn walled_maze() -> impl Strategy<Value = Maze> {
    (2..10u32, 2..10u32).prop_flat_map(|(width, height)| {
        proptest::collection::vec(proptest::bool::weighted(0.3), (width * height) as usize).prop_map(
            move |walls| {
                let mut maze = Maze::new(Size::new(width, height));
                for (index, &wall) in walls.iter().enumerate() {
                    if wall {
                        let coord = Coord::new((index as u32 % width) as i32, (index as u32 / width) as i32);
                        maze.set(coord, CellMarker::Wall).unwrap();
                    }
                }
                maze.set(Coord::new(0, 0), CellMarker::Start).unwrap();
                let goal = Coord::new(width as i32 - 1, height as i32 - 1);
                maze.set(goal, CellMarker::Goal).unwrap();
                maze
            },
        )
    })
}

proptest! {
    #[test]
    fn step_cost_is_symmetric(x in -50..50i32, y in -50..50i32, d in 0..8usize) {
        let costs = CostModel::default();
        let a = Coord::new(x, y);
        let b = neighbours8(a).nth(d).unwrap();
        let cost = costs.step_cost(a, b).unwrap();
        prop_assert_eq!(costs.step_cost(b, a), Ok(cost));
        let diagonal = a.x != b.x && a.y != b.y;
        prop_assert_eq!(cost, if diagonal { DIAGONAL_COST } else { ORTHOGONAL_COST });
    }

    #[test]
    fn heuristic_shrinks_on_straight_approach(
        gx in -20..20i32,
        gy in -20..20i32,
        distance in 1..30i32,
        d in 0..4usize
    ) {
        let costs = CostModel::default();
        let goal = Coord::new(gx, gy);
        let step = [(1, 0), (-1, 0), (0, 1), (0, -1)][d];
        let mut previous = None;
        for remaining in (0..=distance).rev() {
            let coord = Coord::new(gx + step.0 * remaining, gy + step.1 * remaining);
            let h = costs.heuristic(coord, goal);
            if let Some(previous) = previous {
                prop_assert!(h < previous);
            }
            previous = Some(h);
        }
        prop_assert_eq!(previous, Some(0));
    }

    #[test]
    fn open_mazes_are_always_solved((maze, start, goal) in open_maze_with_endpoints()) {
        let mut solver = Solver::new(maze.size());
        let solution = solver.search(&maze, start, goal).unwrap().found().unwrap();
        prop_assert_eq!(solution.route_cost(&CostModel::default()), Ok(solution.metadata.cost));
        prop_assert!(!solution.path.contains(&start));
        prop_assert!(!solution.path.contains(&goal));
    }

    #[test]
    fn searches_are_deterministic(maze in walled_maze()) {
        let mut solver = Solver::new(maze.size());
        let first = solver.solve(&maze).unwrap();
        let second = solver.solve(&maze).unwrap();
        let fresh = solve(&maze, SearchConfig::default()).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(&first, &fresh);
        if let Outcome::Found(solved) = first {
            for coord in solved.solution.path.iter() {
                prop_assert!(maze.is_passable(*coord));
            }
            prop_assert_eq!(
                solved.solution.route_cost(&CostModel::default()),
                Ok(solved.solution.metadata.cost)
            );
        }
    }
}
