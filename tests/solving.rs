use std::collections::HashSet;

use mazecarve::{
    Algorithm, Coord, Direction, Generator, Grid, Path, SearchStep, SolveOutcome, Solver,
};
use proptest::prelude::*;

const SOLVERS: [Solver; 2] = [Solver::Bfs, Solver::Dfs];

fn arb_algorithm() -> impl Strategy<Value = Algorithm> {
    prop_oneof![
        Just(Algorithm::RecursiveBacktracker),
        Just(Algorithm::HuntAndKill),
    ]
}

/// Checks the route starts at the entry, ends at the exit, only uses doors and never revisits a cell.
fn assert_valid_route(grid: &Grid, path: &Path) {
    assert_eq!(path.start(), grid.entry());
    let mut seen = HashSet::from([path.start()]);
    let mut at = path.start();
    for &direction in path.directions() {
        assert!(
            grid.has_door(at, direction),
            "no door {direction:?} at {at:?}"
        );
        at = grid.neighbor(at, direction).unwrap();
        assert!(seen.insert(at), "{at:?} visited twice");
    }
    assert_eq!(at, grid.exit());
}

/// Lengths of every simple path from `at` to the exit.
fn all_route_lengths(
    grid: &Grid,
    at: Coord,
    seen: &mut HashSet<Coord>,
    depth: usize,
    out: &mut Vec<usize>,
) {
    if at == grid.exit() {
        out.push(depth);
        return;
    }
    for (_, next) in grid.passages(at) {
        if seen.insert(next) {
            all_route_lengths(grid, next, seen, depth + 1, out);
            seen.remove(&next);
        }
    }
}

fn stepped_outcome(solver: Solver, grid: &mut Grid) -> (Option<Path>, usize) {
    let mut search = solver.search(grid);
    loop {
        match search.step() {
            SearchStep::InProgress(_) => continue,
            SearchStep::Done(path) => return (Some(path), search.iterations()),
            SearchStep::NoPathFound => return (None, search.iterations()),
        }
    }
}

#[test]
fn single_cell_maze_has_an_empty_route() {
    let maze = Generator::new(Algorithm::HuntAndKill, 1, 1, 0)
        .unwrap()
        .run_to_completion();
    for solver in SOLVERS {
        let outcome = solver.solve(&maze);
        assert_eq!(outcome.path().map(Path::len), Some(0));
        assert!(outcome.iterations() >= 1);
    }
}

#[test]
fn two_by_one_maze_is_solved_eastwards() {
    for algorithm in [Algorithm::RecursiveBacktracker, Algorithm::HuntAndKill] {
        let maze = Generator::new(algorithm, 2, 1, 99)
            .unwrap()
            .run_to_completion();
        for solver in SOLVERS {
            let outcome = solver.solve(&maze);
            let path = outcome.path().unwrap();
            assert_eq!(path.directions(), &[Direction::East]);
            assert_eq!(path.to_string(), "E");
        }
    }
}

#[test]
fn disconnected_grid_has_no_route() {
    let mut grid = Grid::new(3, 3).unwrap();
    for solver in SOLVERS {
        assert_eq!(
            solver.solve(&grid),
            SolveOutcome::NoPathFound { iterations: 1 }
        );
        assert_eq!(stepped_outcome(solver, &mut grid), (None, 1));
    }
}

#[test]
fn partially_connected_grid_has_no_route() {
    let mut grid = Grid::new(3, 3).unwrap();
    grid.carve((0, 0), Direction::East);
    grid.carve((1, 0), Direction::South);
    grid.carve((2, 2), Direction::North);
    for solver in SOLVERS {
        assert_eq!(
            solver.solve(&grid),
            SolveOutcome::NoPathFound { iterations: 3 }
        );
    }
}

#[test]
fn bfs_matches_exhaustive_shortest_route() {
    for algorithm in [Algorithm::RecursiveBacktracker, Algorithm::HuntAndKill] {
        for seed in 0..20 {
            let maze = Generator::new(algorithm, 3, 3, seed)
                .unwrap()
                .run_to_completion();
            let mut lengths = Vec::new();
            let mut seen = HashSet::from([maze.entry()]);
            all_route_lengths(&maze, maze.entry(), &mut seen, 0, &mut lengths);

            let outcome = Solver::Bfs.solve(&maze);
            assert_eq!(
                outcome.path().map(Path::len),
                lengths.iter().copied().min()
            );
        }
    }
}

#[test]
fn bfs_is_shortest_on_grids_with_loops() {
    // A 4x4 ring around the border plus a shortcut through the middle
    let mut grid = Grid::new(4, 4).unwrap();
    for x in 0..3 {
        grid.carve((x, 0), Direction::East);
        grid.carve((x, 3), Direction::East);
    }
    for y in 0..3 {
        grid.carve((0, y), Direction::South);
        grid.carve((3, y), Direction::South);
    }
    grid.carve((1, 0), Direction::South);
    grid.carve((1, 1), Direction::East);
    grid.carve((2, 1), Direction::South);
    grid.carve((2, 2), Direction::South);

    let mut lengths = Vec::new();
    let mut seen = HashSet::from([grid.entry()]);
    all_route_lengths(&grid, grid.entry(), &mut seen, 0, &mut lengths);
    let shortest = lengths.iter().copied().min().unwrap();

    let bfs = Solver::Bfs.solve(&grid);
    assert_eq!(bfs.path().unwrap().len(), shortest);
    assert_valid_route(&grid, bfs.path().unwrap());

    let dfs = Solver::Dfs.solve(&grid);
    assert!(dfs.path().unwrap().len() >= shortest);
    assert_valid_route(&grid, dfs.path().unwrap());
}

#[test]
fn search_on_maze_tags_examined_cells() {
    let mut maze = Generator::new(Algorithm::RecursiveBacktracker, 6, 6, 4)
        .unwrap()
        .run_to_completion();
    let expected = Solver::Bfs.solve(&maze);
    let outcome = Solver::Bfs.search(&mut maze).finish();
    assert_eq!(outcome, expected);

    let tagged = maze.cells().filter(|(_, cell)| cell.tag().is_some()).count();
    assert_eq!(tagged, outcome.iterations());
    assert_eq!(maze[maze.exit()].tag(), outcome.path().map(Path::len));
    // Tags never touch the carving
    assert_eq!(maze.door_count(), 6 * 6 - 1);
}

#[test]
fn in_progress_routes_end_on_the_examined_cell() {
    let mut maze = Generator::new(Algorithm::HuntAndKill, 5, 4, 8)
        .unwrap()
        .run_to_completion();
    let mut search = Solver::Dfs.search(&mut maze);
    while let SearchStep::InProgress(route) = search.step() {
        let end = route.end();
        assert_eq!(search.grid()[end].tag(), Some(route.len()));
    }
}

proptest! {
    #[test]
    fn routes_are_valid(
        algorithm in arb_algorithm(),
        columns in 1usize..14,
        rows in 1usize..14,
        seed in any::<u64>(),
    ) {
        let maze = Generator::new(algorithm, columns, rows, seed)
            .unwrap()
            .run_to_completion();
        for solver in SOLVERS {
            let outcome = solver.solve(&maze);
            prop_assert!(outcome.is_found());
            assert_valid_route(&maze, outcome.path().unwrap());
        }
    }

    #[test]
    fn both_solvers_agree_on_trees(
        algorithm in arb_algorithm(),
        columns in 1usize..14,
        rows in 1usize..14,
        seed in any::<u64>(),
    ) {
        // A spanning tree has exactly one simple route between two cells
        let maze = Generator::new(algorithm, columns, rows, seed)
            .unwrap()
            .run_to_completion();
        let bfs = Solver::Bfs.solve(&maze);
        let dfs = Solver::Dfs.solve(&maze);
        prop_assert_eq!(bfs.path(), dfs.path());
    }

    #[test]
    fn stepping_matches_one_shot(
        algorithm in arb_algorithm(),
        columns in 1usize..10,
        rows in 1usize..10,
        seed in any::<u64>(),
    ) {
        let maze = Generator::new(algorithm, columns, rows, seed)
            .unwrap()
            .run_to_completion();
        for solver in SOLVERS {
            let expected = solver.solve(&maze);
            let mut grid = maze.clone().into_grid();
            let (path, iterations) = stepped_outcome(solver, &mut grid);
            prop_assert_eq!(path.as_ref(), expected.path());
            prop_assert_eq!(iterations, expected.iterations());
        }
    }
}
