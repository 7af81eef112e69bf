mod bfs;
mod dfs;
mod path;

use bfs::BreadthFirst;
use dfs::DepthFirst;
pub use path::Path;
use path::Trail;

use crate::maze::{Coord, Grid, Maze};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Solver {
    Bfs,
    Dfs,
}

impl std::fmt::Display for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Solver::Bfs => write!(f, "Breadth-First Search (BFS)"),
            Solver::Dfs => write!(f, "Depth-First Search (DFS)"),
        }
    }
}

/// Result of a completed search from the entry `(0, 0)` to the exit `(columns-1, rows-1)`.
///
/// `iterations` counts the cells taken off the work-list and examined, the exit included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome {
    Found { path: Path, iterations: usize },
    /// Every reachable cell was examined without meeting the exit.
    NoPathFound { iterations: usize },
}

impl SolveOutcome {
    pub fn path(&self) -> Option<&Path> {
        match self {
            SolveOutcome::Found { path, .. } => Some(path),
            SolveOutcome::NoPathFound { .. } => None,
        }
    }

    pub fn iterations(&self) -> usize {
        match self {
            SolveOutcome::Found { iterations, .. } | SolveOutcome::NoPathFound { iterations } => {
                *iterations
            }
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, SolveOutcome::Found { .. })
    }
}

/// What a caller observes after one step of a [`Search`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchStep {
    /// The route from the entry to the cell just examined.
    InProgress(Path),
    /// The route from the entry to the exit.
    Done(Path),
    NoPathFound,
}

/// Grids a [`Search`] can read and annotate with distance tags.
pub trait Searchable {
    fn grid(&self) -> &Grid;
    fn set_tag(&mut self, coord: Coord, tag: usize);
    fn clear_tags(&mut self);
}

impl Searchable for Grid {
    fn grid(&self) -> &Grid {
        self
    }

    fn set_tag(&mut self, coord: Coord, tag: usize) {
        Grid::set_tag(self, coord, tag);
    }

    fn clear_tags(&mut self) {
        Grid::clear_tags(self);
    }
}

impl Searchable for Maze {
    fn grid(&self) -> &Grid {
        self
    }

    fn set_tag(&mut self, coord: Coord, tag: usize) {
        Maze::set_tag(self, coord, tag);
    }

    fn clear_tags(&mut self) {
        Maze::clear_tags(self);
    }
}

/// A cell taken off the work-list, with its distance from the entry along the search tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Visit {
    coord: Coord,
    depth: usize,
}

enum Strategy {
    Bfs(BreadthFirst),
    Dfs(DepthFirst),
}

enum Examined {
    Cell(Visit),
    Exit(Visit),
    Exhausted,
}

/// Work-list, back-references and counters shared by both search orders.
struct Engine {
    solver: Solver,
    strategy: Strategy,
    trail: Trail,
    start: Coord,
    goal: Coord,
    iterations: usize,
}

impl Engine {
    fn new(solver: Solver, grid: &Grid) -> Self {
        let start = grid.entry();
        let strategy = match solver {
            Solver::Bfs => Strategy::Bfs(BreadthFirst::new(start)),
            Solver::Dfs => Strategy::Dfs(DepthFirst::new(start)),
        };
        Engine {
            solver,
            strategy,
            trail: Trail::default(),
            start,
            goal: grid.exit(),
            iterations: 0,
        }
    }

    /// Takes one cell off the work-list; unless it is the exit, queues what lies beyond it.
    fn examine(&mut self, grid: &Grid) -> Examined {
        let next = match &mut self.strategy {
            Strategy::Bfs(bfs) => bfs.next(),
            Strategy::Dfs(dfs) => dfs.next(&mut self.trail),
        };
        let Some(visit) = next else {
            tracing::debug!(
                "[solve] {} exhausted the grid after {} iterations without reaching {:?}",
                self.solver,
                self.iterations,
                self.goal
            );
            return Examined::Exhausted;
        };
        self.iterations += 1;

        if visit.coord == self.goal {
            tracing::debug!(
                "[solve] {} reached {:?} after {} iterations, route length {}",
                self.solver,
                self.goal,
                self.iterations,
                visit.depth
            );
            return Examined::Exit(visit);
        }

        match &mut self.strategy {
            Strategy::Bfs(bfs) => bfs.expand(grid, visit, &mut self.trail),
            Strategy::Dfs(dfs) => dfs.expand(grid, visit),
        }
        Examined::Cell(visit)
    }

    fn route_to(&self, coord: Coord) -> Path {
        self.trail.path_to(self.start, coord)
    }
}

impl Solver {
    /// Searches `grid` to completion without annotating it.
    pub fn solve(&self, grid: &Grid) -> SolveOutcome {
        let mut engine = Engine::new(*self, grid);
        loop {
            match engine.examine(grid) {
                Examined::Cell(_) => continue,
                Examined::Exit(visit) => {
                    return SolveOutcome::Found {
                        path: engine.route_to(visit.coord),
                        iterations: engine.iterations,
                    };
                }
                Examined::Exhausted => {
                    return SolveOutcome::NoPathFound {
                        iterations: engine.iterations,
                    };
                }
            }
        }
    }

    /// Starts a resumable search over `target`, clearing any tags left from earlier searches.
    pub fn search<'a, T: Searchable + ?Sized>(&self, target: &'a mut T) -> Search<'a, T> {
        target.clear_tags();
        let engine = Engine::new(*self, target.grid());
        Search {
            target,
            engine,
            outcome: None,
        }
    }
}

/// A search advanced one examined cell per [`Search::step`].
///
/// Each examined cell is tagged with its distance from the entry. The grid's doors are never
/// touched; stopping midway leaves only the tags behind.
pub struct Search<'a, T: Searchable + ?Sized> {
    target: &'a mut T,
    engine: Engine,
    outcome: Option<SolveOutcome>,
}

impl<T: Searchable + ?Sized> Search<'_, T> {
    pub fn solver(&self) -> Solver {
        self.engine.solver
    }

    /// Cells examined so far.
    pub fn iterations(&self) -> usize {
        self.engine.iterations
    }

    /// The final outcome, once the search is over.
    pub fn outcome(&self) -> Option<&SolveOutcome> {
        self.outcome.as_ref()
    }

    pub fn grid(&self) -> &Grid {
        self.target.grid()
    }

    /// Examines one cell. Once the search is over, keeps reporting its final result.
    pub fn step(&mut self) -> SearchStep {
        if let Some(outcome) = &self.outcome {
            return match outcome {
                SolveOutcome::Found { path, .. } => SearchStep::Done(path.clone()),
                SolveOutcome::NoPathFound { .. } => SearchStep::NoPathFound,
            };
        }
        match self.advance() {
            Examined::Cell(visit) => SearchStep::InProgress(self.engine.route_to(visit.coord)),
            Examined::Exit(_) | Examined::Exhausted => match self.outcome.as_ref() {
                Some(SolveOutcome::Found { path, .. }) => SearchStep::Done(path.clone()),
                _ => SearchStep::NoPathFound,
            },
        }
    }

    /// Runs the rest of the search without building intermediate routes.
    pub fn finish(mut self) -> SolveOutcome {
        while self.outcome.is_none() {
            self.advance();
        }
        self.outcome.take().unwrap_or(SolveOutcome::NoPathFound {
            iterations: self.engine.iterations,
        })
    }

    fn advance(&mut self) -> Examined {
        let examined = self.engine.examine(self.target.grid());
        match &examined {
            Examined::Cell(visit) => self.target.set_tag(visit.coord, visit.depth),
            Examined::Exit(visit) => {
                self.target.set_tag(visit.coord, visit.depth);
                self.outcome = Some(SolveOutcome::Found {
                    path: self.engine.route_to(visit.coord),
                    iterations: self.engine.iterations,
                });
            }
            Examined::Exhausted => {
                self.outcome = Some(SolveOutcome::NoPathFound {
                    iterations: self.engine.iterations,
                });
            }
        }
        examined
    }
}
