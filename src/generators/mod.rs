use rand::{SeedableRng, rngs::StdRng};

mod hunt_and_kill;
mod recur_backtrack;

use hunt_and_kill::HuntAndKill;
use recur_backtrack::RecursiveBacktracker;

use crate::{
    error::MazeError,
    maze::{Grid, GridView, Maze},
};

/// Get a random number generator seeded for reproducibility.
fn get_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Outcome of a single elementary carving operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Progress {
    /// More operations remain.
    Working,
    /// This operation completed the spanning tree.
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    RecursiveBacktracker,
    HuntAndKill,
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Algorithm::RecursiveBacktracker => write!(f, "Recursive Backtracker"),
            Algorithm::HuntAndKill => write!(f, "Hunt-and-Kill"),
        }
    }
}

enum Carver {
    RecursiveBacktracker(RecursiveBacktracker),
    HuntAndKill(HuntAndKill),
}

impl Carver {
    fn advance(&mut self, grid: &mut Grid, rng: &mut StdRng) -> Progress {
        match self {
            Carver::RecursiveBacktracker(carver) => carver.advance(grid, rng),
            Carver::HuntAndKill(carver) => carver.advance(grid, rng),
        }
    }
}

/// What a caller observes after asking a [`Generator`] for more work.
#[derive(Debug)]
pub enum GenerationStep<'a> {
    /// Carving continues; the view shows the grid as it is now.
    InProgress(GridView<'a>),
    /// Carving is complete.
    Done(Maze),
}

/// Carves a grid into a perfect maze, one elementary operation at a time.
///
/// For a given algorithm, size and seed the sequence of mutations is fixed: stepping one
/// operation at a time, fast-forwarding in batches or running to completion all produce the
/// same maze. Abandoning a generator midway is always safe.
pub struct Generator {
    algorithm: Algorithm,
    seed: u64,
    grid: Grid,
    rng: StdRng,
    carver: Carver,
    steps: usize,
    done: bool,
}

impl Generator {
    /// Sets up carving over a fresh `columns × rows` grid, starting from the top-left cell.
    pub fn new(
        algorithm: Algorithm,
        columns: usize,
        rows: usize,
        seed: u64,
    ) -> Result<Self, MazeError> {
        let mut grid = Grid::new(columns, rows)?;
        let carver = match algorithm {
            Algorithm::RecursiveBacktracker => {
                Carver::RecursiveBacktracker(RecursiveBacktracker::new(&mut grid))
            }
            Algorithm::HuntAndKill => Carver::HuntAndKill(HuntAndKill::new(&mut grid)),
        };
        Ok(Generator {
            algorithm,
            seed,
            grid,
            rng: get_rng(seed),
            carver,
            steps: 0,
            done: false,
        })
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of elementary operations performed so far.
    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Read-only view of the grid being carved.
    pub fn grid(&self) -> GridView<'_> {
        self.grid.view()
    }

    /// Performs one elementary operation.
    pub fn step(&mut self) -> GenerationStep<'_> {
        self.step_by(1)
    }

    /// Fast-forwards by up to `n` elementary operations, stopping early if carving completes.
    /// With `n == 0` no work is done and the current state is reported.
    pub fn step_by(&mut self, n: usize) -> GenerationStep<'_> {
        for _ in 0..n {
            if self.done {
                break;
            }
            self.advance();
        }
        if self.done {
            GenerationStep::Done(Maze::new(self.grid.clone()))
        } else {
            GenerationStep::InProgress(self.grid.view())
        }
    }

    /// Carves until the maze is complete and hands it over.
    pub fn run_to_completion(mut self) -> Maze {
        while !self.done {
            self.advance();
        }
        Maze::new(self.grid)
    }

    fn advance(&mut self) {
        let progress = self.carver.advance(&mut self.grid, &mut self.rng);
        self.steps += 1;
        if progress == Progress::Finished {
            self.done = true;
            tracing::debug!(
                "[generate] {} finished a {}x{} maze in {} steps (seed {})",
                self.algorithm,
                self.grid.columns(),
                self.grid.rows(),
                self.steps,
                self.seed
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALGORITHMS: [Algorithm; 2] = [Algorithm::RecursiveBacktracker, Algorithm::HuntAndKill];

    #[test]
    fn test_invalid_dimensions() {
        for algorithm in ALGORITHMS {
            assert!(matches!(
                Generator::new(algorithm, 0, 4, 1),
                Err(MazeError::InvalidDimensions {
                    columns: 0,
                    rows: 4
                })
            ));
        }
    }

    #[test]
    fn test_start_cell_is_open() {
        for algorithm in ALGORITHMS {
            let generator = Generator::new(algorithm, 4, 4, 9).unwrap();
            assert!(generator.grid()[(0, 0)].is_open());
            assert_eq!(generator.grid().door_count(), 0);
            assert_eq!(generator.steps(), 0);
            assert!(!generator.is_done());
        }
    }

    #[test]
    fn test_step_reports_progress_then_done() {
        let mut generator = Generator::new(Algorithm::RecursiveBacktracker, 2, 1, 3).unwrap();
        // Push-with-carve into the only neighbor
        match generator.step() {
            GenerationStep::InProgress(view) => assert_eq!(view.door_count(), 1),
            GenerationStep::Done(_) => panic!("finished too early"),
        }
        // Two pops empty the stack
        assert!(matches!(generator.step(), GenerationStep::InProgress(_)));
        match generator.step() {
            GenerationStep::Done(maze) => assert_eq!(maze.door_count(), 1),
            GenerationStep::InProgress(_) => panic!("expected completion"),
        }
        assert_eq!(generator.steps(), 3);
        // Stepping a finished generator is a no-op
        assert!(matches!(generator.step_by(5), GenerationStep::Done(_)));
        assert_eq!(generator.steps(), 3);
    }

    #[test]
    fn test_step_by_zero_does_nothing() {
        let mut generator = Generator::new(Algorithm::HuntAndKill, 3, 3, 3).unwrap();
        assert!(matches!(generator.step_by(0), GenerationStep::InProgress(_)));
        assert_eq!(generator.steps(), 0);
    }

    #[test]
    fn test_step_counts() {
        let (columns, rows) = (7, 5);
        let cells = columns * rows;

        let mut generator =
            Generator::new(Algorithm::RecursiveBacktracker, columns, rows, 11).unwrap();
        while let GenerationStep::InProgress(_) = generator.step() {}
        assert_eq!(generator.steps(), 2 * cells - 1);

        let mut generator = Generator::new(Algorithm::HuntAndKill, columns, rows, 11).unwrap();
        while let GenerationStep::InProgress(_) = generator.step() {}
        assert_eq!(generator.steps(), cells);
    }

    #[test]
    fn test_single_cell() {
        for algorithm in ALGORITHMS {
            let mut generator = Generator::new(algorithm, 1, 1, 0).unwrap();
            match generator.step() {
                GenerationStep::Done(maze) => {
                    assert_eq!(maze.door_count(), 0);
                    assert!(maze[(0, 0)].is_open());
                }
                GenerationStep::InProgress(_) => panic!("1x1 grid needs a single step"),
            }
        }
    }

    #[test]
    fn test_batching_does_not_change_the_maze() {
        for algorithm in ALGORITHMS {
            let whole = Generator::new(algorithm, 12, 9, 42)
                .unwrap()
                .run_to_completion();

            let mut generator = Generator::new(algorithm, 12, 9, 42).unwrap();
            let batched = loop {
                if let GenerationStep::Done(maze) = generator.step_by(7) {
                    break maze;
                }
            };
            assert_eq!(whole, batched);
        }
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = Generator::new(Algorithm::RecursiveBacktracker, 10, 10, 1)
            .unwrap()
            .run_to_completion();
        let b = Generator::new(Algorithm::RecursiveBacktracker, 10, 10, 2)
            .unwrap()
            .run_to_completion();
        assert_ne!(a, b);
    }
}
