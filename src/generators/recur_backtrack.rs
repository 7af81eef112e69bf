use rand::{Rng, rngs::StdRng};

use super::Progress;
use crate::maze::{Coord, Grid};

/// Randomized depth-first carving with an explicit stack of opened cells.
///
/// One operation is either a push (carve into a random unopened neighbor of the top cell)
/// or a pop (the top cell is boxed in). Long corridors, little branching.
pub(super) struct RecursiveBacktracker {
    /// Only opened cells are kept on the stack
    stack: Vec<Coord>,
}

impl RecursiveBacktracker {
    pub(super) fn new(grid: &mut Grid) -> Self {
        let start = grid.entry();
        grid.open(start);
        RecursiveBacktracker { stack: vec![start] }
    }

    pub(super) fn advance(&mut self, grid: &mut Grid, rng: &mut StdRng) -> Progress {
        let Some(&cell) = self.stack.last() else {
            return Progress::Finished;
        };

        let neighbors = grid
            .neighbors(cell)
            .filter(|&(_, c)| !grid[c].is_open())
            .collect::<Vec<_>>();

        if neighbors.is_empty() {
            self.stack.pop();
            return if self.stack.is_empty() {
                Progress::Finished
            } else {
                Progress::Working
            };
        }

        let (direction, _) = neighbors[rng.random_range(0..neighbors.len())];
        // Carve towards the neighbor and keep extending from it
        let next = grid.carve(cell, direction);
        self.stack.push(next);
        Progress::Working
    }
}
