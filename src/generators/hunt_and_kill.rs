use rand::{Rng, rngs::StdRng};

use super::Progress;
use crate::maze::{Coord, Direction, Grid};

/// Hunt-and-kill carving: a random walk ("kill") that stops once boxed in, followed by a
/// row scan ("hunt") for the first unopened cell bordering the carved region.
///
/// Only the walker position and a row cursor are kept, no stack. The scan runs top to bottom,
/// which biases the finished maze: routes tend to hug the upper rows.
///
/// Neighbors outside the grid are never candidates, neither for the walk nor for the hunt.
pub(super) struct HuntAndKill {
    /// Current walk position, `None` once the hunt came back empty.
    walker: Option<Coord>,
    /// Rows above the cursor are fully opened and never scanned again.
    cursor: usize,
}

impl HuntAndKill {
    pub(super) fn new(grid: &mut Grid) -> Self {
        let start = grid.entry();
        grid.open(start);
        HuntAndKill {
            walker: Some(start),
            cursor: 0,
        }
    }

    pub(super) fn advance(&mut self, grid: &mut Grid, rng: &mut StdRng) -> Progress {
        if let Some(at) = self.walker {
            let neighbors = grid
                .neighbors(at)
                .filter(|&(_, c)| !grid[c].is_open())
                .collect::<Vec<_>>();
            if !neighbors.is_empty() {
                let (direction, _) = neighbors[rng.random_range(0..neighbors.len())];
                self.walker = Some(grid.carve(at, direction));
                return Progress::Working;
            }
        }

        // Boxed in: hunt for a new place to resume the walk
        match self.hunt(grid) {
            Some((cell, direction)) => {
                grid.carve(cell, direction);
                tracing::trace!("[hunt] resuming walk at {:?} (cursor row {})", cell, self.cursor);
                self.walker = Some(cell);
                Progress::Working
            }
            None => {
                self.walker = None;
                Progress::Finished
            }
        }
    }

    /// Finds the first unopened cell, scanning rows from the cursor, that has an opened
    /// neighbor. Returns it along with the direction of that neighbor (checked N, E, S, W).
    fn hunt(&mut self, grid: &Grid) -> Option<(Coord, Direction)> {
        for y in self.cursor..grid.rows() {
            let mut row_complete = true;
            for x in 0..grid.columns() {
                let coord = (x, y);
                if grid[coord].is_open() {
                    continue;
                }
                row_complete = false;
                if let Some((direction, _)) =
                    grid.neighbors(coord).find(|&(_, n)| grid[n].is_open())
                {
                    return Some((coord, direction));
                }
            }
            if row_complete && y == self.cursor {
                self.cursor += 1;
            }
        }
        None
    }
}
