use std::collections::{HashSet, VecDeque};

use super::{Visit, path::Trail};
use crate::maze::{Coord, Grid};

/// Level-order exploration with a FIFO queue.
///
/// Cells are marked discovered when queued, so each one is queued at most once and its
/// recorded predecessor lies on a shortest route from the entry.
pub(super) struct BreadthFirst {
    queue: VecDeque<Visit>,
    discovered: HashSet<Coord>,
}

impl BreadthFirst {
    pub(super) fn new(start: Coord) -> Self {
        BreadthFirst {
            queue: VecDeque::from([Visit {
                coord: start,
                depth: 0,
            }]),
            discovered: HashSet::from([start]),
        }
    }

    pub(super) fn next(&mut self) -> Option<Visit> {
        self.queue.pop_front()
    }

    pub(super) fn expand(&mut self, grid: &Grid, visit: Visit, trail: &mut Trail) {
        for (_, next) in grid.passages(visit.coord) {
            if self.discovered.insert(next) {
                trail.record(next, visit.coord);
                self.queue.push_back(Visit {
                    coord: next,
                    depth: visit.depth + 1,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::Direction;

    #[test]
    fn test_expands_in_table_order() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.carve((1, 1), Direction::North);
        grid.carve((1, 1), Direction::East);
        grid.carve((1, 1), Direction::South);
        grid.carve((1, 1), Direction::West);

        let mut trail = Trail::default();
        let mut bfs = BreadthFirst::new((1, 1));
        let first = bfs.next().unwrap();
        bfs.expand(&grid, first, &mut trail);
        let order = std::iter::from_fn(|| bfs.next())
            .map(|v| (v.coord, v.depth))
            .collect::<Vec<_>>();
        assert_eq!(
            order,
            vec![((1, 0), 1), ((2, 1), 1), ((1, 2), 1), ((0, 1), 1)]
        );
    }

    #[test]
    fn test_never_requeues_discovered_cells() {
        let mut grid = Grid::new(2, 2).unwrap();
        // A loop around the whole 2x2 grid
        grid.carve((0, 0), Direction::East);
        grid.carve((1, 0), Direction::South);
        grid.carve((1, 1), Direction::West);
        grid.carve((0, 1), Direction::North);

        let mut trail = Trail::default();
        let mut bfs = BreadthFirst::new((0, 0));
        let mut seen = Vec::new();
        while let Some(visit) = bfs.next() {
            seen.push(visit.coord);
            bfs.expand(&grid, visit, &mut trail);
        }
        assert_eq!(seen, vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
    }
}
