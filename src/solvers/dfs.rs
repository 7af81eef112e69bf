use std::collections::HashSet;

use super::{Visit, path::Trail};
use crate::maze::{Coord, Grid};

/// A stack entry: a cell waiting to be examined and where it was pushed from.
struct Pending {
    coord: Coord,
    parent: Option<Coord>,
    depth: usize,
}

/// Depth-first exploration with a LIFO stack.
///
/// A cell may sit on the stack more than once; it counts as visited when first popped,
/// and that is when its predecessor is recorded. Later copies are dropped.
pub(super) struct DepthFirst {
    stack: Vec<Pending>,
    visited: HashSet<Coord>,
}

impl DepthFirst {
    pub(super) fn new(start: Coord) -> Self {
        DepthFirst {
            stack: vec![Pending {
                coord: start,
                parent: None,
                depth: 0,
            }],
            visited: HashSet::new(),
        }
    }

    pub(super) fn next(&mut self, trail: &mut Trail) -> Option<Visit> {
        while let Some(pending) = self.stack.pop() {
            if !self.visited.insert(pending.coord) {
                continue;
            }
            if let Some(parent) = pending.parent {
                trail.record(pending.coord, parent);
            }
            return Some(Visit {
                coord: pending.coord,
                depth: pending.depth,
            });
        }
        None
    }

    pub(super) fn expand(&mut self, grid: &Grid, visit: Visit) {
        for (_, next) in grid.passages(visit.coord) {
            if !self.visited.contains(&next) {
                self.stack.push(Pending {
                    coord: next,
                    parent: Some(visit.coord),
                    depth: visit.depth + 1,
                });
            }
        }
    }
}
