use std::{collections::HashMap, fmt};

use crate::maze::{Coord, Direction};

/// A walk through the grid: a start cell followed by one direction per move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    start: Coord,
    directions: Vec<Direction>,
}

impl Path {
    pub fn new(start: Coord, directions: Vec<Direction>) -> Self {
        Path { start, directions }
    }

    pub fn start(&self) -> Coord {
        self.start
    }

    pub fn directions(&self) -> &[Direction] {
        &self.directions
    }

    /// Number of moves.
    pub fn len(&self) -> usize {
        self.directions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directions.is_empty()
    }

    /// The cell the walk ends on.
    ///
    /// # Panics
    /// If a move would step below column or row zero.
    pub fn end(&self) -> Coord {
        self.cells().last().unwrap_or(self.start)
    }

    /// Coordinates walked, the start included.
    ///
    /// # Panics
    /// If a move would step below column or row zero.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        let mut at = self.start;
        std::iter::once(self.start).chain(self.directions.iter().map(move |&d| {
            at = d
                .step_from(at)
                .unwrap_or_else(|| panic!("path steps {:?} off the grid from {:?}", d, at));
            at
        }))
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.directions
            .iter()
            .try_for_each(|d| write!(f, "{}", d.letter()))
    }
}

/// Back-references recorded by a search: each discovered cell points at the cell it was
/// reached from. Paths are rebuilt only when asked for.
#[derive(Debug, Default)]
pub(crate) struct Trail {
    parents: HashMap<Coord, Coord>,
}

impl Trail {
    pub(crate) fn record(&mut self, cell: Coord, parent: Coord) {
        self.parents.insert(cell, parent);
    }

    /// Walks the back-references from `end` to `start` and returns the forward path.
    pub(crate) fn path_to(&self, start: Coord, end: Coord) -> Path {
        let mut directions = Vec::new();
        let mut at = end;
        while at != start {
            let parent = self.parents[&at];
            let direction = Direction::between(parent, at)
                .unwrap_or_else(|| panic!("trail links non-adjacent cells {:?} and {:?}", parent, at));
            directions.push(direction);
            at = parent;
        }
        directions.reverse();
        Path::new(start, directions)
    }
}
