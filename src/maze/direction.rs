use std::fmt;

use super::Coord;

/// One of the four cardinal directions a door can face.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All directions in the fixed iteration order used for tie-breaking: N, E, S, W.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Coordinate offset `(dx, dy)` of one step in this direction.
    /// Rows grow downwards, so north is `dy = -1`.
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Single-letter name, as used in the textual form of a path.
    pub const fn letter(self) -> char {
        match self {
            Direction::North => 'N',
            Direction::East => 'E',
            Direction::South => 'S',
            Direction::West => 'W',
        }
    }

    /// Applies the offset to `coord`, returning `None` if either component would underflow.
    /// The result is not bounds-checked against any grid.
    pub fn step_from(self, coord: Coord) -> Option<Coord> {
        let (dx, dy) = self.offset();
        Some((
            coord.0.checked_add_signed(dx)?,
            coord.1.checked_add_signed(dy)?,
        ))
    }

    /// The direction leading from `from` to the orthogonally adjacent `to`, if they are adjacent.
    pub fn between(from: Coord, to: Coord) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|d| d.step_from(from) == Some(to))
    }

    const fn bit(self) -> u8 {
        match self {
            Direction::North => 0b0001,
            Direction::East => 0b0010,
            Direction::South => 0b0100,
            Direction::West => 0b1000,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// The set of directions in which a cell has a passage.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Doors(u8);

impl Doors {
    pub const NONE: Doors = Doors(0);

    pub fn contains(self, direction: Direction) -> bool {
        self.0 & direction.bit() != 0
    }

    /// Returns `true` if the door was not already present.
    pub(crate) fn insert(&mut self, direction: Direction) -> bool {
        let absent = !self.contains(direction);
        self.0 |= direction.bit();
        absent
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterates the present directions in N, E, S, W order.
    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |&d| self.contains(d))
    }
}

impl FromIterator<Direction> for Doors {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        let mut doors = Doors::NONE;
        iter.into_iter().for_each(|d| {
            doors.insert(d);
        });
        doors
    }
}
