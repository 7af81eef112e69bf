use super::direction::{Direction, Doors};

/// One position of the grid.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Incorporated into the spanning tree.
    open: bool,
    /// Directions with a passage to the adjacent cell.
    doors: Doors,
    /// Search annotation (distance from the entry) for progressive output.
    tag: Option<usize>,
}

impl Cell {
    /// A closed cell with no doors and no tag. Every grid starts out filled with these.
    pub const CLOSED: Cell = Cell {
        open: false,
        doors: Doors::NONE,
        tag: None,
    };

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn doors(&self) -> Doors {
        self.doors
    }

    pub fn has_door(&self, direction: Direction) -> bool {
        self.doors.contains(direction)
    }

    pub fn tag(&self) -> Option<usize> {
        self.tag
    }

    pub(crate) fn open(&mut self) {
        self.open = true;
    }

    pub(crate) fn add_door(&mut self, direction: Direction) -> bool {
        self.doors.insert(direction)
    }

    pub(crate) fn set_tag(&mut self, tag: Option<usize>) {
        self.tag = tag;
    }
}
