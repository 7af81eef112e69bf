use std::ops::Deref;

use super::{Coord, cell::Cell, direction::Direction};
use crate::error::MazeError;

/// A rectangular array of cells addressed by `(column, row)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    data: Box<[Cell]>,
    columns: usize,
    rows: usize,
}

impl Grid {
    /// Creates a grid of closed cells without any doors.
    ///
    /// Fails with [`MazeError::InvalidDimensions`] if either dimension is 0 or the
    /// cell count overflows `usize`.
    pub fn new(columns: usize, rows: usize) -> Result<Self, MazeError> {
        let len = columns
            .checked_mul(rows)
            .filter(|&len| len > 0)
            .ok_or(MazeError::InvalidDimensions { columns, rows })?;
        Ok(Grid {
            data: vec![Cell::CLOSED; len].into_boxed_slice(),
            columns,
            rows,
        })
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always `false`: a grid has at least one cell.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Top-left cell, where every search starts.
    pub fn entry(&self) -> Coord {
        (0, 0)
    }

    /// Bottom-right cell, where every search ends.
    pub fn exit(&self) -> Coord {
        (self.columns - 1, self.rows - 1)
    }

    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        coord.0 < self.columns && coord.1 < self.rows
    }

    fn ravel_index(&self, coord: Coord) -> usize {
        if !self.is_in_bounds(coord) {
            panic!(
                "coordinate {:?} is out of bounds for a {}x{} grid",
                coord, self.columns, self.rows
            );
        }
        coord.1 * self.columns + coord.0
    }

    pub fn get(&self, coord: Coord) -> Option<&Cell> {
        self.is_in_bounds(coord)
            .then(|| &self.data[coord.1 * self.columns + coord.0])
    }

    /// The in-bounds cell one step from `coord` in `direction`, if any.
    pub fn neighbor(&self, coord: Coord, direction: Direction) -> Option<Coord> {
        direction
            .step_from(coord)
            .filter(|&next| self.is_in_bounds(next))
    }

    /// In-bounds neighbors of `coord` in N, E, S, W order, paired with the direction leading there.
    pub fn neighbors(&self, coord: Coord) -> impl Iterator<Item = (Direction, Coord)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |d| self.neighbor(coord, d).map(|next| (d, next)))
    }

    /// Neighbors reachable from `coord` through an existing door, in N, E, S, W order.
    pub fn passages(&self, coord: Coord) -> impl Iterator<Item = (Direction, Coord)> + '_ {
        let doors = self[coord].doors();
        doors
            .iter()
            .filter_map(move |d| self.neighbor(coord, d).map(|next| (d, next)))
    }

    pub fn has_door(&self, coord: Coord, direction: Direction) -> bool {
        self[coord].has_door(direction)
    }

    /// Number of doors in the grid, counting each passage once.
    pub fn door_count(&self) -> usize {
        let sides: usize = self.data.iter().map(|cell| cell.doors().len()).sum();
        sides / 2
    }

    /// All coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + use<> {
        let columns = self.columns;
        (0..self.rows).flat_map(move |y| (0..columns).map(move |x| (x, y)))
    }

    pub fn cells(&self) -> impl Iterator<Item = (Coord, &Cell)> + '_ {
        self.coords().zip(self.data.iter())
    }

    /// Marks the cell as part of the spanning tree.
    pub fn open(&mut self, coord: Coord) {
        let idx = self.ravel_index(coord);
        self.data[idx].open();
    }

    /// Carves a door from `from` towards `direction`, and its mirror on the neighbor.
    /// Both cells are opened. Returns the neighbor's coordinate.
    ///
    /// # Panics
    /// * If `from` is out of bounds
    /// * If the neighbor in `direction` lies outside the grid
    pub fn carve(&mut self, from: Coord, direction: Direction) -> Coord {
        let to = match self.neighbor(from, direction) {
            Some(to) if self.is_in_bounds(from) => to,
            _ => panic!(
                "cannot carve {:?} from {:?} in a {}x{} grid",
                direction, from, self.columns, self.rows
            ),
        };
        let from_idx = self.ravel_index(from);
        let to_idx = self.ravel_index(to);
        self.data[from_idx].add_door(direction);
        self.data[from_idx].open();
        self.data[to_idx].add_door(direction.opposite());
        self.data[to_idx].open();
        to
    }

    pub fn set_tag(&mut self, coord: Coord, tag: usize) {
        let idx = self.ravel_index(coord);
        self.data[idx].set_tag(Some(tag));
    }

    pub fn clear_tags(&mut self) {
        self.data.iter_mut().for_each(|cell| cell.set_tag(None));
    }

    /// Borrows a read-only view of the grid.
    pub fn view(&self) -> GridView<'_> {
        GridView { grid: self }
    }
}

impl std::ops::Index<Coord> for Grid {
    type Output = Cell;

    fn index(&self, index: Coord) -> &Self::Output {
        &self.data[self.ravel_index(index)]
    }
}

/// Read-only snapshot of a grid handed out between engine steps.
#[derive(Debug, Clone, Copy)]
pub struct GridView<'a> {
    grid: &'a Grid,
}

impl Deref for GridView<'_> {
    type Target = Grid;

    fn deref(&self) -> &Self::Target {
        self.grid
    }
}

/// A grid carved to completion by a generator: a spanning tree over all cells.
///
/// Doors and open state are frozen; only search tags can still be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    grid: Grid,
}

impl Maze {
    pub(crate) fn new(grid: Grid) -> Self {
        Maze { grid }
    }

    pub fn set_tag(&mut self, coord: Coord, tag: usize) {
        self.grid.set_tag(coord, tag);
    }

    pub fn clear_tags(&mut self) {
        self.grid.clear_tags();
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }
}

impl Deref for Maze {
    type Target = Grid;

    fn deref(&self) -> &Self::Target {
        &self.grid
    }
}

impl AsRef<Grid> for Maze {
    fn as_ref(&self) -> &Grid {
        &self.grid
    }
}
