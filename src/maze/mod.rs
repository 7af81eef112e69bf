pub mod cell;
pub mod direction;
pub mod grid;
pub mod render;

pub use cell::Cell;
pub use direction::{Direction, Doors};
pub use grid::{Grid, GridView, Maze};
pub use render::{TextStyle, render_text};

/// Zero-based `(column, row)` position of a cell.
pub type Coord = (usize, usize);
