//! Resumable carving of perfect mazes and searching for a route through them.
//!
//! A [`Generator`] carves a [`Grid`] into a spanning tree one elementary operation per
//! [`Generator::step`], so callers can observe intermediate progress; a [`Solver`] then
//! walks the finished [`Maze`] from the top-left entry to the bottom-right exit, either in
//! one call or one examined cell per [`Search::step`].

pub mod error;
pub mod generators;
pub mod logging;
pub mod maze;
pub mod solvers;

pub use error::MazeError;
pub use generators::{Algorithm, GenerationStep, Generator};
pub use maze::{Cell, Coord, Direction, Doors, Grid, GridView, Maze, TextStyle, render_text};
pub use solvers::{Path, Search, SearchStep, Searchable, SolveOutcome, Solver};
