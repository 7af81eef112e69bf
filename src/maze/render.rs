//! Plain-text rendering of grids.
//!
//! A `c×r` grid renders as a `(2c+1)×(2r+1)` block of glyphs: every cell sits at an odd
//! position, and the glyphs between cells stand for the walls or doors separating them.

use std::fmt;

use unicode_width::UnicodeWidthChar;

use super::{Coord, direction::Direction, grid::Grid, grid::Maze};
use crate::error::MazeError;
use crate::solvers::Path;

/// Glyphs used to draw a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    wall: char,
    space: char,
    route: char,
}

impl Default for TextStyle {
    fn default() -> Self {
        TextStyle {
            wall: '#',
            space: ' ',
            route: '.',
        }
    }
}

impl TextStyle {
    /// Builds a style, rejecting glyphs that do not occupy exactly one terminal column
    /// (the block would otherwise lose its alignment).
    pub fn new(wall: char, space: char, route: char) -> Result<Self, MazeError> {
        for glyph in [wall, space, route] {
            let width = glyph.width();
            if width != Some(1) {
                return Err(MazeError::InvalidGlyph { glyph, width });
            }
        }
        Ok(TextStyle { wall, space, route })
    }

    pub fn wall(&self) -> char {
        self.wall
    }

    pub fn space(&self) -> char {
        self.space
    }

    pub fn route(&self) -> char {
        self.route
    }
}

/// Renders `grid` as lines of text, optionally tracing `route` over it.
pub fn render_text(grid: &Grid, style: &TextStyle, route: Option<&Path>) -> String {
    let width = grid.columns() * 2 + 1;
    let height = grid.rows() * 2 + 1;
    let mut canvas = vec![style.wall; width * height];
    let at = |coord: Coord| coord.1 * width + coord.0;

    for (coord, cell) in grid.cells() {
        let (x, y) = (coord.0 * 2 + 1, coord.1 * 2 + 1);
        if cell.is_open() {
            canvas[at((x, y))] = style.space;
        }
        // North and west doors are drawn by the neighbors' south and east doors
        if cell.has_door(Direction::East) {
            canvas[at((x + 1, y))] = style.space;
        }
        if cell.has_door(Direction::South) {
            canvas[at((x, y + 1))] = style.space;
        }
    }

    if let Some(path) = route {
        let mut previous: Option<Coord> = None;
        for coord in path.cells() {
            assert!(
                grid.is_in_bounds(coord),
                "route cell {:?} is out of bounds for a {}x{} grid",
                coord,
                grid.columns(),
                grid.rows()
            );
            let (x, y) = (coord.0 * 2 + 1, coord.1 * 2 + 1);
            canvas[at((x, y))] = style.route;
            if let Some(prev) = previous {
                // Door glyph halfway between the two cell glyphs
                let door = (prev.0 + coord.0 + 1, prev.1 + coord.1 + 1);
                canvas[at(door)] = style.route;
            }
            previous = Some(coord);
        }
    }

    let mut text = String::with_capacity((width + 1) * height);
    for (i, line) in canvas.chunks(width).enumerate() {
        if i > 0 {
            text.push('\n');
        }
        text.extend(line);
    }
    text
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_text(self, &TextStyle::default(), None))
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&**self, f)
    }
}
