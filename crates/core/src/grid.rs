//! Grid module - the arena of settled cells
//!
//! The grid is a fixed `width x height` matrix where each cell is either
//! empty (`0`) or occupied by a color id. It is created once and never resized.
//! Cells are stored in a flat row-major vector (`y * width + x`).
//!
//! Collision and merge live here so the rest of the crate never writes raw
//! cells: [`Grid::collides`] is the pure overlap predicate and [`Grid::merge`]
//! is the only mutation.
//!
//! Coordinates: `(x, y)` where `x` grows left to right and `y` grows top to
//! bottom. Rows outside `0..height` are not part of the grid; whether a piece
//! cell there collides depends on [`Grid::solid_floor`].

use crate::piece::Piece;
use crate::types::{Cell, EMPTY};

/// The arena - a fixed-size matrix of settled cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
    /// Treat rows outside the grid as blocked
    solid_floor: bool,
}

impl Grid {
    /// Create a grid of the given dimensions with every cell empty
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![EMPTY; width * height],
            solid_floor: false,
        }
    }

    /// Build a grid from explicit rows.
    ///
    /// Returns `None` when the rows are empty or ragged.
    pub fn from_rows<R: AsRef<[Cell]>>(rows: &[R]) -> Option<Self> {
        let width = rows.first()?.as_ref().len();
        if rows.iter().any(|row| row.as_ref().len() != width) {
            return None;
        }

        let mut cells = Vec::with_capacity(width * rows.len());
        for row in rows {
            cells.extend_from_slice(row.as_ref());
        }

        Some(Self {
            width,
            height: rows.len(),
            cells,
            solid_floor: false,
        })
    }

    /// Make rows outside the grid count as colliding.
    ///
    /// Off by default: a piece whose cells pass below the last row does not
    /// collide and keeps falling.
    pub fn with_solid_floor(mut self, solid_floor: bool) -> Self {
        self.solid_floor = solid_floor;
        self
    }

    pub fn solid_floor(&self) -> bool {
        self.solid_floor
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    #[inline(always)]
    fn has_row(&self, y: i32) -> bool {
        y >= 0 && (y as usize) < self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Check if position is within bounds and filled
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(cell) if cell != EMPTY)
    }

    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        Some(&self.cells[start..start + self.width])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        (0..self.height).filter_map(move |y| self.row(y))
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate `(x, y, value)` for every occupied cell, row by row
    pub fn occupied_cells(&self) -> impl Iterator<Item = (i32, i32, Cell)> + '_ {
        let width = self.width.max(1);
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &cell)| cell != EMPTY)
            .map(move |(idx, &cell)| ((idx % width) as i32, (idx / width) as i32, cell))
    }

    /// Check whether any occupied cell of `piece` overlaps the grid.
    ///
    /// A piece cell collides when its row exists and the target cell is
    /// occupied or lies left/right of the grid. A cell whose row does not
    /// exist collides only with a solid floor.
    pub fn collides(&self, piece: &Piece) -> bool {
        piece.occupied_cells().any(|(x, y, _)| {
            if !self.has_row(y) {
                return self.solid_floor;
            }
            match self.index(x, y) {
                Some(idx) => self.cells[idx] != EMPTY,
                None => true,
            }
        })
    }

    /// Commit the occupied cells of `piece` at its current offset.
    ///
    /// Cells that map outside the grid are skipped. Returns the number of
    /// cells written.
    pub fn merge(&mut self, piece: &Piece) -> usize {
        let mut written = 0;
        for (x, y, value) in piece.occupied_cells() {
            if let Some(idx) = self.index(x, y) {
                self.cells[idx] = value;
                written += 1;
            }
        }
        written
    }
}
