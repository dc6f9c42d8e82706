//! Piece module - shape matrices and the falling piece
//!
//! A [`ShapeMatrix`] is a square NxN occupancy matrix; a [`Piece`] pairs an
//! owned shape with the grid offset of its top-left corner. Every piece owns its
//! own copy of the shape, so rotating one piece never affects another.

use crate::types::{Cell, EMPTY};

/// The only shape in play: a T with its stem pointing down.
pub const CANONICAL_SHAPE: [[Cell; 3]; 3] = [
    [0, 0, 0],
    [1, 1, 1],
    [0, 1, 0],
];

/// Square shape matrix stored flat in row-major order
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShapeMatrix {
    size: usize,
    cells: Vec<Cell>,
}

impl ShapeMatrix {
    /// Fresh copy of [`CANONICAL_SHAPE`]
    pub fn canonical() -> Self {
        Self {
            size: CANONICAL_SHAPE.len(),
            cells: CANONICAL_SHAPE.iter().flatten().copied().collect(),
        }
    }

    /// Build a matrix from rows.
    ///
    /// Returns `None` unless the input is non-empty and square.
    pub fn from_rows<R: AsRef<[Cell]>>(rows: &[R]) -> Option<Self> {
        let size = rows.len();
        if size == 0 || rows.iter().any(|row| row.as_ref().len() != size) {
            return None;
        }

        let mut cells = Vec::with_capacity(size * size);
        for row in rows {
            cells.extend_from_slice(row.as_ref());
        }
        Some(Self { size, cells })
    }

    /// Side length N
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline(always)]
    fn index(&self, x: usize, y: usize) -> usize {
        y * self.size + x
    }

    /// Cell at column `x`, row `y`; `None` outside the matrix
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        if x >= self.size || y >= self.size {
            return None;
        }
        Some(self.cells[self.index(x, y)])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(self.size)
    }

    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.rows().map(<[Cell]>::to_vec).collect()
    }

    /// Iterate `(x, y, value)` for every occupied cell, row by row
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &cell)| cell != EMPTY)
            .map(move |(idx, &cell)| (idx % size, idx / size, cell))
    }

    /// Rotate 90° clockwise in place: transpose, then reverse each row.
    pub fn rotate_cw(&mut self) {
        let n = self.size;
        for y in 0..n {
            for x in 0..y {
                let (a, b) = (self.index(x, y), self.index(y, x));
                self.cells.swap(a, b);
            }
        }
        for row in self.cells.chunks_exact_mut(n) {
            row.reverse();
        }
    }
}

/// The falling piece: a shape plus the grid offset of its top-left corner
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    pub shape: ShapeMatrix,
    pub x: i32,
    pub y: i32,
}

impl Piece {
    pub fn new(shape: ShapeMatrix, x: i32, y: i32) -> Self {
        Self { shape, x, y }
    }

    /// Canonical piece at the top of a grid `grid_width` columns wide,
    /// horizontally centered
    pub fn spawn(grid_width: usize) -> Self {
        let shape = ShapeMatrix::canonical();
        let x = spawn_x(grid_width, shape.size());
        Self::new(shape, x, 0)
    }

    /// Occupied cells mapped into grid coordinates as `(x, y, value)`
    pub fn occupied_cells(&self) -> impl Iterator<Item = (i32, i32, Cell)> + '_ {
        self.shape
            .occupied()
            .map(move |(dx, dy, cell)| (self.x + dx as i32, self.y + dy as i32, cell))
    }

    /// Copy of this piece moved by `(dx, dy)`
    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        Self {
            shape: self.shape.clone(),
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Copy of this piece rotated clockwise around the same offset
    pub fn rotated(&self) -> Self {
        let mut next = self.clone();
        next.shape.rotate_cw();
        next
    }
}

/// Horizontal spawn offset: `floor(grid_width / 2) - floor(shape_size / 2)`
pub fn spawn_x(grid_width: usize, shape_size: usize) -> i32 {
    let half = |n: usize| i32::try_from(n / 2).unwrap_or(i32::MAX);
    half(grid_width) - half(shape_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_layout() {
        let shape = ShapeMatrix::canonical();
        assert_eq!(shape.size(), 3);
        assert_eq!(
            shape.to_rows(),
            vec![vec![0, 0, 0], vec![1, 1, 1], vec![0, 1, 0]]
        );
    }

    #[test]
    fn test_rotate_cw_points_stem_left() {
        let mut shape = ShapeMatrix::canonical();
        shape.rotate_cw();
        assert_eq!(
            shape.to_rows(),
            vec![vec![0, 1, 0], vec![1, 1, 0], vec![0, 1, 0]]
        );
    }

    #[test]
    fn test_spawn_x_saturates_for_wide_grids() {
        assert_eq!(spawn_x(12, 3), 5);
        assert_eq!(spawn_x(usize::MAX, 3), i32::MAX - 1);
    }

    #[test]
    fn test_rotate_single_cell_is_identity() {
        let mut shape = ShapeMatrix::from_rows(&[[7u8]]).unwrap();
        shape.rotate_cw();
        assert_eq!(shape.get(0, 0), Some(7));
    }

    #[test]
    fn test_from_rows_requires_square() {
        assert!(ShapeMatrix::from_rows(&[vec![1u8, 1], vec![1]]).is_none());
        assert!(ShapeMatrix::from_rows(&[vec![1u8, 1]]).is_none());
        assert!(ShapeMatrix::from_rows::<Vec<Cell>>(&[]).is_none());
    }

    #[test]
    fn test_spawn_x() {
        assert_eq!(spawn_x(12, 3), 5);
        assert_eq!(spawn_x(10, 4), 3);
        assert_eq!(spawn_x(2, 3), 0);
        assert_eq!(spawn_x(1, 3), -1);
    }

    #[test]
    fn test_occupied_cells_are_offset() {
        let piece = Piece::new(ShapeMatrix::canonical(), 5, 2);
        let cells: Vec<_> = piece.occupied_cells().collect();
        assert_eq!(cells, vec![(5, 3, 1), (6, 3, 1), (7, 3, 1), (6, 4, 1)]);
    }
}
