//! Drawing contract between the game and a rendering collaborator.

use crate::types::Cell;

/// A 2D surface the game draws itself onto, one grid cell at a time.
///
/// Coordinates are grid cells. Pieces can sit partly outside the grid, so
/// implementations must clip `x`/`y` themselves.
pub trait Surface {
    /// Reset the whole surface to its background.
    fn clear(&mut self);

    /// Paint one occupied cell with color id `color` (never `0`).
    fn draw_cell(&mut self, x: i32, y: i32, color: Cell);
}
