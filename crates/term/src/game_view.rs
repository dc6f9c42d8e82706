//! GameView: draws a `core::GameState` into a terminal framebuffer.
//!
//! The view lays out the border and key hint, then hands the game an
//! [`ArenaCanvas`] that implements [`Surface`] over the arena's interior.
//! This module is pure (no I/O).

use crate::core::{GameState, Surface};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::Cell as CellValue;

/// Arena background.
pub const BACKGROUND: Rgb = Rgb::hex(0x000000);

/// Color ids map onto this palette; id 1 is the first entry.
const PALETTE: [Rgb; 7] = [
    Rgb::hex(0xf6d365),
    Rgb::new(80, 220, 220),
    Rgb::new(200, 120, 220),
    Rgb::new(100, 220, 120),
    Rgb::new(220, 80, 80),
    Rgb::new(80, 120, 220),
    Rgb::new(255, 165, 0),
];

const BLOCK: char = '█';

const HINT: &str = "←→ move  ↑ rotate  ↓ drop  q quit";

/// Foreground color for an occupied cell value.
pub fn color_for(value: CellValue) -> Rgb {
    let idx = (value.max(1) - 1) as usize % PALETTE.len();
    PALETTE[idx]
}

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Where the arena frame sits in the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Top-left corner of the border.
    pub frame_x: u16,
    pub frame_y: u16,
    /// Border size including both edges.
    pub frame_w: u16,
    pub frame_h: u16,
}

impl Layout {
    /// Top-left terminal cell inside the border.
    pub fn inner_origin(&self) -> (u16, u16) {
        (self.frame_x.saturating_add(1), self.frame_y.saturating_add(1))
    }
}

/// A [`Surface`] over the arena interior of a framebuffer.
///
/// Grid cells outside the arena are clipped.
pub struct ArenaCanvas<'a> {
    fb: &'a mut FrameBuffer,
    origin: (u16, u16),
    cols: usize,
    rows: usize,
    cell_w: u16,
    cell_h: u16,
}

impl ArenaCanvas<'_> {
    fn fill_grid_cell(&mut self, x: usize, y: usize, cell: Cell) {
        let px = self.origin.0.saturating_add((x as u16).saturating_mul(self.cell_w));
        let py = self.origin.1.saturating_add((y as u16).saturating_mul(self.cell_h));
        self.fb.fill_rect(px, py, self.cell_w, self.cell_h, cell);
    }
}

impl Surface for ArenaCanvas<'_> {
    fn clear(&mut self) {
        let blank = Cell::new(' ', CellStyle::new(BACKGROUND, BACKGROUND));
        for y in 0..self.rows {
            for x in 0..self.cols {
                self.fill_grid_cell(x, y, blank);
            }
        }
    }

    fn draw_cell(&mut self, x: i32, y: i32, color: CellValue) {
        if x < 0 || y < 0 || x as usize >= self.cols || y as usize >= self.rows {
            return;
        }
        let style = CellStyle::new(color_for(color), BACKGROUND).bold();
        self.fill_grid_cell(x as usize, y as usize, Cell::new(BLOCK, style));
    }
}

/// Terminal renderer for the arena.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Arena cell width in terminal columns.
    cell_w: u16,
    /// Arena cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the usual terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Center a `cols x rows` arena in the viewport.
    pub fn layout(&self, cols: usize, rows: usize, viewport: Viewport) -> Layout {
        let frame_w = side_u16(cols).saturating_mul(self.cell_w).saturating_add(2);
        let frame_h = side_u16(rows).saturating_mul(self.cell_h).saturating_add(2);
        Layout {
            frame_x: viewport.width.saturating_sub(frame_w) / 2,
            frame_y: viewport.height.saturating_sub(frame_h) / 2,
            frame_w,
            frame_h,
        }
    }

    /// Draw the static chrome into `fb` and return a canvas for the arena.
    ///
    /// The viewport is the framebuffer size.
    pub fn canvas<'a>(
        &self,
        fb: &'a mut FrameBuffer,
        cols: usize,
        rows: usize,
    ) -> ArenaCanvas<'a> {
        let viewport = Viewport::new(fb.width(), fb.height());
        let layout = self.layout(cols, rows, viewport);

        fb.fill(Cell::default());
        draw_border(fb, layout);
        draw_hint(fb, layout);

        ArenaCanvas {
            fb,
            origin: layout.inner_origin(),
            cols,
            rows,
            cell_w: self.cell_w,
            cell_h: self.cell_h,
        }
    }

    /// Render the current game state into a new framebuffer.
    pub fn render(&self, state: &GameState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        let arena = state.arena();
        let mut canvas = self.canvas(&mut fb, arena.width(), arena.height());
        state.draw(&mut canvas);
        fb
    }
}

fn side_u16(cells: usize) -> u16 {
    u16::try_from(cells).unwrap_or(u16::MAX)
}

fn draw_border(fb: &mut FrameBuffer, layout: Layout) {
    let Layout {
        frame_x: x,
        frame_y: y,
        frame_w: w,
        frame_h: h,
    } = layout;
    if w < 2 || h < 2 {
        return;
    }

    let style = CellStyle::new(Rgb::new(200, 200, 200), BACKGROUND);
    let right = x.saturating_add(w - 1);
    let bottom = y.saturating_add(h - 1);

    fb.set(x, y, Cell::new('┌', style));
    fb.set(right, y, Cell::new('┐', style));
    fb.set(x, bottom, Cell::new('└', style));
    fb.set(right, bottom, Cell::new('┘', style));

    for dx in 1..w - 1 {
        fb.set(x.saturating_add(dx), y, Cell::new('─', style));
        fb.set(x.saturating_add(dx), bottom, Cell::new('─', style));
    }
    for dy in 1..h - 1 {
        fb.set(x, y.saturating_add(dy), Cell::new('│', style));
        fb.set(right, y.saturating_add(dy), Cell::new('│', style));
    }
}

fn draw_hint(fb: &mut FrameBuffer, layout: Layout) {
    let y = layout.frame_y.saturating_add(layout.frame_h);
    if y >= fb.height() {
        return;
    }
    let len = HINT.chars().count() as u16;
    let x = (fb.width().saturating_sub(len)) / 2;
    let style = CellStyle::new(Rgb::new(120, 120, 130), BACKGROUND);
    fb.put_str(x, y, HINT, style);
}
