//! TerminalRenderer: flushes framebuffers to a terminal.
//!
//! The first frame (and any frame after a resize or [`TerminalRenderer::invalidate`])
//! is a full redraw; later frames only rewrite the runs of cells that changed.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// A horizontal run of changed cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub x: u16,
    pub y: u16,
    pub len: u16,
}

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    last: Option<FrameBuffer>,
}

impl TerminalRenderer<io::Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Switch the terminal into raw mode on the alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.out.queue(terminal::EnterAlternateScreen)?;
        self.out.queue(cursor::Hide)?;
        self.out.queue(terminal::DisableLineWrap)?;
        self.out.flush()?;
        Ok(())
    }

    /// Undo [`TerminalRenderer::enter`].
    pub fn exit(&mut self) -> Result<()> {
        self.out.queue(ResetColor)?;
        self.out.queue(SetAttribute(Attribute::Reset))?;
        self.out.queue(terminal::EnableLineWrap)?;
        self.out.queue(cursor::Show)?;
        self.out.queue(terminal::LeaveAlternateScreen)?;
        self.out.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }
}

impl Default for TerminalRenderer<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W) -> Self {
        Self { out, last: None }
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    /// Force the next draw to be a full redraw (e.g. after a resize event).
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw `fb`, then swap it with the previous frame.
    ///
    /// Callers keep one framebuffer and pass it in every frame; afterwards it
    /// holds the frame before, ready to be redrawn without allocating.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        let mut prev = match self.last.take() {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                self.diff_redraw(fb, &prev)?;
                prev
            }
            Some(mut prev) => {
                self.full_redraw(fb)?;
                prev.resize(fb.width(), fb.height());
                prev
            }
            None => {
                self.full_redraw(fb)?;
                FrameBuffer::new(fb.width(), fb.height())
            }
        };

        std::mem::swap(&mut prev, fb);
        self.last = Some(prev);
        Ok(())
    }

    fn full_redraw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        let runs = (0..fb.height()).map(|y| Run {
            x: 0,
            y,
            len: fb.width(),
        });
        self.paint_runs(fb, runs)
    }

    fn diff_redraw(&mut self, next: &FrameBuffer, prev: &FrameBuffer) -> Result<()> {
        let runs = changed_runs(prev, next);
        self.paint_runs(next, runs)
    }

    fn paint_runs(
        &mut self,
        fb: &FrameBuffer,
        runs: impl IntoIterator<Item = Run>,
    ) -> Result<()> {
        let mut current: Option<CellStyle> = None;
        for run in runs {
            self.out.queue(cursor::MoveTo(run.x, run.y))?;
            for dx in 0..run.len {
                let cell = fb.get(run.x + dx, run.y).unwrap_or_default();
                if current != Some(cell.style) {
                    apply_style(&mut self.out, cell.style)?;
                    current = Some(cell.style);
                }
                self.out.queue(Print(cell.ch))?;
            }
        }
        self.out.queue(ResetColor)?;
        self.out.queue(SetAttribute(Attribute::Reset))?;
        self.out.flush()?;
        Ok(())
    }
}

fn apply_style<W: Write>(out: &mut W, style: CellStyle) -> io::Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Runs of cells that differ between two equally sized frames, row by row.
pub fn changed_runs(prev: &FrameBuffer, next: &FrameBuffer) -> Vec<Run> {
    let mut runs = Vec::new();
    for y in 0..next.height() {
        let mut x = 0;
        while x < next.width() {
            if prev.get(x, y) == next.get(x, y) {
                x += 1;
                continue;
            }
            let start = x;
            while x < next.width() && prev.get(x, y) != next.get(x, y) {
                x += 1;
            }
            runs.push(Run {
                x: start,
                y,
                len: x - start,
            });
        }
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fb::Cell;

    #[test]
    fn changed_runs_coalesce_adjacent_cells() {
        let a = FrameBuffer::new(5, 2);
        let mut b = FrameBuffer::new(5, 2);
        for x in 1..=3 {
            b.set(x, 0, Cell::new('X', CellStyle::default()));
        }
        b.set(4, 1, Cell::new('Y', CellStyle::default()));

        assert_eq!(
            changed_runs(&a, &b),
            vec![Run { x: 1, y: 0, len: 3 }, Run { x: 4, y: 1, len: 1 }]
        );
    }

    #[test]
    fn identical_frames_write_nothing_but_reset() {
        let mut renderer = TerminalRenderer::with_writer(Vec::new());
        let mut fb = FrameBuffer::new(3, 1);
        fb.put_str(0, 0, "abc", CellStyle::default());

        renderer.draw_swap(&mut fb).unwrap();
        let first = renderer.writer().len();
        assert!(String::from_utf8_lossy(renderer.writer()).contains("abc"));

        // `fb` now holds the blank initial frame; draw the same content again.
        fb.put_str(0, 0, "abc", CellStyle::default());
        renderer.draw_swap(&mut fb).unwrap();
        let second = &renderer.writer()[first..];
        assert!(!String::from_utf8_lossy(second).contains('a'));
    }

    #[test]
    fn resize_forces_full_redraw() {
        let mut renderer = TerminalRenderer::with_writer(Vec::new());
        let mut fb = FrameBuffer::new(2, 1);
        renderer.draw_swap(&mut fb).unwrap();

        let mut bigger = FrameBuffer::new(4, 1);
        bigger.put_str(0, 0, "wxyz", CellStyle::default());
        let before = renderer.writer().len();
        renderer.draw_swap(&mut bigger).unwrap();
        assert!(String::from_utf8_lossy(&renderer.writer()[before..]).contains("wxyz"));
    }
}
