//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the game draws into a simple
//! framebuffer through the core `Surface` contract, and the framebuffer is
//! flushed to a crossterm backend with diff redraws.
//!
//! Goals:
//! - Keep `core` deterministic and free of terminal code
//! - Control the aspect ratio (2 chars wide per arena cell)
//! - Only rewrite the cells that changed between frames

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{color_for, ArenaCanvas, GameView, Layout, Viewport, BACKGROUND};
pub use renderer::{changed_runs, Run, TerminalRenderer};
